//! Pipeline entry point for one message.

use std::fmt;

use diaclone_model::{ParseResult, ResultOptions};
use tracing::debug;

use crate::data::RawData;
use crate::transformer::TransformerHandle;

/// One pipeline invocation: a transformer chain plus the raw data it runs on.
///
/// The seed [`ParseResult`] is built from the data on first access and kept,
/// so changes made through [`result`](Self::result) persist across calls.
pub struct Middleware {
    transformers: Vec<TransformerHandle>,
    data: RawData,
    result: Option<ParseResult>,
}

impl Middleware {
    /// A missing transformer list is treated as an empty chain.
    pub fn new(transformers: Option<Vec<TransformerHandle>>, data: impl Into<RawData>) -> Self {
        Self {
            transformers: transformers.unwrap_or_default(),
            data: data.into(),
            result: None,
        }
    }

    pub fn transformers(&self) -> &[TransformerHandle] {
        &self.transformers
    }

    pub fn data(&self) -> &RawData {
        &self.data
    }

    pub fn seed_shape(&self) -> ResultOptions {
        self.data.seed_shape()
    }

    /// The seed result, built once and cached for the life of this middleware.
    pub fn result(&mut self) -> &mut ParseResult {
        let data = &self.data;
        self.result.get_or_insert_with(|| {
            debug!(kind = data.kind(), "seeding parse result");
            ParseResult::from_options(data.seed_shape())
        })
    }

    /// True when at least one transformer is configured.
    pub fn configured(&self) -> bool {
        !self.transformers.is_empty()
    }

    /// Hand the seed result off to whatever runs the chain.
    pub fn into_result(self) -> ParseResult {
        self.result
            .unwrap_or_else(|| ParseResult::from_options(self.data.seed_shape()))
    }
}

impl fmt::Debug for Middleware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.transformers.iter().map(|t| t.name()).collect();
        f.debug_struct("Middleware")
            .field("transformers", &names)
            .field("data", &self.data)
            .field("result", &self.result)
            .finish()
    }
}
