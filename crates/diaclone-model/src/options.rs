//! Preload options for constructing a parse result.

use serde::Deserialize;

use crate::attributes::Attributes;

/// Fields to preload into a new [`ParseResult`](crate::ParseResult).
///
/// Every field is optional; omitted fields keep the result's defaults.
/// Unrecognized keys in a deserialized fixture are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResultOptions {
    pub body: Option<String>,
    pub lines: Option<Vec<String>>,
    pub hash: Option<Attributes>,
    pub extras: Option<Attributes>,
}

impl ResultOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_hash(mut self, hash: Attributes) -> Self {
        self.hash = Some(hash);
        self
    }

    pub fn with_extras(mut self, extras: Attributes) -> Self {
        self.extras = Some(extras);
        self
    }

    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.body.is_none() && self.lines.is_none() && self.hash.is_none() && self.extras.is_none()
    }
}
