//! The capability every pipeline unit provides.

use std::sync::Arc;

use diaclone_model::ParseResult;

use crate::error::TransformError;

/// A unit in a transformer chain.
///
/// A transformer receives the current result and hands back a result, either
/// the same one mutated or a new one. Whatever drives the chain decides how
/// return values are threaded; this trait only fixes the shape of one step.
pub trait Transformer: Send + Sync {
    /// Name used in configuration and logs.
    fn name(&self) -> &str;

    fn apply(&self, result: ParseResult) -> Result<ParseResult, TransformError>;
}

/// Shared handle to a host-defined transformer.
pub type TransformerHandle = Arc<dyn Transformer>;

impl<F> Transformer for F
where
    F: Fn(ParseResult) -> Result<ParseResult, TransformError> + Send + Sync,
{
    fn name(&self) -> &str {
        std::any::type_name::<F>()
    }

    fn apply(&self, result: ParseResult) -> Result<ParseResult, TransformError> {
        self(result)
    }
}

/// Attach a configuration name to a closure transformer.
pub struct Named<F> {
    name: String,
    inner: F,
}

impl<F> Named<F>
where
    F: Fn(ParseResult) -> Result<ParseResult, TransformError> + Send + Sync,
{
    pub fn new(name: impl Into<String>, inner: F) -> Self {
        Self {
            name: name.into(),
            inner,
        }
    }
}

impl<F> Transformer for Named<F>
where
    F: Fn(ParseResult) -> Result<ParseResult, TransformError> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, result: ParseResult) -> Result<ParseResult, TransformError> {
        (self.inner)(result)
    }
}
