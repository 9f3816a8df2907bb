use thiserror::Error;

use crate::key::Key;

/// Errors raised by indexed access on a [`ParseResult`](crate::ParseResult).
///
/// `get` and `delete` share this policy: an absent key is always an error,
/// never a silent sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// No attribute is stored under the key.
    #[error("attribute not found: {key}")]
    MissingAttribute { key: Key },

    /// Positional read past either end of `lines`.
    #[error("line {index} out of range ({len} lines)")]
    LineOutOfRange { index: isize, len: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
