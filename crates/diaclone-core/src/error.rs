//! Error types for transformer chains and their configuration.

use std::path::PathBuf;

use diaclone_model::ModelError;
use thiserror::Error;

/// Failure reported by a transformer.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The transformer rejected the result.
    #[error("transformer {transformer} failed: {message}")]
    Failed { transformer: String, message: String },

    /// An indexed access inside the transformer failed.
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl TransformError {
    pub fn failed(transformer: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            transformer: transformer.into(),
            message: message.into(),
        }
    }
}

/// Errors loading chain configuration or resolving it against a registry.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration is not valid JSON for the expected shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A chain names a transformer nobody registered.
    #[error("chain '{chain}' references unknown transformer '{name}'")]
    UnknownTransformer { chain: String, name: String },

    /// Two transformers were registered under one name.
    #[error("transformer '{name}' is already registered")]
    DuplicateTransformer { name: String },
}
