//! Chain configuration: which transformers run, in order, per identifier.
//!
//! ```json
//! { "chains": { "my-identifier": ["lines", "headers"] } }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Transformer chains keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// Transformer names per chain, in execution order.
    #[serde(default)]
    pub chains: BTreeMap<String, Vec<String>>,
}

impl MiddlewareConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Add or replace a chain.
    #[must_use]
    pub fn with_chain<I, S>(mut self, identifier: impl Into<String>, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chains
            .insert(identifier.into(), names.into_iter().map(Into::into).collect());
        self
    }

    pub fn chain(&self, identifier: &str) -> Option<&[String]> {
        self.chains.get(identifier).map(Vec::as_slice)
    }
}
