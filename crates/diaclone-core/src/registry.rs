//! Named transformer registration and chain resolution.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::MiddlewareConfig;
use crate::data::RawData;
use crate::error::ConfigError;
use crate::middleware::Middleware;
use crate::transformer::{Transformer, TransformerHandle};

/// Host-defined transformers, looked up by the names used in configuration.
#[derive(Default)]
pub struct TransformerRegistry {
    transformers: HashMap<String, TransformerHandle>,
}

impl TransformerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transformer under its own name.
    pub fn register<T: Transformer + 'static>(&mut self, transformer: T) -> Result<(), ConfigError> {
        self.register_handle(Arc::new(transformer))
    }

    pub fn register_handle(&mut self, transformer: TransformerHandle) -> Result<(), ConfigError> {
        let name = transformer.name().to_string();
        if self.transformers.contains_key(&name) {
            return Err(ConfigError::DuplicateTransformer { name });
        }
        self.transformers.insert(name, transformer);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&TransformerHandle> {
        self.transformers.get(name)
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    /// Resolve a chain's transformer names, in configured order.
    ///
    /// Returns `None` when the identifier has no chain.
    pub fn resolve(
        &self,
        config: &MiddlewareConfig,
        identifier: &str,
    ) -> Result<Option<Vec<TransformerHandle>>, ConfigError> {
        let Some(names) = config.chain(identifier) else {
            return Ok(None);
        };
        names
            .iter()
            .map(|name| {
                self.get(name)
                    .cloned()
                    .ok_or_else(|| ConfigError::UnknownTransformer {
                        chain: identifier.to_string(),
                        name: name.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    /// Build a middleware for `data` running the chain named `identifier`.
    ///
    /// An identifier with no chain gives an unconfigured middleware.
    pub fn middleware(
        &self,
        config: &MiddlewareConfig,
        identifier: &str,
        data: impl Into<RawData>,
    ) -> Result<Middleware, ConfigError> {
        let transformers = self.resolve(config, identifier)?;
        match &transformers {
            Some(chain) => debug!(identifier, transformers = chain.len(), "resolved chain"),
            None => warn!(identifier, "no chain configured for identifier"),
        }
        Ok(Middleware::new(transformers, data))
    }
}

impl std::fmt::Debug for TransformerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.transformers.keys().collect();
        names.sort();
        f.debug_struct("TransformerRegistry")
            .field("transformers", &names)
            .finish()
    }
}
