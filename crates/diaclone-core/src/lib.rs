//! Pipeline entry for diaclone transformer chains.
//!
//! - **middleware**: classifies raw data and seeds the [`ParseResult`]
//! - **transformer**: the [`Transformer`] capability chain units implement
//! - **config** / **registry**: named chains resolved against registered transformers
//!
//! Running the chain is left to the host:
//!
//! ```ignore
//! let middleware = registry.middleware(&config, "my-identifier", raw_text)?;
//! if middleware.configured() {
//!     let chain = middleware.transformers().to_vec();
//!     let result = chain
//!         .iter()
//!         .try_fold(middleware.into_result(), |result, t| t.apply(result))?;
//!     store(result.to_record());
//! }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod middleware;
pub mod registry;
pub mod transformer;

pub use config::MiddlewareConfig;
pub use data::RawData;
pub use error::{ConfigError, TransformError};
pub use middleware::Middleware;
pub use registry::TransformerRegistry;
pub use transformer::{Named, Transformer, TransformerHandle};

pub use diaclone_model::{Attributes, Field, Key, ParseResult, ResultOptions, Value};
