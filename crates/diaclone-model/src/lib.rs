//! Parse result model for diaclone transformer chains.
//!
//! - **result**: [`ParseResult`], the mutable state passed between transformers
//! - **attributes**: insertion-ordered `hash` storage
//! - **value**: attribute values with shared nested containers
//! - **key**: symbol-like and positional keys
//! - **options**: preload options for seeding a result

pub mod attributes;
pub mod error;
pub mod key;
pub mod options;
pub mod result;
pub mod value;

pub use attributes::Attributes;
pub use error::{ModelError, Result};
pub use key::Key;
pub use options::ResultOptions;
pub use result::{Field, ParseResult};
pub use value::{SharedList, SharedMap, Value};
