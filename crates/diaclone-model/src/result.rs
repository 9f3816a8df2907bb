//! The parse result threaded through a transformer chain.
//!
//! A result carries the untouched message `body`, a line-oriented view in
//! `lines`, and the accumulating structured output in `hash`. The `hash` is
//! what eventually gets persisted; `lines` and `extras` are working space for
//! transformers.
//!
//! ```ignore
//! use diaclone_model::{Attributes, ParseResult, ResultOptions};
//!
//! let result = ParseResult::from_body("Message: body.");
//! let preloaded = ParseResult::from_options(
//!     ResultOptions::new().with_hash(Attributes::from([("message", "body.")])),
//! );
//! ```

use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::attributes::Attributes;
use crate::error::{ModelError, Result};
use crate::key::Key;
use crate::options::ResultOptions;
use crate::value::Value;

/// A value read through [`ParseResult::get`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    /// Read from `hash` (symbol-like key).
    Attribute(&'a Value),
    /// Read from `lines` (positional key).
    Line(&'a str),
}

impl<'a> Field<'a> {
    pub fn as_attribute(self) -> Option<&'a Value> {
        match self {
            Self::Attribute(value) => Some(value),
            Self::Line(_) => None,
        }
    }

    pub fn as_line(self) -> Option<&'a str> {
        match self {
            Self::Line(line) => Some(line),
            Self::Attribute(_) => None,
        }
    }
}

/// Mutable parse state for one message.
///
/// `Clone` is shallow in the same way as [`ParseResult::dup`]: containers are
/// copied, nested list and map values are shared.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseResult {
    /// The raw message as received.
    pub body: String,
    pub lines: Vec<String>,
    /// Structured output read by persistence.
    pub hash: Attributes,
    /// Transformer scratch space, absent until someone writes to it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<Attributes>,
}

impl ParseResult {
    /// An empty result: blank body, no lines, no attributes.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_body(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    /// Start from defaults and overwrite each field the options supply.
    pub fn from_options(options: ResultOptions) -> Self {
        let mut result = Self::default();
        if let Some(body) = options.body {
            result.body = body;
        }
        if let Some(lines) = options.lines {
            result.lines = lines;
        }
        if let Some(hash) = options.hash {
            result.hash = hash;
        }
        if let Some(extras) = options.extras {
            result.extras = Some(extras);
        }
        result
    }

    /// Duplicate for experimentation without touching this result.
    ///
    /// The copy owns its own `lines`, `hash` and `extras` containers and the
    /// same `body` text. Nested list and map values stay shared, and an absent
    /// `extras` stays absent.
    pub fn dup(&self) -> Self {
        trace!(
            lines = self.lines.len(),
            attributes = self.hash.len(),
            has_extras = self.extras.is_some(),
            "duplicating parse result"
        );
        Self {
            body: self.body.clone(),
            lines: self.lines.clone(),
            hash: self.hash.clone(),
            extras: self.extras.clone(),
        }
    }

    /// Read by key: names address `hash`, positions address `lines`.
    ///
    /// Negative positions count back from the last line.
    ///
    /// # Errors
    ///
    /// [`ModelError::MissingAttribute`] for an absent name,
    /// [`ModelError::LineOutOfRange`] for a position outside `lines`.
    pub fn get(&self, key: impl Into<Key>) -> Result<Field<'_>> {
        match key.into() {
            Key::Position(index) => self
                .line(index)
                .map(Field::Line)
                .ok_or(ModelError::LineOutOfRange {
                    index,
                    len: self.lines.len(),
                }),
            key => match self.hash.get(&key) {
                Some(value) => Ok(Field::Attribute(value)),
                None => Err(ModelError::MissingAttribute { key }),
            },
        }
    }

    /// Write into `hash`, whatever the key type.
    ///
    /// Unlike [`get`](Self::get), a positional key does not touch `lines`: it
    /// is stored as a positional attribute key. Returns the previous value.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.hash.insert(key, value)
    }

    /// Remove an attribute from `hash` and return it.
    ///
    /// # Errors
    ///
    /// [`ModelError::MissingAttribute`] when nothing is stored under the key.
    pub fn delete(&mut self, key: impl Into<Key>) -> Result<Value> {
        let key = key.into();
        self.hash
            .remove(&key)
            .ok_or(ModelError::MissingAttribute { key })
    }

    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.hash.contains_key(&key.into())
    }

    /// Attribute keys in insertion order.
    pub fn keys(&self) -> Vec<Key> {
        self.hash.keys().cloned().collect()
    }

    /// The body exactly as it was received.
    pub fn raw(&self) -> &str {
        &self.body
    }

    /// Scratch space, created on first use.
    pub fn extras_mut(&mut self) -> &mut Attributes {
        self.extras.get_or_insert_with(Attributes::new)
    }

    /// The structured record handed to persistence: `hash` as a JSON object
    /// keyed by [`Key::record_key`], so positional keys appear as `#<index>`.
    pub fn to_record(&self) -> serde_json::Value {
        self.hash.to_json()
    }

    fn line(&self, index: isize) -> Option<&str> {
        let len = self.lines.len() as isize;
        let index = if index < 0 { len + index } else { index };
        usize::try_from(index)
            .ok()
            .and_then(|i| self.lines.get(i))
            .map(String::as_str)
    }
}

/// `key: value` per attribute, one per line, in insertion order.
///
/// Values are written as-is; a newline inside a value is not escaped.
impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.hash.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{key}: {value}")?;
        }
        Ok(())
    }
}

impl From<&str> for ParseResult {
    fn from(body: &str) -> Self {
        Self::from_body(body)
    }
}

impl From<String> for ParseResult {
    fn from(body: String) -> Self {
        Self::from_body(body)
    }
}

impl From<ResultOptions> for ParseResult {
    fn from(options: ResultOptions) -> Self {
        Self::from_options(options)
    }
}
