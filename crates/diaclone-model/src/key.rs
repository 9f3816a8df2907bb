//! Index type shared by the attribute and line views.

use std::fmt;
use std::num::TryFromIntError;

use serde::{Deserialize, Serialize};

/// Key used for indexed access on a parse result.
///
/// `Name` is the symbol-like attribute identifier. `Position` addresses the
/// line view on read, but is stored verbatim as an attribute key on write.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Name(String),
    Position(isize),
}

impl Key {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// True for symbol-like keys.
    pub fn is_name(&self) -> bool {
        matches!(self, Self::Name(_))
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Position(_) => None,
        }
    }

    /// Object key used when the attribute map is written out as a record.
    ///
    /// Positions render as `#<index>` and names starting with `#` gain one
    /// more `#`, so a name and a position never produce the same record key.
    pub fn record_key(&self) -> String {
        match self {
            Self::Name(name) if name.starts_with('#') => format!("#{name}"),
            Self::Name(name) => name.clone(),
            Self::Position(index) => format!("#{index}"),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Position(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

impl From<isize> for Key {
    fn from(index: isize) -> Self {
        Self::Position(index)
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Self::Position(index as isize)
    }
}

impl TryFrom<usize> for Key {
    type Error = TryFromIntError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        isize::try_from(index).map(Self::Position)
    }
}
