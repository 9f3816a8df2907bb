//! Raw inbound data and its classification into a seed shape.

use diaclone_model::{Attributes, ResultOptions, Value};

/// Raw message data as handed to a [`Middleware`](crate::Middleware).
#[derive(Debug, Clone, PartialEq)]
pub enum RawData {
    /// Free text; becomes the result body.
    Text(String),
    /// Structured mapping; becomes the result hash.
    Mapping(Attributes),
    /// Anything else, already in preload shape. Passed through untouched.
    Other(ResultOptions),
}

impl RawData {
    /// Classify into the options a seed result is built from.
    pub fn seed_shape(&self) -> ResultOptions {
        match self {
            Self::Text(text) => ResultOptions::new().with_body(text.clone()),
            Self::Mapping(mapping) => ResultOptions::new().with_hash(mapping.clone()),
            Self::Other(options) => options.clone(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Mapping(_) => "mapping",
            Self::Other(_) => "other",
        }
    }
}

impl From<&str> for RawData {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawData {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Attributes> for RawData {
    fn from(mapping: Attributes) -> Self {
        Self::Mapping(mapping)
    }
}

impl From<ResultOptions> for RawData {
    fn from(options: ResultOptions) -> Self {
        Self::Other(options)
    }
}

/// Strings become text and objects become mappings. Any other JSON value is
/// kept in `extras` under `data`, since it has no place in body or hash.
impl From<serde_json::Value> for RawData {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::String(text) => Self::Text(text),
            serde_json::Value::Object(object) => Self::Mapping(Attributes::from(object)),
            other => Self::Other(
                ResultOptions::new().with_extras(Attributes::from([("data", Value::from(other))])),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diaclone_model::Key;

    #[test]
    fn text_seeds_the_body() {
        let shape = RawData::from("hello").seed_shape();
        assert_eq!(shape, ResultOptions::new().with_body("hello"));
    }

    #[test]
    fn mapping_seeds_the_hash() {
        let mapping = Attributes::from([("a", 1)]);
        let shape = RawData::from(mapping.clone()).seed_shape();
        assert_eq!(shape, ResultOptions::new().with_hash(mapping));
    }

    #[test]
    fn other_passes_through() {
        let options = ResultOptions::new().with_lines(["x"]);
        assert_eq!(RawData::from(options.clone()).seed_shape(), options);
    }

    #[test]
    fn json_scalars_land_in_extras() {
        let data = RawData::from(serde_json::json!([1, 2]));
        assert_eq!(data.kind(), "other");
        let extras = data.seed_shape().extras.unwrap();
        assert!(extras.contains_key(&Key::from("data")));
    }
}
