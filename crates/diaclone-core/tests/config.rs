//! Tests for chain configuration and registry resolution.

use std::path::Path;

use diaclone_core::{
    ConfigError, MiddlewareConfig, Named, ParseResult, TransformError, TransformerRegistry,
};

fn named(
    name: &'static str,
) -> Named<impl Fn(ParseResult) -> Result<ParseResult, TransformError> + Send + Sync> {
    Named::new(name, |result: ParseResult| Ok::<_, TransformError>(result))
}

fn registry() -> TransformerRegistry {
    let mut registry = TransformerRegistry::new();
    registry.register(named("lines")).unwrap();
    registry.register(named("headers")).unwrap();
    registry
}

#[test]
fn parses_chains_from_json() {
    let config = MiddlewareConfig::from_json_str(
        r#"{"chains": {"my-identifier": ["lines", "headers"], "empty": []}}"#,
    )
    .unwrap();
    assert_eq!(
        config.chain("my-identifier"),
        Some(&["lines".to_string(), "headers".to_string()][..])
    );
    assert_eq!(config.chain("empty"), Some(&[][..]));
    assert_eq!(config.chain("missing"), None);
}

#[test]
fn missing_chains_key_is_an_empty_config() {
    let config = MiddlewareConfig::from_json_str("{}").unwrap();
    assert_eq!(config, MiddlewareConfig::new());
}

#[test]
fn invalid_json_is_a_parse_error() {
    let err = MiddlewareConfig::from_json_str(r#"{"chains": ["nope"]}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn unreadable_path_is_an_io_error() {
    let err = MiddlewareConfig::from_path(Path::new("/nonexistent/diaclone.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn resolves_transformers_in_configured_order() {
    let config = MiddlewareConfig::new().with_chain("mail", ["headers", "lines"]);
    let middleware = registry().middleware(&config, "mail", "body").unwrap();

    assert!(middleware.configured());
    let names: Vec<&str> = middleware.transformers().iter().map(|t| t.name()).collect();
    assert_eq!(names, ["headers", "lines"]);
}

#[test]
fn unknown_identifier_gives_unconfigured_middleware() {
    let config = MiddlewareConfig::new().with_chain("mail", ["lines"]);
    let mut middleware = registry().middleware(&config, "sms", "body").unwrap();

    assert!(!middleware.configured());
    assert_eq!(middleware.result().raw(), "body");
}

#[test]
fn unknown_transformer_is_rejected() {
    let config = MiddlewareConfig::new().with_chain("mail", ["lines", "signature"]);
    let err = registry().middleware(&config, "mail", "body").unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"chain 'mail' references unknown transformer 'signature'");
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut registry = registry();
    let err = registry.register(named("lines")).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateTransformer { name } if name == "lines"));
    assert_eq!(registry.len(), 2);
}
