//! Tests for middleware seeding and memoization.

use std::sync::Arc;

use diaclone_core::{
    Attributes, Field, Key, Middleware, Named, ParseResult, RawData, ResultOptions,
    TransformError, TransformerHandle, Value,
};

fn passthrough() -> TransformerHandle {
    Arc::new(Named::new("passthrough", |result: ParseResult| {
        Ok::<_, TransformError>(result)
    }))
}

#[test]
fn configured_requires_a_transformer() {
    assert!(!Middleware::new(Some(vec![]), "hello").configured());
    assert!(!Middleware::new(None, "hello").configured());
    assert!(Middleware::new(Some(vec![passthrough()]), "hello").configured());
}

#[test]
fn missing_transformers_default_to_empty() {
    let middleware = Middleware::new(None, "hello");
    assert!(middleware.transformers().is_empty());
}

#[test]
fn text_data_seeds_the_body() {
    let mut middleware = Middleware::new(None, "raw text");
    let result = middleware.result();
    assert_eq!(result.body, "raw text");
    assert!(result.hash.is_empty());
    assert!(result.lines.is_empty());
}

#[test]
fn mapping_data_seeds_the_hash() {
    let mut middleware = Middleware::new(None, Attributes::from([("a", 1)]));
    let result = middleware.result();
    assert_eq!(result.hash, Attributes::from([("a", 1)]));
    assert_eq!(result.body, "");
}

#[test]
fn other_data_is_used_as_preload_options() {
    let options = ResultOptions::new().with_body("b").with_lines(["l1", "l2"]);
    let mut middleware = Middleware::new(None, options.clone());
    assert_eq!(middleware.seed_shape(), options);
    assert_eq!(middleware.result().get(1), Ok(Field::Line("l2")));
}

#[test]
fn data_is_stored_verbatim() {
    let middleware = Middleware::new(None, String::from("verbatim"));
    assert_eq!(middleware.data(), &RawData::Text("verbatim".to_string()));
}

#[test]
fn result_is_computed_once() {
    let mut middleware = Middleware::new(None, "hello");
    let first: *const ParseResult = middleware.result();
    let second: *const ParseResult = middleware.result();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn mutations_to_the_result_persist() {
    let mut middleware = Middleware::new(Some(vec![passthrough()]), "From: someone");
    middleware.result().set("from", "someone");
    middleware.result().lines.push("From: someone".to_string());

    assert_eq!(
        middleware.result().get("from"),
        Ok(Field::Attribute(&Value::from("someone")))
    );
    let result = middleware.into_result();
    assert_eq!(result.lines.len(), 1);
    assert_eq!(result.raw(), "From: someone");
}

#[test]
fn json_data_is_classified() {
    let mut text = Middleware::new(None, serde_json::json!("plain"));
    assert_eq!(text.result().raw(), "plain");

    let mut mapping = Middleware::new(None, serde_json::json!({"subject": "hi", "n": 2}));
    assert_eq!(mapping.result().keys(), vec![Key::from("subject"), Key::from("n")]);
    assert_eq!(mapping.result().body, "");
}

#[test]
fn host_can_thread_the_seed_through_the_chain() {
    let split: TransformerHandle = Arc::new(Named::new("lines", |mut result: ParseResult| {
        result.lines = result.body.lines().map(str::to_string).collect();
        Ok::<_, TransformError>(result)
    }));
    let headers: TransformerHandle = Arc::new(Named::new("headers", |mut result: ParseResult| {
        for line in result.lines.clone() {
            if let Some((name, value)) = line.split_once(": ") {
                result.set(name.to_lowercase(), value);
            }
        }
        Ok::<_, TransformError>(result)
    }));

    let middleware = Middleware::new(Some(vec![split, headers]), "Subject: hi\nFrom: me");
    let chain = middleware.transformers().to_vec();
    let result = chain
        .iter()
        .try_fold(middleware.into_result(), |result, t| t.apply(result))
        .unwrap();

    assert_eq!(result.to_string(), "subject: hi\nfrom: me");
    assert_eq!(result.raw(), "Subject: hi\nFrom: me");
}

#[test]
fn transformer_reports_its_own_failure() {
    let reject = Named::new("reject_empty", |result: ParseResult| {
        if result.raw().is_empty() {
            return Err(TransformError::failed("reject_empty", "message body is empty"));
        }
        Ok(result)
    });

    let err = diaclone_core::Transformer::apply(&reject, ParseResult::new()).unwrap_err();
    assert!(matches!(
        &err,
        TransformError::Failed { transformer, .. } if transformer == "reject_empty"
    ));
    insta::assert_snapshot!(err.to_string(), @"transformer reject_empty failed: message body is empty");

    let kept = diaclone_core::Transformer::apply(&reject, ParseResult::from_body("x")).unwrap();
    assert_eq!(kept.raw(), "x");
}

#[test]
fn transformer_errors_carry_model_failures() {
    let strict = Named::new("strict", |result: ParseResult| {
        result.get("required")?;
        Ok(result)
    });
    let err = diaclone_core::Transformer::apply(&strict, ParseResult::new()).unwrap_err();
    assert_eq!(err.to_string(), "attribute not found: required");
    assert_eq!(diaclone_core::Transformer::name(&strict), "strict");
}
