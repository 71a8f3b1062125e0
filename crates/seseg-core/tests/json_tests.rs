/// JSON entry points: conversion from `serde_json::Value`, key order,
/// argument lists, and parse errors.
use serde_json::json;
use seseg_core::{compose_json, compose_json_args, ClassValue, Composer, SesegError};

#[test]
fn json_scalars_map_onto_class_values() {
    assert_eq!(ClassValue::from(json!(null)), ClassValue::Absent);
    assert_eq!(ClassValue::from(json!(true)), ClassValue::Bool(true));
    assert_eq!(ClassValue::from(json!(42)), ClassValue::Number(42.0));
    assert_eq!(ClassValue::from(json!(-1.5)), ClassValue::Number(-1.5));
    assert_eq!(ClassValue::from(json!("a")), ClassValue::from("a"));
}

#[test]
fn json_objects_keep_key_order() {
    let value = ClassValue::from(json!({"zeta": true, "alpha": true, "mid": 1}));
    match value {
        ClassValue::Mapping(map) => {
            assert_eq!(map.keys().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
        }
        other => panic!("expected a mapping, got {other:?}"),
    }
    assert_eq!(
        compose_json(r#"{"zeta": true, "alpha": true, "mid": 1}"#).unwrap(),
        "zeta alpha mid"
    );
}

#[test]
fn compose_json_document() {
    let json = r#"{"one": true, "two": false, "three": 0, "four": null, "six": 1}"#;
    assert_eq!(compose_json(json).unwrap(), "one six");
}

#[test]
fn compose_json_nested() {
    let json = r#"["one", ["two", ["three", {"four": true}]]]"#;
    assert_eq!(compose_json(json).unwrap(), "one two three four");
}

#[test]
fn compose_json_reserved_keys() {
    let json = r#"[{"className": ["foo", {"bar": true, "className": "buz"}]}, "lol", ["kek"]]"#;
    assert_eq!(compose_json(json).unwrap(), "foo bar buz lol kek");
}

#[test]
fn compose_json_falsy_document() {
    for json in ["null", "false", "true", "0", "\"\"", "\"   \"", "[]", "{}"] {
        assert_eq!(compose_json(json).unwrap(), "", "input: {json}");
    }
}

#[test]
fn compose_json_args_spreads_top_level_array() {
    let json = r#"["one", 0, null, true, 1, "seven"]"#;
    assert_eq!(compose_json_args(json).unwrap(), "one 1 seven");
}

#[test]
fn compose_json_args_rejects_non_array() {
    let err = compose_json_args(r#"{"a": true}"#).unwrap_err();
    assert!(matches!(err, SesegError::InvalidInput(_)));
    assert!(err.to_string().contains("an object"), "got: {err}");
}

#[test]
fn invalid_json_is_an_error() {
    let err = compose_json("{not json").unwrap_err();
    assert!(matches!(err, SesegError::JsonParse(_)));
    assert!(err.to_string().starts_with("JSON parse error"));
}

#[test]
fn composer_json_uses_its_reserved_keys() {
    let composer = Composer::new().with_reserved_keys(["variants"]);
    let json = r#"{"variants": ["sm", "lg"], "className": true}"#;
    assert_eq!(composer.compose_json(json).unwrap(), "sm lg className");
}

#[test]
fn class_value_deserializes_from_json() {
    #[derive(serde::Deserialize)]
    struct Props {
        class: ClassValue,
    }

    let props: Props = serde_json::from_str(r#"{"class": ["a", {"b": true}]}"#).unwrap();
    assert_eq!(seseg_core::seseg(&[props.class]), "a b");
}
