//! JSON input — build [`ClassValue`] trees from `serde_json` values and
//! compose straight from JSON text.
//!
//! JSON has no `undefined`, `NaN`, or callables, so every JSON document maps
//! onto `Absent`, `Bool`, `Number`, `Text`, `Sequence`, or `Mapping`.
//! Object key order is preserved (`serde_json` is built with
//! `preserve_order`).

use crate::compose::Composer;
use crate::error::{Result, SesegError};
use crate::types::{ClassMap, ClassValue};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

impl From<Value> for ClassValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ClassValue::Absent,
            Value::Bool(b) => ClassValue::Bool(b),
            Value::Number(n) => n.as_f64().map_or(ClassValue::Absent, ClassValue::Number),
            Value::String(s) => ClassValue::Text(s),
            Value::Array(items) => {
                ClassValue::Sequence(items.into_iter().map(ClassValue::from).collect())
            }
            Value::Object(map) => {
                let mut out = ClassMap::with_capacity(map.len());
                for (key, child) in map {
                    out.insert(key, ClassValue::from(child));
                }
                ClassValue::Mapping(out)
            }
        }
    }
}

impl<'de> Deserialize<'de> for ClassValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(ClassValue::from)
    }
}

impl Composer {
    /// Parse `json` as a single class value and compose it.
    pub fn compose_json(&self, json: &str) -> Result<String> {
        let value: Value = serde_json::from_str(json)?;
        Ok(self.compose(&[ClassValue::from(value)]))
    }

    /// Parse `json` as an argument list (a top-level JSON array whose
    /// elements are the positional arguments) and compose it.
    pub fn compose_json_args(&self, json: &str) -> Result<String> {
        let value: Value = serde_json::from_str(json)?;
        match value {
            Value::Array(items) => {
                let args: Vec<ClassValue> = items.into_iter().map(ClassValue::from).collect();
                Ok(self.compose(&args))
            }
            other => Err(SesegError::InvalidInput(format!(
                "expected a JSON array of arguments, found {}",
                json_kind(&other)
            ))),
        }
    }
}

/// Parse `json` as a single class value and compose it with the default
/// reserved keys.
///
/// # Errors
///
/// Returns an error if the input is not valid JSON.
///
/// # Examples
///
/// ```
/// use seseg_core::compose_json;
///
/// let out = compose_json(r#"{"className": ["foo", {"bar": true}], "baz": 0}"#).unwrap();
/// assert_eq!(out, "foo bar");
/// ```
pub fn compose_json(json: &str) -> Result<String> {
    Composer::default().compose_json(json)
}

/// Parse `json` as an argument list and compose it with the default reserved
/// keys.
///
/// # Errors
///
/// Returns an error if the input is not valid JSON or is not an array.
pub fn compose_json_args(json: &str) -> Result<String> {
    Composer::default().compose_json_args(json)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
