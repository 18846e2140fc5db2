//! Field extraction helpers shared by the item and mod policies.
//!
//! Raw records come from an external host and are treated as untrusted: every
//! lookup here returns `None` instead of failing when a field or an
//! intermediate level is missing.

use serde_json::{Map, Value};

/// Falsy in the sense the upstream data tooling uses: `null`, `false`, `0` and `""`
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Top-level field of a raw record, copied verbatim (an explicit `null` stays `null`)
pub fn field(record: &Value, key: &str) -> Option<Value> {
    record.get(key).cloned()
}

/// Follow `path` through nested objects. Any missing or non-object
/// intermediate level yields `None`.
pub fn nested_field(record: &Value, path: &[&str]) -> Option<Value> {
    let mut current = record;
    for key in path {
        current = current.get(*key)?;
    }
    Some(current.clone())
}

/// `value`, unless it is absent or falsy, in which case `default`
pub fn or_default(value: Option<Value>, default: Value) -> Value {
    match value {
        Some(v) if !is_falsy(&v) => v,
        _ => default,
    }
}

pub fn or_empty_sequence(value: Option<Value>) -> Value {
    or_default(value, Value::Array(Vec::new()))
}

/// The keyed mapping inside a raw payload, or `None` when the payload is not an object
pub fn record_map(payload: &Value) -> Option<&Map<String, Value>> {
    payload.as_object()
}

/// Short description of a JSON value's kind for diagnostics
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
