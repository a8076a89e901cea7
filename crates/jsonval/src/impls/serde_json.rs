//! Conversions and comparisons against `serde_json` values.
//!
//! Numbers are represented here as 64-bit floats only, so integers that
//! `f64` cannot hold exactly lose precision on the way in and non-finite
//! floats become `Null` on the way out.

use serde_json::Number;

use crate::Value;

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(number) => {
                number.as_f64().map_or(Value::Null, Value::Number)
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(elements) => {
                Value::Array(elements.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => {
                Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
            }
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(elements) => {
                serde_json::Value::Array(elements.into_iter().map(Into::into).collect())
            }
            Value::Object(entries) => serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl PartialEq<serde_json::Value> for Value {
    fn eq(&self, other: &serde_json::Value) -> bool {
        eq(self, other)
    }
}

impl PartialEq<Value> for serde_json::Value {
    fn eq(&self, other: &Value) -> bool {
        eq(other, self)
    }
}

fn eq(lhs: &Value, rhs: &serde_json::Value) -> bool {
    match (lhs, rhs) {
        (Value::Null, serde_json::Value::Null) => true,
        (Value::Bool(l), serde_json::Value::Bool(r)) => l == r,
        (Value::Number(l), serde_json::Value::Number(r)) => r.as_f64() == Some(*l),
        (Value::String(l), serde_json::Value::String(r)) => l == r,
        (Value::Array(l), serde_json::Value::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r.iter()).all(|(l, r)| eq(l, r))
        }
        (Value::Object(l), serde_json::Value::Object(r)) => {
            l.len() == r.len()
                && l.iter()
                    .all(|(key, value)| r.get(key).is_some_and(|other| eq(value, other)))
        }
        _ => false,
    }
}
