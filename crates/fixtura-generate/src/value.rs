use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use fixtura_core::LiteralValue;

/// Generated value for a descriptor node.
///
/// Values are totally ordered and hashable so set entry points can collect
/// draws directly. Symbols are opaque tokens compared by their token text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    Null,
    Undefined,
    Bool(bool),
    Int(i64),
    BigInt(i128),
    Str(String),
    Symbol(String),
    Date(NaiveDateTime),
    Record(BTreeMap<String, Value>),
    Array(Vec<Value>),
}

impl Value {
    /// Exact value of a literal descriptor, unchanged.
    pub fn from_literal(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Str(value) => Value::Str(value.clone()),
            LiteralValue::Int(value) => Value::Int(*value),
            LiteralValue::Bool(value) => Value::Bool(*value),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_i128(&self) -> Option<i128> {
        match self {
            Value::Int(value) => Some(i128::from(*value)),
            Value::BigInt(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(value) | Value::Symbol(value) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Date(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Record(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Render as JSON for debugging or snapshotting.
    ///
    /// The mapping is lossy: `Undefined` renders as `null`, symbols and
    /// dates render as strings, and big integers outside the JSON i64 range
    /// fall back to their decimal string form.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null | Value::Undefined => serde_json::Value::Null,
            Value::Bool(value) => serde_json::Value::from(*value),
            Value::Int(value) => serde_json::Value::from(*value),
            Value::BigInt(value) => match i64::try_from(*value) {
                Ok(value) => serde_json::Value::from(value),
                Err(_) => serde_json::Value::from(value.to_string()),
            },
            Value::Str(value) | Value::Symbol(value) => serde_json::Value::from(value.as_str()),
            Value::Date(value) => {
                serde_json::Value::from(value.format("%Y-%m-%dT%H:%M:%S").to_string())
            }
            Value::Record(fields) => serde_json::Value::Object(
                fields
                    .iter()
                    .map(|(name, value)| (name.clone(), value.to_json()))
                    .collect(),
            ),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_literal_preserves_exact_values() {
        assert_eq!(
            Value::from_literal(&LiteralValue::Str("pending".to_string())),
            Value::Str("pending".to_string())
        );
        assert_eq!(Value::from_literal(&LiteralValue::Int(-3)), Value::Int(-3));
        assert_eq!(
            Value::from_literal(&LiteralValue::Bool(true)),
            Value::Bool(true)
        );
    }

    #[test]
    fn to_json_maps_absent_values_to_null() {
        assert_eq!(Value::Null.to_json(), serde_json::Value::Null);
        assert_eq!(Value::Undefined.to_json(), serde_json::Value::Null);
    }

    #[test]
    fn to_json_renders_wide_big_integers_as_strings() {
        let wide = Value::BigInt(i128::from(i64::MAX) + 1);
        assert_eq!(
            wide.to_json(),
            serde_json::Value::from("9223372036854775808")
        );
        assert_eq!(Value::BigInt(42).to_json(), serde_json::Value::from(42));
    }

    #[test]
    fn to_json_renders_records_and_arrays_recursively() {
        let mut fields = BTreeMap::new();
        fields.insert("id".to_string(), Value::Int(7));
        fields.insert(
            "tags".to_string(),
            Value::Array(vec![Value::Str("a".to_string()), Value::Undefined]),
        );
        let json = Value::Record(fields).to_json();
        assert_eq!(
            json,
            serde_json::json!({ "id": 7, "tags": ["a", null] })
        );
    }
}
