//! Contact information record and the payloads that mutate it.

pub mod memory;
pub mod store;

pub use memory::InMemoryContactStore;
pub use store::ContactStore;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::errors::ServiceError;

pub const KEY_AND_VALUE_REQUIRED: &str = "Key and value are required";
pub const OBJECT_BODY_REQUIRED: &str = "Request body must be a JSON object";

/// Organisation contact fields keyed by name (`address`, `phone`, `email`, ...).
///
/// Values are arbitrary JSON; `address` is usually a nested object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactInfo(Map<String, Value>);

impl ContactInfo {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Record served before any admin edits.
    pub fn builtin_default() -> Self {
        let defaults = json!({
            "address": {
                "street": "Buyukdere Cad. No: 185",
                "district": "Sisli",
                "city": "Istanbul",
                "country": "Turkiye"
            },
            "phone": "+90 212 000 00 00",
            "email": "info@example.com",
            "workingHours": "Mon-Fri 09:00-18:00"
        });
        match defaults {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }

    /// Accept only a JSON object; anything else is a validation error.
    pub fn from_value(value: Value) -> Result<Self, ServiceError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(ServiceError::validation(OBJECT_BODY_REQUIRED)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Shallow merge: top-level keys of `partial` overwrite, nested objects are replaced whole.
    pub fn merge(&mut self, partial: ContactInfo) {
        for (key, value) in partial.0 {
            self.0.insert(key, value);
        }
    }
}

impl From<Map<String, Value>> for ContactInfo {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Single-field update: `{"key": "...", "value": ...}`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldUpdate {
    pub key: String,
    pub value: Value,
}

impl FieldUpdate {
    /// Both `key` and `value` must be present and truthy, and `key` must be a string.
    pub fn from_value(body: Value) -> Result<Self, ServiceError> {
        let Value::Object(mut body) = body else {
            return Err(ServiceError::validation(KEY_AND_VALUE_REQUIRED));
        };
        let key = body.remove("key").unwrap_or(Value::Null);
        let value = body.remove("value").unwrap_or(Value::Null);
        if !is_truthy(&key) || !is_truthy(&value) {
            return Err(ServiceError::validation(KEY_AND_VALUE_REQUIRED));
        }
        match key {
            Value::String(key) => Ok(Self { key, value }),
            _ => Err(ServiceError::validation(KEY_AND_VALUE_REQUIRED)),
        }
    }
}

/// Presence rule for update fields: null, false, zero and "" count as missing.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
