//! Coercion of loosely-typed request fields.
//!
//! Clients may send numeric fields either as JSON numbers or as text (the
//! way HTML forms submit them). [`FieldValue`] accepts both and converts to
//! the typed value or a [`ValidationError`] naming the field.

use serde::Deserialize;

use crate::error::ValidationError;

/// A raw request field: a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(serde_json::Number),
    Text(String),
}

impl FieldValue {
    /// Returns the field as text, rendering numbers as written.
    pub fn into_text(self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s,
        }
    }

    /// Interprets the field as a finite floating-point number.
    pub fn to_f64(&self, field: &'static str) -> Result<f64, ValidationError> {
        let parsed = match self {
            FieldValue::Number(n) => n.as_f64(),
            FieldValue::Text(s) => s.trim().parse::<f64>().ok(),
        };

        parsed
            .filter(|v| v.is_finite())
            .ok_or_else(|| ValidationError::InvalidNumber {
                field,
                value: self.to_string(),
            })
    }

    /// Interprets the field as a 64-bit integer.
    pub fn to_i64(&self, field: &'static str) -> Result<i64, ValidationError> {
        let parsed = match self {
            FieldValue::Number(n) => n.as_i64(),
            FieldValue::Text(s) => s.trim().parse::<i64>().ok(),
        };

        parsed.ok_or_else(|| ValidationError::InvalidInteger {
            field,
            value: self.to_string(),
        })
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n.into())
    }
}

impl From<f64> for FieldValue {
    /// Non-finite values have no JSON representation and become text.
    fn from(n: f64) -> Self {
        serde_json::Number::from_f64(n)
            .map(FieldValue::Number)
            .unwrap_or_else(|| FieldValue::Text(n.to_string()))
    }
}

/// Unwraps a field that must be present.
pub fn required<T>(field: &'static str, value: Option<T>) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::MissingField { field })
}
