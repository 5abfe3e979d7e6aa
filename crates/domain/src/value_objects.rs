//! Validated value objects shared by the commands.

use crate::error::ValidationError;
use crate::input::FieldValue;

/// A product name: non-empty after trimming, free of control characters,
/// at most 50 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductName(String);

impl ProductName {
    /// Longest name the product table accepts.
    pub const MAX_LEN: usize = 50;

    /// Validates and wraps a product name.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let name = raw.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyField { field: "name" });
        }
        if name.chars().any(char::is_control) {
            return Err(ValidationError::ControlCharacter { field: "name" });
        }

        let len = name.chars().count();
        if len > Self::MAX_LEN {
            return Err(ValidationError::TooLong {
                field: "name",
                max: Self::MAX_LEN,
                len,
            });
        }

        Ok(Self(name.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the name, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ProductName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative, finite amount of money.
///
/// Stored as a float to match the relational column type; no currency
/// arithmetic is performed on it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Validates an amount for the named field.
    pub fn new(field: &'static str, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::InvalidNumber {
                field,
                value: value.to_string(),
            });
        }
        if value < 0.0 {
            return Err(ValidationError::NegativeNumber { field, value });
        }
        // Normalise -0.0
        Ok(Self(value.abs()))
    }

    /// Coerces a raw request field into a price.
    pub fn from_field(field: &'static str, raw: &FieldValue) -> Result<Self, ValidationError> {
        Self::new(field, raw.to_f64(field)?)
    }

    /// Returns the amount.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
