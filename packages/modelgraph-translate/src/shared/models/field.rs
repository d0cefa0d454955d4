//! Record field values
//!
//! Fields are positional and loosely typed. The parser detects numerics and
//! resolves declared-name cross-references into `Reference` values; anything
//! else stays a string for the rules to interpret.

use serde::{Deserialize, Serialize};

use super::Handle;

/// A single positional field of a source record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Free text (names, enumeration keys, unresolved references)
    String(String),
    /// Floating point value
    Real(f64),
    /// Integer value
    Integer(i64),
    /// Resolved reference to another record in the same workspace
    Reference(Handle),
    /// Field present but blank
    Empty,
}

impl FieldValue {
    /// Parse a raw token into the narrowest matching value
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        if token.is_empty() {
            return FieldValue::Empty;
        }
        if let Ok(i) = token.parse::<i64>() {
            return FieldValue::Integer(i);
        }
        if let Ok(r) = token.parse::<f64>() {
            return FieldValue::Real(r);
        }
        FieldValue::String(token.to_string())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Numeric view; integers widen to f64
    pub fn as_real(&self) -> Option<f64> {
        match self {
            FieldValue::Real(r) => Some(*r),
            FieldValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<Handle> {
        match self {
            FieldValue::Reference(h) => Some(*h),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{s}"),
            FieldValue::Real(r) => write!(f, "{r}"),
            FieldValue::Integer(i) => write!(f, "{i}"),
            FieldValue::Reference(h) => write!(f, "ref:{h}"),
            FieldValue::Empty => Ok(()),
        }
    }
}
