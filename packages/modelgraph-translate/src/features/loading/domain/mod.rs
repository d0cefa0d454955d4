//! Raw scanned statements
//!
//! Output of the first scanner pass, before field typing and reference
//! resolution.

/// One scanned object statement: a type tag plus raw field tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawObject {
    pub tag: String,
    pub fields: Vec<String>,
}

impl RawObject {
    pub fn new(tag: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            tag: tag.into(),
            fields,
        }
    }
}
