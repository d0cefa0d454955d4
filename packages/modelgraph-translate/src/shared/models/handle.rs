//! Stable object identities
//!
//! Both source records and destination model objects are identified by
//! uuid handles. The two handle spaces are disjoint: translating a record
//! never reuses its source handle for the produced model object.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identity of a record or model object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Handle(Uuid);

impl Handle {
    /// Mint a fresh handle
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for Handle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
