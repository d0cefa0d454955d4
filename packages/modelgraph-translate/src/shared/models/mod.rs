//! Shared models
//!
//! Source-side data model: loosely-typed records with ordered fields,
//! stable uuid handles, and the read-only workspace that indexes them.

mod field;
mod handle;
mod record;
mod workspace;

pub use field::FieldValue;
pub use handle::Handle;
pub use record::{IdfRecord, ObjectType};
pub use workspace::Workspace;
