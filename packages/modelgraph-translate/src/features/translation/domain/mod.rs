//! Translation domain models

mod diagnostics;
mod identity_map;
mod result;

pub use diagnostics::{Diagnostic, DiagnosticSink, Severity};
pub use identity_map::{IdentityMap, MapStatus};
pub use result::TranslationResult;
