//! Translation run result
//!
//! Best-effort bundle: callers always get the model plus the full
//! diagnostics sequence and the untranslated set, and decide themselves
//! whether accumulated errors mean overall failure.

use crate::features::model::Model;
use crate::shared::models::Handle;

use super::{Diagnostic, Severity};

/// Everything a single `translate_workspace` run produces
#[derive(Debug, Clone, Default)]
pub struct TranslationResult {
    /// The destination object graph, possibly partial
    pub model: Model,
    /// Every diagnostic in emission order
    pub diagnostics: Vec<Diagnostic>,
    /// Records no rule translated, in first-encounter order
    pub untranslated: Vec<Handle>,
}

impl TranslationResult {
    /// Warning messages generated by the run
    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .collect()
    }

    /// Error messages generated by the run
    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .collect()
    }

    /// No errors and nothing left untranslated
    pub fn is_clean(&self) -> bool {
        self.errors().is_empty() && self.untranslated.is_empty()
    }
}

impl std::fmt::Display for TranslationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TranslationResult: {} objects, {} warnings, {} errors, {} untranslated",
            self.model.len(),
            self.warnings().len(),
            self.errors().len(),
            self.untranslated.len()
        )
    }
}
