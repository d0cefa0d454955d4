//! Translation Feature (the core)
//!
//! Reverse-translates the loosely-typed workspace into the typed model
//! graph: per-type rule registry, identity map with in-progress markers,
//! re-entrant dispatch, accumulated diagnostics, untranslated tracking.
//!
//! ## Structure
//! - `domain/`         - Diagnostic, DiagnosticSink, IdentityMap, TranslationResult
//! - `ports/`          - TranslationRule, RuleContext, ProgressSink, RuleRegistry
//! - `infrastructure/` - ReverseTranslator dispatcher
//! - `rules/`          - per-object-type rules + default registry factory

pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod rules;

// Re-exports
pub use domain::{
    Diagnostic, DiagnosticSink, IdentityMap, MapStatus, Severity, TranslationResult,
};
pub use infrastructure::ReverseTranslator;
pub use ports::{ProgressSink, RuleContext, RuleRegistry, TranslationRule};
pub use rules::create_default_registry;
