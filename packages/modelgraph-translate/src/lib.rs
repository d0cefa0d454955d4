/*
 * Modelgraph Translate - Reverse Translation Engine
 *
 * Converts a flat, loosely-typed object database (building-energy
 * simulation input) into a strongly-typed in-memory model graph.
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Handle, FieldValue, IdfRecord, Workspace)
 * - features/    : Vertical slices (loading -> translation -> model)
 * - api/         : Convenience entry point (load + parse + translate)
 *
 * The core is the dispatcher: per-type rule registry, identity map with
 * in-progress markers for cycle-safe re-entrant dispatch, accumulated
 * diagnostics, and an untranslated-record set. Single-threaded by design;
 * cross-link correctness depends on the placeholder discipline.
 */

pub mod api;
pub mod errors;
pub mod features;
pub mod shared;

// Re-exports
pub use api::load_and_translate;
pub use errors::{Result, TranslateError};
pub use features::loading::IdfParser;
pub use features::model::{Model, ModelObject};
pub use features::translation::{
    create_default_registry, Diagnostic, DiagnosticSink, IdentityMap, MapStatus, ProgressSink,
    ReverseTranslator, RuleContext, RuleRegistry, Severity, TranslationResult, TranslationRule,
};
pub use shared::models::{FieldValue, Handle, IdfRecord, ObjectType, Workspace};
