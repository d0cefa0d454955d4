//! Translation ports
//!
//! The contracts between the dispatcher and its collaborators:
//! - `TranslationRule` - one per source object type (driven port)
//! - `RuleContext`     - the controlled dispatcher handle rules work through
//! - `RuleRegistry`    - immutable tag -> rule mapping
//! - `ProgressSink`    - advisory progress/cancellation collaborator

use ahash::AHashMap;

use crate::features::model::Model;
use crate::shared::models::{Handle, IdfRecord, ObjectType, Workspace};

use super::domain::MapStatus;

/// Per-object-type translation rule
///
/// A rule reads its own record's fields and, through the context, any
/// related records it needs (triggering their translation on demand).
/// It returns the destination handles it produced, primary first, or
/// `None` to decline. Rules never touch the identity map; the dispatcher
/// records the association from the return value, and its memoization is
/// the only thing guaranteeing a rule runs at most once per record.
pub trait TranslationRule: Send + Sync {
    /// The object type this rule owns
    fn object_type(&self) -> ObjectType;

    /// Translate one record; `None` or an empty vec means "declined"
    fn translate(&self, record: &IdfRecord, ctx: &mut dyn RuleContext) -> Option<Vec<Handle>>;
}

/// Dispatcher handle passed into rule invocations
///
/// Exposes re-entrant dispatch and a status query, never raw identity-map
/// mutation. `status` distinguishes `InProgress` (a cycle back into the
/// current dispatch stack) from `Absent`; a rule that needs an in-progress
/// dependency must defer the link and wire it post-hoc via `model_mut`.
pub trait RuleContext {
    /// Translate a related record, memoized; returns its primary
    /// destination handle. Dangling references come back as `None` after
    /// an error diagnostic has been recorded.
    fn translate(&mut self, handle: Handle) -> Option<Handle>;

    /// Translate a related record and return every destination handle it
    /// fanned out to
    fn translate_all(&mut self, handle: Handle) -> Option<Vec<Handle>>;

    /// Identity-map status of a source handle
    fn status(&self, handle: Handle) -> MapStatus;

    /// The read-only source workspace
    fn workspace(&self) -> &Workspace;

    /// The in-progress destination model
    fn model(&self) -> &Model;

    /// Builder access for creating objects and wiring deferred links
    fn model_mut(&mut self) -> &mut Model;

    /// Record a warning about a source record
    fn warn(&mut self, source: Handle, message: String);

    /// Record an error about a source record
    fn error(&mut self, source: Handle, message: String);
}

/// Advisory progress collaborator
///
/// Polled between top-level records only; purely cooperative. A cancelled
/// run returns its partial result as-is and the caller discards it.
pub trait ProgressSink: Send + Sync {
    /// Coarse-grained progress tick
    fn tick(&self, completed: usize, total: usize);

    /// Whether the user asked to stop
    fn cancelled(&self) -> bool {
        false
    }
}

/// Immutable mapping from object type to its translation rule
///
/// Populated at construction, read-only afterwards. A missing rule is a
/// normal outcome (sparse coverage is expected), not an error.
#[derive(Default)]
pub struct RuleRegistry {
    rules: AHashMap<ObjectType, Box<dyn TranslationRule>>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule under its own object type
    pub fn register(&mut self, rule: Box<dyn TranslationRule>) {
        self.rules.insert(rule.object_type(), rule);
    }

    /// Look up the rule for a tag
    pub fn get(&self, object_type: &ObjectType) -> Option<&dyn TranslationRule> {
        self.rules.get(object_type).map(|r| r.as_ref())
    }

    pub fn supports(&self, object_type: &ObjectType) -> bool {
        self.rules.contains_key(object_type)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}
