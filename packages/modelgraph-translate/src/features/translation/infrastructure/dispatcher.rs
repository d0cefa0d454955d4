//! Reverse translation dispatcher
//!
//! Walks the workspace in declared order and hands each record to its rule
//! exactly once. Rules re-enter the dispatcher for related records, so
//! references resolve regardless of direction; the identity map's
//! in-progress placeholder keeps cycles from recursing. Per-record failures
//! accumulate as diagnostics and never abort the run.

use ahash::AHashSet;
use tracing::{debug, warn};

use crate::features::model::Model;
use crate::shared::models::{Handle, Workspace};

use crate::features::translation::domain::{
    DiagnosticSink, IdentityMap, MapStatus, Severity, TranslationResult,
};
use crate::features::translation::ports::{ProgressSink, RuleContext, RuleRegistry};
use crate::features::translation::rules::create_default_registry;

/// The translation engine
///
/// Owns the immutable rule registry and an optional progress collaborator;
/// all per-run state lives in the one in-flight `translate_workspace` call.
pub struct ReverseTranslator {
    registry: RuleRegistry,
    progress: Option<Box<dyn ProgressSink>>,
}

/// Mutable state scoped to exactly one run
struct RunState {
    model: Model,
    identity_map: IdentityMap,
    diagnostics: DiagnosticSink,
    untranslated: Vec<Handle>,
    /// Handles that will never produce objects this run: no rule, declined,
    /// or failed with errors. Membership makes a verdict terminal, keeping
    /// rule invocation at most once per identity.
    terminal: AHashSet<Handle>,
}

impl RunState {
    fn new() -> Self {
        Self {
            model: Model::new(),
            identity_map: IdentityMap::new(),
            diagnostics: DiagnosticSink::new(),
            untranslated: Vec::new(),
            terminal: AHashSet::new(),
        }
    }

    /// Record an untranslated handle exactly once, preserving first-encounter
    /// order. Untranslated means no rule existed or the rule declined
    /// cleanly; records whose rule raised errors are failed, not
    /// untranslated.
    fn mark_untranslated(&mut self, handle: Handle) {
        if self.terminal.insert(handle) {
            self.untranslated.push(handle);
        }
    }

    /// Record a failed handle. Its story is told by the error diagnostics
    /// the rule emitted; it stays out of the untranslated set.
    fn mark_failed(&mut self, handle: Handle) {
        self.terminal.insert(handle);
    }
}

impl ReverseTranslator {
    /// Engine with a custom registry
    pub fn new(registry: RuleRegistry) -> Self {
        Self {
            registry,
            progress: None,
        }
    }

    /// Attach an advisory progress sink, polled between top-level records
    pub fn with_progress(mut self, progress: Box<dyn ProgressSink>) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Translate the whole workspace in a single pass
    ///
    /// Top-level enumeration follows workspace declared order; a record may
    /// still be translated earlier than its own turn when another rule
    /// requests it, in which case its turn is a memoized no-op. Ownership of
    /// shared dependents is first-requester-wins.
    pub fn translate_workspace(&self, workspace: &Workspace) -> TranslationResult {
        let mut state = RunState::new();
        let total = workspace.len();
        let mut was_cancelled = false;

        for (index, record) in workspace.records().enumerate() {
            if let Some(progress) = &self.progress {
                progress.tick(index, total);
                if progress.cancelled() {
                    warn!(completed = index, total, "translation cancelled, returning partial result");
                    was_cancelled = true;
                    break;
                }
            }
            self.translate_and_map(workspace, &mut state, record.handle);
        }
        // A cancelled run must not report itself as complete.
        if !was_cancelled {
            if let Some(progress) = &self.progress {
                progress.tick(total, total);
            }
        }

        debug!(
            objects = state.model.len(),
            diagnostics = state.diagnostics.len(),
            untranslated = state.untranslated.len(),
            "translation pass complete"
        );

        TranslationResult {
            model: state.model,
            diagnostics: state.diagnostics.into_inner(),
            untranslated: state.untranslated,
        }
    }

    /// Translate one record through the identity map
    ///
    /// Every dispatch goes through here, whether top-level or re-entrant
    /// from inside a rule; that is the invariant making translation
    /// at-most-once and cycle-safe.
    fn translate_and_map(
        &self,
        workspace: &Workspace,
        state: &mut RunState,
        handle: Handle,
    ) -> Option<Vec<Handle>> {
        match state.identity_map.status(handle) {
            MapStatus::Done => return state.identity_map.get(handle).map(|h| h.to_vec()),
            // A cycle back into the dispatch stack; the caller observes this
            // through its context's status query and defers the link.
            MapStatus::InProgress => return None,
            MapStatus::Absent => {}
        }
        if state.terminal.contains(&handle) {
            return None;
        }

        let Some(record) = workspace.get(handle) else {
            state.diagnostics.record_for(
                Severity::Error,
                handle,
                format!("reference to a record not present in the workspace: {handle}"),
            );
            return None;
        };

        let Some(rule) = self.registry.get(&record.object_type) else {
            debug!(tag = %record.object_type, "no rule registered, leaving untranslated");
            state.mark_untranslated(handle);
            return None;
        };

        // Placeholder goes in before the rule runs so re-entrant requests
        // for this same identity observe InProgress rather than recursing.
        state.identity_map.mark_in_progress(handle);
        debug!(record = %record.brief_description(), "dispatching");

        let errors_before = state.diagnostics.error_count();
        let mut ctx = DispatchContext {
            engine: self,
            workspace,
            state: &mut *state,
        };
        let produced = rule.translate(record, &mut ctx);

        match produced {
            Some(handles) if !handles.is_empty() => {
                state.identity_map.complete(handle, handles.clone());
                Some(handles)
            }
            _ => {
                state.identity_map.remove(handle);
                // A rule that emitted errors failed on a malformed record;
                // only a clean decline lands in the untranslated set.
                if state.diagnostics.error_count() > errors_before {
                    state.mark_failed(handle);
                } else {
                    state.mark_untranslated(handle);
                }
                None
            }
        }
    }
}

impl Default for ReverseTranslator {
    /// Engine with every built-in rule registered
    fn default() -> Self {
        Self::new(create_default_registry())
    }
}

/// Concrete `RuleContext` backing one rule invocation
struct DispatchContext<'a> {
    engine: &'a ReverseTranslator,
    workspace: &'a Workspace,
    state: &'a mut RunState,
}

impl RuleContext for DispatchContext<'_> {
    fn translate(&mut self, handle: Handle) -> Option<Handle> {
        self.translate_all(handle)
            .and_then(|handles| handles.first().copied())
    }

    fn translate_all(&mut self, handle: Handle) -> Option<Vec<Handle>> {
        self.engine
            .translate_and_map(self.workspace, self.state, handle)
    }

    fn status(&self, handle: Handle) -> MapStatus {
        self.state.identity_map.status(handle)
    }

    fn workspace(&self) -> &Workspace {
        self.workspace
    }

    fn model(&self) -> &Model {
        &self.state.model
    }

    fn model_mut(&mut self) -> &mut Model {
        &mut self.state.model
    }

    fn warn(&mut self, source: Handle, message: String) {
        self.state
            .diagnostics
            .record_for(Severity::Warning, source, message);
    }

    fn error(&mut self, source: Handle, message: String) {
        self.state
            .diagnostics
            .record_for(Severity::Error, source, message);
    }
}
