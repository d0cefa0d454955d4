//! Identity map
//!
//! The single source of truth for "has this record been translated".
//! The in-progress marker is what makes re-entrant dispatch cycle-safe:
//! a rule revisiting an identity already on the dispatch stack observes
//! `InProgress` instead of recursing forever.

use ahash::AHashMap;

use crate::shared::models::Handle;

/// Observable status of a source identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapStatus {
    /// Never dispatched (or its rule declined and the placeholder was removed)
    Absent,
    /// Currently on the dispatch stack
    InProgress,
    /// Translated; destination handles are stored
    Done,
}

#[derive(Debug, Clone)]
enum MapEntry {
    InProgress,
    Done(Vec<Handle>),
}

/// Source identity -> destination object(s), scoped to one run
#[derive(Debug, Clone, Default)]
pub struct IdentityMap {
    entries: AHashMap<Handle, MapEntry>,
}

impl IdentityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, handle: Handle) -> MapStatus {
        match self.entries.get(&handle) {
            None => MapStatus::Absent,
            Some(MapEntry::InProgress) => MapStatus::InProgress,
            Some(MapEntry::Done(_)) => MapStatus::Done,
        }
    }

    /// Destination handles for a completed identity; `None` otherwise
    pub fn get(&self, handle: Handle) -> Option<&[Handle]> {
        match self.entries.get(&handle) {
            Some(MapEntry::Done(handles)) => Some(handles.as_slice()),
            _ => None,
        }
    }

    /// Primary destination object (first of a fan-out)
    pub fn primary(&self, handle: Handle) -> Option<Handle> {
        self.get(handle).and_then(|h| h.first().copied())
    }

    /// Insert the placeholder before the rule runs
    pub fn mark_in_progress(&mut self, handle: Handle) {
        self.entries.insert(handle, MapEntry::InProgress);
    }

    /// Replace the placeholder with the real result
    pub fn complete(&mut self, handle: Handle, produced: Vec<Handle>) {
        debug_assert!(!produced.is_empty());
        self.entries.insert(handle, MapEntry::Done(produced));
    }

    /// Drop the placeholder when the rule declines
    pub fn remove(&mut self, handle: Handle) {
        self.entries.remove(&handle);
    }

    /// Number of completed identities
    pub fn translated_count(&self) -> usize {
        self.entries
            .values()
            .filter(|e| matches!(e, MapEntry::Done(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_transitions() {
        let mut map = IdentityMap::new();
        let source = Handle::new();
        assert_eq!(map.status(source), MapStatus::Absent);

        map.mark_in_progress(source);
        assert_eq!(map.status(source), MapStatus::InProgress);
        assert!(map.get(source).is_none());

        let dest = Handle::new();
        map.complete(source, vec![dest]);
        assert_eq!(map.status(source), MapStatus::Done);
        assert_eq!(map.primary(source), Some(dest));
    }

    #[test]
    fn declined_rule_resets_to_absent() {
        let mut map = IdentityMap::new();
        let source = Handle::new();
        map.mark_in_progress(source);
        map.remove(source);
        assert_eq!(map.status(source), MapStatus::Absent);
        assert_eq!(map.translated_count(), 0);
    }

    #[test]
    fn fan_out_keeps_primary_first() {
        let mut map = IdentityMap::new();
        let source = Handle::new();
        let (a, b, c) = (Handle::new(), Handle::new(), Handle::new());
        map.mark_in_progress(source);
        map.complete(source, vec![a, b, c]);
        assert_eq!(map.primary(source), Some(a));
        assert_eq!(map.get(source).unwrap().len(), 3);
    }
}
