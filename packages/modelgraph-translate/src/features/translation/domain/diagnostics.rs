//! Diagnostics sink
//!
//! Append-only, per-run message accumulation. No deduplication: repeated
//! identical messages carry signal (N failures of the same shape).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::models::Handle;

/// Message severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One diagnostic message from a translation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Source record the message is about, when known
    pub source: Option<Handle>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            timestamp: Utc::now(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: Handle) -> Self {
        self.source = Some(source);
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// Ordered, append-only collection of diagnostics for one run
#[derive(Debug, Clone, Default)]
pub struct DiagnosticSink {
    entries: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, severity: Severity, message: impl Into<String>) {
        self.entries.push(Diagnostic::new(severity, message));
    }

    pub fn record_for(&mut self, severity: Severity, source: Handle, message: impl Into<String>) {
        self.entries
            .push(Diagnostic::new(severity, message).with_source(source));
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn all(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_inner(self) -> Vec<Diagnostic> {
        self.entries
    }
}
