// crates/contact-form-config/src/warnings.rs
// ============================================================================
// Module: Config Warnings
// Description: Structured non-fatal findings raised during validation.
// Purpose: Emit warning events without hard logging dependencies.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The validator never fails on findings that leave the config usable. Those
//! are reported as [`ConfigWarning`] events through a [`WarningSink`] so that
//! callers decide where they go: JSON lines on stderr, an in-memory list, or
//! nowhere.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use serde::Serialize;

use crate::path::FieldPath;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Classification of a non-fatal finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// A key the schema does not define; it is ignored.
    UnknownField,
    /// Two questions share the same `name`.
    DuplicateQuestionName,
}

/// A non-fatal finding tied to a location in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigWarning {
    /// Finding classification.
    pub kind: WarningKind,
    /// Location of the finding.
    pub path: FieldPath,
    /// Human-readable detail.
    pub message: String,
}

impl ConfigWarning {
    /// Builds an unknown-field warning for the key at `path`.
    #[must_use]
    pub fn unknown_field(path: FieldPath) -> Self {
        let message = format!("unknown field {path} is ignored");
        Self {
            kind: WarningKind::UnknownField,
            path,
            message,
        }
    }

    /// Builds a duplicate-name warning for the question name at `path`.
    #[must_use]
    pub fn duplicate_question_name(path: FieldPath, name: &str, first: &FieldPath) -> Self {
        Self {
            kind: WarningKind::DuplicateQuestionName,
            path,
            message: format!("question name \"{name}\" already used at {first}"),
        }
    }
}

/// JSON-line envelope written by stream sinks.
#[derive(Serialize)]
struct WarningEvent<'a> {
    /// Event identifier.
    event: &'static str,
    /// Wrapped warning.
    #[serde(flatten)]
    warning: &'a ConfigWarning,
}

impl<'a> WarningEvent<'a> {
    /// Wraps a warning in the `config_warning` envelope.
    const fn new(warning: &'a ConfigWarning) -> Self {
        Self {
            event: "config_warning",
            warning,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Destination for validation warnings.
pub trait WarningSink: Send + Sync {
    /// Record a warning.
    fn record(&self, warning: &ConfigWarning);
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Warning sink that logs JSON lines to stderr.
pub struct StderrWarningSink;

impl WarningSink for StderrWarningSink {
    fn record(&self, warning: &ConfigWarning) {
        if let Ok(payload) = serde_json::to_string(&WarningEvent::new(warning)) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// No-op warning sink.
pub struct NoopWarningSink;

impl WarningSink for NoopWarningSink {
    fn record(&self, _warning: &ConfigWarning) {}
}

/// Warning sink that keeps warnings in memory, in the order recorded.
#[derive(Default)]
pub struct MemoryWarningSink {
    /// Recorded warnings.
    warnings: Mutex<Vec<ConfigWarning>>,
}

impl MemoryWarningSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the warnings recorded so far.
    #[must_use]
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        self.guard().clone()
    }

    /// Removes and returns the warnings recorded so far.
    #[must_use]
    pub fn take(&self) -> Vec<ConfigWarning> {
        std::mem::take(&mut *self.guard())
    }

    /// Locks the buffer, keeping its contents even after a panicked holder.
    fn guard(&self) -> MutexGuard<'_, Vec<ConfigWarning>> {
        self.warnings.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WarningSink for MemoryWarningSink {
    fn record(&self, warning: &ConfigWarning) {
        self.guard().push(warning.clone());
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests;
