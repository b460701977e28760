// crates/contact-form-config/src/error.rs
// ============================================================================
// Module: Config Errors
// Description: Typed failures for schema validation and config loading.
// Purpose: Report exactly which field violated which rule.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! [`SchemaError`] is the single failure type of the validator. Loading a
//! config from disk wraps it in [`ConfigError`] next to I/O and parse failures.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::path::FieldPath;

// ============================================================================
// SECTION: Schema Errors
// ============================================================================

/// Classification of a schema violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaErrorKind {
    /// A required key is absent from a mapping.
    MissingField,
    /// A present key holds a value of the wrong runtime type.
    TypeMismatch,
    /// A `selectbox` question has no options.
    EmptyOptions,
    /// A non-`selectbox` question carries options.
    UnexpectedOptions,
}

impl SchemaErrorKind {
    /// Returns a stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing field",
            Self::TypeMismatch => "type mismatch",
            Self::EmptyOptions => "empty options",
            Self::UnexpectedOptions => "unexpected options",
        }
    }
}

impl fmt::Display for SchemaErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single schema violation found while validating a document.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{path}: {kind}: expected {expected}, got {actual}")]
pub struct SchemaError {
    /// Violated rule.
    pub kind: SchemaErrorKind,
    /// Location of the offending field.
    pub path: FieldPath,
    /// Human-readable description of what was expected.
    pub expected: String,
    /// Human-readable description of what was found.
    pub actual: String,
}

impl SchemaError {
    /// Builds a missing-field error for `path`.
    #[must_use]
    pub fn missing(path: FieldPath, expected: &str) -> Self {
        Self {
            kind: SchemaErrorKind::MissingField,
            path,
            expected: expected.to_string(),
            actual: "absent".to_string(),
        }
    }

    /// Builds a type-mismatch error for `path`.
    #[must_use]
    pub fn mismatch(path: FieldPath, expected: &str, actual: &str) -> Self {
        Self {
            kind: SchemaErrorKind::TypeMismatch,
            path,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Builds an empty-options error for `path`.
    #[must_use]
    pub fn empty_options(path: FieldPath, actual: &str) -> Self {
        Self {
            kind: SchemaErrorKind::EmptyOptions,
            path,
            expected: "non-empty array of options".to_string(),
            actual: actual.to_string(),
        }
    }

    /// Builds an unexpected-options error for a question of type `kind`.
    #[must_use]
    pub fn unexpected_options(path: FieldPath, kind: &str) -> Self {
        Self {
            kind: SchemaErrorKind::UnexpectedOptions,
            path,
            expected: "no options outside selectbox questions".to_string(),
            actual: format!("options on a \"{kind}\" question"),
        }
    }
}

// ============================================================================
// SECTION: Load Errors
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading or writing configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// JSON parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Input rejected before schema validation (path, size, encoding).
    #[error("invalid config: {0}")]
    Invalid(String),
    /// Schema validation failure.
    #[error("invalid config: {0}")]
    Schema(#[from] SchemaError),
}
