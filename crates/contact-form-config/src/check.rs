// crates/contact-form-config/src/check.rs
// ============================================================================
// Module: Schema Check Entrypoints
// Description: Public entrypoints wrapping the config validator.
// Purpose: Offer explicit (typed error) and boolean validation results.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! [`check_config_schema`] is the primary contract: it returns the normalized
//! [`Config`] or the first [`SchemaError`]. [`is_valid_config`] collapses the
//! same outcome to a boolean for callers that only need a yes/no answer.
//! Neither function reads files; loading lives in [`crate::load`].

use serde_json::Value;

use crate::config::Config;
use crate::config::ConfigValidator;
use crate::error::SchemaError;
use crate::warnings::NoopWarningSink;
use crate::warnings::WarningSink;

/// Validates a parsed `config.json` document, discarding warnings.
///
/// # Errors
///
/// Returns [`SchemaError`] carrying the kind, path, expected and actual
/// description of the first violation.
pub fn check_config_schema(document: &Value) -> Result<Config, SchemaError> {
    check_config_schema_with(document, &NoopWarningSink)
}

/// Validates a parsed `config.json` document, reporting warnings to `sink`.
///
/// # Errors
///
/// Returns [`SchemaError`] describing the first violation.
pub fn check_config_schema_with(
    document: &Value,
    sink: &dyn WarningSink,
) -> Result<Config, SchemaError> {
    ConfigValidator::new(sink).config(document)
}

/// Returns true when `document` is a valid `config.json` document.
#[must_use]
pub fn is_valid_config(document: &Value) -> bool {
    check_config_schema(document).is_ok()
}
