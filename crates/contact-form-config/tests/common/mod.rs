// crates/contact-form-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config.json validation tests.
// Purpose: Reduce duplication across integration tests for contact-form-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use contact_form_config::SchemaError;
use contact_form_config::SchemaErrorKind;
use serde_json::Value;
use serde_json::json;

/// Result alias used by every suite.
pub type TestResult = Result<(), String>;

/// Returns the smallest valid document.
pub fn minimal_document() -> Value {
    json!({
        "email": "foo@bar.com",
        "title": "Contact Us",
        "subject": "Support",
        "questions": [
            {"label": "Name", "name": "name", "type": "text", "required": true}
        ]
    })
}

/// Returns a minimal document whose only question is `question`.
pub fn document_with_question(question: Value) -> Value {
    let mut document = minimal_document();
    document["questions"] = json!([question]);
    document
}

/// Returns the selectbox fixture used by the multi-select harness tests.
pub fn multiple_select_document() -> Value {
    json!({
        "subject": "Testing Multiple Select Options",
        "title": "Testing Multi-Select Options",
        "form_backend_url": null,
        "email": "foo@bar.com",
        "questions": [
            {
                "label": "Select your country",
                "name": "country",
                "type": "selectbox",
                "required": true,
                "options": [
                    {
                        "label": "--Select all that apply--",
                        "value": "",
                        "selected": true,
                        "disabled": true
                    },
                    {"label": "USA", "value": "USA"},
                    {"label": "Canada", "value": "CAN"},
                    {"label": "United Kingdom", "value": "UK"},
                    {"label": "Australia", "value": "AUS"}
                ],
                "custom": {"multiple": true}
            }
        ]
    })
}

/// Asserts that `result` failed with `kind` at `path`.
pub fn expect_schema_error<T>(
    result: Result<T, SchemaError>,
    kind: SchemaErrorKind,
    path: &str,
) -> Result<SchemaError, String> {
    match result {
        Ok(_) => Err(format!("expected {kind} at {path}, got success")),
        Err(error) if error.kind == kind && error.path.to_string() == path => Ok(error),
        Err(error) => Err(format!("expected {kind} at {path}, got '{error}'")),
    }
}
