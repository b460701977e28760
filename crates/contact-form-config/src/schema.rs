// crates/contact-form-config/src/schema.rs
// ============================================================================
// Module: Config Schemas
// Description: JSON schema builders for config.json.
// Purpose: Provide a canonical validation schema for config artifacts.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! This module defines the JSON Schema for the contact form `config.json`.
//! It mirrors the validator's field tables, including the rule that options
//! belong to `selectbox` questions only, so editors and external tooling can
//! check a config without running this crate. Unknown keys are allowed, as
//! they are in the validator.

use serde_json::Value;
use serde_json::json;

use crate::config::SELECTBOX_TYPE;

/// Returns the JSON schema for `config.json`.
#[must_use]
pub fn config_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "contact-form://schemas/config.schema.json",
        "title": "Contact Form Configuration",
        "description": "Configuration document that drives the contact form website.",
        "type": "object",
        "required": ["email", "title", "subject", "questions"],
        "properties": {
            "email": schema_for_string("Recipient address for submissions."),
            "title": schema_for_string("Page title."),
            "subject": schema_for_string("Submission subject line."),
            "questions": {
                "type": "array",
                "items": question_schema(),
                "description": "Questions in on-page order."
            },
            "form_backend_url": {
                "oneOf": [
                    { "type": "null" },
                    schema_for_string("Submission endpoint.")
                ],
                "default": null
            },
            "ignore_file_upload": {
                "type": ["boolean", "null"],
                "description": "Leave file answers out of the submission."
            },
            "instructions": {
                "oneOf": [
                    { "type": "null" },
                    schema_for_text("Text shown above the form.")
                ],
                "default": null
            }
        }
    })
}

// ============================================================================
// SECTION: Questions
// ============================================================================

/// Schema for a single question.
fn question_schema() -> Value {
    json!({
        "type": "object",
        "required": ["label", "name", "type", "required"],
        "properties": {
            "label": schema_for_text("Display text; arrays are joined with one space."),
            "name": schema_for_string("HTML form field name."),
            "type": schema_for_string("Input kind (text, email, file, selectbox, ...)."),
            "required": {
                "type": "boolean",
                "description": "Whether the field must be filled before submission."
            },
            "options": {
                "type": ["array", "null"],
                "items": option_schema()
            },
            "custom": {
                "type": ["object", "null"],
                "description": "Free-form rendering hints."
            }
        },
        "if": {
            "properties": { "type": { "const": SELECTBOX_TYPE } },
            "required": ["type"]
        },
        "then": {
            "required": ["options"],
            "properties": {
                "options": { "type": "array", "minItems": 1 }
            }
        },
        "else": {
            "properties": {
                "options": { "type": "null" }
            }
        }
    })
}

/// Schema for a single selectbox option.
fn option_schema() -> Value {
    json!({
        "type": "object",
        "required": ["label", "value"],
        "properties": {
            "label": schema_for_string("Display text."),
            "value": schema_for_string("Value submitted with the form."),
            "selected": { "type": ["boolean", "null"] },
            "disabled": { "type": ["boolean", "null"] }
        }
    })
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Schema for a described string.
fn schema_for_string(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description
    })
}

/// Schema for a string or an array of strings.
fn schema_for_text(description: &str) -> Value {
    json!({
        "oneOf": [
            { "type": "string" },
            { "type": "array", "items": { "type": "string" } }
        ],
        "description": description
    })
}
