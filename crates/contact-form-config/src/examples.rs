// crates/contact-form-config/src/examples.rs
// ============================================================================
// Module: Config Examples
// Description: Canonical example configuration payloads.
// Purpose: Deterministic examples for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical example `config.json`. It exercises every field the validator
//! knows about and is kept in sync with the schema by the test suite.

/// Returns a canonical example `config.json` document.
#[must_use]
pub fn config_json_example() -> String {
    String::from(
        r#"{
  "email": "contact@example.com",
  "title": "Contact Us",
  "subject": "New contact form submission",
  "form_backend_url": "https://forms.example.com/submit",
  "ignore_file_upload": false,
  "instructions": [
    "<p>",
    "Fill out the form below and we will get back to you.",
    "</p>"
  ],
  "questions": [
    {
      "label": "Full Name",
      "name": "name",
      "type": "text",
      "required": true
    },
    {
      "label": "Email Address",
      "name": "email",
      "type": "email",
      "required": true
    },
    {
      "label": ["Which topic", "is this about?"],
      "name": "topic",
      "type": "selectbox",
      "required": true,
      "options": [
        { "label": "--Select one--", "value": "", "selected": true, "disabled": true },
        { "label": "Support", "value": "support" },
        { "label": "Sales", "value": "sales" }
      ]
    },
    {
      "label": "Preferred Date",
      "name": "date",
      "type": "date",
      "required": false
    },
    {
      "label": "Attachment",
      "name": "attachment",
      "type": "file",
      "required": false,
      "custom": { "accept": "image/*", "multiple": true }
    },
    {
      "label": "Message",
      "name": "message",
      "type": "textarea",
      "required": true
    }
  ]
}
"#,
    )
}
