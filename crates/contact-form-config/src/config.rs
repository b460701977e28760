// crates/contact-form-config/src/config.rs
// ============================================================================
// Module: Contact Form Configuration
// Description: Entity model and validators for config.json.
// Purpose: Turn an untyped JSON document into a validated, normalized Config.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The document is validated top-down and built bottom-up:
//! [`Config`] delegates each entry of `questions` to the question validator,
//! which delegates each entry of a selectbox's `options` to the option
//! validator. The first violation aborts the whole document.
//!
//! Two fields are rewritten during validation: `Question.label` and
//! `Config.instructions` may arrive as arrays of strings and are joined with a
//! single space. A validated config serializes back to a document that
//! validates to an identical config.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::error::SchemaError;
use crate::fields::ExpectedKind;
use crate::fields::FieldSpec;
use crate::fields::check_fields;
use crate::fields::expect_object;
use crate::fields::unknown_fields;
use crate::path::FieldPath;
use crate::warnings::ConfigWarning;
use crate::warnings::NoopWarningSink;
use crate::warnings::WarningSink;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Question type that requires options.
pub const SELECTBOX_TYPE: &str = "selectbox";
/// Question type for file uploads.
pub const FILE_TYPE: &str = "file";

/// Field table for a selectbox option.
const OPTION_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("label", ExpectedKind::String),
    FieldSpec::required("value", ExpectedKind::String),
    FieldSpec::optional("selected", ExpectedKind::Bool),
    FieldSpec::optional("disabled", ExpectedKind::Bool),
];

/// Field table for a question, checked before the type-dependent options rule.
const QUESTION_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("label", ExpectedKind::Text),
    FieldSpec::required("name", ExpectedKind::String),
    FieldSpec::required("type", ExpectedKind::String),
    FieldSpec::required("required", ExpectedKind::Bool),
];

/// Options row, type-checked only for `selectbox` questions.
const QUESTION_OPTIONS_FIELDS: &[FieldSpec] =
    &[FieldSpec::optional("options", ExpectedKind::Array)];

/// Custom row, checked after the options rule.
const QUESTION_CUSTOM_FIELDS: &[FieldSpec] =
    &[FieldSpec::optional("custom", ExpectedKind::Object)];

/// Every key a question may carry.
const QUESTION_KNOWN_FIELDS: &[&[FieldSpec]] =
    &[QUESTION_FIELDS, QUESTION_OPTIONS_FIELDS, QUESTION_CUSTOM_FIELDS];

/// Field table for the whole document.
const CONFIG_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("email", ExpectedKind::String),
    FieldSpec::required("title", ExpectedKind::String),
    FieldSpec::required("subject", ExpectedKind::String),
    FieldSpec::required("questions", ExpectedKind::Array),
    FieldSpec::optional("form_backend_url", ExpectedKind::String),
    FieldSpec::optional("ignore_file_upload", ExpectedKind::Bool),
    FieldSpec::optional("instructions", ExpectedKind::Text),
];

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// One selectable choice inside a `selectbox` question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectBoxOption {
    /// Display text.
    pub label: String,
    /// Value submitted with the form.
    pub value: String,
    /// Pre-selected flag; `None` when the document does not say.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,
    /// Disabled flag; `None` when the document does not say.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl SelectBoxOption {
    /// Validates a single raw option. Error paths are relative to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when the option is malformed.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        ConfigValidator::new(&NoopWarningSink).option(value)
    }
}

/// One form field definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    /// Display text, already joined when it arrived as several lines.
    pub label: String,
    /// HTML form field name.
    pub name: String,
    /// Input kind (`text`, `email`, `file`, `selectbox`, ...).
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the field must be filled before submission.
    pub required: bool,
    /// Choices; present and non-empty exactly for `selectbox` questions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectBoxOption>>,
    /// Free-form rendering hints (for example `accept` or `multiple`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<Map<String, Value>>,
}

impl Question {
    /// Validates a single raw question. Error paths are relative to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when the question is malformed.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        ConfigValidator::new(&NoopWarningSink).question(value)
    }

    /// Returns true for `selectbox` questions.
    #[must_use]
    pub fn is_selectbox(&self) -> bool {
        self.kind == SELECTBOX_TYPE
    }

    /// Returns true for `file` questions.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == FILE_TYPE
    }
}

/// The whole validated `config.json` document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Recipient address for submissions.
    pub email: String,
    /// Page title.
    pub title: String,
    /// Submission subject line.
    pub subject: String,
    /// Questions in on-page order.
    pub questions: Vec<Question>,
    /// Submission endpoint; `None` for download-only forms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_backend_url: Option<String>,
    /// Whether file answers are left out of the submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_file_upload: Option<bool>,
    /// Text shown above the form, already joined when it arrived as lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl Config {
    /// Validates a parsed document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] describing the first violation.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        ConfigValidator::new(&NoopWarningSink).config(value)
    }

    /// Returns the question with the given form field name.
    #[must_use]
    pub fn question(&self, name: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.name == name)
    }

    /// Iterates over `file` questions in on-page order.
    pub fn file_questions(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(|question| question.is_file())
    }

    /// Serializes the normalized config to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when serialization fails.
    pub fn to_json_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Serializes the normalized config as JSON indented by two spaces.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// ============================================================================
// SECTION: Validator
// ============================================================================

/// Stateless validator that reports warnings to a borrowed sink.
pub struct ConfigValidator<'a> {
    /// Destination for non-fatal findings.
    sink: &'a dyn WarningSink,
}

impl<'a> ConfigValidator<'a> {
    /// Creates a validator reporting warnings to `sink`.
    #[must_use]
    pub const fn new(sink: &'a dyn WarningSink) -> Self {
        Self {
            sink,
        }
    }

    /// Validates a raw selectbox option.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when the option is malformed.
    pub fn option(&self, value: &Value) -> Result<SelectBoxOption, SchemaError> {
        self.validate_option(value, &FieldPath::root())
    }

    /// Validates a raw question.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when the question is malformed.
    pub fn question(&self, value: &Value) -> Result<Question, SchemaError> {
        self.validate_question(value, &FieldPath::root())
    }

    /// Validates a whole document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] describing the first violation.
    pub fn config(&self, value: &Value) -> Result<Config, SchemaError> {
        let path = FieldPath::root();
        let object = expect_object(value, &path)?;
        let fields = check_fields(object, CONFIG_FIELDS, &path)?;
        self.report_unknown(object, &[CONFIG_FIELDS], &path);

        let questions_path = path.key("questions");
        let raw_questions = fields.array("questions").map_or(&[][..], Vec::as_slice);
        let mut questions = Vec::with_capacity(raw_questions.len());
        for (index, raw) in raw_questions.iter().enumerate() {
            questions.push(self.validate_question(raw, &questions_path.index(index))?);
        }
        self.report_duplicate_names(&questions, &questions_path);

        Ok(Config {
            email: fields.string("email")?,
            title: fields.string("title")?,
            subject: fields.string("subject")?,
            questions,
            form_backend_url: fields.optional_string("form_backend_url"),
            ignore_file_upload: fields.optional_bool("ignore_file_upload"),
            instructions: fields.optional_text("instructions"),
        })
    }

    /// Validates an option located at `path`.
    fn validate_option(
        &self,
        value: &Value,
        path: &FieldPath,
    ) -> Result<SelectBoxOption, SchemaError> {
        let object = expect_object(value, path)?;
        let fields = check_fields(object, OPTION_FIELDS, path)?;
        self.report_unknown(object, &[OPTION_FIELDS], path);
        Ok(SelectBoxOption {
            label: fields.string("label")?,
            value: fields.string("value")?,
            selected: fields.optional_bool("selected"),
            disabled: fields.optional_bool("disabled"),
        })
    }

    /// Validates a question located at `path`.
    fn validate_question(&self, value: &Value, path: &FieldPath) -> Result<Question, SchemaError> {
        let object = expect_object(value, path)?;
        let fields = check_fields(object, QUESTION_FIELDS, path)?;
        self.report_unknown(object, QUESTION_KNOWN_FIELDS, path);

        let kind = fields.string("type")?;
        let options_path = path.key("options");
        let options = if kind == SELECTBOX_TYPE {
            check_fields(object, QUESTION_OPTIONS_FIELDS, path)?;
            let raw_options = match fields.array("options") {
                None => return Err(SchemaError::empty_options(options_path, "absent")),
                Some(raw) if raw.is_empty() => {
                    return Err(SchemaError::empty_options(options_path, "empty array"));
                }
                Some(raw) => raw,
            };
            let mut options = Vec::with_capacity(raw_options.len());
            for (index, raw) in raw_options.iter().enumerate() {
                options.push(self.validate_option(raw, &options_path.index(index))?);
            }
            Some(options)
        } else {
            if fields.is_present("options") {
                return Err(SchemaError::unexpected_options(options_path, &kind));
            }
            None
        };
        check_fields(object, QUESTION_CUSTOM_FIELDS, path)?;

        Ok(Question {
            label: fields.text("label")?,
            name: fields.string("name")?,
            kind,
            required: fields.boolean("required")?,
            options,
            custom: fields.object("custom").cloned(),
        })
    }

    /// Reports keys of `object` that none of `tables` declare.
    fn report_unknown(
        &self,
        object: &Map<String, Value>,
        tables: &'static [&'static [FieldSpec]],
        path: &FieldPath,
    ) {
        for key in unknown_fields(object, tables) {
            self.sink.record(&ConfigWarning::unknown_field(path.key(key)));
        }
    }

    /// Reports questions whose `name` repeats an earlier question's.
    fn report_duplicate_names(&self, questions: &[Question], questions_path: &FieldPath) {
        let mut first_seen: HashMap<&str, usize> = HashMap::with_capacity(questions.len());
        for (index, question) in questions.iter().enumerate() {
            if let Some(first) = first_seen.get(question.name.as_str()) {
                self.sink.record(&ConfigWarning::duplicate_question_name(
                    questions_path.index(index).key("name"),
                    &question.name,
                    &questions_path.index(*first).key("name"),
                ));
            } else {
                first_seen.insert(question.name.as_str(), index);
            }
        }
    }
}
