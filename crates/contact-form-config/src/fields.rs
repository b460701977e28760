// crates/contact-form-config/src/fields.rs
// ============================================================================
// Module: Field Tables
// Description: Static per-entity field tables and the shared field checker.
// Purpose: Type-check raw JSON mappings without runtime reflection.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Every entity declares a `&'static [FieldSpec]` table naming its fields, the
//! JSON type each one must hold, and whether it is required. [`check_fields`]
//! walks a table in declaration order against a raw mapping and hands back a
//! [`Fields`] view whose accessors extract the already-checked values.
//!
//! JSON `null` counts as absent for optional fields. Keys that no table names
//! are never an error; callers may report them through [`unknown_fields`].

use serde_json::Map;
use serde_json::Value;

use crate::error::SchemaError;
use crate::path::FieldPath;

// ============================================================================
// SECTION: Field Specs
// ============================================================================

/// JSON type a field must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExpectedKind {
    /// JSON string.
    String,
    /// JSON boolean.
    Bool,
    /// JSON array (elements checked by the owning validator).
    Array,
    /// JSON object (contents not inspected).
    Object,
    /// JSON string, or array of strings joined during normalization.
    Text,
}

impl ExpectedKind {
    /// Returns the label used in error reports.
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Text => "string or array of strings",
        }
    }
}

/// Whether a field must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Presence {
    /// Absence is a `MissingField` error.
    Required,
    /// Absence (or `null`) leaves the field unset.
    Optional,
}

/// One row of an entity field table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldSpec {
    /// JSON key.
    pub(crate) name: &'static str,
    /// Expected JSON type.
    pub(crate) kind: ExpectedKind,
    /// Required or optional.
    pub(crate) presence: Presence,
}

impl FieldSpec {
    /// Declares a required field.
    pub(crate) const fn required(name: &'static str, kind: ExpectedKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Required,
        }
    }

    /// Declares an optional field.
    pub(crate) const fn optional(name: &'static str, kind: ExpectedKind) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Optional,
        }
    }
}

// ============================================================================
// SECTION: Checking
// ============================================================================

/// Returns the runtime JSON type name of `value`.
pub(crate) const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Requires `value` to be a JSON object.
///
/// # Errors
///
/// Returns [`SchemaError`] (type mismatch at `path`) for any other JSON type.
pub(crate) fn expect_object<'a>(
    value: &'a Value,
    path: &FieldPath,
) -> Result<&'a Map<String, Value>, SchemaError> {
    value.as_object().ok_or_else(|| {
        SchemaError::mismatch(path.clone(), ExpectedKind::Object.as_str(), value_kind(value))
    })
}

/// Checks `object` against `table` in table order.
///
/// # Errors
///
/// Returns the first [`SchemaError`] found: a missing required field or a
/// field holding the wrong JSON type.
pub(crate) fn check_fields<'a>(
    object: &'a Map<String, Value>,
    table: &'static [FieldSpec],
    path: &'a FieldPath,
) -> Result<Fields<'a>, SchemaError> {
    for spec in table {
        let field_path = path.key(spec.name);
        match (object.get(spec.name), spec.presence) {
            (None, Presence::Required) => {
                return Err(SchemaError::missing(field_path, spec.kind.as_str()));
            }
            (None | Some(Value::Null), Presence::Optional) => {}
            (Some(value), _) => check_kind(spec.kind, value, &field_path)?,
        }
    }
    Ok(Fields {
        object,
        path,
    })
}

/// Checks a single present value against its expected kind.
fn check_kind(kind: ExpectedKind, value: &Value, path: &FieldPath) -> Result<(), SchemaError> {
    let matches = match (kind, value) {
        (ExpectedKind::String | ExpectedKind::Text, Value::String(_))
        | (ExpectedKind::Bool, Value::Bool(_))
        | (ExpectedKind::Array, Value::Array(_))
        | (ExpectedKind::Object, Value::Object(_)) => true,
        (ExpectedKind::Text, Value::Array(parts)) => {
            for (index, part) in parts.iter().enumerate() {
                if !part.is_string() {
                    return Err(SchemaError::mismatch(
                        path.index(index),
                        ExpectedKind::String.as_str(),
                        value_kind(part),
                    ));
                }
            }
            true
        }
        _ => false,
    };
    if matches {
        Ok(())
    } else {
        Err(SchemaError::mismatch(path.clone(), kind.as_str(), value_kind(value)))
    }
}

/// Returns keys of `object` that none of `tables` declare, in map order.
pub(crate) fn unknown_fields<'a>(
    object: &'a Map<String, Value>,
    tables: &'static [&'static [FieldSpec]],
) -> impl Iterator<Item = &'a str> {
    object.keys().map(String::as_str).filter(move |key| {
        !tables.iter().flat_map(|table| table.iter()).any(|spec| spec.name == *key)
    })
}

// ============================================================================
// SECTION: Normalization
// ============================================================================

/// Joins multi-line text into a single string separated by one space.
///
/// Element order is preserved and no other whitespace is touched, so the
/// output for `["Fill out", "the", "form."]` is exactly `"Fill out the form."`.
#[must_use]
pub fn normalize_text<S: AsRef<str>>(parts: &[S]) -> String {
    parts.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(" ")
}

/// Normalizes a `Text` value; `None` when it is neither a string nor strings.
fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Array(parts) => {
            let parts = parts.iter().map(Value::as_str).collect::<Option<Vec<_>>>()?;
            Some(normalize_text(&parts))
        }
        _ => None,
    }
}

// ============================================================================
// SECTION: Checked View
// ============================================================================

/// Accessors over a mapping that already passed [`check_fields`].
///
/// Required accessors still return `Result` so that a table/accessor mismatch
/// surfaces as a schema error instead of a panic.
pub(crate) struct Fields<'a> {
    /// Checked mapping.
    object: &'a Map<String, Value>,
    /// Path of the mapping itself.
    path: &'a FieldPath,
}

impl<'a> Fields<'a> {
    /// Returns the value for `name` unless it is absent or `null`.
    fn present(&self, name: &str) -> Option<&'a Value> {
        self.object.get(name).filter(|value| !value.is_null())
    }

    /// Returns true when `name` holds a value other than `null`.
    pub(crate) fn is_present(&self, name: &str) -> bool {
        self.present(name).is_some()
    }

    /// Builds the error for a required accessor that found nothing usable.
    fn required_error(&self, name: &str, kind: ExpectedKind) -> SchemaError {
        let field_path = self.path.key(name);
        match self.object.get(name) {
            None => SchemaError::missing(field_path, kind.as_str()),
            Some(value) => SchemaError::mismatch(field_path, kind.as_str(), value_kind(value)),
        }
    }

    /// Returns a required string field.
    pub(crate) fn string(&self, name: &str) -> Result<String, SchemaError> {
        self.optional_string(name).ok_or_else(|| self.required_error(name, ExpectedKind::String))
    }

    /// Returns an optional string field.
    pub(crate) fn optional_string(&self, name: &str) -> Option<String> {
        self.present(name).and_then(Value::as_str).map(str::to_string)
    }

    /// Returns a required boolean field.
    pub(crate) fn boolean(&self, name: &str) -> Result<bool, SchemaError> {
        self.optional_bool(name).ok_or_else(|| self.required_error(name, ExpectedKind::Bool))
    }

    /// Returns an optional boolean field.
    pub(crate) fn optional_bool(&self, name: &str) -> Option<bool> {
        self.present(name).and_then(Value::as_bool)
    }

    /// Returns a required text field, normalized to one string.
    pub(crate) fn text(&self, name: &str) -> Result<String, SchemaError> {
        self.optional_text(name).ok_or_else(|| self.required_error(name, ExpectedKind::Text))
    }

    /// Returns an optional text field, normalized to one string.
    pub(crate) fn optional_text(&self, name: &str) -> Option<String> {
        self.present(name).and_then(text_value)
    }

    /// Returns an optional array field.
    pub(crate) fn array(&self, name: &str) -> Option<&'a Vec<Value>> {
        self.present(name).and_then(Value::as_array)
    }

    /// Returns an optional object field.
    pub(crate) fn object(&self, name: &str) -> Option<&'a Map<String, Value>> {
        self.present(name).and_then(Value::as_object)
    }
}
