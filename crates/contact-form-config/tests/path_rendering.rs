//! Field path rendering tests for contact-form-config.
// crates/contact-form-config/tests/path_rendering.rs
// =============================================================================
// Module: Field Path Tests
// Description: Rendering and serialization of field locators.
// Purpose: Keep error and warning locations stable for consumers.
// =============================================================================

use contact_form_config::FieldPath;
use contact_form_config::PathSegment;

mod common;

use common::TestResult;

#[test]
fn root_renders_as_dollar() -> TestResult {
    let rendered = FieldPath::root().to_string();
    if rendered != "$" {
        return Err(format!("unexpected root rendering {rendered}"));
    }
    Ok(())
}

#[test]
fn nested_path_renders_dotted_and_bracketed() -> TestResult {
    let path = FieldPath::root().key("questions").index(2).key("options").index(0).key("value");
    let rendered = path.to_string();
    if rendered != "questions[2].options[0].value" {
        return Err(format!("unexpected rendering {rendered}"));
    }
    Ok(())
}

#[test]
fn index_at_root_has_no_leading_dot() -> TestResult {
    let rendered = FieldPath::root().index(3).key("label").to_string();
    if rendered != "[3].label" {
        return Err(format!("unexpected rendering {rendered}"));
    }
    Ok(())
}

#[test]
fn segments_are_exposed_in_order() -> TestResult {
    let path = FieldPath::root().key("questions").index(1);
    let expected = [PathSegment::Key("questions".to_string()), PathSegment::Index(1)];
    if path.segments() != expected {
        return Err("unexpected segments".to_string());
    }
    if path.is_root() {
        return Err("nested path is not root".to_string());
    }
    Ok(())
}

#[test]
fn path_serializes_as_rendered_string() -> TestResult {
    let path = FieldPath::root().key("questions").index(0).key("name");
    let value = serde_json::to_value(&path).map_err(|err| err.to_string())?;
    if value != serde_json::json!("questions[0].name") {
        return Err(format!("unexpected serialization {value}"));
    }
    Ok(())
}
