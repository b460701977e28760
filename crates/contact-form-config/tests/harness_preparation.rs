//! Harness preparation tests for contact-form-config.
// crates/contact-form-config/tests/harness_preparation.rs
// =============================================================================
// Module: Harness Preparation Tests
// Description: Backend URL rewriting, file accept hints, and config writing.
// Purpose: Ensure prepared configs point at the local backend and stay valid.
// =============================================================================

use contact_form_config::Config;
use contact_form_config::DEFAULT_SUBMIT_ROUTE;
use contact_form_config::NoopWarningSink;
use contact_form_config::check_config_schema;
use contact_form_config::config_json_example;
use contact_form_config::local_backend_url;
use contact_form_config::write_config_file;
use serde_json::Value;
use serde_json::json;

mod common;

use common::TestResult;
use common::minimal_document;

fn example_config() -> Result<Config, String> {
    Config::from_json_str(&config_json_example(), &NoopWarningSink).map_err(|err| err.to_string())
}

#[test]
fn local_backend_url_uses_localhost_and_route() -> TestResult {
    let url = local_backend_url(5000, DEFAULT_SUBMIT_ROUTE);
    if url != "http://localhost:5000/submit" {
        return Err(format!("unexpected url {url}"));
    }
    Ok(())
}

#[test]
fn prepare_sets_backend_url() -> TestResult {
    let mut config = check_config_schema(&minimal_document()).map_err(|err| err.to_string())?;
    config.prepare_for_backend("http://localhost:6001/submit");
    if config.form_backend_url.as_deref() != Some("http://localhost:6001/submit") {
        return Err("backend url not set".to_string());
    }
    Ok(())
}

#[test]
fn prepare_overrides_accept_and_keeps_other_custom_keys() -> TestResult {
    let mut config = example_config()?;
    config.prepare_for_backend(&local_backend_url(5000, DEFAULT_SUBMIT_ROUTE));
    let attachment = config.question("attachment").ok_or("missing attachment question")?;
    let custom = attachment.custom.as_ref().ok_or("custom should exist")?;
    if custom.get("accept") != Some(&json!("*")) {
        return Err(format!("accept not overridden: {custom:?}"));
    }
    if custom.get("multiple") != Some(&json!(true)) {
        return Err(format!("multiple should be kept: {custom:?}"));
    }
    Ok(())
}

#[test]
fn prepare_creates_custom_for_file_questions_without_it() -> TestResult {
    let mut document = minimal_document();
    document["questions"] = json!([
        {"label": "Upload", "name": "upload", "type": "file", "required": false},
        {"label": "Name", "name": "name", "type": "text", "required": true}
    ]);
    let mut config = check_config_schema(&document).map_err(|err| err.to_string())?;
    config.prepare_for_backend("http://localhost:5000/submit");
    let upload = config.question("upload").ok_or("missing upload")?;
    let accept = upload.custom.as_ref().and_then(|custom| custom.get("accept"));
    if accept != Some(&json!("*")) {
        return Err("file question should accept any file".to_string());
    }
    if config.question("name").and_then(|question| question.custom.as_ref()).is_some() {
        return Err("non-file questions must not gain custom hints".to_string());
    }
    Ok(())
}

#[test]
fn written_config_round_trips_through_the_loader() -> TestResult {
    let dir = tempfile::tempdir().map_err(|err| err.to_string())?;
    let mut config = example_config()?;
    config.prepare_for_backend(&local_backend_url(5123, DEFAULT_SUBMIT_ROUTE));
    let path = write_config_file(&config, dir.path()).map_err(|err| err.to_string())?;
    if path != dir.path().join("config.json") {
        return Err(format!("unexpected output path {}", path.display()));
    }
    let text = std::fs::read_to_string(&path).map_err(|err| err.to_string())?;
    if !text.contains("\n  \"email\"") {
        return Err("output should be indented by two spaces".to_string());
    }
    let reloaded =
        Config::load_from_dir(dir.path(), &NoopWarningSink).map_err(|err| err.to_string())?;
    if reloaded != config {
        return Err("reloaded config differs from written config".to_string());
    }
    let raw: Value = serde_json::from_str(&text).map_err(|err| err.to_string())?;
    if raw.get("form_backend_url") != Some(&json!("http://localhost:5123/submit")) {
        return Err(format!("unexpected backend url in {raw}"));
    }
    Ok(())
}
