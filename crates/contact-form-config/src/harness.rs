// crates/contact-form-config/src/harness.rs
// ============================================================================
// Module: Harness Preparation
// Description: Rewrites a validated config for a local test backend.
// Purpose: Point the form at a local submit route and write it back out.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Test harnesses serve a copy of the site with its `config.json` rewritten so
//! submissions go to a local backend and file inputs accept any file type.

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde_json::Value;

use crate::config::Config;
use crate::error::ConfigError;
use crate::load::DEFAULT_CONFIG_NAME;
use crate::load::validate_path;

/// Route that accepts form submissions on a local backend.
pub const DEFAULT_SUBMIT_ROUTE: &str = "/submit";

/// Returns the submission URL of a backend listening on localhost.
#[must_use]
pub fn local_backend_url(port: u16, submit_route: &str) -> String {
    format!("http://localhost:{port}{submit_route}")
}

impl Config {
    /// Points the form at `backend_url` and lets every file input accept any
    /// file type. Other `custom` keys are kept.
    pub fn prepare_for_backend(&mut self, backend_url: &str) {
        self.form_backend_url = Some(backend_url.to_string());
        for question in self.questions.iter_mut().filter(|question| question.is_file()) {
            question
                .custom
                .get_or_insert_with(Default::default)
                .insert("accept".to_string(), Value::String("*".to_string()));
        }
    }
}

/// Writes `config` to `<dir>/config.json` as two-space indented JSON.
///
/// # Errors
///
/// Returns [`ConfigError`] when the path is too long or the write fails.
pub fn write_config_file(config: &Config, dir: &Path) -> Result<PathBuf, ConfigError> {
    let path = dir.join(DEFAULT_CONFIG_NAME);
    validate_path(&path)?;
    let payload = config.to_json_pretty().map_err(|err| ConfigError::Invalid(err.to_string()))?;
    fs::write(&path, payload).map_err(|err| ConfigError::Io(err.to_string()))?;
    Ok(path)
}
