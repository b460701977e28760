// crates/contact-form-config/src/load.rs
// ============================================================================
// Module: Config Loading
// Description: Resolve, read, parse, and validate config.json from disk.
// Purpose: Provide strict, fail-closed config loading with hard limits.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! The config path comes from the caller, else the `CONTACT_FORM_CONFIG`
//! environment variable, else `config.json` in the working directory. Paths,
//! file size, and encoding are checked before any JSON is parsed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde_json::Value;

use crate::config::Config;
use crate::config::ConfigValidator;
use crate::error::ConfigError;
use crate::warnings::WarningSink;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
pub const DEFAULT_CONFIG_NAME: &str = "config.json";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "CONTACT_FORM_CONFIG";
/// Maximum configuration file size in bytes.
pub const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;

// ============================================================================
// SECTION: Loading
// ============================================================================

impl Config {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading, parsing, or validation fails.
    pub fn load(path: Option<&Path>, sink: &dyn WarningSink) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        let document = read_config_document(&resolved)?;
        Ok(ConfigValidator::new(sink).config(&document)?)
    }

    /// Loads `config.json` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading, parsing, or validation fails.
    pub fn load_from_dir(dir: &Path, sink: &dyn WarningSink) -> Result<Self, ConfigError> {
        Self::load(Some(&dir.join(DEFAULT_CONFIG_NAME)), sink)
    }

    /// Parses and validates a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_json_str(text: &str, sink: &dyn WarningSink) -> Result<Self, ConfigError> {
        let document: Value =
            serde_json::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))?;
        Ok(ConfigValidator::new(sink).config(&document)?)
    }
}

/// Reads and parses a config document without validating it.
///
/// # Errors
///
/// Returns [`ConfigError`] when the path, size, encoding, or JSON is invalid.
pub fn read_config_document(path: &Path) -> Result<Value, ConfigError> {
    validate_path(path)?;
    let bytes = fs::read(path).map_err(|err| ConfigError::Io(err.to_string()))?;
    if bytes.len() > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
    }
    let content = std::str::from_utf8(&bytes)
        .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
    serde_json::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from the caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates a path against length limits.
pub(crate) fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}
