// crates/contact-form-config/src/lib.rs
// ============================================================================
// Module: Contact Form Config Library
// Description: Canonical config.json model, validation, and artifacts.
// Purpose: Single source of truth for contact form config.json semantics.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! `contact-form-config` turns an untyped `config.json` document into a
//! validated, normalized [`Config`]. Validation is a pure function of its
//! input: it never touches the filesystem and keeps no shared state, so it is
//! safe to call from any number of threads at once.
//!
//! Failures are typed ([`SchemaError`]) and carry the path of the offending
//! field. Non-fatal findings are routed to a [`WarningSink`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod check;
pub mod config;
pub mod error;
pub mod examples;
pub(crate) mod fields;
pub mod harness;
pub mod load;
pub mod path;
pub mod schema;
pub mod warnings;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use check::check_config_schema;
pub use check::check_config_schema_with;
pub use check::is_valid_config;
pub use config::*;
pub use error::ConfigError;
pub use error::SchemaError;
pub use error::SchemaErrorKind;
pub use examples::config_json_example;
pub use fields::normalize_text;
pub use harness::DEFAULT_SUBMIT_ROUTE;
pub use harness::local_backend_url;
pub use harness::write_config_file;
pub use load::read_config_document;
pub use path::FieldPath;
pub use path::PathSegment;
pub use schema::config_schema;
pub use warnings::*;
