// crates/contact-form-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for argument parsing and summary rendering.
// Purpose: Ensure the command surface parses as documented.
// Dependencies: contact-form-cli main helpers
// ============================================================================

//! ## Overview
//! Validates clap parsing of the `config` subcommands and the validation
//! summary line.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use clap::Parser;
use contact_form_config::check_config_schema;
use serde_json::json;

use super::Cli;
use super::Commands;
use super::ConfigCommand;
use super::validate_summary;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn parse_config_command(args: &[&str]) -> ConfigCommand {
    let cli = Cli::try_parse_from(args).expect("parse cli");
    match cli.command {
        Commands::Config {
            command,
        } => command,
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn validate_accepts_optional_config_path() {
    match parse_config_command(&["contact-form", "config", "validate", "--config", "site.json"]) {
        ConfigCommand::Validate(args) => {
            assert_eq!(args.config, Some(PathBuf::from("site.json")));
        }
        other => panic!("unexpected command {other:?}"),
    }
    match parse_config_command(&["contact-form", "config", "validate"]) {
        ConfigCommand::Validate(args) => assert!(args.config.is_none()),
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn prepare_defaults_submit_route() {
    let command = parse_config_command(&[
        "contact-form",
        "config",
        "prepare",
        "--port",
        "5001",
        "--out",
        "web_src",
    ]);
    match command {
        ConfigCommand::Prepare(prepare) => {
            assert_eq!(prepare.port, 5001);
            assert_eq!(prepare.submit_route, "/submit");
            assert_eq!(prepare.out, PathBuf::from("web_src"));
            assert!(prepare.config.is_none());
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn prepare_requires_port_and_out() {
    assert!(Cli::try_parse_from(["contact-form", "config", "prepare", "--out", "dir"]).is_err());
    assert!(Cli::try_parse_from(["contact-form", "config", "prepare", "--port", "1"]).is_err());
}

#[test]
fn prepare_rejects_out_of_range_port() {
    let result = Cli::try_parse_from([
        "contact-form",
        "config",
        "prepare",
        "--port",
        "70000",
        "--out",
        "dir",
    ]);
    assert!(result.is_err());
}

#[test]
fn validate_summary_pluralizes_question_count() {
    let one = check_config_schema(&json!({
        "email": "foo@bar.com",
        "title": "Contact Us",
        "subject": "Support",
        "questions": [{"label": "Name", "name": "name", "type": "text", "required": true}]
    }))
    .unwrap();
    assert_eq!(validate_summary(&one), "config valid (1 question)");

    let mut none = one;
    none.questions.clear();
    assert_eq!(validate_summary(&none), "config valid (0 questions)");
}
