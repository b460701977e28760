// crates/contact-form-cli/src/main.rs
// ============================================================================
// Module: Contact Form CLI Entry Point
// Description: Command dispatcher for config.json validation workflows.
// Purpose: Validate, normalize, and prepare contact form configs from a shell.
// Dependencies: clap, contact-form-config, serde_json, thiserror.
// ============================================================================

//! ## Overview
//! The `contact-form` CLI wraps the config library: it validates and
//! normalizes `config.json`, prepares copies for a local test backend, and
//! prints the schema and canonical example. Warnings go to stderr as JSON
//! lines; any error exits with a failure code.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use contact_form_config::Config;
use contact_form_config::DEFAULT_SUBMIT_ROUTE;
use contact_form_config::StderrWarningSink;
use contact_form_config::config_json_example;
use contact_form_config::config_schema;
use contact_form_config::local_backend_url;
use contact_form_config::write_config_file;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "contact-form", version, disable_help_subcommand = true)]
struct Cli {
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a config.json file.
    Validate(ConfigPathArgs),
    /// Print the normalized form of a config.json file.
    Normalize(ConfigPathArgs),
    /// Write a copy of a config.json file pointed at a local backend.
    Prepare(PrepareCommand),
    /// Print the JSON schema for config.json.
    Schema,
    /// Print the canonical example config.json.
    Example,
}

/// Arguments selecting the config file.
#[derive(Args, Debug)]
struct ConfigPathArgs {
    /// Config file path (defaults to `CONTACT_FORM_CONFIG`, then ./config.json).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `config prepare`.
#[derive(Args, Debug)]
struct PrepareCommand {
    /// Config file path (defaults to `CONTACT_FORM_CONFIG`, then ./config.json).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Port of the local backend.
    #[arg(long)]
    port: u16,
    /// Route that accepts submissions on the local backend.
    #[arg(long, value_name = "ROUTE", default_value = DEFAULT_SUBMIT_ROUTE)]
    submit_route: String,
    /// Directory that receives the prepared config.json.
    #[arg(long, value_name = "DIR")]
    out: PathBuf,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Commands::Config {
            command,
        } => command_config(command),
    }
}

// ============================================================================
// SECTION: Config Commands
// ============================================================================

/// Dispatches config subcommands.
fn command_config(command: ConfigCommand) -> CliResult<ExitCode> {
    match command {
        ConfigCommand::Validate(args) => command_config_validate(&args),
        ConfigCommand::Normalize(args) => command_config_normalize(&args),
        ConfigCommand::Prepare(command) => command_config_prepare(&command),
        ConfigCommand::Schema => command_config_schema(),
        ConfigCommand::Example => command_config_example(),
    }
}

/// Executes the config validation command.
fn command_config_validate(args: &ConfigPathArgs) -> CliResult<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    write_stdout_line(&validate_summary(&config))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the config normalization command.
fn command_config_normalize(args: &ConfigPathArgs) -> CliResult<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let payload = config
        .to_json_pretty()
        .map_err(|err| CliError::new(format!("failed to serialize config: {err}")))?;
    write_stdout_line(&payload).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the config preparation command.
fn command_config_prepare(command: &PrepareCommand) -> CliResult<ExitCode> {
    let mut config = load_config(command.config.as_deref())?;
    config.prepare_for_backend(&local_backend_url(command.port, &command.submit_route));
    let path = write_config_file(&config, &command.out)
        .map_err(|err| CliError::new(format!("failed to write config: {err}")))?;
    write_stdout_line(&format!("prepared config written to {}", path.display()))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Prints the config JSON schema.
fn command_config_schema() -> CliResult<ExitCode> {
    let payload = serde_json::to_string_pretty(&config_schema())
        .map_err(|err| CliError::new(format!("failed to serialize schema: {err}")))?;
    write_stdout_line(&payload).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Prints the canonical example config.
fn command_config_example() -> CliResult<ExitCode> {
    let mut stdout = std::io::stdout();
    stdout
        .write_all(config_json_example().as_bytes())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Loads and validates a config, reporting warnings on stderr.
fn load_config(path: Option<&Path>) -> CliResult<Config> {
    Config::load(path, &StderrWarningSink)
        .map_err(|err| CliError::new(format!("config load failed: {err}")))
}

/// Renders the one-line summary printed after a successful validation.
fn validate_summary(config: &Config) -> String {
    let count = config.questions.len();
    let noun = if count == 1 { "question" } else { "questions" };
    format!("config valid ({count} {noun})")
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
