// crates/message-catalog-gen/src/main.rs
// ============================================================================
// Module: Message Catalog Generator CLI
// Description: Command dispatcher for catalog generation and drift checks.
// Purpose: Generate, verify, render, and inspect compiled message catalogs.
// Dependencies: clap, message-catalog-gen, serde_json, thiserror, tracing-subscriber
// ============================================================================

//! ## Overview
//! `message-catalog-gen` wraps the generator library for projects that check
//! generated catalogs into source control instead of compiling them from a
//! build script. `generate` and `check` read the table list from
//! `message-catalog.toml`; `render` and `inspect` work on a single table.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use message_catalog_gen::CatalogGenerator;
use message_catalog_gen::DEFAULT_RUNTIME_PATH;
use message_catalog_gen::config::GeneratorConfig;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "MESSAGE_CATALOG_LOG";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Message catalog generator.
#[derive(Parser, Debug)]
#[command(name = "message-catalog-gen", version, about = "Compile TSV message tables into Rust")]
struct Cli {
    /// Enable debug logging (overridden by `MESSAGE_CATALOG_LOG`).
    #[arg(long, short, action = ArgAction::SetTrue, global = true)]
    verbose: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Write every configured catalog to its output file.
    Generate(ConfigArgs),
    /// Verify configured outputs match freshly generated code.
    Check(ConfigArgs),
    /// Print the generated code for one table to stdout.
    Render(RenderCommand),
    /// Print the parsed table and derived enumerations as JSON.
    Inspect(InspectCommand),
}

/// Arguments shared by config-driven commands.
#[derive(Args, Debug)]
struct ConfigArgs {
    /// Path to `message-catalog.toml` (overrides `MESSAGE_CATALOG_CONFIG`).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// Arguments for `render`.
#[derive(Args, Debug)]
struct RenderCommand {
    /// Definition table to compile.
    #[arg(long, value_name = "FILE")]
    input: PathBuf,
    /// Runtime crate path used in generated code.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_RUNTIME_PATH)]
    runtime_path: String,
}

/// Arguments for `inspect`.
#[derive(Args, Debug)]
struct InspectCommand {
    /// Definition table to parse.
    #[arg(long, value_name = "FILE")]
    input: PathBuf,
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
    /// Constructs a new [`CliError`].
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
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(cli.command) {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Installs the stderr log subscriber.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Executes the selected command.
fn run(command: Commands) -> CliResult<ExitCode> {
    match command {
        Commands::Generate(args) => command_generate(&args),
        Commands::Check(args) => command_check(&args),
        Commands::Render(command) => command_render(&command),
        Commands::Inspect(command) => command_inspect(&command),
    }
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Executes catalog generation for every configured table.
fn command_generate(args: &ConfigArgs) -> CliResult<ExitCode> {
    let config = load_config(args)?;
    for (source, output) in configured_tables(&config) {
        let contents = render_table(&source, &config.runtime_path)?;
        write_output(&output, &contents)?;
        tracing::info!(source = %source.display(), output = %output.display(), "catalog generated");
        write_stdout_line(&format!("generated {}", output.display()))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes drift verification for every configured table.
fn command_check(args: &ConfigArgs) -> CliResult<ExitCode> {
    let config = load_config(args)?;
    for (source, output) in configured_tables(&config) {
        let contents = render_table(&source, &config.runtime_path)?;
        check_output(&output, &contents)?;
        tracing::debug!(output = %output.display(), "catalog up to date");
    }
    Ok(ExitCode::SUCCESS)
}

/// Prints generated code for one table.
fn command_render(command: &RenderCommand) -> CliResult<ExitCode> {
    let contents = render_table(&command.input, &command.runtime_path)?;
    write_stdout_bytes(contents.as_bytes())
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Prints the parsed table and derived schema as pretty JSON.
fn command_inspect(command: &InspectCommand) -> CliResult<ExitCode> {
    let generator = CatalogGenerator::load(&command.input)
        .map_err(|err| CliError::new(format!("inspect failed: {err}")))?;
    let json = serde_json::to_string_pretty(&generator.summary())
        .map_err(|err| CliError::new(format!("inspect failed: {err}")))?;
    write_stdout_line(&json).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Generation Helpers
// ============================================================================

/// Loads generator configuration for config-driven commands.
fn load_config(args: &ConfigArgs) -> CliResult<GeneratorConfig> {
    GeneratorConfig::load(args.config.as_deref()).map_err(|err| CliError::new(err.to_string()))
}

/// Returns resolved `(source, output)` pairs in configuration order.
fn configured_tables(config: &GeneratorConfig) -> Vec<(PathBuf, PathBuf)> {
    config
        .tables
        .iter()
        .map(|table| (config.resolve(&table.source), config.resolve(&table.output)))
        .collect()
}

/// Compiles one definition table to Rust source.
fn render_table(source: &Path, runtime_path: &str) -> CliResult<String> {
    let generator = CatalogGenerator::load(source)
        .and_then(|generator| generator.with_runtime_path(runtime_path))
        .map_err(|err| CliError::new(format!("generation failed: {err}")))?;
    Ok(generator.render())
}

/// Writes generated output to disk with a temporary file.
fn write_output(path: &Path, contents: &str) -> CliResult<()> {
    let io_error = |err: std::io::Error| CliError::new(format!("io failed: {err}"));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let temp_path = path.with_extension("tmp");
    let mut file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(io_error)?;
    file.write_all(contents.as_bytes()).map_err(io_error)?;
    file.sync_all().map_err(io_error)?;
    fs::rename(&temp_path, path).map_err(io_error)?;
    Ok(())
}

/// Checks generated output against the on-disk file.
fn check_output(path: &Path, contents: &str) -> CliResult<()> {
    let existing = fs::read_to_string(path)
        .map_err(|err| CliError::new(format!("io failed: {}: {err}", path.display())))?;
    if existing != contents {
        return Err(CliError::new(format!(
            "generated catalog {} is out of date; run `message-catalog-gen generate`",
            path.display()
        )));
    }
    Ok(())
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
