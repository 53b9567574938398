//! Argument parsing and command dispatch.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use transjson_form::{DEFAULT_BASE_URL, FormEdition, ServiceConfig, TranslationScope};
use transjson_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};
use url::Url;

use crate::client::{AppContext, CliError, CliResult, parse_url};
use crate::commands::translate::handle_translate;

/// Parses CLI arguments, executes the requested command, and reports the
/// outcome. Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();

    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format.unwrap_or_else(LogFormat::infer),
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("warning: {err:#}");
    }

    match dispatch(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

async fn dispatch(cli: Cli) -> CliResult<()> {
    let config = ServiceConfig::new(
        cli.api_url,
        cli.timeout.map(Duration::from_secs),
        cli.output_dir,
    )
    .map_err(|err| CliError::validation(err.to_string()))?;
    let ctx = AppContext::from_config(&config)?;

    match cli.command {
        Command::Translate(args) => handle_translate(&ctx, args, cli.output).await,
    }
}

#[derive(Parser)]
#[command(
    name = "transjson",
    about = "Upload a JSON file for translation and download the translated archive"
)]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "TRANSJSON_API_URL",
        value_parser = parse_url,
        default_value = DEFAULT_BASE_URL,
        help = "Base URL of the translation service"
    )]
    pub(crate) api_url: Url,
    #[arg(
        long,
        global = true,
        env = "TRANSJSON_HTTP_TIMEOUT_SECS",
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Request timeout in seconds (no timeout when unset)"
    )]
    pub(crate) timeout: Option<u64>,
    #[arg(
        long,
        global = true,
        env = "TRANSJSON_OUTPUT_DIR",
        default_value = ".",
        help = "Directory receiving translated_files.zip"
    )]
    pub(crate) output_dir: PathBuf,
    #[arg(
        long = "output",
        alias = "format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Table,
        help = "Select output format for the command result"
    )]
    pub(crate) output: OutputFormat,
    #[arg(
        long,
        global = true,
        env = "TRANSJSON_LOG_LEVEL",
        default_value = DEFAULT_LOG_LEVEL,
        help = "Log filter used when RUST_LOG is unset"
    )]
    pub(crate) log_level: String,
    #[arg(long, global = true, value_parser = parse_log_format)]
    pub(crate) log_format: Option<LogFormat>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Upload a JSON file and save the translated archive.
    Translate(TranslateArgs),
}

#[derive(Args)]
pub(crate) struct TranslateArgs {
    #[arg(help = "JSON file to translate")]
    pub(crate) file: PathBuf,
    #[arg(
        long = "to",
        default_value = "",
        help = "Comma-separated target languages, e.g. \"English, Spanish\""
    )]
    pub(crate) languages: String,
    #[arg(long, value_enum, help = "Translate the entire file or specific keys")]
    pub(crate) option: Option<ScopeArg>,
    #[arg(long, help = "Comma-separated keys when --option specific")]
    pub(crate) keys: Option<String>,
    #[arg(long, value_enum, default_value_t = EditionArg::Scoped)]
    pub(crate) edition: EditionArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum ScopeArg {
    Entire,
    Specific,
}

impl From<ScopeArg> for TranslationScope {
    fn from(value: ScopeArg) -> Self {
        match value {
            ScopeArg::Entire => Self::EntireFile,
            ScopeArg::Specific => Self::SpecificKeys,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum EditionArg {
    Basic,
    Scoped,
}

impl From<EditionArg> for FormEdition {
    fn from(value: EditionArg) -> Self {
        match value {
            EditionArg::Basic => Self::Basic,
            EditionArg::Scoped => Self::Scoped,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn parse_log_format(input: &str) -> Result<LogFormat, String> {
    input.parse()
}
