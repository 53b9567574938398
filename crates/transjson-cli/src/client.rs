//! Shared error type and invocation context for the CLI.

use std::fmt::{self, Display, Formatter};

use anyhow::anyhow;
use transjson_form::{
    DirectoryDownloadSink, FormError, HttpTranslationService, ServiceConfig, VALIDATION_MESSAGE,
};
use url::Url;

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

impl From<FormError> for CliError {
    fn from(error: FormError) -> Self {
        match error {
            FormError::Validation(_) => Self::validation(VALIDATION_MESSAGE),
            FormError::Busy => Self::failure(anyhow!("a translation is already in flight")),
            FormError::NotSubmitting => Self::failure(anyhow!("no translation in flight")),
        }
    }
}

/// Application context passed to command handlers.
pub(crate) struct AppContext {
    pub(crate) service: HttpTranslationService,
    pub(crate) sink: DirectoryDownloadSink,
}

impl AppContext {
    /// Build the HTTP service and download sink from validated settings.
    pub(crate) fn from_config(config: &ServiceConfig) -> CliResult<Self> {
        let service = HttpTranslationService::from_config(config)
            .map_err(CliError::failure)?;
        Ok(Self {
            service,
            sink: DirectoryDownloadSink::new(config.download_dir.clone()),
        })
    }
}

/// Parse the service URL provided to the CLI.
pub(crate) fn parse_url(input: &str) -> Result<Url, String> {
    input
        .parse::<Url>()
        .map_err(|err| format!("invalid URL '{input}': {err}"))
}
