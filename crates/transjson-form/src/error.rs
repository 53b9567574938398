//! # Design
//!
//! - Constant-message errors; context lives in fields, never in the message.
//! - Everything after dispatch is a `RequestError`, so callers can collapse the
//!   whole family into a single user-facing failure.
//! - Preserve source errors for logs.

use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors surfaced by the form controller before any network call.
#[derive(Debug, Error)]
pub enum FormError {
    /// Required inputs are missing.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A submission is already in flight.
    #[error("submission already in flight")]
    Busy,
    /// A result was reported while no submission was in flight.
    #[error("no submission in flight")]
    NotSubmitting,
}

/// Local input validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The file or the target languages were not provided.
    #[error("missing file or languages")]
    MissingInput {
        /// No file has been selected.
        missing_file: bool,
        /// The target language text is empty.
        missing_languages: bool,
    },
}

/// Failures during or after dispatch of a translate request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request could not be sent or no response arrived.
    #[error("translation request transport failure")]
    Transport {
        /// Endpoint that was targeted.
        endpoint: String,
        /// Underlying client error.
        source: reqwest::Error,
    },
    /// The service answered with a non-success status.
    #[error("translation service returned an error status")]
    Status {
        /// Endpoint that was targeted.
        endpoint: String,
        /// Status returned by the service.
        status: StatusCode,
    },
    /// The response body could not be read.
    #[error("translation response body could not be read")]
    Body {
        /// Endpoint that was targeted.
        endpoint: String,
        /// Underlying client error.
        source: reqwest::Error,
    },
    /// The archive could not be handed to the download sink.
    #[error("translated archive could not be delivered")]
    Download(#[from] DownloadError),
}

/// Failures while delivering the translated archive.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// IO failures while staging or writing the archive.
    #[error("download io failure")]
    Io {
        /// Operation that triggered the IO failure.
        operation: &'static str,
        /// Path involved in the IO failure.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
}

/// Invalid service configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The base URL cannot address the translation service.
    #[error("invalid service base URL")]
    InvalidBaseUrl {
        /// Offending value.
        value: String,
        /// Static reason for the failure.
        reason: &'static str,
    },
    /// The HTTP client could not be initialised.
    #[error("HTTP client could not be initialised")]
    Client {
        /// Underlying client error.
        source: reqwest::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_message_is_constant() {
        let err = ValidationError::MissingInput {
            missing_file: true,
            missing_languages: false,
        };
        assert_eq!(err.to_string(), "missing file or languages");

        let wrapped = FormError::from(err);
        assert_eq!(wrapped.to_string(), "missing file or languages");
    }

    #[test]
    fn download_error_wraps_into_request_error() {
        let err = RequestError::from(DownloadError::Io {
            operation: "persist",
            path: PathBuf::from("/tmp/out.zip"),
            source: io::Error::other("disk full"),
        });
        assert!(matches!(err, RequestError::Download(_)));
        assert_eq!(err.to_string(), "translated archive could not be delivered");
    }
}
