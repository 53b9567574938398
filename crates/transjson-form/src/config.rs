//! Translation service settings.
//!
//! # Design
//! - The endpoint host is configuration, never a literal at the call site.
//! - No timeout unless one is configured; an unresponsive backend blocks the submit.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
/// Path of the translate endpoint, relative to the base URL.
pub const TRANSLATE_PATH: &str = "translate_json_files/";

/// Where to send translate requests and where to put the archive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Base URL of the translation service.
    pub base_url: Url,
    /// Optional request timeout.
    pub timeout: Option<Duration>,
    /// Directory receiving the downloaded archive.
    pub download_dir: PathBuf,
}

impl ServiceConfig {
    /// Validate and assemble a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the URL is not an `http` or
    /// `https` base URL.
    pub fn new(
        base_url: Url,
        timeout: Option<Duration>,
        download_dir: impl Into<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                value: base_url.to_string(),
                reason: "scheme must be http or https",
            });
        }
        Ok(Self {
            base_url,
            timeout,
            download_dir: download_dir.into(),
        })
    }

    /// Absolute URL of the translate endpoint.
    ///
    /// A base URL with a path prefix keeps it, so `http://host/api` targets
    /// `http://host/api/translate_json_files/`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the endpoint cannot be joined.
    pub fn translate_endpoint(&self) -> Result<Url, ConfigError> {
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(TRANSLATE_PATH)
            .map_err(|_| ConfigError::InvalidBaseUrl {
                value: self.base_url.to_string(),
                reason: "translate endpoint could not be joined",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(input: &str) -> Url {
        Url::parse(input).expect("valid URL")
    }

    #[test]
    fn default_targets_local_service() {
        let config = ServiceConfig::new(url(DEFAULT_BASE_URL), None, ".").expect("valid config");
        assert_eq!(
            config.translate_endpoint().expect("endpoint").as_str(),
            "http://localhost:8000/translate_json_files/"
        );
        assert!(config.timeout.is_none());
    }

    #[test]
    fn base_path_prefix_is_preserved() {
        let config = ServiceConfig::new(url("https://example.test/api"), None, ".")
            .expect("valid config");
        assert_eq!(
            config.translate_endpoint().expect("endpoint").as_str(),
            "https://example.test/api/translate_json_files/"
        );
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = ServiceConfig::new(url("ftp://example.test"), None, ".")
            .expect_err("ftp should be rejected");
        assert!(matches!(
            err,
            ConfigError::InvalidBaseUrl {
                reason: "scheme must be http or https",
                ..
            }
        ));
    }
}
