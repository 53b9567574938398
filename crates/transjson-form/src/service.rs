//! Translation service seam and its HTTP implementation.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::error::{ConfigError, RequestError};
use crate::request::TranslateRequest;

/// Header carrying a per-submit correlation identifier.
pub const HEADER_REQUEST_ID: &str = "x-request-id";

/// Backend that turns an uploaded document into a translated archive.
#[async_trait]
pub trait TranslationService: Send + Sync {
    /// Dispatch one request and return the archive bytes.
    ///
    /// # Errors
    ///
    /// Returns a [`RequestError`] for any transport, status, or body failure.
    async fn translate(&self, request: TranslateRequest) -> Result<Vec<u8>, RequestError>;
}

/// Posts multipart uploads to the `translate_json_files/` endpoint.
#[derive(Clone, Debug)]
pub struct HttpTranslationService {
    client: Client,
    endpoint: Url,
}

impl HttpTranslationService {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] when the endpoint cannot be derived
    /// and [`ConfigError::Client`] when the HTTP client cannot be built.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, ConfigError> {
        let endpoint = config.translate_endpoint()?;
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|source| ConfigError::Client { source })?;
        Ok(Self { client, endpoint })
    }

    /// Wrap an existing client.
    #[must_use]
    pub const fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// Endpoint receiving the uploads.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl TranslationService for HttpTranslationService {
    async fn translate(&self, request: TranslateRequest) -> Result<Vec<u8>, RequestError> {
        let endpoint = self.endpoint.to_string();
        let request_id = Uuid::new_v4().to_string();

        tracing::debug!(
            %endpoint,
            %request_id,
            file = request.file().name(),
            bytes = request.file().bytes().len(),
            "dispatching translate request"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(HEADER_REQUEST_ID, request_id.as_str())
            .multipart(request.into_multipart())
            .send()
            .await
            .map_err(|source| RequestError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status { endpoint, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| RequestError::Body {
                endpoint: endpoint.clone(),
                source,
            })?;
        tracing::debug!(%request_id, bytes = body.len(), "translate response received");
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TranslationScope, UploadFile};
    use httpmock::prelude::*;
    use std::path::PathBuf;

    fn service_for(server: &MockServer) -> HttpTranslationService {
        let config = ServiceConfig::new(
            server.base_url().parse().expect("valid URL"),
            None,
            PathBuf::from("."),
        )
        .expect("valid config");
        HttpTranslationService::from_config(&config).expect("client")
    }

    fn sample_request() -> TranslateRequest {
        TranslateRequest::scoped(
            UploadFile::new("strings.json", br#"{"hello":"world"}"#.to_vec()),
            "English, Spanish",
            TranslationScope::EntireFile,
            "",
        )
    }

    #[tokio::test]
    async fn translate_posts_multipart_and_returns_bytes() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/translate_json_files/")
                .header_exists(HEADER_REQUEST_ID)
                .body_includes("name=\"file\"; filename=\"strings.json\"")
                .body_includes("name=\"translate_to\"")
                .body_includes("English, Spanish")
                .body_includes("name=\"translation_option\"")
                .body_excludes("name=\"keys\"");
            then.status(200)
                .header("content-type", "application/zip")
                .body(b"PK\x03\x04zip");
        });

        let body = service_for(&server)
            .translate(sample_request())
            .await
            .expect("translate should succeed");

        assert_eq!(body, b"PK\x03\x04zip");
        mock.assert();
    }

    #[tokio::test]
    async fn translate_maps_error_status() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST).path("/translate_json_files/");
            then.status(500).body("boom");
        });

        let err = service_for(&server)
            .translate(sample_request())
            .await
            .expect_err("500 should fail");

        assert!(matches!(
            err,
            RequestError::Status { status, .. } if status.as_u16() == 500
        ));
        mock.assert();
    }

    #[tokio::test]
    async fn translate_maps_transport_failure() {
        let endpoint: Url = "http://127.0.0.1:9/translate_json_files/"
            .parse()
            .expect("valid URL");
        let service = HttpTranslationService::with_client(Client::new(), endpoint);

        let err = service
            .translate(sample_request())
            .await
            .expect_err("closed port should fail");
        assert!(matches!(err, RequestError::Transport { .. }));
    }
}
