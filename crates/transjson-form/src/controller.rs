//! Translate form controller.
//!
//! # Design
//! - The controller owns every input and the request lifecycle; nothing is global.
//! - One typed handler per field, each mutating only that field (plus the
//!   documented notice clearing).
//! - Submission is split into `begin_submit` / `complete_submit` so a caller
//!   driving its own event loop sees the `Submitting` state and cannot start a
//!   second request while one is in flight. `submit` runs both halves.

use std::path::PathBuf;

use crate::download::{DOWNLOAD_FILE_NAME, DownloadSink};
use crate::error::{FormError, RequestError, ValidationError};
use crate::model::{FormEdition, RequestLifecycle, TranslationScope, UploadFile};
use crate::request::TranslateRequest;
use crate::service::TranslationService;

/// Notice shown when the file or the target languages are missing.
pub const VALIDATION_MESSAGE: &str = "Please upload a file and enter target languages.";
/// Notice shown for every failure after dispatch.
pub const FAILURE_MESSAGE: &str = "An error occurred during translation.";
/// Notice shown once the archive has been delivered.
pub const SUCCESS_MESSAGE: &str = "File translated and ready for download!";

/// Result of a dispatched submission.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The archive was saved.
    Downloaded {
        /// Location of the saved archive.
        path: PathBuf,
    },
    /// Dispatch or delivery failed. The form shows [`FAILURE_MESSAGE`].
    Failed {
        /// Detailed cause, kept for logs.
        error: RequestError,
    },
}

/// Form state for one upload-translate-download session.
#[derive(Debug, Default)]
pub struct TranslateForm {
    edition: FormEdition,
    file: Option<UploadFile>,
    target_languages: String,
    scope: TranslationScope,
    key_list: String,
    lifecycle: RequestLifecycle,
    validation_notice: Option<&'static str>,
}

impl TranslateForm {
    /// Empty form for the given edition.
    #[must_use]
    pub fn new(edition: FormEdition) -> Self {
        Self {
            edition,
            ..Self::default()
        }
    }

    /// Replace the selected file. Dismisses a shown success notice.
    pub fn select_file(&mut self, file: UploadFile) {
        if !file.has_json_extension() {
            tracing::warn!(file = file.name(), "selected file does not have a .json extension");
        }
        self.file = Some(file);
        if self.lifecycle == RequestLifecycle::Succeeded {
            self.lifecycle = RequestLifecycle::Idle;
        }
    }

    /// Store the comma-separated target languages verbatim.
    pub fn set_target_languages(&mut self, text: impl Into<String>) {
        self.target_languages = text.into();
    }

    /// Switch the translation scope. A change clears the key list.
    /// Ignored by the basic edition.
    pub fn set_translation_scope(&mut self, scope: TranslationScope) {
        if !self.edition.supports_scope() {
            tracing::debug!(scope = scope.as_value(), "basic edition ignores scope changes");
            return;
        }
        if self.scope != scope {
            self.scope = scope;
            self.key_list.clear();
        }
    }

    /// Store the comma-separated key names verbatim.
    pub fn set_key_list(&mut self, text: impl Into<String>) {
        self.key_list = text.into();
    }

    /// Validate the inputs and enter `Submitting`, returning the request to dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Busy`] while a request is in flight, leaving the state
    /// untouched, and [`FormError::Validation`] when the file or languages are
    /// missing, in which case the lifecycle is `Idle` and the validation notice shown.
    pub fn begin_submit(&mut self) -> Result<TranslateRequest, FormError> {
        if self.lifecycle.is_loading() {
            return Err(FormError::Busy);
        }
        self.validation_notice = None;
        self.lifecycle = RequestLifecycle::Idle;

        let missing_languages = self.target_languages.is_empty();
        let Some(file) = self.file.clone().filter(|_| !missing_languages) else {
            self.validation_notice = Some(VALIDATION_MESSAGE);
            return Err(ValidationError::MissingInput {
                missing_file: self.file.is_none(),
                missing_languages,
            }
            .into());
        };

        let request = if self.edition.supports_scope() {
            TranslateRequest::scoped(
                file,
                self.target_languages.clone(),
                self.scope,
                self.key_list.clone(),
            )
        } else {
            TranslateRequest::basic(file, self.target_languages.clone())
        };

        tracing::info!(
            file = request.file().name(),
            edition = ?self.edition,
            scope = self.scope.as_value(),
            "translation submitted"
        );
        self.lifecycle = RequestLifecycle::Submitting;
        Ok(request)
    }

    /// Record the result of a dispatched request and leave `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NotSubmitting`] when no request is in flight; the
    /// state is left untouched.
    pub fn complete_submit(
        &mut self,
        result: Result<PathBuf, RequestError>,
    ) -> Result<SubmitOutcome, FormError> {
        if !self.lifecycle.is_loading() {
            tracing::debug!(state = self.lifecycle.as_str(), "ignoring result outside submit");
            return Err(FormError::NotSubmitting);
        }
        Ok(match result {
            Ok(path) => {
                tracing::info!(path = %path.display(), "translation downloaded");
                self.lifecycle = RequestLifecycle::Succeeded;
                SubmitOutcome::Downloaded { path }
            }
            Err(error) => {
                tracing::warn!(error = ?error, "translation failed");
                self.lifecycle = RequestLifecycle::Failed(FAILURE_MESSAGE.to_string());
                SubmitOutcome::Failed { error }
            }
        })
    }

    /// Run one full submission: validate, dispatch exactly one request, and
    /// deliver the archive as [`DOWNLOAD_FILE_NAME`].
    ///
    /// # Errors
    ///
    /// Returns the [`FormError`] from [`Self::begin_submit`]; nothing is
    /// dispatched in that case. Request failures are reported through
    /// [`SubmitOutcome::Failed`].
    pub async fn submit<S, D>(&mut self, service: &S, sink: &D) -> Result<SubmitOutcome, FormError>
    where
        S: TranslationService + ?Sized,
        D: DownloadSink + ?Sized,
    {
        let request = self.begin_submit()?;
        let result = service
            .translate(request)
            .await
            .and_then(|payload| {
                sink.deliver(DOWNLOAD_FILE_NAME, &payload)
                    .map_err(RequestError::from)
            });
        self.complete_submit(result)
    }

    /// Active edition.
    #[must_use]
    pub const fn edition(&self) -> FormEdition {
        self.edition
    }

    /// Selected file, if any.
    #[must_use]
    pub const fn file(&self) -> Option<&UploadFile> {
        self.file.as_ref()
    }

    /// Target language text as entered.
    #[must_use]
    pub fn target_languages(&self) -> &str {
        &self.target_languages
    }

    /// Current translation scope.
    #[must_use]
    pub const fn scope(&self) -> TranslationScope {
        self.scope
    }

    /// Key list text as entered.
    #[must_use]
    pub fn key_list(&self) -> &str {
        &self.key_list
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn lifecycle(&self) -> &RequestLifecycle {
        &self.lifecycle
    }

    /// Error notice currently shown, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.lifecycle {
            RequestLifecycle::Failed(message) => Some(message.as_str()),
            _ => self.validation_notice,
        }
    }

    /// Success notice currently shown, if any.
    #[must_use]
    pub const fn success_message(&self) -> Option<&'static str> {
        match self.lifecycle {
            RequestLifecycle::Succeeded => Some(SUCCESS_MESSAGE),
            _ => None,
        }
    }
}
