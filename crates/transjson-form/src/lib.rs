#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Upload, translate, and download workflow for JSON string tables.
//!
//! Layout:
//! - `model.rs`: upload selection, translation scope, edition, request lifecycle
//! - `controller.rs`: the form controller and its submit state machine
//! - `request.rs`: the multipart request sent to the translation service
//! - `service.rs`: the translation service seam and its HTTP implementation
//! - `download.rs`: archive delivery seam and the directory-backed sink
//! - `view.rs`: presentational projection of the form state
//! - `config.rs`: endpoint and download settings
//! - `error.rs`: error types shared by the modules above

pub mod config;
pub mod controller;
pub mod download;
pub mod error;
pub mod model;
pub mod request;
pub mod service;
pub mod view;

pub use config::{DEFAULT_BASE_URL, ServiceConfig, TRANSLATE_PATH};
pub use controller::{
    FAILURE_MESSAGE, SUCCESS_MESSAGE, SubmitOutcome, TranslateForm, VALIDATION_MESSAGE,
};
pub use download::{DOWNLOAD_FILE_NAME, DirectoryDownloadSink, DownloadSink};
pub use error::{ConfigError, DownloadError, FormError, RequestError, ValidationError};
pub use model::{FormEdition, RequestLifecycle, TranslationScope, UploadFile};
pub use request::TranslateRequest;
pub use service::{HttpTranslationService, TranslationService};
pub use view::FormView;
