//! Form inputs and request lifecycle.
//!
//! # Design
//! - Keep text inputs verbatim; the service owns parsing of language and key lists.
//! - The lifecycle is a single enum so exactly one state is active at a time.

use std::fmt;
use std::io;
use std::path::Path;

/// File chosen for upload, held in memory for the form session.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    name: String,
    bytes: Vec<u8>,
}

impl UploadFile {
    /// Wrap an in-memory payload under the given filename.
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, keeping its final path component as the upload name.
    ///
    /// # Errors
    ///
    /// Returns the underlying IO error when the file cannot be read.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
        Ok(Self { name, bytes })
    }

    /// Filename sent with the upload.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw payload.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Whether the filename matches the `.json` accept hint. Advisory only.
    #[must_use]
    pub fn has_json_extension(&self) -> bool {
        Path::new(&self.name)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }

    pub(crate) fn into_parts(self) -> (String, Vec<u8>) {
        (self.name, self.bytes)
    }
}

impl fmt::Debug for UploadFile {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("UploadFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Portion of the JSON document to translate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TranslationScope {
    /// Translate every string in the document.
    #[default]
    EntireFile,
    /// Translate only the keys listed in the key list.
    SpecificKeys,
}

impl TranslationScope {
    /// Value sent as the `translation_option` field.
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::EntireFile => "entire",
            Self::SpecificKeys => "specific",
        }
    }

    /// Label shown next to the option.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EntireFile => "Translate Entire File",
            Self::SpecificKeys => "Translate Specific Keys",
        }
    }
}

/// Form variant. `Basic` is a strict subset of `Scoped`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormEdition {
    /// File and target languages only.
    Basic,
    /// Adds the translation scope and key list.
    #[default]
    Scoped,
}

impl FormEdition {
    /// Whether the edition exposes the scope selector.
    #[must_use]
    pub const fn supports_scope(self) -> bool {
        matches!(self, Self::Scoped)
    }
}

/// State of the submit-to-completion cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestLifecycle {
    /// Nothing submitted, or the last result was dismissed.
    #[default]
    Idle,
    /// A request is in flight.
    Submitting,
    /// The archive was delivered.
    Succeeded,
    /// The request failed; carries the user-facing message.
    Failed(String),
}

impl RequestLifecycle {
    /// Whether the loading indicator is engaged.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Short state name for logs and structured output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}
