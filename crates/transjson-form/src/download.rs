//! Delivery of the translated archive.
//!
//! # Design
//! - The archive always lands under one fixed name; server-provided names are ignored.
//! - Stage into a temporary file beside the target and rename it into place, so a
//!   partial archive is never visible and the staging handle is always released.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::error::DownloadError;

/// Filename given to every downloaded archive.
pub const DOWNLOAD_FILE_NAME: &str = "translated_files.zip";

/// Receives the translated archive once the service has answered.
pub trait DownloadSink {
    /// Store `payload` under `file_name` and return where it ended up.
    ///
    /// # Errors
    ///
    /// Returns a [`DownloadError`] when the payload cannot be stored.
    fn deliver(&self, file_name: &str, payload: &[u8]) -> Result<PathBuf, DownloadError>;
}

/// Writes archives into a directory on the local filesystem.
#[derive(Clone, Debug)]
pub struct DirectoryDownloadSink {
    dir: PathBuf,
}

impl DirectoryDownloadSink {
    /// Sink writing into `dir`. The directory must already exist.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DownloadSink for DirectoryDownloadSink {
    fn deliver(&self, file_name: &str, payload: &[u8]) -> Result<PathBuf, DownloadError> {
        let target = self.dir.join(file_name);

        let mut staged = NamedTempFile::new_in(&self.dir).map_err(|source| DownloadError::Io {
            operation: "download.stage",
            path: self.dir.clone(),
            source,
        })?;
        staged
            .write_all(payload)
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|source| DownloadError::Io {
                operation: "download.write",
                path: staged.path().to_path_buf(),
                source,
            })?;

        // On failure the error still owns the staged file and removes it on drop.
        staged
            .persist(&target)
            .map_err(|err| DownloadError::Io {
                operation: "download.persist",
                path: target.clone(),
                source: err.error,
            })?;

        tracing::debug!(path = %target.display(), bytes = payload.len(), "archive saved");
        Ok(target)
    }
}
