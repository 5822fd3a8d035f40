use std::fs::OpenOptions;
use std::io::prelude::*;
use std::path::{Path, PathBuf};

use super::TcmFile;
use crate::error::NotLoaded;

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error(transparent)]
    NotLoaded(#[from] NotLoaded),

    #[error("Failed to write TCM file. Path: '{}'", .1.display())]
    WriteFailed(#[source] std::io::Error, PathBuf),
}

impl SaveError {
    /// The I/O error behind a failed write, if that is what went wrong.
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            SaveError::WriteFailed(e, _) => Some(e),
            SaveError::NotLoaded(_) => None,
        }
    }
}

impl TcmFile {
    /// Writes the raw bytes as they were loaded, creating or truncating `path`.
    ///
    /// Nothing is created when `self` is not loaded.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SaveError> {
        let path = path.as_ref();
        let raw = self.raw()?;

        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .and_then(|mut file| {
                file.write_all(raw)?;
                file.flush()
            })
            .map_err(|e| SaveError::WriteFailed(e, path.to_path_buf()))?;

        tracing::debug!(path = %path.display(), bytes = raw.len(), "wrote TCM file");
        Ok(())
    }
}

/// Writes the raw bytes of `file` to `path`, returning whether it succeeded.
///
/// I/O failures are logged and reported as `Ok(false)`. An unloaded `file`
/// is an error, not a failure.
pub fn write<P: AsRef<Path>>(path: P, file: &TcmFile) -> Result<bool, NotLoaded> {
    match file.save(path) {
        Ok(()) => Ok(true),
        Err(SaveError::NotLoaded(e)) => Err(e),
        Err(e) => {
            tracing::warn!(error = %e, source = ?e.io_error(), "could not write TCM file");
            Ok(false)
        }
    }
}
