//! Error types for the display crate.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced while loading displayable assets.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DisplayError {
    /// The asset file could not be opened or read to the end.
    ///
    /// Not-found, permission-denied and short reads all land here; the
    /// underlying [`io::Error`] is kept as the error source.
    #[error("failed to read asset {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

impl DisplayError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the asset that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } => path,
        }
    }

    /// Kind of the underlying I/O error.
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            Self::Io { source, .. } => source.kind(),
        }
    }
}

/// Result type for display operations.
pub type DisplayResult<T> = Result<T, DisplayError>;
