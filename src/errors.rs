//! Typed error definitions for hlpr_rename.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used by the renaming engine.
pub type Result<T, E = RenameError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("{0}")]
    Usage(String),

    #[error("Unknown rename style '{0}' (expected one of: {styles})", styles = crate::rename::STYLE_NAMES.join(", "))]
    UnknownStyle(String),

    #[error("Root path not found: {0}")]
    RootNotFound(PathBuf),

    #[error("Root path is not a directory: {0}")]
    RootNotDirectory(PathBuf),

    /// An I/O primitive (rename, stat, readdir) failed. `message` names the
    /// operation and the path, plus a hint when one is known; the io error
    /// text comes from `source`.
    #[error("{message}")]
    Filesystem {
        op: &'static str,
        path: PathBuf,
        message: String,
        #[source]
        source: io::Error,
    },
}

impl RenameError {
    /// Stable short identifier used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            RenameError::Usage(_) => "usage",
            RenameError::UnknownStyle(_) => "unknown_style",
            RenameError::RootNotFound(_) => "root_not_found",
            RenameError::RootNotDirectory(_) => "root_not_directory",
            RenameError::Filesystem { .. } => "filesystem",
        }
    }

    /// Underlying I/O error kind, for filesystem failures.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            RenameError::Filesystem { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
