//! Per-file error type

use std::path::{Path, PathBuf};

/// A failure while rewriting a single file.
///
/// Carries the offending path and the underlying I/O cause. These never
/// abort a run; they are recorded in the report and processing continues.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl RewriteError {
    pub fn path(&self) -> &Path {
        match self {
            RewriteError::Read { path, .. } | RewriteError::Write { path, .. } => path,
        }
    }

    /// The underlying cause, without the path.
    pub fn cause(&self) -> String {
        match self {
            RewriteError::Read { source, .. } | RewriteError::Write { source, .. } => {
                source.to_string()
            }
        }
    }
}
