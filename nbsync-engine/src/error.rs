//! Error types for nbsync-engine.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

use nbsync_core::error::ManifestError;
use nbsync_core::types::RepoRef;

/// All errors that can arise from sync operations.
///
/// Every variant is fatal for the whole run: there is no per-post skip,
/// retry, or partial-success mode.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from manifest loading.
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// The external clone command exited non-zero.
    #[error("git clone failed for '{repo}' ({status})")]
    CloneFailed { repo: RepoRef, status: ExitStatus },

    /// The descriptor's notebook was absent in the cloned source.
    #[error("notebook not found: {repo}/{}", path.display())]
    NotebookMissing { repo: RepoRef, path: PathBuf },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
