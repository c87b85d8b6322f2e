//! Repository fetching — the trait seam and the git-backed implementation.

use std::path::Path;
use std::process::Command;

use nbsync_core::types::RepoRef;

use crate::error::{io_err, SyncError};

/// Materializes a fresh copy of a remote repository at `dest`.
///
/// The pipeline only depends on this trait; tests supply a fetcher that
/// copies from local fixture directories instead of touching the network.
pub trait RepoFetcher {
    /// Place a fresh working copy of `repo` at `dest`. `dest` does not
    /// exist yet and is owned exclusively by the caller.
    fn fetch(&self, repo: &RepoRef, dest: &Path) -> Result<(), SyncError>;
}

/// Production fetcher: shells out to `git clone --depth 1`.
///
/// Assumes a `git` binary on `$PATH` capable of cloning the hosted remote
/// over HTTPS. Zero exit status means success; anything else aborts the run.
#[derive(Debug, Default)]
pub struct GitFetcher;

impl RepoFetcher for GitFetcher {
    fn fetch(&self, repo: &RepoRef, dest: &Path) -> Result<(), SyncError> {
        tracing::debug!("cloning {} into {}", repo, dest.display());
        let status = Command::new("git")
            .args(["clone", "--depth", "1", &repo.clone_url()])
            .arg(dest)
            .status()
            .map_err(|e| io_err(dest, e))?;

        if !status.success() {
            return Err(SyncError::CloneFailed {
                repo: repo.clone(),
                status,
            });
        }
        Ok(())
    }
}
