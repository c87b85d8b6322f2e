//! Sync pipeline — clone each manifest entry and materialize its
//! destination folder.
//!
//! ## Per-post contract
//!
//! 1. Fetch a fresh copy of the source repository into the run's scoped
//!    temp workspace.
//! 2. Resolve the notebook inside the clone; a missing notebook aborts
//!    the whole run.
//! 3. Recreate `<dest_root>/<slug>` from scratch (delete, then create).
//! 4. Copy the notebook to `index.ipynb`.
//! 5. Copy each conventional asset folder that exists, skipping hidden
//!    entries.
//!
//! The temp workspace brackets the whole run: one `TempDir` is created up
//! front and dropped when `run` returns, on success and error alike.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use nbsync_core::manifest;
use nbsync_core::types::{Post, INDEX_NOTEBOOK};

use crate::copy::copy_tree;
use crate::error::{io_err, SyncError};
use crate::fetch::RepoFetcher;

/// Outcome of syncing a single post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSyncResult {
    pub slug: String,
    /// Destination folder, `<dest_root>/<slug>`.
    pub dest: PathBuf,
    /// Names of the asset folders that were present and copied.
    pub assets: Vec<String>,
}

/// Run the sync pipeline: one destination folder per manifest entry.
///
/// An empty post list is a no-op: the destination root is created if
/// absent and an empty result is returned. Any clone failure, missing
/// notebook, or I/O error aborts the run; destination folders written by
/// completed iterations are left in place.
pub fn run(
    manifest_path: &Path,
    dest_root: &Path,
    fetcher: &dyn RepoFetcher,
) -> Result<Vec<PostSyncResult>, SyncError> {
    let manifest = manifest::load_at(manifest_path)?;

    std::fs::create_dir_all(dest_root).map_err(|e| io_err(dest_root, e))?;
    if manifest.posts.is_empty() {
        tracing::info!("no posts in {}", manifest_path.display());
        return Ok(Vec::new());
    }

    // One scoped clone workspace for the whole run.
    let workspace = TempDir::new().map_err(|e| io_err(std::env::temp_dir(), e))?;

    let mut results = Vec::with_capacity(manifest.posts.len());
    for post in &manifest.posts {
        tracing::info!("syncing {} from {}", post.slug, post.repo);
        let result = sync_post(post, dest_root, workspace.path(), fetcher)?;
        results.push(result);
    }
    Ok(results)
}

fn sync_post(
    post: &Post,
    dest_root: &Path,
    workspace: &Path,
    fetcher: &dyn RepoFetcher,
) -> Result<PostSyncResult, SyncError> {
    let clone_dir = workspace.join(&post.slug.0);
    fetcher.fetch(&post.repo, &clone_dir)?;

    let notebook = clone_dir.join(post.notebook_path());
    if !notebook.exists() {
        return Err(SyncError::NotebookMissing {
            repo: post.repo.clone(),
            path: post.notebook_path().to_path_buf(),
        });
    }

    // Destination is derived wholesale: delete and recreate.
    let dest = dest_root.join(&post.slug.0);
    if dest.exists() {
        std::fs::remove_dir_all(&dest).map_err(|e| io_err(&dest, e))?;
    }
    std::fs::create_dir_all(&dest).map_err(|e| io_err(&dest, e))?;

    // Rename to index.ipynb so the post URL is /<dest_root>/<slug>/.
    std::fs::copy(&notebook, dest.join(INDEX_NOTEBOOK)).map_err(|e| io_err(&notebook, e))?;

    let mut assets = Vec::new();
    for folder in post.asset_dirs() {
        let src = clone_dir.join(&folder);
        if src.is_dir() {
            copy_tree(&src, &dest.join(&folder))?;
            assets.push(folder);
        }
    }

    Ok(PostSyncResult {
        slug: post.slug.0.clone(),
        dest,
        assets,
    })
}

// ---------------------------------------------------------------------------
// Unit tests — pipeline-level properties live in tests/pipeline_sync.rs
// ---------------------------------------------------------------------------
