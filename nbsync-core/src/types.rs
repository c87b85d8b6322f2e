//! Domain types for the posts manifest.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.
//! All types are serializable/deserializable via serde + serde_json.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Notebook filename assumed when a descriptor omits `notebook`.
pub const DEFAULT_NOTEBOOK: &str = "post.ipynb";

/// Canonical filename every synced notebook is renamed to, so each post
/// is reachable at `<dest_root>/<slug>/index.ipynb`.
pub const INDEX_NOTEBOOK: &str = "index.ipynb";

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed post identifier, used as the destination folder name
/// and URL segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slug(pub String);

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Slug {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Slug {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A hosted remote repository reference, written as `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoRef(pub String);

impl RepoRef {
    /// HTTPS clone URL for the hosted remote.
    pub fn clone_url(&self) -> String {
        format!("https://github.com/{}.git", self.0)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for RepoRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RepoRef {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// A single post descriptor from the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub slug: Slug,
    pub repo: RepoRef,
    /// Path of the notebook inside the source repository, relative to its
    /// root. Defaults to [`DEFAULT_NOTEBOOK`] when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook: Option<PathBuf>,
}

impl Post {
    /// Notebook path inside the clone, applying the default.
    pub fn notebook_path(&self) -> &Path {
        self.notebook
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_NOTEBOOK))
    }

    /// Conventionally-named asset folders to copy when present in the
    /// clone: `images`, `figures`, `data`, and `<notebook stem>_files`
    /// (the folder notebook exporters emit next to the notebook).
    pub fn asset_dirs(&self) -> Vec<String> {
        let stem = self
            .notebook_path()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "post".to_owned());
        vec![
            "images".to_owned(),
            "figures".to_owned(),
            "data".to_owned(),
            format!("{stem}_files"),
        ]
    }
}

/// Root of the posts manifest document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Manifest {
    #[serde(default)]
    pub posts: Vec<Post>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
