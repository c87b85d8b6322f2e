//! Posts manifest loading.
//!
//! The manifest is a JSON document (`posts.json` by convention) holding an
//! ordered list of post descriptors. It is read once at startup and never
//! written back; the destination tree is derived from it wholesale.

use std::path::Path;

use crate::error::ManifestError;
use crate::types::Manifest;

/// Load the manifest at `path`.
///
/// Returns `ManifestError::ManifestNotFound` if absent,
/// `ManifestError::Parse` (with path + line context) if malformed JSON.
pub fn load_at(path: &Path) -> Result<Manifest, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| ManifestError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
