//! nbsync core library — domain types, manifest loading, errors.
//!
//! Public API surface:
//! - [`types`] — newtypes and the post descriptor structs
//! - [`error`] — [`ManifestError`]
//! - [`manifest`] — load the posts manifest from disk

pub mod error;
pub mod manifest;
pub mod types;

pub use error::ManifestError;
pub use types::{Manifest, Post, RepoRef, Slug, DEFAULT_NOTEBOOK, INDEX_NOTEBOOK};
