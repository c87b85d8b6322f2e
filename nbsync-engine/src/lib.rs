//! # nbsync-engine
//!
//! Clone-and-copy sync pipeline for notebook blog posts.
//!
//! Call [`pipeline::run`] with a manifest path, a destination root, and a
//! [`RepoFetcher`] to materialize one destination folder per post. The
//! production fetcher is [`GitFetcher`], which shells out to `git clone
//! --depth 1`.

pub mod copy;
pub mod error;
pub mod fetch;
pub mod pipeline;

pub use error::SyncError;
pub use fetch::{GitFetcher, RepoFetcher};
pub use pipeline::{run, PostSyncResult};
