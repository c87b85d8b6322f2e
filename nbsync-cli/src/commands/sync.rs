//! `nbsync sync` — clone and copy every post in the manifest.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use nbsync_engine::{pipeline, GitFetcher, PostSyncResult};

/// Arguments for `nbsync sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Path to the posts manifest.
    #[arg(long, default_value = "posts.json")]
    pub manifest: PathBuf,

    /// Destination content root; one folder per slug is created inside it.
    #[arg(long, default_value = "posts")]
    pub dest: PathBuf,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let results = pipeline::run(&self.manifest, &self.dest, &GitFetcher)
            .with_context(|| format!("sync failed for manifest '{}'", self.manifest.display()))?;

        if results.is_empty() {
            println!("No posts found in {}", self.manifest.display());
            return Ok(());
        }

        for result in &results {
            print_result(result);
        }
        println!(
            "{} Synced {} post(s) into {}",
            "✓".green().bold(),
            results.len(),
            self.dest.display()
        );
        Ok(())
    }
}

fn print_result(result: &PostSyncResult) {
    if result.assets.is_empty() {
        println!("  ✎  {} → {}", result.slug, result.dest.display());
    } else {
        println!(
            "  ✎  {} → {} (assets: {})",
            result.slug,
            result.dest.display(),
            result.assets.join(", ")
        );
    }
}
