//! `nbsync list` — show the manifest's post descriptors.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use nbsync_core::{manifest, types::Post};

/// Arguments for `nbsync list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Path to the posts manifest.
    #[arg(long, default_value = "posts.json")]
    pub manifest: PathBuf,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct PostRow {
    #[tabled(rename = "slug")]
    slug: String,
    #[tabled(rename = "repo")]
    repo: String,
    #[tabled(rename = "notebook")]
    notebook: String,
}

#[derive(Serialize)]
struct PostJson {
    slug: String,
    repo: String,
    notebook: String,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let manifest = manifest::load_at(&self.manifest)
            .with_context(|| format!("failed to load manifest '{}'", self.manifest.display()))?;

        if self.json {
            print_json(&manifest.posts)?;
            return Ok(());
        }

        if manifest.posts.is_empty() {
            println!("No posts found in {}", self.manifest.display());
            return Ok(());
        }

        println!(
            "{} — {} post(s)",
            self.manifest.display().to_string().bold(),
            manifest.posts.len()
        );
        let rows: Vec<PostRow> = manifest.posts.iter().map(row).collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}

fn row(post: &Post) -> PostRow {
    PostRow {
        slug: post.slug.0.clone(),
        repo: post.repo.0.clone(),
        notebook: post.notebook_path().display().to_string(),
    }
}

fn print_json(posts: &[Post]) -> Result<()> {
    let payload: Vec<PostJson> = posts
        .iter()
        .map(|post| PostJson {
            slug: post.slug.0.clone(),
            repo: post.repo.0.clone(),
            notebook: post.notebook_path().display().to_string(),
        })
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize post list JSON")?
    );
    Ok(())
}
