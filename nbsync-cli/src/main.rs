//! nbsync — notebook blog-post sync CLI.
//!
//! # Usage
//!
//! ```text
//! nbsync sync [--manifest posts.json] [--dest posts]
//! nbsync list [--manifest posts.json] [--json]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{list::ListArgs, sync::SyncArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "nbsync",
    version,
    about = "Sync notebook blog posts from external repositories into a site content directory",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Clone every manifest entry and materialize its destination folder.
    Sync(SyncArgs),

    /// Show the post descriptors declared in the manifest.
    List(ListArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Sync(args) => args.run(),
        Commands::List(args) => args.run(),
    }
}
