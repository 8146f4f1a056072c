//! Command-line interface for playlist-overlap.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **compare**: Fetch playlists by URL and print their overlap analysis
//! - **serve**: Start the comparison web server
//!
//! ## Usage
//!
//! ```text
//! # Compare two playlists
//! playlist-overlap compare \
//!     https://music.yandex.ru/users/alice/playlists/1000 \
//!     https://music.yandex.ru/users/bob/playlists/1000
//!
//! # JSON output for scripting
//! playlist-overlap compare <url> <url> --format json
//!
//! # Restrict the region breakdown to specific playlists
//! playlist-overlap compare <url> <url> <url> --subset p0,p2
//!
//! # Start the web server
//! playlist-overlap serve --port 8080 --open
//! ```

use clap::{Parser, Subcommand};

pub mod compare;

#[derive(Parser)]
#[command(name = "playlist-overlap")]
#[command(version)]
#[command(about = "Compare music playlists by track overlap")]
#[command(
    long_about = "playlist-overlap fetches public playlists from the music service and computes how their track lists overlap.\n\nFor every comparison it produces:\n- A pairwise Jaccard similarity matrix with ranked top pairs\n- A Venn-region breakdown of a selected subset (up to 5 playlists)\n- The tracks common to every playlist\n- Suggested subsets worth visualizing"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare playlists by URL
    Compare(compare::CompareArgs),

    /// Start the web server
    Serve(ServeArgs),
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: String,

    /// Open browser automatically
    #[arg(long)]
    pub open: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
