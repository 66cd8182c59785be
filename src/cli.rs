// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The CLI is intentionally tiny:
//   gh-profile-md <username> [--out PATH]
//
// Everything else (token, API host, verbosity) is optional configuration
// that has a sensible default.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Option<T>: For values the user may leave out
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

/// Default file name for the generated document
pub const DEFAULT_OUT: &str = "GITHUB_USER_INFO.md";

/// Public GitHub REST API host
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug, Clone)]
#[command(
    name = "gh-profile-md",
    version,
    about = "Generate a GitHub user info markdown",
    long_about = "gh-profile-md fetches a GitHub user's public profile and repositories \
                  and writes a Markdown summary: profile details, stats, latest activity \
                  and the top repositories by stars."
)]
pub struct Cli {
    /// GitHub username (e.g., torvalds)
    ///
    /// This is a positional argument (required, no flag needed)
    pub username: String,

    /// Output markdown file path
    ///
    /// An existing file at this path is overwritten
    #[arg(long, default_value = DEFAULT_OUT)]
    pub out: PathBuf,

    /// Personal access token for higher rate limits
    ///
    /// Read from the GH_TOKEN environment variable when not given
    #[arg(long, env = "GH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Base URL of the GitHub REST API
    #[arg(long, default_value = DEFAULT_API_BASE, hide = true)]
    pub api_base: String,

    /// Print more diagnostics (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    // Returns the token only if it holds something
    //
    // `GH_TOKEN=` (set but empty) behaves the same as not setting it
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }
}
