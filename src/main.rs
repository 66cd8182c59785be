// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Fetch the user profile, then their repositories
// 3. Render the Markdown document
// 4. Write it to disk and print a confirmation
// 5. Exit with proper code (0 = success, 1 = any error)
//
// Rust concepts used:
// - async/await: reqwest is async, so we run inside a tokio runtime
// - Result<T, E>: For error handling (T = success type, E = error type)
// - downcast_ref: To find our typed GitHub error inside an anyhow::Error
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;    // src/cli.rs - command-line parsing
mod github; // src/github/ - GitHub API client and models
mod render; // src/render/ - Markdown generation

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use github::{ClientConfig, GitHubClient, GitHubError};

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(&cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}", describe_failure(&e));
            1
        }
    };

    std::process::exit(exit_code);
}

// Sets up env_logger
//
// RUST_LOG always wins; otherwise -v picks the level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .init();
}

// This is the main application logic: fetch → render → write
//
// Nothing is written unless every request succeeded, so a failed run
// never leaves a half-finished or overwritten file behind.
async fn run(cli: &Cli) -> Result<()> {
    let config = ClientConfig::new(cli.api_base.as_str()).with_token(cli.token());
    let client = GitHubClient::new(&config)?;

    let user = github::fetch_user(&client, &cli.username).await?;
    let repos = github::fetch_repos(&client, &cli.username).await?;

    let today = chrono::Local::now().date_naive();
    let markdown = render::build_markdown(&user, &repos, today);
    log::debug!("Rendered {} bytes of Markdown", markdown.len());

    std::fs::write(&cli.out, markdown)
        .with_context(|| format!("Failed to write {}", cli.out.display()))?;

    println!("✅ Wrote {} for user '{}'", cli.out.display(), cli.username);
    Ok(())
}

// Formats an error as the single diagnostic line we print on stderr
//
// "Not found" and "rate limited" carry their own message. Other HTTP
// failures and everything else go through the generic wording.
fn describe_failure(error: &anyhow::Error) -> String {
    match error.downcast_ref::<GitHubError>() {
        Some(e) if e.is_fatal() => format!("❌ {}", e),
        Some(e) if matches!(e, GitHubError::Http { .. }) => format!("❌ HTTP error: {}", e),
        _ => format!("❌ Error: {:#}", error),
    }
}
