// src/github/fetch.rs
// =============================================================================
// This module fetches a user's profile and repositories from the GitHub API.
//
// Strategy:
// - One request for the profile: GET /users/{username}
// - Paginated requests for repositories: GET /users/{username}/repos
//   100 per page, until a page comes back empty or we hit the page cap
//
// Everything runs one request at a time; each call waits for its response
// before the next one goes out.
//
// Rust concepts:
// - async functions: For network I/O
// - Result: For error handling
// - loop / break: For pagination
// =============================================================================

use super::client::GitHubClient;
use super::error::GitHubError;
use super::models::{RepositorySummary, UserProfile};

/// Repositories requested per page (the API maximum)
pub const PER_PAGE: u32 = 100;

/// Safety stop for extremely large accounts (at most 1000 repositories)
pub const MAX_PAGES: u32 = 10;

// Fetches a single user profile
//
// Parameters:
//   client: configured API client
//   username: GitHub login (e.g., "torvalds")
//
// Returns: the profile, or the client's error unchanged
pub async fn fetch_user(client: &GitHubClient, username: &str) -> Result<UserProfile, GitHubError> {
    log::info!("Fetching profile for '{}'", username);
    client.get_json(&["users", username], &[]).await
}

// Fetches all "owner" repositories of a user, most recently updated first
//
// The order is whatever the API returns for sort=updated; we don't
// re-sort anything here.
pub async fn fetch_repos(client: &GitHubClient, username: &str) -> Result<Vec<RepositorySummary>, GitHubError> {
    log::info!("Fetching repositories for '{}'", username);

    let mut repos = Vec::new();

    for page in 1..=MAX_PAGES {
        let query = [
            ("per_page", PER_PAGE.to_string()),
            ("page", page.to_string()),
            ("type", "owner".to_string()),
            ("sort", "updated".to_string()),
        ];

        let batch: Vec<RepositorySummary> = client.get_json(&["users", username, "repos"], &query).await?;
        log::debug!("Page {} returned {} repositories", page, batch.len());

        if batch.is_empty() {
            break;
        }
        repos.extend(batch);
    }

    log::info!("Fetched {} repositories", repos.len());
    Ok(repos)
}
