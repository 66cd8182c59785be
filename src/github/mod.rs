// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - An HTTP client wrapper with optional bearer-token auth
// - Typed errors for not found / rate limited / other HTTP failures
// - Fetching a user profile and their owned repositories
// =============================================================================

mod client;
mod error;
mod fetch;
mod models;

pub use client::{ClientConfig, GitHubClient};
pub use error::GitHubError;
pub use fetch::{fetch_repos, fetch_user};
pub use models::{RepositorySummary, UserProfile};
