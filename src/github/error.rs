// src/github/error.rs
// =============================================================================
// Every way a GitHub API call can fail.
//
// Two of these are "fatal": the user does not exist (404) or we ran out of
// API quota (403 + rate limit). They carry their own message and end the
// run straight away. Everything else is reported through the generic
// error handler in main.rs.
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

// How much of an error body we keep for the diagnostic line
const BODY_SNIPPET_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum GitHubError {
    /// HTTP 404 for the requested resource
    #[error("Not found: {url}")]
    NotFound { url: String },

    /// HTTP 403 with a rate limit message in the body
    #[error("Rate limited (remaining={remaining}, reset={reset}). Provide GH_TOKEN.")]
    RateLimited { remaining: String, reset: String },

    /// Any other non-2xx response
    #[error("{status} for url: {url} - {body}")]
    Http {
        status: StatusCode,
        url: String,
        body: String,
    },

    /// The request never got a response (DNS, TLS, timeout, ...)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not the JSON we expected
    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("API base URL cannot be used for requests: {0}")]
    InvalidUrl(String),

    #[error("GH_TOKEN contains characters that are not allowed in an HTTP header")]
    InvalidToken,
}

impl GitHubError {
    // Builds an Http error, keeping only the start of the body
    //
    // Whitespace runs are collapsed first so an HTML page or pretty-printed
    // JSON still fits on one diagnostic line.
    pub fn http(status: StatusCode, url: &str, body: &str) -> Self {
        let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
        GitHubError::Http {
            status,
            url: url.to_string(),
            body: flat.chars().take(BODY_SNIPPET_CHARS).collect(),
        }
    }

    /// True for failures that terminate the run with their own message
    pub fn is_fatal(&self) -> bool {
        matches!(self, GitHubError::NotFound { .. } | GitHubError::RateLimited { .. })
    }
}
