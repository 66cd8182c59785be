// src/github/client.rs
// =============================================================================
// A thin wrapper around reqwest for talking to the GitHub REST API.
//
// Key functionality:
// - Builds one HTTP client per run with the headers GitHub expects
// - Attaches `Authorization: Bearer <token>` when a token is configured
// - Turns HTTP status codes into GitHubError variants
// - Deserializes successful JSON bodies into our models
//
// There are no retries: every failure is handed straight back to the caller.
//
// Rust concepts:
// - Generics: get_json::<T>() works for any type serde can deserialize
// - Builder pattern: reqwest::Client::builder()
// =============================================================================

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

use super::error::GitHubError;

/// Media type for the versioned GitHub REST API
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// GitHub refuses requests that don't identify themselves
const CLIENT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Everything the client needs to know before it sends a request.
//
// The token is passed in explicitly (from the CLI / GH_TOKEN) instead of
// being looked up from the environment deep inside the request code.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        ClientConfig {
            api_base: api_base.into(),
            token: None,
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.map(str::to_string);
        self
    }
}

#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    api_base: Url,
}

impl GitHubClient {
    pub fn new(config: &ClientConfig) -> Result<Self, GitHubError> {
        let api_base = Url::parse(&config.api_base)
            .map_err(|e| GitHubError::InvalidUrl(format!("{}: {}", config.api_base, e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| GitHubError::InvalidToken)?;
            // Keeps the token out of Debug output
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(GitHubClient { http, api_base })
    }

    // Builds `<api_base>/<seg>/<seg>...`
    //
    // Segments are percent-encoded, so a username can never escape its
    // place in the path.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, GitHubError> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| GitHubError::InvalidUrl(self.api_base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issues a GET and deserializes the JSON body of a 2xx response
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<T, GitHubError> {
        let url = self.endpoint(segments)?;
        log::debug!("GET {} {:?}", url, query);

        let response = self.http.get(url.clone()).query(query).send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        check_status(status, &headers, &body, url.as_str())?;

        serde_json::from_str(&body).map_err(|source| GitHubError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

// Maps a response status to success or one of our error variants
//
// Order matters: a 403 is only "rate limited" when GitHub says so in the
// body, otherwise it is an ordinary HTTP error.
fn check_status(status: StatusCode, headers: &HeaderMap, body: &str, url: &str) -> Result<(), GitHubError> {
    if status == StatusCode::NOT_FOUND {
        return Err(GitHubError::NotFound { url: url.to_string() });
    }

    if status == StatusCode::FORBIDDEN && body.to_lowercase().contains("rate limit") {
        return Err(GitHubError::RateLimited {
            remaining: header_or_unknown(headers, "x-ratelimit-remaining"),
            reset: header_or_unknown(headers, "x-ratelimit-reset"),
        });
    }

    if !status.is_success() {
        return Err(GitHubError::http(status, url, body));
    }

    Ok(())
}

fn header_or_unknown(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("?")
        .to_string()
}
