// src/github/models.rs
// =============================================================================
// The two records we read from the GitHub REST API.
//
// GitHub returns `null` for lots of profile fields (no name, no location,
// private email...), so almost everything is an Option or has a default.
// Fields we don't list here are simply ignored by serde.
// =============================================================================

use serde::{Deserialize, Deserializer};

// `#[serde(default)]` only covers a missing key; this also maps `null`
// to the field's default value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A user profile from `GET /users/{username}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub login: String,
    pub name: Option<String>,
    pub location: Option<String>,
    /// Website / portfolio link
    pub blog: Option<String>,
    pub email: Option<String>,
    /// ISO-8601 timestamp, e.g. "2011-01-25T18:44:36Z"
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub public_repos: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub followers: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub following: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub public_gists: u64,
    pub html_url: Option<String>,
}

/// One entry of `GET /users/{username}/repos`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositorySummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub html_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stargazers_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub forks_count: u64,
    pub description: Option<String>,
    /// True when the repository was forked from another one
    #[serde(default, deserialize_with = "null_as_default")]
    pub fork: bool,
    pub pushed_at: Option<String>,
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_with_nulls() {
        let json = r#"{
            "login": "octocat",
            "id": 583231,
            "name": null,
            "location": "San Francisco",
            "blog": "",
            "email": null,
            "created_at": "2011-01-25T18:44:36Z",
            "public_repos": 8,
            "followers": 9000,
            "following": 9,
            "public_gists": 8,
            "html_url": "https://github.com/octocat"
        }"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.login, "octocat");
        assert_eq!(user.name, None);
        assert_eq!(user.location.as_deref(), Some("San Francisco"));
        assert_eq!(user.followers, 9000);
    }

    #[test]
    fn test_repo_missing_fields() {
        let repo: RepositorySummary = serde_json::from_str(r#"{"name": "hello"}"#).unwrap();
        assert_eq!(repo.name, "hello");
        assert_eq!(repo.stargazers_count, 0);
        assert!(!repo.fork);
        assert_eq!(repo.pushed_at, None);
    }

    #[test]
    fn test_repo_null_fields() {
        let json = r#"{"name": "x", "fork": null, "stargazers_count": null, "forks_count": null}"#;
        let repo: RepositorySummary = serde_json::from_str(json).unwrap();
        assert_eq!(repo.name, "x");
        assert!(!repo.fork);
        assert_eq!(repo.stargazers_count, 0);
        assert_eq!(repo.forks_count, 0);
    }

    #[test]
    fn test_user_null_counts_and_login() {
        let json = r#"{"login": null, "followers": null, "following": 3, "public_repos": null}"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.login, "");
        assert_eq!(user.followers, 0);
        assert_eq!(user.following, 3);
        assert_eq!(user.public_repos, 0);
        assert_eq!(user.public_gists, 0);
    }
}
