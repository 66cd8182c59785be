// src/render/markdown.rs
// =============================================================================
// Assembles the final Markdown document.
//
// The layout is fixed:
//   # GitHub User Information
//   ## 👤 Profile      - username, name, location, website, email, join date
//   ## 📊 Stats        - repos, followers, following, gists
//   ## 📈 Activity     - one sentence about the latest push
//   ## 📂 Top Repos    - up to 6 non-fork repositories by stars
//   ---
//   *Generated: YYYY-MM-DD*
//
// The date is passed in rather than read from the clock, so the same
// inputs always give byte-identical output.
// =============================================================================

use chrono::NaiveDate;

use super::helpers::{md_link, recent_activity_hint, repos_table_rows};
use crate::github::{RepositorySummary, UserProfile};

/// Rows in the "Top Repositories" table
pub const TOP_REPOS_IN_SUMMARY: usize = 6;

// Shown for profile fields the user left empty
const MISSING: &str = "–";

// Treats None and "" the same way
fn or_missing(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => MISSING,
    }
}

pub fn build_markdown(user: &UserProfile, repos: &[RepositorySummary], today: NaiveDate) -> String {
    let username = user.login.as_str();
    let profile_url = user
        .html_url
        .clone()
        .unwrap_or_else(|| format!("https://github.com/{}", username));
    let joined: String = user.created_at.as_deref().unwrap_or("").chars().take(10).collect();
    let website = match user.blog.as_deref() {
        Some(blog) if !blog.is_empty() => md_link(blog, Some(blog)),
        _ => MISSING.to_string(),
    };

    let rows = repos_table_rows(repos, TOP_REPOS_IN_SUMMARY).join("\n");
    let activity = recent_activity_hint(repos);

    format!(
        "# GitHub User Information

## 👤 Profile
- **Username:** `{username}` ({profile_link})
- **Full Name:** {name}
- **Location:** {location}
- **Website/Portfolio:** {website}
- **Email:** {email}
- **Joined GitHub:** {joined}

## 📊 Stats
- **Public Repositories:** {public_repos}
- **Followers:** {followers}
- **Following:** {following}
- **Gists:** {public_gists}

## 📈 Activity
- {activity}

## 📂 Top Repositories (by ⭐)
| Repository | Stars ⭐ | Forks 🍴 | Description |
|------------|---------:|---------:|-------------|
{rows}

---
*Generated: {today}*
",
        profile_link = md_link("view profile", Some(&profile_url)),
        name = or_missing(user.name.as_deref()),
        location = or_missing(user.location.as_deref()),
        email = or_missing(user.email.as_deref()),
        joined = or_missing(Some(joined.as_str())),
        public_repos = user.public_repos,
        followers = user.followers,
        following = user.following,
        public_gists = user.public_gists,
        today = today.format("%Y-%m-%d"),
    )
}
