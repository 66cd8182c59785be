// src/render/helpers.rs
// =============================================================================
// Small pure functions used to build the Markdown document.
//
// - md_link: [text](url) or plain text
// - truncate: collapse whitespace and cut long descriptions
// - top_repos_by_stars: drop forks, rank by stars then forks
// - repos_table_rows: the rows of the "Top Repositories" table
// - recent_activity_hint: one sentence about the latest push
//
// None of these touch the network or the clock, which keeps them easy to
// test.
// =============================================================================

use crate::github::RepositorySummary;

/// Description length inside the repository table
pub const TABLE_DESCRIPTION_CHARS: usize = 80;

/// Marker appended to truncated text (a single character)
pub const ELLIPSIS: char = '…';

/// Table row used when there is nothing to rank
pub const PLACEHOLDER_ROW: &str = "| – | – | – | No repositories found |";

/// Activity sentence for users without any repositories
pub const NO_ACTIVITY: &str = "No public activity found.";

// Renders a Markdown link, or just the text when there is no URL
//
// Example:
//   md_link("rust", Some("https://github.com/rust-lang/rust"))
//     -> "[rust](https://github.com/rust-lang/rust)"
pub fn md_link(text: &str, url: Option<&str>) -> String {
    match url {
        Some(url) if !url.is_empty() => format!("[{}]({})", text, url),
        _ => text.to_string(),
    }
}

// Collapses whitespace runs and shortens text to at most `limit` characters
//
// Lengths are counted in characters, not bytes, so we never cut a
// multi-byte character in half. Truncated text ends with ELLIPSIS and is
// exactly `limit` characters long.
pub fn truncate(text: &str, limit: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= limit {
        return collapsed;
    }

    let mut short: String = collapsed.chars().take(limit.saturating_sub(1)).collect();
    short.push(ELLIPSIS);
    short
}

// Returns the `n` most starred non-fork repositories
//
// Ties on stars are broken by forks. sort_by is stable, so repositories
// with identical counts keep the order the API gave us.
pub fn top_repos_by_stars(repos: &[RepositorySummary], n: usize) -> Vec<&RepositorySummary> {
    let mut own: Vec<&RepositorySummary> = repos.iter().filter(|r| !r.fork).collect();
    own.sort_by(|a, b| {
        (b.stargazers_count, b.forks_count).cmp(&(a.stargazers_count, a.forks_count))
    });
    own.truncate(n);
    own
}

// Builds the Markdown table rows for the top `n` repositories
//
// Never returns an empty Vec: if nothing survives the fork filter we
// return the placeholder row instead.
pub fn repos_table_rows(repos: &[RepositorySummary], n: usize) -> Vec<String> {
    let mut rows: Vec<String> = top_repos_by_stars(repos, n)
        .into_iter()
        .map(|r| {
            format!(
                "| {} | {} | {} | {} |",
                md_link(&r.name, r.html_url.as_deref()),
                r.stargazers_count,
                r.forks_count,
                truncate(r.description.as_deref().unwrap_or(""), TABLE_DESCRIPTION_CHARS)
            )
        })
        .collect();

    if rows.is_empty() {
        rows.push(PLACEHOLDER_ROW.to_string());
    }

    rows
}

// The timestamp we sort activity by: pushed_at, else updated_at, else ""
fn activity_timestamp(repo: &RepositorySummary) -> &str {
    [repo.pushed_at.as_deref(), repo.updated_at.as_deref()]
        .into_iter()
        .flatten()
        .find(|t| !t.is_empty())
        .unwrap_or("")
}

// Describes the most recent push across all repositories
//
// ISO-8601 timestamps sort correctly as plain strings, so no date parsing
// is needed. On a tie the first repository in the list wins.
pub fn recent_activity_hint(repos: &[RepositorySummary]) -> String {
    let latest = repos.iter().reduce(|best, repo| {
        if activity_timestamp(repo) > activity_timestamp(best) {
            repo
        } else {
            best
        }
    });

    let Some(latest) = latest else {
        return NO_ACTIVITY.to_string();
    };

    let date: String = activity_timestamp(latest).chars().take(10).collect();
    format!(
        "Latest push: **{}** to {}",
        date,
        md_link(&latest.name, latest.html_url.as_deref())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, stars: u64, forks: u64, fork: bool) -> RepositorySummary {
        RepositorySummary {
            name: name.to_string(),
            html_url: Some(format!("https://github.com/octocat/{}", name)),
            stargazers_count: stars,
            forks_count: forks,
            fork,
            ..Default::default()
        }
    }

    fn pushed(name: &str, pushed_at: Option<&str>, updated_at: Option<&str>) -> RepositorySummary {
        RepositorySummary {
            name: name.to_string(),
            pushed_at: pushed_at.map(str::to_string),
            updated_at: updated_at.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_md_link() {
        assert_eq!(md_link("a", Some("https://x")), "[a](https://x)");
        assert_eq!(md_link("a", None), "a");
        assert_eq!(md_link("a", Some("")), "a");
    }

    #[test]
    fn test_truncate_collapses_whitespace() {
        assert_eq!(truncate("  hello \n\t world  ", 120), "hello world");
        assert_eq!(truncate("", 120), "");
    }

    #[test]
    fn test_truncate_at_limit() {
        let exact = "a".repeat(80);
        assert_eq!(truncate(&exact, 80), exact);

        let long = "b".repeat(81);
        let short = truncate(&long, 80);
        assert_eq!(short.chars().count(), 80);
        assert!(short.ends_with(ELLIPSIS));
        assert!(short.starts_with(&"b".repeat(79)));
    }

    #[test]
    fn test_truncate_counts_characters() {
        let text = "é".repeat(10);
        let short = truncate(&text, 5);
        assert_eq!(short, "éééé…");
    }

    #[test]
    fn test_top_repos_excludes_forks_and_ranks() {
        let repos = vec![repo("a", 5, 1, false), repo("b", 10, 0, false), repo("c", 10, 3, true)];
        let names: Vec<_> = top_repos_by_stars(&repos, 6).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_top_repos_breaks_ties_by_forks_then_input_order() {
        let repos = vec![
            repo("first", 3, 1, false),
            repo("more-forks", 3, 2, false),
            repo("second", 3, 1, false),
        ];
        let names: Vec<_> = top_repos_by_stars(&repos, 6).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["more-forks", "first", "second"]);
    }

    #[test]
    fn test_top_repos_takes_n() {
        let repos: Vec<_> = (0..10).map(|i| repo(&format!("r{}", i), i, 0, false)).collect();
        let top = top_repos_by_stars(&repos, 6);
        assert_eq!(top.len(), 6);
        assert_eq!(top[0].name, "r9");
    }

    #[test]
    fn test_table_rows_format() {
        let mut r = repo("tool", 42, 7, false);
        r.description = Some("A   handy\ntool".to_string());
        let rows = repos_table_rows(&[r], 6);
        assert_eq!(rows, vec!["| [tool](https://github.com/octocat/tool) | 42 | 7 | A handy tool |"]);
    }

    #[test]
    fn test_table_rows_placeholder() {
        assert_eq!(repos_table_rows(&[], 6), vec![PLACEHOLDER_ROW]);

        let only_forks = vec![repo("f", 100, 100, true)];
        assert_eq!(repos_table_rows(&only_forks, 6), vec![PLACEHOLDER_ROW]);
    }

    #[test]
    fn test_activity_no_repos() {
        assert_eq!(recent_activity_hint(&[]), "No public activity found.");
    }

    #[test]
    fn test_activity_picks_latest_push() {
        let repos = vec![
            pushed("old", Some("2020-01-01T00:00:00Z"), None),
            pushed("new", Some("2024-03-05T10:00:00Z"), None),
            pushed("mid", Some("2022-06-01T00:00:00Z"), None),
        ];
        assert_eq!(recent_activity_hint(&repos), "Latest push: **2024-03-05** to new");
    }

    #[test]
    fn test_activity_falls_back_to_updated_at() {
        let repos = vec![
            pushed("pushed", Some("2021-01-01T00:00:00Z"), None),
            pushed("updated", Some(""), Some("2023-02-02T00:00:00Z")),
        ];
        assert_eq!(recent_activity_hint(&repos), "Latest push: **2023-02-02** to updated");
    }

    #[test]
    fn test_activity_without_timestamps() {
        let mut r = pushed("quiet", None, None);
        r.html_url = Some("https://github.com/octocat/quiet".to_string());
        assert_eq!(
            recent_activity_hint(&[r]),
            "Latest push: **** to [quiet](https://github.com/octocat/quiet)"
        );
    }

    #[test]
    fn test_activity_tie_keeps_first() {
        let repos = vec![
            pushed("one", Some("2024-01-01T00:00:00Z"), None),
            pushed("two", Some("2024-01-01T00:00:00Z"), None),
        ];
        assert!(recent_activity_hint(&repos).ends_with("to one"));
    }
}
