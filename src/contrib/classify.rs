use crate::contrib::types::{Contribution, ContributionKind};
use crate::github::types::{EventPayload, RawEvent, RawRepo};

/// Comment bodies and commit messages are cut to this many characters for
/// display; titles arrive pre-sized from the API.
pub const EXCERPT_CHARS: usize = 80;

const ISSUE_EVENTS: &[&str] = &["IssuesEvent", "IssueCommentEvent"];
const PULL_EVENTS: &[&str] = &[
    "PullRequestEvent",
    "PullRequestReviewEvent",
    "PullRequestReviewCommentEvent",
];

/// Partitions the raw event feed into display contributions. Input order is
/// preserved; event types outside the three categories are dropped.
pub fn classify(events: &[RawEvent]) -> Vec<Contribution> {
    let mut out = Vec::new();
    for event in events {
        let kind = event.kind.as_str();
        if ISSUE_EVENTS.contains(&kind) {
            out.push(issue_contribution(event));
        } else if PULL_EVENTS.contains(&kind) {
            out.push(pull_contribution(event));
        } else if kind == "PushEvent" {
            out.extend(commit_contributions(event));
        }
    }
    out
}

/// Repos-mode counterpart of `classify`: every repository becomes one
/// `Repository` contribution, input order preserved.
pub fn map_repos(repos: &[RawRepo]) -> Vec<Contribution> {
    repos
        .iter()
        .map(|repo| Contribution {
            kind: ContributionKind::Repository,
            repo: repo.full_name.clone(),
            date: repo
                .pushed_at
                .or(repo.updated_at)
                .unwrap_or(chrono::DateTime::UNIX_EPOCH),
            title: repo.description.clone().filter(|d| !d.is_empty()),
            message: repo_note(repo),
            url: repo.html_url.clone(),
        })
        .collect()
}

/// First candidate that is present and non-empty, in order of preference.
pub fn first_filled<'a, I>(candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}

/// First `max_chars` characters of `text`. Char-based so multibyte input
/// never splits mid-codepoint.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn issue_contribution(event: &RawEvent) -> Contribution {
    Contribution {
        kind: ContributionKind::Issue,
        repo: event.repo.name.clone(),
        date: event.created_at,
        title: Some(issue_title(&event.payload)),
        message: None,
        url: issue_url(&event.repo.name, &event.payload),
    }
}

fn issue_title(payload: &EventPayload) -> String {
    let title = payload
        .issue
        .as_ref()
        .and_then(|i| i.title.as_deref())
        .filter(|t| !t.is_empty());
    if let Some(title) = title {
        return title.to_string();
    }

    let body = payload
        .comment
        .as_ref()
        .and_then(|c| c.body.as_deref())
        .filter(|b| !b.is_empty());
    match body {
        Some(body) => excerpt(body, EXCERPT_CHARS),
        None => "[comment]".to_string(),
    }
}

fn issue_url(repo: &str, payload: &EventPayload) -> Option<String> {
    let number = payload.issue.as_ref().and_then(|i| i.number).or_else(|| {
        payload
            .comment
            .as_ref()
            .and_then(|c| c.issue_url.as_deref())
            .and_then(trailing_number)
    })?;
    Some(format!("https://github.com/{repo}/issues/{number}"))
}

fn pull_contribution(event: &RawEvent) -> Contribution {
    let payload = &event.payload;
    let title = payload
        .pull_request
        .as_ref()
        .and_then(|p| p.title.as_deref())
        .filter(|t| !t.is_empty())
        .unwrap_or("[review]")
        .to_string();

    let url = first_filled([
        payload.pull_request.as_ref().and_then(|p| p.html_url.as_deref()),
        payload.review.as_ref().and_then(|r| r.html_url.as_deref()),
    ])
    .map(str::to_string);

    Contribution {
        kind: ContributionKind::PullRequest,
        repo: event.repo.name.clone(),
        date: event.created_at,
        title: Some(title),
        message: None,
        url,
    }
}

fn commit_contributions(event: &RawEvent) -> Vec<Contribution> {
    event
        .payload
        .commits
        .iter()
        .map(|commit| Contribution {
            kind: ContributionKind::Commit,
            repo: event.repo.name.clone(),
            date: event.created_at,
            title: None,
            message: Some(excerpt(&commit.message, EXCERPT_CHARS)),
            url: Some(format!(
                "https://github.com/{}/commit/{}",
                event.repo.name, commit.sha
            )),
        })
        .collect()
}

/// Trailing path segment of an API issue url, e.g.
/// `.../repos/owner/name/issues/42` yields 42.
fn trailing_number(url: &str) -> Option<u64> {
    url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}

fn repo_note(repo: &RawRepo) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(lang) = repo.language.as_deref().filter(|l| !l.is_empty()) {
        parts.push(lang.to_string());
    }
    if repo.stargazers_count > 0 {
        parts.push(format!("{} stars", repo.stargazers_count));
    }
    if repo.fork {
        parts.push("fork".to_string());
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn mixed_feed_partitions_without_loss() {
        let events = vec![
            make_event("IssuesEvent", "o/a", issue_payload(Some(1), Some("first issue"))),
            make_event("PushEvent", "o/b", push_payload(&[("aaa", "one"), ("bbb", "two")])),
            make_event("PullRequestEvent", "o/c", pull_payload(Some("a pr"), Some("https://github.com/o/c/pull/9"))),
            make_event("WatchEvent", "o/d", EventPayload::default()),
            make_event("IssueCommentEvent", "o/a", comment_payload("ping", "https://api.github.com/repos/o/a/issues/7")),
        ];

        let contributions = classify(&events);

        let issues: Vec<_> = contributions
            .iter()
            .filter(|c| c.kind == ContributionKind::Issue)
            .collect();
        let pulls: Vec<_> = contributions
            .iter()
            .filter(|c| c.kind == ContributionKind::PullRequest)
            .collect();
        let commits: Vec<_> = contributions
            .iter()
            .filter(|c| c.kind == ContributionKind::Commit)
            .collect();

        assert_eq!(issues.len(), 2);
        assert_eq!(pulls.len(), 1);
        assert_eq!(commits.len(), 2);
        // watch event dropped, nothing else lost
        assert_eq!(contributions.len(), 5);
    }

    #[test]
    fn category_order_follows_input_order() {
        let events = vec![
            make_event("IssuesEvent", "o/a", issue_payload(Some(1), Some("first"))),
            make_event("IssuesEvent", "o/a", issue_payload(Some(2), Some("second"))),
        ];
        let contributions = classify(&events);
        assert_eq!(contributions[0].title.as_deref(), Some("first"));
        assert_eq!(contributions[1].title.as_deref(), Some("second"));
    }

    #[test]
    fn issue_title_falls_back_to_comment_body() {
        let event = make_event(
            "IssueCommentEvent",
            "o/a",
            comment_payload("hello world", "https://api.github.com/repos/o/a/issues/3"),
        );
        let contributions = classify(&[event]);
        assert_eq!(contributions[0].title.as_deref(), Some("hello world"));
    }

    #[test]
    fn long_comment_body_is_cut_to_eighty_chars() {
        let body = "x".repeat(200);
        let event = make_event(
            "IssueCommentEvent",
            "o/a",
            comment_payload(&body, "https://api.github.com/repos/o/a/issues/3"),
        );
        let contributions = classify(&[event]);
        assert_eq!(contributions[0].title.as_deref(), Some("x".repeat(80).as_str()));
    }

    #[test]
    fn issue_title_falls_back_to_placeholder() {
        let event = make_event("IssueCommentEvent", "o/a", EventPayload::default());
        let contributions = classify(&[event]);
        assert_eq!(contributions[0].title.as_deref(), Some("[comment]"));
        assert!(contributions[0].url.is_none());
    }

    #[test]
    fn issue_url_built_from_repo_and_number() {
        let event = make_event("IssuesEvent", "owner/project", issue_payload(Some(42), Some("t")));
        let contributions = classify(&[event]);
        assert_eq!(
            contributions[0].url.as_deref(),
            Some("https://github.com/owner/project/issues/42")
        );
    }

    #[test]
    fn issue_url_falls_back_to_comment_issue_url_segment() {
        let event = make_event(
            "IssueCommentEvent",
            "owner/project",
            comment_payload("body", "https://api.github.com/repos/owner/project/issues/7"),
        );
        let contributions = classify(&[event]);
        assert_eq!(
            contributions[0].url.as_deref(),
            Some("https://github.com/owner/project/issues/7")
        );
    }

    #[test]
    fn pull_review_without_pr_payload_gets_review_placeholder() {
        let payload = EventPayload {
            review: Some(crate::github::types::ReviewRef {
                html_url: Some("https://github.com/o/c/pull/9#review".to_string()),
            }),
            ..Default::default()
        };
        let event = make_event("PullRequestReviewEvent", "o/c", payload);
        let contributions = classify(&[event]);
        assert_eq!(contributions[0].title.as_deref(), Some("[review]"));
        assert_eq!(
            contributions[0].url.as_deref(),
            Some("https://github.com/o/c/pull/9#review")
        );
    }

    #[test]
    fn push_event_expands_to_one_contribution_per_commit() {
        let event = make_event("PushEvent", "o/b", push_payload(&[("aaa", "one"), ("bbb", "two")]));
        let contributions = classify(&[event]);
        assert_eq!(contributions.len(), 2);
        assert_eq!(contributions[0].message.as_deref(), Some("one"));
        assert_eq!(
            contributions[0].url.as_deref(),
            Some("https://github.com/o/b/commit/aaa")
        );
        assert_eq!(contributions[1].message.as_deref(), Some("two"));
    }

    #[test]
    fn push_event_with_no_commits_yields_nothing() {
        let event = make_event("PushEvent", "o/b", push_payload(&[]));
        assert!(classify(&[event]).is_empty());
    }

    #[test]
    fn first_filled_skips_empty_candidates() {
        assert_eq!(first_filled([None, Some(""), Some("x")]), Some("x"));
        assert_eq!(first_filled([Some("a"), Some("b")]), Some("a"));
        assert_eq!(first_filled::<[Option<&str>; 2]>([None, Some("")]), None);
    }

    #[test]
    fn excerpt_is_multibyte_safe() {
        let s = "héllo wörld".repeat(20);
        let cut = excerpt(&s, 80);
        assert_eq!(cut.chars().count(), 80);
        assert!(s.starts_with(&cut));
    }

    #[test]
    fn repos_map_to_repository_contributions() {
        let repos = vec![make_repo("octocat/hello", Some("greeting repo"), Some("Rust"), 3, false)];
        let contributions = map_repos(&repos);
        assert_eq!(contributions.len(), 1);
        let c = &contributions[0];
        assert_eq!(c.kind, ContributionKind::Repository);
        assert_eq!(c.repo, "octocat/hello");
        assert_eq!(c.title.as_deref(), Some("greeting repo"));
        assert_eq!(c.message.as_deref(), Some("Rust, 3 stars"));
    }

    #[test]
    fn repo_without_description_keeps_repo_name_as_heading() {
        let repos = vec![make_repo("octocat/bare", None, None, 0, true)];
        let contributions = map_repos(&repos);
        assert!(contributions[0].title.is_none());
        assert_eq!(contributions[0].message.as_deref(), Some("fork"));
        assert_eq!(contributions[0].display_title(), "octocat/bare");
    }
}
