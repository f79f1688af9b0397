use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One entry of `/users/{account}/events`. Only the attributes the
/// classifier consumes are modeled; everything nested is optional because
/// the payload shape varies by event type.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub repo: EventRepo,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub payload: EventPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRepo {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    pub issue: Option<IssueRef>,
    pub pull_request: Option<PullRequestRef>,
    pub comment: Option<CommentRef>,
    pub review: Option<ReviewRef>,
    #[serde(default)]
    pub commits: Vec<PushCommit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueRef {
    pub number: Option<u64>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestRef {
    pub title: Option<String>,
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentRef {
    pub body: Option<String>,
    pub issue_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRef {
    pub html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PushCommit {
    pub sha: String,
    pub message: String,
}

/// One entry of `/users/{account}/repos`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRepo {
    pub full_name: String,
    pub html_url: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub fork: bool,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    pub updated_at: Option<DateTime<Utc>>,
    pub pushed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_comment_event_deserializes() {
        let raw = serde_json::json!({
            "type": "IssueCommentEvent",
            "repo": { "name": "rust-lang/rust" },
            "created_at": "2024-05-01T12:00:00Z",
            "payload": {
                "issue": { "number": 42, "title": "borrowck regression" },
                "comment": {
                    "body": "still reproduces on nightly",
                    "issue_url": "https://api.github.com/repos/rust-lang/rust/issues/42"
                }
            }
        });
        let event: RawEvent = serde_json::from_value(raw).unwrap();
        assert_eq!(event.kind, "IssueCommentEvent");
        assert_eq!(event.repo.name, "rust-lang/rust");
        let issue = event.payload.issue.unwrap();
        assert_eq!(issue.number, Some(42));
        assert_eq!(issue.title.as_deref(), Some("borrowck regression"));
    }

    #[test]
    fn push_event_with_unmodeled_fields_deserializes() {
        let raw = serde_json::json!({
            "type": "PushEvent",
            "public": true,
            "actor": { "login": "someone" },
            "repo": { "name": "owner/project" },
            "created_at": "2024-05-01T12:00:00Z",
            "payload": {
                "push_id": 123456,
                "ref": "refs/heads/main",
                "commits": [
                    { "sha": "abc123", "message": "fix build", "distinct": true }
                ]
            }
        });
        let event: RawEvent = serde_json::from_value(raw).unwrap();
        assert_eq!(event.payload.commits.len(), 1);
        assert_eq!(event.payload.commits[0].sha, "abc123");
    }

    #[test]
    fn missing_payload_defaults_to_empty() {
        let raw = serde_json::json!({
            "type": "WatchEvent",
            "repo": { "name": "owner/project" },
            "created_at": "2024-05-01T12:00:00Z"
        });
        let event: RawEvent = serde_json::from_value(raw).unwrap();
        assert!(event.payload.issue.is_none());
        assert!(event.payload.commits.is_empty());
    }

    #[test]
    fn repo_entry_deserializes() {
        let raw = serde_json::json!({
            "full_name": "octocat/hello-world",
            "html_url": "https://github.com/octocat/hello-world",
            "description": null,
            "fork": false,
            "language": "Rust",
            "stargazers_count": 7,
            "updated_at": "2024-05-01T12:00:00Z",
            "pushed_at": "2024-04-30T08:00:00Z"
        });
        let repo: RawRepo = serde_json::from_value(raw).unwrap();
        assert_eq!(repo.full_name, "octocat/hello-world");
        assert!(repo.description.is_none());
        assert_eq!(repo.language.as_deref(), Some("Rust"));
    }
}
