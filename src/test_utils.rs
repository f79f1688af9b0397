#![cfg(test)]

use crate::contrib::types::{Contribution, ContributionKind};
use crate::github::types::*;
use chrono::{DateTime, Duration, Utc};

pub fn event_time(secs_ago: i64) -> DateTime<Utc> {
    Utc::now() - Duration::seconds(secs_ago)
}

pub fn make_event(kind: &str, repo: &str, payload: EventPayload) -> RawEvent {
    RawEvent {
        kind: kind.to_string(),
        repo: EventRepo {
            name: repo.to_string(),
        },
        created_at: event_time(60),
        payload,
    }
}

pub fn issue_payload(number: Option<u64>, title: Option<&str>) -> EventPayload {
    EventPayload {
        issue: Some(IssueRef {
            number,
            title: title.map(String::from),
        }),
        ..Default::default()
    }
}

pub fn comment_payload(body: &str, issue_url: &str) -> EventPayload {
    EventPayload {
        comment: Some(CommentRef {
            body: Some(body.to_string()),
            issue_url: Some(issue_url.to_string()),
        }),
        ..Default::default()
    }
}

pub fn pull_payload(title: Option<&str>, html_url: Option<&str>) -> EventPayload {
    EventPayload {
        pull_request: Some(PullRequestRef {
            title: title.map(String::from),
            html_url: html_url.map(String::from),
        }),
        ..Default::default()
    }
}

pub fn push_payload(commits: &[(&str, &str)]) -> EventPayload {
    EventPayload {
        commits: commits
            .iter()
            .map(|(sha, message)| PushCommit {
                sha: sha.to_string(),
                message: message.to_string(),
            })
            .collect(),
        ..Default::default()
    }
}

pub fn make_repo(
    full_name: &str,
    description: Option<&str>,
    language: Option<&str>,
    stars: u32,
    fork: bool,
) -> RawRepo {
    RawRepo {
        full_name: full_name.to_string(),
        html_url: Some(format!("https://github.com/{full_name}")),
        description: description.map(String::from),
        fork,
        language: language.map(String::from),
        stargazers_count: stars,
        updated_at: Some(event_time(120)),
        pushed_at: Some(event_time(60)),
    }
}

pub fn make_contribution(kind: ContributionKind, repo: &str) -> Contribution {
    Contribution {
        kind,
        repo: repo.to_string(),
        date: event_time(60),
        title: None,
        message: None,
        url: None,
    }
}
