use chrono::{DateTime, Utc};

/// The fixed display categories. `Repository` only occurs in repos mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContributionKind {
    Issue,
    PullRequest,
    Commit,
    Repository,
}

impl ContributionKind {
    /// Canonical section order for the events view.
    pub const EVENT_KINDS: [Self; 3] = [Self::Issue, Self::PullRequest, Self::Commit];

    pub fn section_title(self) -> &'static str {
        match self {
            Self::Issue => "Issues",
            Self::PullRequest => "Pull requests",
            Self::Commit => "Commits",
            Self::Repository => "Repositories",
        }
    }

    pub fn empty_notice(self) -> &'static str {
        match self {
            Self::Issue => "No issues found.",
            Self::PullRequest => "No pull requests found.",
            Self::Commit => "No commits found.",
            Self::Repository => "No repositories found.",
        }
    }
}

/// Normalized record of one piece of account activity, immutable once
/// produced by the classifier. Recomputed on every fetch, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub kind: ContributionKind,
    pub repo: String,
    pub date: DateTime<Utc>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub url: Option<String>,
}

impl Contribution {
    /// Row heading: title, else message, else the repo name.
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or(&self.repo)
    }
}
