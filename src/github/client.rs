use crate::error::{Result, TallyError};
use crate::github::types::{RawEvent, RawRepo};
use octocrab::Octocrab;
use serde::Serialize;

const MAX_PER_PAGE: u8 = 100;

#[derive(Serialize)]
struct PageParams {
    per_page: u8,
}

#[derive(Clone)]
pub struct GitHubClient {
    octo: Octocrab,
}

impl GitHubClient {
    pub fn new(token: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder();
        if let Some(token) = token {
            builder = builder.personal_token(token.to_string());
        }
        let octo = builder
            .build()
            .map_err(|e| TallyError::GitHub(e.to_string()))?;

        Ok(Self { octo })
    }

    /// One GET of the account's public event feed. Single page, single
    /// attempt; a non-success status surfaces as `TallyError::GitHub`.
    pub async fn fetch_user_events(&self, account: &str, per_page: u8) -> Result<Vec<RawEvent>> {
        let account = validated(account)?;
        let params = PageParams {
            per_page: per_page.min(MAX_PER_PAGE),
        };
        self.octo
            .get(format!("/users/{account}/events"), Some(&params))
            .await
            .map_err(|e| TallyError::GitHub(e.to_string()))
    }

    /// One GET of the account's repository list. Same single-attempt
    /// contract as the event feed.
    pub async fn fetch_user_repos(&self, account: &str, per_page: u8) -> Result<Vec<RawRepo>> {
        let account = validated(account)?;
        let params = PageParams {
            per_page: per_page.min(MAX_PER_PAGE),
        };
        self.octo
            .get(format!("/users/{account}/repos"), Some(&params))
            .await
            .map_err(|e| TallyError::GitHub(e.to_string()))
    }

    /// Best-effort read of the remaining API quota for the status bar.
    pub async fn rate_limit(&self) -> Option<u32> {
        self.octo
            .ratelimit()
            .get()
            .await
            .ok()
            .map(|r| r.rate.remaining as u32)
    }
}

fn validated(account: &str) -> Result<&str> {
    let trimmed = account.trim();
    if trimmed.is_empty() {
        return Err(TallyError::EmptyAccount);
    }
    Ok(trimmed)
}
