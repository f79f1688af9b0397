use crate::config::Config;
use crate::error::Result;
use crate::github::client::GitHubClient;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FetchMode {
    Events,
    Repos,
}

impl FetchMode {
    pub fn toggle(self) -> Self {
        match self {
            FetchMode::Events => FetchMode::Repos,
            FetchMode::Repos => FetchMode::Events,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FetchMode::Events => "events",
            FetchMode::Repos => "repos",
        }
    }
}

pub fn init_github_client(config: &Config) -> Result<GitHubClient> {
    let token = config.github_token.as_deref().filter(|t| !t.is_empty());
    GitHubClient::new(token)
}
