use crate::data_source::FetchMode;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    pub account: String,
    pub github_token: Option<String>,
    pub mode: FetchMode,
    pub per_page: u8,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("account", &self.account)
            .field("github_token", &self.github_token.as_ref().map(|_| "[REDACTED]"))
            .field("mode", &self.mode)
            .field("per_page", &self.per_page)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account: "octocat".to_string(),
            github_token: None,
            mode: FetchMode::Events,
            per_page: 30,
        }
    }
}

impl Config {
    pub fn load(cli_account: Option<String>, cli_mode: Option<FetchMode>) -> Self {
        let config_file = config_dir().join("tally").join("config.toml");

        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(&config_file));
        }

        figment = figment.merge(Env::prefixed("TALLY_")).merge(
            Env::raw()
                .only(&["GITHUB_TOKEN"])
                .map(|_| "github_token".into()),
        );

        if let Some(account) = cli_account {
            figment = figment.merge(Serialized::default("account", account));
        }
        if let Some(mode) = cli_mode {
            figment = figment.merge(Serialized::default("mode", mode));
        }

        match figment.extract() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("warning: config parse error, using defaults: {e}");
                Config::default()
            }
        }
    }
}

fn config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| PathBuf::from("."))
}
