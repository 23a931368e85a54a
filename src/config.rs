// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Holocron-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Holocron and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Runtime configuration assembled from CLI flags layered over environment variables.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::client::{ClientConfig, DEFAULT_BASE_URL};
use crate::model::{Category, EntityRef, EntityRefError, ParseCategoryError};

pub const ENV_BASE_URL: &str = "HOLOCRON_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "HOLOCRON_TIMEOUT_SECS";
pub const ENV_LOG_FILE: &str = "HOLOCRON_LOG_FILE";
pub const ENV_LOG: &str = "HOLOCRON_LOG";
pub const DEFAULT_LOG_FILTER: &str = "holocron=info";

/// Raw command-line options; every field is optional and validated by [`Config::resolve`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub base_url: Option<String>,
    pub tab: Option<String>,
    pub open: Option<String>,
    pub timeout_secs: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub initial_tab: Category,
    pub open: Option<EntityRef>,
    pub timeout: Option<Duration>,
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid base url {value:?}: expected http:// or https://")]
    BaseUrl { value: String },

    #[error(transparent)]
    Tab(#[from] ParseCategoryError),

    #[error("invalid reference {value:?}: {source}")]
    Open {
        value: String,
        #[source]
        source: EntityRefError,
    },

    #[error("invalid timeout {value:?} from {origin}: expected whole seconds > 0")]
    Timeout { origin: &'static str, value: String },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            initial_tab: Category::Character,
            open: None,
            timeout: None,
            log_file: None,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl Config {
    /// Flags win over environment; `env` is injected so tests never touch the process env.
    pub fn resolve(
        options: CliOptions,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let env = |name: &str| env(name).filter(|value| !value.trim().is_empty());

        let base_url = options
            .base_url
            .or_else(|| env(ENV_BASE_URL))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let base_url = base_url.trim().trim_end_matches('/').to_owned();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::BaseUrl { value: base_url });
        }

        let initial_tab = match options.tab {
            Some(tab) => tab.parse::<Category>()?,
            None => Category::Character,
        };

        let open = options
            .open
            .map(|value| {
                EntityRef::new(value.trim())
                    .map_err(|source| ConfigError::Open { value: value.clone(), source })
            })
            .transpose()?;

        let timeout = match (options.timeout_secs, env(ENV_TIMEOUT_SECS)) {
            (Some(value), _) => Some(parse_timeout("--timeout-secs", &value)?),
            (None, Some(value)) => Some(parse_timeout(ENV_TIMEOUT_SECS, &value)?),
            (None, None) => None,
        };

        let log_file = options.log_file.or_else(|| env(ENV_LOG_FILE)).map(PathBuf::from);
        let log_filter = env(ENV_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        Ok(Self { base_url, initial_tab, open, timeout, log_file, log_filter })
    }

    pub fn from_env(options: CliOptions) -> Result<Self, ConfigError> {
        Self::resolve(options, |name| std::env::var(name).ok())
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig { base_url: self.base_url.clone(), timeout: self.timeout }
    }
}

fn parse_timeout(origin: &'static str, value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::Timeout { origin, value: value.to_owned() }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use super::{CliOptions, Config, ConfigError, DEFAULT_LOG_FILTER};
    use crate::model::Category;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect::<HashMap<_, _>>();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let config = Config::resolve(CliOptions::default(), env(&[])).expect("config");
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn flags_win_over_env() {
        let options = CliOptions {
            base_url: Some("http://localhost:8080/api/".to_owned()),
            timeout_secs: Some("3".to_owned()),
            ..CliOptions::default()
        };
        let config = Config::resolve(
            options,
            env(&[
                ("HOLOCRON_BASE_URL", "https://elsewhere.example/api"),
                ("HOLOCRON_TIMEOUT_SECS", "30"),
            ]),
        )
        .expect("config");

        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn env_fills_missing_flags() {
        let config = Config::resolve(
            CliOptions::default(),
            env(&[
                ("HOLOCRON_BASE_URL", "https://mirror.example/api"),
                ("HOLOCRON_LOG_FILE", "/tmp/holocron.log"),
                ("HOLOCRON_LOG", "holocron=debug"),
                ("HOLOCRON_TIMEOUT_SECS", ""),
            ]),
        )
        .expect("config");

        assert_eq!(config.base_url, "https://mirror.example/api");
        assert_eq!(config.log_file.as_deref(), Some(std::path::Path::new("/tmp/holocron.log")));
        assert_eq!(config.log_filter, "holocron=debug");
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn parses_tab_and_open_reference() {
        let options = CliOptions {
            tab: Some("planets".to_owned()),
            open: Some("https://swapi.py4e.com/api/films/4/".to_owned()),
            ..CliOptions::default()
        };
        let config = Config::resolve(options, env(&[])).expect("config");
        assert_eq!(config.initial_tab, Category::Planet);
        assert_eq!(
            config.open.as_ref().map(|reference| reference.as_str()),
            Some("https://swapi.py4e.com/api/films/4/")
        );
    }

    #[test]
    fn rejects_invalid_values() {
        let bad_url = CliOptions { base_url: Some("ftp://x".to_owned()), ..CliOptions::default() };
        assert!(matches!(
            Config::resolve(bad_url, env(&[])).unwrap_err(),
            ConfigError::BaseUrl { .. }
        ));

        let bad_tab = CliOptions { tab: Some("droids".to_owned()), ..CliOptions::default() };
        assert!(matches!(Config::resolve(bad_tab, env(&[])).unwrap_err(), ConfigError::Tab(_)));

        let bad_open = CliOptions { open: Some("films/4".to_owned()), ..CliOptions::default() };
        assert!(matches!(
            Config::resolve(bad_open, env(&[])).unwrap_err(),
            ConfigError::Open { .. }
        ));

        let err = Config::resolve(CliOptions::default(), env(&[("HOLOCRON_TIMEOUT_SECS", "0")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Timeout { origin: "HOLOCRON_TIMEOUT_SECS", value: "0".to_owned() }
        );
    }
}
