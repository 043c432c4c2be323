use std::{
    collections::HashMap,
    env,
    fs::read_to_string,
    path::{Path, PathBuf},
    str::FromStr,
};

use derive_getters::Getters;
use log::debug;
use serde::Deserialize;

use crate::config::{ConfigError, account::AccountConfig, default_config_dir, home};

#[derive(Debug, Deserialize, Getters)]
pub struct Config {
    #[serde(default = "statedir")]
    statedir: PathBuf,
    #[serde(default)]
    accounts: HashMap<String, AccountConfig>,
}

impl Config {
    pub fn load_from_file(file: Option<&Path>) -> Result<Self, ConfigError> {
        let config_file = file.map_or_else(default_location, Path::to_path_buf);
        debug!("loading config from {}", config_file.display());
        let config_contents = read_to_string(&config_file).map_err(|source| ConfigError::Read {
            path: config_file.clone(),
            source,
        })?;
        Self::parse(&config_contents).map_err(|source| ConfigError::Parse {
            path: config_file,
            source,
        })
    }

    fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Picks the account to operate on. Without an explicit name the single configured account
    /// is used.
    pub fn account(&self, name: Option<&str>) -> Result<(&str, &AccountConfig), ConfigError> {
        if let Some(name) = name {
            return self
                .accounts
                .get_key_value(name)
                .map(|(name, config)| (name.as_str(), config))
                .ok_or_else(|| ConfigError::UnknownAccount(name.to_string()));
        }

        let mut accounts = self.accounts.iter();
        match (accounts.next(), accounts.next()) {
            (Some((name, config)), None) => Ok((name.as_str(), config)),
            (None, _) => Err(ConfigError::NoAccounts),
            (Some(_), Some(_)) => Err(ConfigError::AmbiguousAccount),
        }
    }
}

fn default_location() -> PathBuf {
    default_config_dir().join("config.toml")
}

fn statedir() -> PathBuf {
    let mut state_home = if let Ok(state_home) = env::var("XDG_STATE_HOME") {
        PathBuf::from_str(&state_home).expect("XDG_STATE_HOME should be a parseable path")
    } else {
        let mut state_home = home();
        state_home.push(".local/state");
        state_home
    };
    state_home.push(env!("CARGO_PKG_NAME"));
    state_home
}
