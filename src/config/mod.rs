mod account;
mod mailprefs;

use std::env;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

pub use account::AccountConfig;
pub use mailprefs::Config;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {path} is not readable: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("config file {path} is not parseable: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("account {0} is not configured")]
    UnknownAccount(String),
    #[error("no accounts configured")]
    NoAccounts,
    #[error("several accounts configured, select one with --account")]
    AmbiguousAccount,
}

fn default_config_dir() -> PathBuf {
    let mut config_dir = if let Ok(config_home) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from_str(&config_home).expect("XDG_CONFIG_HOME should be a parseable path")
    } else {
        let mut config_home = home();
        config_home.push(".config");
        config_home
    };
    config_dir.push(env!("CARGO_PKG_NAME"));

    config_dir
}

fn home() -> PathBuf {
    PathBuf::from_str(&env::var("HOME").expect("HOME should be set"))
        .expect("HOME should be a parseable path")
}
