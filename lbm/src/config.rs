use std::path::Path;
use std::time::Duration;

use lbm_chain::error::Error;
use serde_derive::{Deserialize, Serialize};
use tendermint_rpc::Url;
use tracing::warn;
use tracing_subscriber::filter::LevelFilter;

/// Used when the configured timeout cannot be parsed.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub global: GlobalConfig,
    pub chain: LbmProviderConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GlobalConfig {
    pub log_level: LogLevel,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LbmProviderConfig {
    /// Chain identifier, checked against every light block.
    pub id: String,
    pub rpc_addr: Url,
    /// RPC timeout as a duration string, e.g. `10s` or `1m30s`.
    pub timeout: String,
}

impl LbmProviderConfig {
    /// The RPC timeout, or [`DEFAULT_TIMEOUT`] if it does not parse.
    pub fn timeout(&self) -> Duration {
        humantime::parse_duration(&self.timeout).unwrap_or_else(|e| {
            warn!(timeout = %self.timeout, "invalid timeout ({e}), using {DEFAULT_TIMEOUT:?}");
            DEFAULT_TIMEOUT
        })
    }
}

/// Attempt to load and parse the TOML config file as a `Config`.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, Error> {
    let config_toml = std::fs::read_to_string(&path).map_err(|e| Error::Custom {
        reason: e.to_string(),
    })?;

    let config = toml::from_str::<Config>(&config_toml[..]).map_err(|e| Error::Custom {
        reason: e.to_string(),
    })?;

    Ok(config)
}
