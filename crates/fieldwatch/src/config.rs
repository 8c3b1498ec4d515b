//! Configuration loading and validation.

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use fieldwatch_error::{ConfigError, FieldwatchError, FieldwatchResult};
use fieldwatch_sync::SyncSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "fieldwatch.toml";

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "FIELDWATCH";

/// Longest accepted poll interval, cooldown or fetch timeout (one week).
pub const MAX_INTERVAL_SECS: u64 = 7 * 24 * 60 * 60;

const DEFAULTS: &str = r#"
poll_interval_secs = 30
cooldown_secs = 60
fetch_timeout_secs = 10
"#;

/// Settings as read from the sources, before validation.
#[derive(Debug, Deserialize)]
struct RawConfig {
    source_url: String,
    channel_id: String,
    poll_interval_secs: u64,
    cooldown_secs: u64,
    fetch_timeout_secs: u64,
}

/// Validated Fieldwatch configuration.
///
/// The Discord token is not part of it; it only comes from the
/// environment or the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct FieldwatchConfig {
    /// URL of the server's XML stats document
    source_url: String,
    /// Channel that holds the live report
    channel_id: u64,
    /// Seconds between polls
    poll_interval_secs: u64,
    /// Minimum seconds between two publishes
    cooldown_secs: u64,
    /// Seconds before a fetch is abandoned
    fetch_timeout_secs: u64,
}

impl FieldwatchConfig {
    /// Load configuration from `path`, overridden by `FIELDWATCH_*` variables.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Built-in defaults for the intervals
    /// 2. The TOML file at `path` (skipped if it does not exist)
    /// 3. Environment variables such as `FIELDWATCH_SOURCE_URL`
    ///
    /// # Errors
    ///
    /// Returns an error if the sources cannot be read or parsed, a required
    /// key is missing, or a value fails validation.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use fieldwatch::FieldwatchConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = FieldwatchConfig::load("fieldwatch.toml")?;
    /// println!("polling {} every {}s", config.source_url(), config.poll_interval_secs());
    /// # Ok(())
    /// # }
    /// ```
    pub fn load(path: impl AsRef<Path>) -> FieldwatchResult<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Like [`load`](Self::load) with an explicit environment source.
    #[instrument(skip(path, env), fields(path = %path.as_ref().display()))]
    pub fn load_with_env(path: impl AsRef<Path>, env: Environment) -> FieldwatchResult<Self> {
        debug!("Loading configuration");

        let raw: RawConfig = Config::builder()
            .add_source(File::from_str(DEFAULTS, FileFormat::Toml))
            .add_source(File::from(path.as_ref()).required(false))
            .add_source(env)
            .build()
            .map_err(|e| {
                FieldwatchError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                FieldwatchError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        Self::validate(raw)
    }

    fn validate(raw: RawConfig) -> FieldwatchResult<Self> {
        let source_url = raw.source_url.trim().to_string();
        if source_url.is_empty() {
            return Err(ConfigError::new("source_url must not be empty").into());
        }

        let channel_id = raw
            .channel_id
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|id| *id != 0)
            .ok_or_else(|| {
                ConfigError::new(format!(
                    "channel_id must be a non-zero Discord snowflake, got '{}'",
                    raw.channel_id
                ))
            })?;

        for (key, value) in [
            ("poll_interval_secs", raw.poll_interval_secs),
            ("cooldown_secs", raw.cooldown_secs),
            ("fetch_timeout_secs", raw.fetch_timeout_secs),
        ] {
            if value == 0 {
                return Err(ConfigError::new(format!("{key} must be greater than zero")).into());
            }
            if value > MAX_INTERVAL_SECS {
                return Err(ConfigError::new(format!(
                    "{key} must be at most {MAX_INTERVAL_SECS}, got {value}"
                ))
                .into());
            }
        }

        Ok(Self {
            source_url,
            channel_id,
            poll_interval_secs: raw.poll_interval_secs,
            cooldown_secs: raw.cooldown_secs,
            fetch_timeout_secs: raw.fetch_timeout_secs,
        })
    }

    /// Timing for the sync engine.
    pub fn sync_settings(&self) -> SyncSettings {
        SyncSettings {
            poll_interval: Duration::from_secs(self.poll_interval_secs),
            cooldown: Duration::from_secs(self.cooldown_secs),
        }
    }

    /// Timeout for one status fetch.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}
