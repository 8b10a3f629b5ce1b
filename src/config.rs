use crate::constants::{
    APP_NAME, CONFIG_ENV_VAR, DEFAULT_GREETING, DEFAULT_LOG_LEVEL, DEFAULT_REPLY_DELAY_MS,
    DEFAULT_RESPONSES, DEFAULT_TICK_RATE_MS, LOG_LEVELS,
};
use crate::errors::{BuddyError, BuddyResult};
use crate::theme::Theme;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, path::PathBuf, time::Duration};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub reply_delay_ms: u64,
    pub theme: Theme,
    pub log_level: String,
    pub tick_rate_ms: u64,
    pub greeting: String,
    pub responses: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            theme: Theme::Dark,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            greeting: DEFAULT_GREETING.to_string(),
            responses: DEFAULT_RESPONSES.iter().map(|r| r.to_string()).collect(),
        }
    }
}

impl Config {
    /// Loads the config from `$STARTUP_BUDDY_CONFIG` or the default location,
    /// writing a default file first if none exists.
    pub fn load() -> BuddyResult<Self> {
        let path = config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> BuddyResult<Self> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            info!("Wrote default config to {}", path.display());
            return Ok(config);
        }

        let config_str = fs::read_to_string(path).map_err(|e| {
            BuddyError::config_error(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| BuddyError::config_error(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> BuddyResult<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let config_str = serde_json::to_string_pretty(self)?;
        fs::write(path, config_str)?;
        Ok(())
    }

    pub fn validate(&self) -> BuddyResult<()> {
        if self.reply_delay_ms == 0 {
            return Err(BuddyError::config_error(
                "reply_delay_ms must be greater than 0",
            ));
        }

        if self.tick_rate_ms == 0 {
            return Err(BuddyError::config_error("tick_rate_ms must be greater than 0"));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(BuddyError::config_error(format!(
                "log_level must be one of {}",
                LOG_LEVELS.join(", ")
            )));
        }

        if self.greeting.trim().is_empty() {
            return Err(BuddyError::config_error("greeting must not be empty"));
        }

        if self.responses.is_empty() || self.responses.iter().any(|r| r.trim().is_empty()) {
            return Err(BuddyError::config_error(
                "responses must contain at least one reply and no blank entries",
            ));
        }

        Ok(())
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Directory holding the config file and the log files.
pub fn config_dir() -> BuddyResult<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| BuddyError::config_error("Could not determine config directory"))?;
    Ok(base.join(APP_NAME))
}

fn config_path() -> BuddyResult<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    Ok(config_dir()?.join("config.json"))
}
