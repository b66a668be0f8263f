/// Configuration loading from TOML file
use std::path::Path;
use chrono_tz::Tz;
use tracing::{info, warn};

use crate::error::{CountdownError, Result};
use crate::types::Config;

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CountdownError::ConfigError(format!("Failed to read config file: {}", e)))?;

    parse_config(&content)
}

/// Where a loaded config came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Defaults,
}

impl ConfigSource {
    /// Report the source; call after the subscriber is installed
    pub fn log(&self, path: &str) {
        match self {
            ConfigSource::File => info!("Configuration loaded from {}", path),
            ConfigSource::Defaults => warn!("Config file {} not found - using defaults", path),
        }
    }
}

/// Load the config file if present, otherwise fall back to defaults
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<(Config, ConfigSource)> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok((Config::default(), ConfigSource::Defaults));
    }
    Ok((load_config(path)?, ConfigSource::File))
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content)
        .map_err(|e| CountdownError::ConfigError(format!("Failed to parse config: {}", e)))?;

    // Validate config
    validate_config(&config)?;

    Ok(config)
}

/// Resolve the configured IANA timezone
pub fn timezone(config: &Config) -> Result<Tz> {
    config
        .timezone
        .parse::<Tz>()
        .map_err(|e| CountdownError::ConfigError(format!("Invalid timezone {}: {}", config.timezone, e)))
}

fn validate_config(config: &Config) -> Result<()> {
    timezone(config)?;

    if config.poll_interval_sec == 0 {
        return Err(CountdownError::ConfigError("poll_interval_sec must be > 0".to_string()));
    }

    if config.log_level.trim().is_empty() {
        return Err(CountdownError::ConfigError("log_level is empty".to_string()));
    }

    if let Some(file) = &config.holiday_file {
        if file.trim().is_empty() {
            return Err(CountdownError::ConfigError("holiday_file is empty".to_string()));
        }
    }

    Ok(())
}
