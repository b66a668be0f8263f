/// Tracing subscriber setup shared by the binaries
use tracing_subscriber::EnvFilter;

use crate::types::{Config, LogFormat};

/// `RUST_LOG` wins over the configured level
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("holiday_countdown={},{}", config.log_level, config.log_level))
    })
}

pub fn init_logging(config: &Config) {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(config));

    let result = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    if let Err(e) = result {
        eprintln!("Logging already initialized: {}", e);
    }
}
