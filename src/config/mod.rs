pub mod loader;

pub use loader::{load_config, load_config_or_default, parse_config, timezone, ConfigSource};
