mod config;
mod error;
mod gst_registry_config;
mod log_level;
mod logging_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use gst_registry_config::GstRegistryConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "GB_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".gb";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_REGISTRY_URL: &str = "http://127.0.0.1:8787";
const DEFAULT_REGISTRY_TIMEOUT_SECS: u64 = 10;
const MIN_REGISTRY_TIMEOUT_SECS: u64 = 1;
const MAX_REGISTRY_TIMEOUT_SECS: u64 = 120;
