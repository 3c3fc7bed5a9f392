use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    GstRegistryConfig, LoggingConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub gst_registry: GstRegistryConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for GB_CONFIG_DIR env var, else use ./.gb/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply GB_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: GB_CONFIG_DIR env var > ./.gb/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.logging.validate()?;
        self.gst_registry.validate()?;
        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Log configuration summary (NEVER logs the registry api key).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  gst_registry: {} (timeout={}s, api_key: {})",
            self.gst_registry.base_url,
            self.gst_registry.timeout_secs,
            if self.gst_registry.api_key.is_some() {
                "set"
            } else {
                "none"
            }
        );
    }

    fn apply_env_overrides(&mut self) {
        // Logging
        Self::apply_env_parse("GB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("GB_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("GB_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("GB_LOG_FILE", &mut self.logging.file);

        // GST registry
        Self::apply_env_string("GB_GST_REGISTRY_URL", &mut self.gst_registry.base_url);
        Self::apply_env_option_string("GB_GST_REGISTRY_API_KEY", &mut self.gst_registry.api_key);
        Self::apply_env_parse(
            "GB_GST_REGISTRY_TIMEOUT_SECS",
            &mut self.gst_registry.timeout_secs,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
