//! Runtime settings for the food donation service.
//!
//! Values come from an optional `config/foodshare.toml` and are overridden by
//! `FOODSHARE_*` environment variables (`FOODSHARE_PORT=9000`,
//! `FOODSHARE_DATABASE_PATH=/var/lib/foodshare.db`, ...). Every key has a default,
//! so running with no configuration at all is valid.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

const CONFIG_FILE: &str = "config/foodshare";
const ENV_PREFIX: &str = "FOODSHARE";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// SQLite database file holding the four donation tables.
    pub database_path: PathBuf,
    /// Default `env_logger` filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Upper bound for JSON request bodies.
    pub json_limit_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: PathBuf::from("food_wastage.db"),
            log_level: "info".to_string(),
            json_limit_bytes: 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// Loads the file (if present) and the environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn empty_sources_fall_back_to_defaults() {
        let cfg = AppConfig::from_builder(Config::builder()).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.database_path, PathBuf::from("food_wastage.db"));
    }

    #[test]
    fn file_values_override_defaults() {
        let builder = Config::builder().add_source(File::from_str(
            "port = 9090\ndatabase_path = \"/tmp/donations.db\"",
            FileFormat::Toml,
        ));
        let cfg = AppConfig::from_builder(builder).unwrap();
        assert_eq!(cfg.port, 9090);
        assert_eq!(cfg.database_path, PathBuf::from("/tmp/donations.db"));
        assert_eq!(cfg.host, "127.0.0.1");
    }

    #[test]
    fn malformed_port_is_rejected() {
        let builder = Config::builder().add_source(File::from_str(
            "port = \"not-a-port\"",
            FileFormat::Toml,
        ));
        assert!(AppConfig::from_builder(builder).is_err());
    }
}
