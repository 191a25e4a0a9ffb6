use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::static_records::StaticRecord;
use super::store::StoreConfig;

/// Main configuration structure for Keystone DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Record store configuration (namespace, default TTL)
    #[serde(default)]
    pub store: StoreConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Authoritative records seeded at startup
    #[serde(default)]
    pub records: Vec<StaticRecord>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. keystone-dns.toml in current directory
    /// 3. /etc/keystone-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("keystone-dns.toml").exists() {
            Self::from_file("keystone-dns.toml")?
        } else if std::path::Path::new("/etc/keystone-dns/config.toml").exists() {
            Self::from_file("/etc/keystone-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Applies command-line overrides on top of whatever was loaded.
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }
        if self.store.namespace.is_empty() {
            return Err(ConfigError::Validation(
                "Store namespace cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}
