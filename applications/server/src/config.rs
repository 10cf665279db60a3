/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_logging")]
    pub logging: LoggingSettings,

    #[serde(default = "default_store")]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// Directory for the daily rolling log files
    #[serde(default = "default_log_directory")]
    pub directory: PathBuf,

    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreSettings {
    /// Start with the two sample users
    #[serde(default = "default_seed")]
    pub seed: bool,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// With no explicit path, `config.toml` in the working directory is used
    /// if present. Environment variables such as `VISION_SERVER__PORT`
    /// override file values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (prefixed with VISION_)
        settings = settings.add_source(
            config::Environment::with_prefix("VISION")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config(
                "Port must be non-zero (set VISION_SERVER__PORT)".to_string(),
            ));
        }

        if self.logging.file_prefix.trim().is_empty() {
            return Err(ServerError::Config(
                "Log file prefix must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_logging() -> LoggingSettings {
    LoggingSettings {
        directory: default_log_directory(),
        file_prefix: default_file_prefix(),
    }
}

fn default_log_directory() -> PathBuf {
    PathBuf::from("../Logs")
}

fn default_file_prefix() -> String {
    "log".to_string()
}

fn default_store() -> StoreSettings {
    StoreSettings {
        seed: default_seed(),
    }
}

fn default_seed() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            logging: default_logging(),
            store: default_store(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ServerConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.file_prefix, "log");
        assert!(config.store.seed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut config = ServerConfig::default();
        config.server.port = 0;
        assert!(matches!(config.validate(), Err(ServerError::Config(_))));
    }

    #[test]
    fn blank_prefix_is_rejected() {
        let mut config = ServerConfig::default();
        config.logging.file_prefix = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
