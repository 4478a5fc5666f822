//! Configuration management for the Producto service
//!
//! Defaults, then an optional TOML file, then environment overrides. The
//! binary loads `.env` into the environment first and validates last, after
//! its command line overrides.

use crate::core::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Available storage backend types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageType {
    /// MongoDB document store
    Mongo,
    /// In-process map, nothing persisted
    Memory,
}

impl std::str::FromStr for StorageType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StorageType::Mongo),
            "memory" => Ok(StorageType::Memory),
            _ => Err(Error::config(format!(
                "Invalid storage type: {}. Valid options: mongo, memory",
                s
            ))),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,

    /// Storage configuration
    pub storage: StorageConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// HTTP server bind address
    pub http_addr: SocketAddr,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage backend type
    pub storage_type: StorageType,

    /// MongoDB connection string
    pub mongo_uri: String,

    /// Database name
    pub database: String,

    /// Collection holding the products
    pub collection: String,

    /// Connect, server selection and startup ping timeout, in seconds
    pub connect_timeout_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty)
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: SocketAddr::from(([0, 0, 0, 0], 8084)),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            storage_type: StorageType::Mongo,
            mongo_uri: String::new(),
            database: String::new(),
            collection: "productos".to_string(),
            connect_timeout_secs: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl StorageConfig {
    /// Connection timeout as a `Duration`
    pub fn connect_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Config {
    /// Load configuration from an optional TOML file and the environment.
    ///
    /// Not validated yet; callers apply CLI overrides and then `validate`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Config::default(),
        };

        // Override with environment variables
        config.apply_env_overrides(|key| std::env::var(key).ok())?;

        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| Error::config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&contents)
            .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))
    }

    /// Apply environment variable overrides read through `var`
    pub fn apply_env_overrides<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server overrides
        if let Some(port) = var("PORT") {
            let port: u16 = port
                .parse()
                .map_err(|e| Error::config(format!("Invalid PORT: {}", e)))?;
            self.server.http_addr.set_port(port);
        }

        if let Some(addr) = var("HTTP_ADDR") {
            self.server.http_addr = addr
                .parse()
                .map_err(|e| Error::config(format!("Invalid HTTP address: {}", e)))?;
        }

        // Storage overrides
        if let Some(storage_type) = var("STORAGE_TYPE") {
            self.storage.storage_type = storage_type.parse()?;
        }

        if let Some(uri) = var("MONGO_URI") {
            self.storage.mongo_uri = uri;
        }

        if let Some(database) = var("DB_NAME") {
            self.storage.database = database;
        }

        if let Some(collection) = var("MONGO_COLLECTION") {
            self.storage.collection = collection;
        }

        // Logging overrides
        if let Some(level) = var("LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(format) = var("LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.storage.storage_type == StorageType::Mongo {
            if self.storage.mongo_uri.trim().is_empty() {
                return Err(Error::config("MONGO_URI is not set"));
            }
            if self.storage.database.trim().is_empty() {
                return Err(Error::config("DB_NAME is not set"));
            }
            if self.storage.collection.trim().is_empty() {
                return Err(Error::config("Collection name is empty"));
            }
            if self.storage.connect_timeout_secs == 0 {
                return Err(Error::config("Connect timeout must be greater than zero"));
            }
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => return Err(Error::config("Invalid log level")),
        }

        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            _ => return Err(Error::config("Invalid log format")),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.http_addr.port(), 8084);
        assert_eq!(config.storage.storage_type, StorageType::Mongo);
        assert_eq!(config.storage.collection, "productos");
        assert_eq!(config.storage.connect_timeout_secs, 10);
    }

    #[test]
    fn test_mongo_requires_uri_and_database() {
        let mut config = Config::default();
        assert!(matches!(config.validate(), Err(Error::Config(msg)) if msg.contains("MONGO_URI")));

        config.storage.mongo_uri = "mongodb://localhost:27017".into();
        assert!(matches!(config.validate(), Err(Error::Config(msg)) if msg.contains("DB_NAME")));

        config.storage.database = "tienda".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_memory_backend_needs_no_uri() {
        let mut config = Config::default();
        config.storage.storage_type = StorageType::Memory;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env_overrides(env(&[
                ("PORT", "9000"),
                ("MONGO_URI", "mongodb://db:27017"),
                ("DB_NAME", "tienda"),
                ("MONGO_COLLECTION", "items"),
                ("STORAGE_TYPE", "memory"),
                ("LOG_LEVEL", "debug"),
            ]))
            .unwrap();

        assert_eq!(config.server.http_addr, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(config.storage.mongo_uri, "mongodb://db:27017");
        assert_eq!(config.storage.database, "tienda");
        assert_eq!(config.storage.collection, "items");
        assert_eq!(config.storage.storage_type, StorageType::Memory);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_http_addr_wins_over_port() {
        let mut config = Config::default();
        config
            .apply_env_overrides(env(&[("PORT", "9000"), ("HTTP_ADDR", "127.0.0.1:7000")]))
            .unwrap();
        assert_eq!(config.server.http_addr, "127.0.0.1:7000".parse().unwrap());
    }

    #[test]
    fn test_invalid_env_values() {
        let mut config = Config::default();
        assert!(config.apply_env_overrides(env(&[("PORT", "puerto")])).is_err());
        assert!(config.apply_env_overrides(env(&[("STORAGE_TYPE", "disk")])).is_err());
    }

    #[test]
    fn test_invalid_log_settings() {
        let mut config = Config::default();
        config.storage.storage_type = StorageType::Memory;
        config.logging.level = "verbose".into();
        assert!(config.validate().is_err());

        config.logging.level = "info".into();
        config.logging.format = "xml".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_partial_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[server]
http_addr = "127.0.0.1:8100"

[storage]
storage_type = "Memory"
"#
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.server.http_addr, "127.0.0.1:8100".parse().unwrap());
        assert_eq!(config.storage.storage_type, StorageType::Memory);
        assert_eq!(config.storage.collection, "productos");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file("/nonexistent/producto-service.toml");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
