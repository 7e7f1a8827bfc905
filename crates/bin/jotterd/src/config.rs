//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `jotter.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::fmt;
use std::net::IpAddr;
use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Loopback address to bind to.
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Read and overall timeout applied to each request, in seconds.
    pub timeout_secs: u64,
}

/// Database configuration: a driver name plus a connection string.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Driver name (`sqlite3`, `sqlite` or `mysql`).
    pub driver: String,
    /// Connection URL understood by the driver.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Storage engines the daemon can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    /// Embedded file-backed `SQLite`.
    Sqlite,
    /// Networked `MySQL` server.
    MySql,
}

impl Driver {
    /// Resolve a configured driver name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedDriver`] for names no adapter serves.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "sqlite3" | "sqlite" => Ok(Self::Sqlite),
            "mysql" => Ok(Self::MySql),
            other => Err(ConfigError::UnsupportedDriver(other.to_string())),
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => f.write_str("sqlite3"),
            Self::MySql => f.write_str("mysql"),
        }
    }
}

impl Config {
    /// Load configuration from `jotter.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("jotter.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("JOTTER_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("JOTTER_PORT")
            && let Ok(port) = val.parse()
        {
            self.server.port = port;
        }
        if let Ok(val) = std::env::var("JOTTER_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("JOTTER_DATABASE_DRIVER") {
            self.database.driver = val;
        }
        if let Ok(val) = std::env::var("JOTTER_DATABASE_URL") {
            self.database.url = val;
        }
        if let Ok(val) = std::env::var("JOTTER_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.server.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "timeout_secs must be non-zero".to_string(),
            ));
        }
        if !is_loopback(&self.server.host) {
            return Err(ConfigError::Validation(format!(
                "host {:?} is not a loopback address",
                self.server.host
            )));
        }
        Driver::from_name(&self.database.driver)?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        let host = &self.server.host;
        if host.contains(':') && !host.starts_with('[') {
            format!("[{host}]:{}", self.server.port)
        } else {
            format!("{host}:{}", self.server.port)
        }
    }

    /// Return the per-request timeout.
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.timeout_secs)
    }

    /// Resolve the configured storage driver.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedDriver`] for unknown driver names.
    pub fn database_driver(&self) -> Result<Driver, ConfigError> {
        Driver::from_name(&self.database.driver)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

fn is_loopback(host: &str) -> bool {
    let host = host.trim_start_matches('[').trim_end_matches(']');
    host == "localhost" || host.parse::<IpAddr>().is_ok_and(|ip| ip.is_loopback())
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            timeout_secs: 15,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            driver: "sqlite3".to_string(),
            url: "sqlite:jotter.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "jotterd=info,jotter=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// No storage adapter is available for the configured driver.
    #[error("unsupported database driver {0:?}")]
    UnsupportedDriver(String),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
