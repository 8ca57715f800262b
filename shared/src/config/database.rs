//! Database configuration module

use serde::{Deserialize, Serialize};

/// Database configuration for PostgreSQL/MySQL/SQLite connections
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database driver (postgres, mysql, sqlite)
    pub driver: String,

    /// Database host
    pub host: String,

    /// Database port
    pub port: u16,

    /// Database user
    pub username: String,

    /// Database password
    pub password: String,

    /// Database name
    pub name: String,

    /// SSL mode (disable, prefer, require, verify-full)
    #[serde(default = "default_ssl_mode")]
    pub ssl_mode: String,

    /// Maximum number of open connections in the pool
    pub max_open_conns: u32,

    /// Maximum number of idle connections in the pool
    pub max_idle_conns: u32,

    /// Maximum lifetime of a connection in seconds
    #[serde(default = "default_conn_max_lifetime")]
    pub conn_max_lifetime: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            driver: String::from("postgres"),
            host: String::from("localhost"),
            port: 5432,
            username: String::from("authgate"),
            password: String::new(),
            name: String::from("authgate"),
            ssl_mode: default_ssl_mode(),
            max_open_conns: 25,
            max_idle_conns: 5,
            conn_max_lifetime: default_conn_max_lifetime(),
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            driver: std::env::var("DATABASE_DRIVER").unwrap_or(defaults.driver),
            host: std::env::var("DATABASE_HOST").unwrap_or(defaults.host),
            port: std::env::var("DATABASE_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            username: std::env::var("DATABASE_USER").unwrap_or(defaults.username),
            password: std::env::var("DATABASE_PASSWORD").unwrap_or(defaults.password),
            name: std::env::var("DATABASE_NAME").unwrap_or(defaults.name),
            ssl_mode: std::env::var("DATABASE_SSL_MODE").unwrap_or(defaults.ssl_mode),
            max_open_conns: std::env::var("DATABASE_MAX_OPEN_CONNS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_open_conns),
            max_idle_conns: std::env::var("DATABASE_MAX_IDLE_CONNS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_idle_conns),
            conn_max_lifetime: defaults.conn_max_lifetime,
        }
    }

    /// Check if SSL is disabled for this connection
    pub fn is_ssl_disabled(&self) -> bool {
        self.ssl_mode == "disable"
    }
}

fn default_ssl_mode() -> String {
    String::from("prefer")
}

fn default_conn_max_lifetime() -> u64 {
    1800 // 30 minutes
}
