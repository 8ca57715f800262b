//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing secrets, durations and issuer
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `security` - Password policy, lockout and hashing cost
//! - `server` - HTTP server and CORS configuration
//! - `validation` - Startup validation of the assembled configuration

pub mod auth;
pub mod database;
pub mod environment;
pub mod security;
pub mod server;
pub mod validation;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use security::SecurityConfig;
pub use server::{CorsConfig, ServerConfig};

/// Application identity settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppSettings {
    /// Application name
    pub name: String,

    /// Deployment environment
    pub environment: Environment,

    /// Debug mode flag
    pub debug: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        let environment = Environment::default();
        Self {
            name: String::from("authgate"),
            environment,
            debug: environment.is_debug(),
        }
    }
}

impl AppSettings {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let debug = std::env::var("DEBUG")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| environment.is_debug());

        Self {
            name: std::env::var("APP_NAME").unwrap_or_else(|_| String::from("authgate")),
            environment,
            debug,
        }
    }
}

/// Complete application configuration combining all sub-configurations
///
/// Populated once at process start and immutable thereafter. The process
/// must not start unless [`AppConfig::validate`] (and, in production,
/// [`AppConfig::validate_for_environment`]) passes.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Application identity settings
    pub app: AppSettings,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// JWT configuration
    pub jwt: JwtConfig,

    /// Security policy configuration
    pub security: SecurityConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let app = AppSettings::from_env();
        let logging = LoggingConfig::for_environment(app.environment);

        Self {
            app,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            security: SecurityConfig::from_env(),
            cors: CorsConfig::from_env(),
            logging,
        }
    }
}
