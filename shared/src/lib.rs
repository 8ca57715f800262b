//! Shared configuration and common types for the Authgate server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types for every operational concern
//! - Configuration validation (baseline and production-hardening passes)
//! - Configuration error types
//! - Utility functions (duration string parsing)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, JwtConfig, LogFormat,
    LoggingConfig, SecurityConfig, ServerConfig,
};
pub use errors::{ConfigError, ConfigResult};
pub use utils::duration::parse_duration;
