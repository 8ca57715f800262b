//! Configuration error types
//!
//! Configuration errors are startup-fatal: the process must refuse to start
//! rather than serve traffic with a partially valid configuration.

use thiserror::Error;

/// Errors produced by configuration validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A single violated rule, reported fail-fast by the baseline pass
    #[error("invalid {section} configuration: {message}")]
    Invalid {
        section: &'static str,
        message: String,
    },

    /// Every violated production rule, aggregated into one report
    #[error("production configuration violations:\n{report}")]
    ProductionViolations { report: String },
}

impl ConfigError {
    /// Creates a fail-fast validation error for a configuration section
    pub fn invalid(section: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            section,
            message: message.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
