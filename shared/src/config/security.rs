//! Security policy configuration

use serde::{Deserialize, Serialize};

/// Security policy configuration for password handling and account lockout
///
/// These settings gate downstream password-handling collaborators; they are
/// validated alongside the rest of the configuration at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SecurityConfig {
    /// Minimum password length
    pub password_min_length: usize,

    /// Maximum failed login attempts before lockout
    pub max_login_attempts: u32,

    /// Account lockout duration in seconds
    pub lockout_duration: u64,

    /// Session timeout in seconds
    pub session_timeout: u64,

    /// Bcrypt cost factor for password hashing (valid range 4-31)
    pub bcrypt_cost: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            password_min_length: 8,
            max_login_attempts: 5,
            lockout_duration: 900,   // 15 minutes
            session_timeout: 3600,   // 1 hour
            bcrypt_cost: 12,
        }
    }
}

impl SecurityConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            password_min_length: std::env::var("SECURITY_PASSWORD_MIN_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.password_min_length),
            max_login_attempts: std::env::var("SECURITY_MAX_LOGIN_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_login_attempts),
            lockout_duration: std::env::var("SECURITY_LOCKOUT_DURATION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.lockout_duration),
            session_timeout: std::env::var("SECURITY_SESSION_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.session_timeout),
            bcrypt_cost: std::env::var("SECURITY_BCRYPT_COST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.bcrypt_cost),
        }
    }
}
