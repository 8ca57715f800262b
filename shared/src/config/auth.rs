//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

use crate::utils::duration::parse_duration;

/// JWT authentication configuration
///
/// Access and refresh tokens are signed with separate secrets so a token of
/// one type can never verify against the channel of the other.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing access tokens
    pub access_secret: String,

    /// Secret key for signing refresh tokens
    pub refresh_secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// Known placeholder secret literals that must never reach production.
    ///
    /// Seeded with well-known template defaults; deployments can extend the
    /// list through configuration.
    #[serde(default = "default_placeholder_secrets")]
    pub placeholder_secrets: Vec<String>,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from("development-access-secret-please-change-in-production"),
            refresh_secret: String::from("development-refresh-secret-please-change-in-production"),
            access_token_expiry: 900,      // 15 minutes
            refresh_token_expiry: 604_800, // 7 days
            issuer: String::from("authgate"),
            placeholder_secrets: default_placeholder_secrets(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with explicit secrets
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86_400;
        self
    }

    /// Create from environment variables
    ///
    /// Reads `JWT_ACCESS_SECRET`, `JWT_REFRESH_SECRET`, `JWT_ACCESS_DURATION`
    /// (default `15m`), `JWT_REFRESH_DURATION` (default `7d`) and
    /// `JWT_ISSUER`. Malformed durations fall back to the defaults; the
    /// validation pass still gates the resulting configuration.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let access_token_expiry = std::env::var("JWT_ACCESS_DURATION")
            .ok()
            .and_then(|v| parse_duration(&v).ok())
            .unwrap_or(defaults.access_token_expiry);
        let refresh_token_expiry = std::env::var("JWT_REFRESH_DURATION")
            .ok()
            .and_then(|v| parse_duration(&v).ok())
            .unwrap_or(defaults.refresh_token_expiry);

        Self {
            access_secret: std::env::var("JWT_ACCESS_SECRET").unwrap_or(defaults.access_secret),
            refresh_secret: std::env::var("JWT_REFRESH_SECRET").unwrap_or(defaults.refresh_secret),
            access_token_expiry,
            refresh_token_expiry,
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
            placeholder_secrets: defaults.placeholder_secrets,
        }
    }

    /// Check whether either secret is a known placeholder literal
    pub fn is_using_placeholder_secret(&self) -> bool {
        self.placeholder_secrets
            .iter()
            .any(|p| p == &self.access_secret || p == &self.refresh_secret)
    }
}

fn default_placeholder_secrets() -> Vec<String> {
    vec![
        String::from("development-access-secret-please-change-in-production"),
        String::from("development-refresh-secret-please-change-in-production"),
        String::from("your-secret-key-change-in-production"),
    ]
}
