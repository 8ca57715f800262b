//! Configuration for the token service

use chrono::Duration;

use ag_shared::AppConfig;

/// Configuration for the token service
///
/// Values are copied out of a previously validated [`AppConfig`] at
/// construction time; the service never reads process-wide state afterwards.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret for signing and verifying access tokens
    pub access_secret: String,
    /// Secret for signing and verifying refresh tokens
    pub refresh_secret: String,
    /// Access token lifetime
    pub access_token_expiry: Duration,
    /// Refresh token lifetime
    pub refresh_token_expiry: Duration,
    /// Issuer claim embedded in and required of every token
    pub issuer: String,
}

impl TokenServiceConfig {
    /// Copies the token-relevant settings out of a validated application
    /// configuration
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            access_secret: config.jwt.access_secret.clone(),
            refresh_secret: config.jwt.refresh_secret.clone(),
            access_token_expiry: Duration::seconds(config.jwt.access_token_expiry),
            refresh_token_expiry: Duration::seconds(config.jwt.refresh_token_expiry),
            issuer: config.jwt.issuer.clone(),
        }
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from("development-access-secret-please-change-in-production"),
            refresh_secret: String::from("development-refresh-secret-please-change-in-production"),
            access_token_expiry: Duration::minutes(15),
            refresh_token_expiry: Duration::days(7),
            issuer: String::from("authgate"),
        }
    }
}
