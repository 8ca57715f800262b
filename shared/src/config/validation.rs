//! Startup validation of the assembled configuration
//!
//! Two passes gate process start. The baseline pass runs an ordered sequence
//! of per-section checks and fails on the first violation. The
//! environment-aware pass is a no-op outside production; in production it
//! aggregates every violated hardening rule into a single report so
//! operators see all risks at once.

use super::{AppConfig, AppSettings, DatabaseConfig, JwtConfig, SecurityConfig, ServerConfig};
use crate::errors::{ConfigError, ConfigResult};

/// Minimum length for JWT signing secrets, in characters
pub const MIN_SECRET_LENGTH: usize = 32;

/// Minimum bcrypt cost factor accepted in production
pub const MIN_PRODUCTION_BCRYPT_COST: u32 = 10;

/// Database drivers supported by the connection layer
const SUPPORTED_DRIVERS: &[&str] = &["postgres", "mysql", "sqlite"];

impl AppConfig {
    /// Validates the configuration, failing on the first violated rule.
    ///
    /// Checks run in a fixed order: app, server, database, JWT, security.
    /// Pure inspection; nothing is ever silently corrected.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_app(&self.app)?;
        validate_server(&self.server)?;
        validate_database(&self.database)?;
        validate_jwt(&self.jwt)?;
        validate_security(&self.security)?;
        Ok(())
    }

    /// Validates production-only hardening rules, aggregating all violations.
    ///
    /// Outside production this is a no-op. In production every violated rule
    /// is collected into one [`ConfigError::ProductionViolations`] report,
    /// one rule per line.
    pub fn validate_for_environment(&self) -> ConfigResult<()> {
        if !self.app.environment.is_production() {
            return Ok(());
        }

        let mut violations: Vec<String> = Vec::new();

        if self.app.debug {
            violations.push(String::from("debug mode must be disabled in production"));
        }
        if self.jwt.is_using_placeholder_secret() {
            violations.push(String::from(
                "JWT secrets must not be placeholder values in production",
            ));
        }
        if self.database.is_ssl_disabled() {
            violations.push(String::from(
                "database SSL must not be disabled in production",
            ));
        }
        if self.cors.allows_any_origin() {
            violations.push(String::from(
                "CORS must not allow all origins (\"*\") in production",
            ));
        }
        if self.security.bcrypt_cost < MIN_PRODUCTION_BCRYPT_COST {
            violations.push(format!(
                "bcrypt cost factor should be at least {} in production, got {}",
                MIN_PRODUCTION_BCRYPT_COST, self.security.bcrypt_cost
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::ProductionViolations {
                report: violations.join("\n"),
            })
        }
    }
}

fn validate_app(app: &AppSettings) -> ConfigResult<()> {
    if app.name.is_empty() {
        return Err(ConfigError::invalid("app", "application name is required"));
    }
    Ok(())
}

fn validate_server(server: &ServerConfig) -> ConfigResult<()> {
    if server.host.is_empty() {
        return Err(ConfigError::invalid("server", "host is required"));
    }
    if server.port == 0 {
        return Err(ConfigError::invalid(
            "server",
            "port must be between 1 and 65535",
        ));
    }
    Ok(())
}

fn validate_database(database: &DatabaseConfig) -> ConfigResult<()> {
    if !SUPPORTED_DRIVERS.contains(&database.driver.as_str()) {
        return Err(ConfigError::invalid(
            "database",
            format!(
                "driver must be one of {}, got '{}'",
                SUPPORTED_DRIVERS.join(", "),
                database.driver
            ),
        ));
    }
    if database.host.is_empty() {
        return Err(ConfigError::invalid("database", "host is required"));
    }
    if database.port == 0 {
        return Err(ConfigError::invalid(
            "database",
            "port must be between 1 and 65535",
        ));
    }
    if database.username.is_empty() {
        return Err(ConfigError::invalid("database", "username is required"));
    }
    if database.name.is_empty() {
        return Err(ConfigError::invalid("database", "database name is required"));
    }
    if database.max_open_conns < 1 {
        return Err(ConfigError::invalid(
            "database",
            "max_open_conns must be at least 1",
        ));
    }
    if database.max_idle_conns < 1 {
        return Err(ConfigError::invalid(
            "database",
            "max_idle_conns must be at least 1",
        ));
    }
    if database.max_idle_conns > database.max_open_conns {
        return Err(ConfigError::invalid(
            "database",
            format!(
                "max_idle_conns ({}) must not exceed max_open_conns ({})",
                database.max_idle_conns, database.max_open_conns
            ),
        ));
    }
    Ok(())
}

fn validate_jwt(jwt: &JwtConfig) -> ConfigResult<()> {
    if jwt.access_secret.is_empty() {
        return Err(ConfigError::invalid("jwt", "access secret is required"));
    }
    if jwt.refresh_secret.is_empty() {
        return Err(ConfigError::invalid("jwt", "refresh secret is required"));
    }
    if jwt.access_secret.len() < MIN_SECRET_LENGTH {
        return Err(ConfigError::invalid(
            "jwt",
            format!(
                "access secret must be at least {} characters",
                MIN_SECRET_LENGTH
            ),
        ));
    }
    if jwt.refresh_secret.len() < MIN_SECRET_LENGTH {
        return Err(ConfigError::invalid(
            "jwt",
            format!(
                "refresh secret must be at least {} characters",
                MIN_SECRET_LENGTH
            ),
        ));
    }
    if jwt.access_secret == jwt.refresh_secret {
        return Err(ConfigError::invalid(
            "jwt",
            "access and refresh secrets must be distinct",
        ));
    }
    if jwt.access_token_expiry <= 0 {
        return Err(ConfigError::invalid(
            "jwt",
            "access token duration must be positive",
        ));
    }
    if jwt.refresh_token_expiry <= 0 {
        return Err(ConfigError::invalid(
            "jwt",
            "refresh token duration must be positive",
        ));
    }
    if jwt.refresh_token_expiry <= jwt.access_token_expiry {
        return Err(ConfigError::invalid(
            "jwt",
            "refresh token duration must be greater than access token duration",
        ));
    }
    if jwt.issuer.is_empty() {
        return Err(ConfigError::invalid("jwt", "issuer is required"));
    }
    Ok(())
}

fn validate_security(security: &SecurityConfig) -> ConfigResult<()> {
    if security.password_min_length < 8 {
        return Err(ConfigError::invalid(
            "security",
            "password minimum length must be at least 8",
        ));
    }
    if security.max_login_attempts < 1 {
        return Err(ConfigError::invalid(
            "security",
            "max login attempts must be at least 1",
        ));
    }
    if security.lockout_duration == 0 {
        return Err(ConfigError::invalid(
            "security",
            "lockout duration must be positive",
        ));
    }
    if security.session_timeout == 0 {
        return Err(ConfigError::invalid(
            "security",
            "session timeout must be positive",
        ));
    }
    if !(4..=31).contains(&security.bcrypt_cost) {
        return Err(ConfigError::invalid(
            "security",
            format!(
                "bcrypt cost factor must be between 4 and 31, got {}",
                security.bcrypt_cost
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.jwt.access_secret = String::from("test-access-secret-0123456789-0123456789");
        config.jwt.refresh_secret = String::from("test-refresh-secret-0123456789-0123456789");
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_access_secret() {
        let mut config = valid_config();
        config.jwt.access_secret = String::new();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { section: "jwt", .. }));
    }

    #[test]
    fn test_rejects_short_secrets() {
        let mut config = valid_config();
        config.jwt.access_secret = String::from("too-short");
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.jwt.refresh_secret = String::from("too-short");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_identical_secrets() {
        let mut config = valid_config();
        config.jwt.refresh_secret = config.jwt.access_secret.clone();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("distinct"));
    }

    #[test]
    fn test_rejects_refresh_not_longer_than_access() {
        let mut config = valid_config();
        config.jwt.access_token_expiry = 900;
        config.jwt.refresh_token_expiry = 900;
        assert!(config.validate().is_err());

        config.jwt.refresh_token_expiry = 600;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_nonpositive_durations() {
        let mut config = valid_config();
        config.jwt.access_token_expiry = 0;
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.jwt.refresh_token_expiry = -1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_issuer() {
        let mut config = valid_config();
        config.jwt.issuer = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_database_driver() {
        let mut config = valid_config();
        config.database.driver = String::from("oracle");
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                section: "database",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_idle_conns_above_open_conns() {
        let mut config = valid_config();
        config.database.max_open_conns = 5;
        config.database.max_idle_conns = 10;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_idle_conns"));
    }

    #[test]
    fn test_rejects_zero_pool_sizes() {
        let mut config = valid_config();
        config.database.max_open_conns = 0;
        config.database.max_idle_conns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_server_port() {
        let mut config = valid_config();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_weak_password_policy() {
        let mut config = valid_config();
        config.security.password_min_length = 6;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bcrypt_cost_out_of_range() {
        let mut config = valid_config();
        config.security.bcrypt_cost = 3;
        assert!(config.validate().is_err());

        config.security.bcrypt_cost = 32;
        assert!(config.validate().is_err());

        config.security.bcrypt_cost = 4;
        assert!(config.validate().is_ok());

        config.security.bcrypt_cost = 31;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_production_pass_aggregates_all_violations() {
        let mut config = valid_config();
        config.app.environment = Environment::Production;
        config.app.debug = true;
        config.cors.allowed_origins = vec![String::from("*")];

        let err = config.validate_for_environment().unwrap_err();
        let report = err.to_string();
        assert!(report.contains("debug mode"));
        assert!(report.contains("origins"));
    }

    #[test]
    fn test_production_pass_rejects_placeholder_secrets_and_disabled_ssl() {
        let mut config = AppConfig::default();
        config.app.environment = Environment::Production;
        config.app.debug = false;
        config.database.ssl_mode = String::from("disable");
        config.security.bcrypt_cost = 8;

        let err = config.validate_for_environment().unwrap_err();
        let report = err.to_string();
        assert!(report.contains("placeholder"));
        assert!(report.contains("SSL"));
        assert!(report.contains("bcrypt"));
    }

    #[test]
    fn test_production_pass_accepts_hardened_config() {
        let mut config = valid_config();
        config.app.environment = Environment::Production;
        config.app.debug = false;
        config.cors.allowed_origins = vec![String::from("https://app.example.com")];
        assert!(config.validate_for_environment().is_ok());
    }

    #[test]
    fn test_environment_pass_is_noop_outside_production() {
        let mut config = valid_config();
        config.app.environment = Environment::Development;
        config.app.debug = true;
        config.cors.allowed_origins = vec![String::from("*")];
        assert!(config.validate_for_environment().is_ok());

        config.app.environment = Environment::Staging;
        assert!(config.validate_for_environment().is_ok());
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let config = valid_config();
        let json = serde_json::to_string(&config).unwrap();
        let restored: AppConfig = serde_json::from_str(&json).unwrap();
        assert!(restored.validate().is_ok());
        assert_eq!(restored.jwt.access_secret, config.jwt.access_secret);
    }
}
