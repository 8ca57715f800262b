//! Main token service implementation

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use tracing::debug;

use crate::domain::entities::token::{Claims, TokenPair, TokenType};
use crate::errors::TokenError;

use super::config::TokenServiceConfig;

/// Service for issuing and validating signed credential pairs
///
/// Holds one encoding/decoding key per token type, built from distinct
/// secrets, plus a pinned HS256 validation policy. All state is set at
/// construction and never mutated, so the service is safe to share across
/// threads without locking.
pub struct TokenService {
    config: TokenServiceConfig,
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration, copied from a validated
    ///   application configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or [`TokenError::MissingSecret`] if either
    /// secret is empty. A missing secret is startup-fatal by caller choice:
    /// the process is expected to exit rather than serve traffic.
    pub fn new(config: TokenServiceConfig) -> Result<Self, TokenError> {
        if config.access_secret.is_empty() {
            return Err(TokenError::MissingSecret { which: "access" });
        }
        if config.refresh_secret.is_empty() {
            return Err(TokenError::MissingSecret { which: "refresh" });
        }

        let access_encoding_key = EncodingKey::from_secret(config.access_secret.as_bytes());
        let access_decoding_key = DecodingKey::from_secret(config.access_secret.as_bytes());
        let refresh_encoding_key = EncodingKey::from_secret(config.refresh_secret.as_bytes());
        let refresh_decoding_key = DecodingKey::from_secret(config.refresh_secret.as_bytes());

        // Pinning the algorithm rejects "none"/asymmetric downgrades before
        // any signature check. Expiry and not-before are exact: no leeway.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 0;

        Ok(Self {
            config,
            access_encoding_key,
            access_decoding_key,
            refresh_encoding_key,
            refresh_decoding_key,
            validation,
        })
    }

    /// Issues a new access/refresh token pair for a user
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's stable identifier
    /// * `email` - The user's email address
    /// * `roles` - Roles granted to the user
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - Both signed tokens with their expiry timestamps
    /// * `Err(TokenError::SigningFailed)` - The signing primitive failed
    pub fn issue_pair(
        &self,
        user_id: &str,
        email: &str,
        roles: Vec<String>,
    ) -> Result<TokenPair, TokenError> {
        self.issue_pair_at(user_id, email, roles, Utc::now())
    }

    /// Issues a pair with an explicit issuance instant
    ///
    /// Both tokens share the same `iat`/`nbf`; each gets its own `jti` and
    /// is signed with the secret keyed to its type.
    pub(crate) fn issue_pair_at(
        &self,
        user_id: &str,
        email: &str,
        roles: Vec<String>,
        now: DateTime<Utc>,
    ) -> Result<TokenPair, TokenError> {
        let access_claims = Claims::new(
            user_id,
            email,
            roles.clone(),
            TokenType::Access,
            &self.config.issuer,
            now,
            self.config.access_token_expiry,
        );
        let refresh_claims = Claims::new(
            user_id,
            email,
            roles,
            TokenType::Refresh,
            &self.config.issuer,
            now,
            self.config.refresh_token_expiry,
        );

        let access_token = self.encode_jwt(&access_claims, &self.access_encoding_key)?;
        let refresh_token = self.encode_jwt(&refresh_claims, &self.refresh_encoding_key)?;

        debug!(user_id, "issued token pair");

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            now + self.config.access_token_expiry,
            now + self.config.refresh_token_expiry,
        ))
    }

    /// Validates an access token and returns its claims
    ///
    /// # Arguments
    ///
    /// * `token` - The JWT access token to validate
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError)` - `Expired`, `NotYetValid` or `Invalid`
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify(token, &self.access_decoding_key, TokenType::Access)
    }

    /// Validates a refresh token and returns its claims
    ///
    /// # Arguments
    ///
    /// * `token` - The JWT refresh token to validate
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if valid
    /// * `Err(TokenError)` - `Expired`, `NotYetValid` or `Invalid`
    pub fn validate_refresh_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify(token, &self.refresh_decoding_key, TokenType::Refresh)
    }

    /// Encodes claims into a compact-serialized HS256 JWT
    fn encode_jwt(&self, claims: &Claims, key: &EncodingKey) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, key)
            .map_err(|_| TokenError::SigningFailed)
    }

    /// Decodes a token with the key for the expected type, then enforces the
    /// embedded token type.
    ///
    /// The type check after signature verification is defense in depth on
    /// top of per-type secrets: even a token that happens to verify must
    /// declare the expected type.
    fn verify(
        &self,
        token: &str,
        key: &DecodingKey,
        expected: TokenType,
    ) -> Result<Claims, TokenError> {
        let token_data =
            decode::<Claims>(token, key, &self.validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::ImmatureSignature => TokenError::NotYetValid,
                _ => TokenError::Invalid,
            })?;

        if token_data.claims.token_type != expected {
            debug!(expected = %expected, "rejected token with mismatched type");
            return Err(TokenError::Invalid);
        }

        Ok(token_data.claims)
    }
}
