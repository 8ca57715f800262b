//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token type reported to clients in a [`TokenPair`]
pub const BEARER_TOKEN_TYPE: &str = "Bearer";

/// Distinguishes access tokens from refresh tokens
///
/// The type is embedded in the claims and checked after signature
/// verification, independently of the per-type signing secrets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Short-lived token presented on every authenticated request
    Access,
    /// Long-lived token used only to obtain a new pair
    Refresh,
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenType::Access => write!(f, "access"),
            TokenType::Refresh => write!(f, "refresh"),
        }
    }
}

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// User email
    pub email: String,

    /// Roles granted to the user, in assignment order
    pub roles: Vec<String>,

    /// Whether this token is an access or refresh token
    pub token_type: TokenType,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Issuer
    pub iss: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,
}

impl Claims {
    /// Creates new claims for a token issued at `now` with lifetime `ttl`
    ///
    /// Sets `iat` and `nbf` to `now`, `exp` to `now + ttl`, and generates a
    /// fresh UUID for `jti`.
    pub fn new(
        user_id: &str,
        email: &str,
        roles: Vec<String>,
        token_type: TokenType,
        issuer: &str,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        let expiry = now + ttl;

        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            roles,
            token_type,
            jti: Uuid::new_v4().to_string(),
            iss: issuer.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.exp
    }

    /// Checks if the claims are currently valid (after nbf, before exp)
    pub fn is_valid(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.nbf && now < self.exp
    }
}

/// Token pair returned to the client on successful issuance
///
/// Ownership transfers to the caller; the service retains no per-token
/// state. Validity is determined solely by signature, embedded claims and
/// wall-clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed JWT access token
    pub access_token: String,

    /// Signed JWT refresh token
    pub refresh_token: String,

    /// Timestamp when the access token expires
    pub access_expires_at: DateTime<Utc>,

    /// Timestamp when the refresh token expires
    pub refresh_expires_at: DateTime<Utc>,

    /// Token type for the Authorization header, always "Bearer"
    pub token_type: String,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_at: DateTime<Utc>,
        refresh_expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_at,
            refresh_expires_at,
            token_type: BEARER_TOKEN_TYPE.to_string(),
        }
    }
}
