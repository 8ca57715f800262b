//! Error types for token issuance and validation
//!
//! Validation exposes exactly three outcomes (`Expired`, `NotYetValid`,
//! `Invalid`); every other library-level failure collapses into `Invalid` so
//! callers never learn which internal check rejected a token.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    /// The token's expiry timestamp has passed
    #[error("token expired")]
    Expired,

    /// The current time precedes the token's not-before timestamp
    #[error("token not yet valid")]
    NotYetValid,

    /// Bad signature, malformed structure, wrong algorithm or type mismatch
    #[error("invalid token")]
    Invalid,

    /// The signing primitive itself failed during issuance
    #[error("token signing failed")]
    SigningFailed,

    /// A signing secret was missing at service construction
    ///
    /// This is startup-fatal: an auth service with no secret cannot safely
    /// serve traffic, and the calling process is expected to exit.
    #[error("missing {which} token secret")]
    MissingSecret { which: &'static str },

    /// The operating system entropy source was unavailable
    #[error("secure random source unavailable")]
    RandomSourceUnavailable,
}
