//! Cryptographically secure opaque token generation

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::TokenError;

/// Generates a URL-safe opaque token from `length` random bytes
///
/// Bytes come from the operating system CSPRNG and are encoded as base64url
/// without padding. There is no fallback to a weaker source: if the entropy
/// source is unavailable the call fails with
/// [`TokenError::RandomSourceUnavailable`].
///
/// # Arguments
///
/// * `length` - Number of random bytes to draw; must be positive
pub fn generate_random_token(length: usize) -> Result<String, TokenError> {
    let mut bytes = vec![0u8; length];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|_| TokenError::RandomSourceUnavailable)?;

    Ok(URL_SAFE_NO_PAD.encode(&bytes))
}
