//! Token service module for signed credential pairs
//!
//! This module handles all token-related operations including:
//! - JWT access/refresh token pair generation and verification
//! - Token-type enforcement on top of per-type signing secrets
//! - Cryptographically secure opaque token generation

mod config;
mod random;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use random::generate_random_token;
pub use service::TokenService;
