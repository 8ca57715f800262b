//! # Authgate Core
//!
//! Core token issuance and validation layer for the Authgate backend.
//! This crate contains the token domain entities, the token service that
//! signs and verifies credential pairs, the secure random token generator,
//! and the error types callers branch on.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
