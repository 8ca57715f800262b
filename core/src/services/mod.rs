//! Business services for token issuance and validation

pub mod token;

pub use token::{generate_random_token, TokenService, TokenServiceConfig};
