//! Token error types and result alias.

mod types;

pub use types::TokenError;

pub type TokenResult<T> = Result<T, TokenError>;
