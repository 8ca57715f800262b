//! Domain entities for token-based authentication

pub mod entities;

pub use entities::*;
