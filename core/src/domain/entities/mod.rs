//! Domain entity definitions

pub mod token;

pub use token::{Claims, TokenPair, TokenType};
