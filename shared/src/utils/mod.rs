//! Utility functions shared across server modules

pub mod duration;

pub use duration::parse_duration;
