//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, timeouts, limits, etc.)
//! - Discovery options and wildcard parameters
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{DiscoveryOptions, LogFormat, LogLevel, Opt, OutputFormat, WildcardConfig};
