//! HTTP client initialization.
//!
//! This module provides the shared HTTP client used by the DNS-over-HTTPS
//! backends.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{HTTP_TIMEOUT_SECS, USER_AGENT};
use reqwest::ClientBuilder;

/// Initializes the HTTP client for DoH queries.
///
/// Creates a `reqwest::Client` configured with:
/// - The crate's User-Agent header
/// - A request timeout of `HTTP_TIMEOUT_SECS`
///
/// The client keeps a connection pool, so one instance is shared by every
/// DoH backend and every concurrent query.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client() -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(Arc::new(client))
}
