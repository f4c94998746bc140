//! DNS resolver initialization.
//!
//! This module provides functions to initialize the hickory resolver used by
//! the `system` backend.

use std::sync::Arc;
use std::time::Duration;

use crate::error_handling::InitializationError;
use hickory_resolver::TokioAsyncResolver;

/// Initializes the OS-configured DNS resolver.
///
/// Reads the system resolver configuration (`/etc/resolv.conf` or the
/// platform equivalent). If it can't be read, falls back to hickory's default
/// upstream configuration so the backend still works.
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across tasks.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if neither configuration
/// can be used.
pub fn init_resolver() -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    use hickory_resolver::config::{ResolverConfig, ResolverOpts};

    let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok(conf) => conf,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    if config.name_servers().is_empty() {
        return Err(InitializationError::DnsResolverError(
            "no name servers configured".to_string(),
        ));
    }

    opts.timeout = Duration::from_secs(crate::config::DNS_TIMEOUT_SECS);
    opts.attempts = 2; // Reduce retry attempts to fail faster
    // Set ndots to 0 to prevent search domain appending
    opts.ndots = 0;
    // Keep CNAME chain records in answers; discovery reports them too
    opts.preserve_intermediates = true;

    Ok(Arc::new(TokioAsyncResolver::tokio(config, opts)))
}
