//! Configuration constants.
//!
//! This module defines the constants used throughout the crate, including
//! resolver endpoints, timeouts, concurrency limits and wildcard heuristics.

use std::time::Duration;

use crate::discovery::WELL_KNOWN_SUBDOMAINS;

// Resolver backends
/// Backend used when the caller does not pick one
pub const DEFAULT_BACKEND: &str = "cloudflare";
/// Cloudflare DNS-over-HTTPS JSON endpoint
pub const CLOUDFLARE_DOH_URL: &str = "https://cloudflare-dns.com/dns-query";
/// Google DNS-over-HTTPS JSON endpoint
pub const GOOGLE_DOH_URL: &str = "https://dns.google/resolve";
/// Accept header value for the DoH JSON API
pub const DOH_CONTENT_TYPE: &str = "application/dns-json";
/// Program invoked by the `dig` backend
pub const DIG_PROGRAM: &str = "dig";
/// User-Agent sent with DoH requests
pub const USER_AGENT: &str = concat!("domain_records/", env!("CARGO_PKG_VERSION"));

// Network operation timeouts
/// Per-attempt timeout for the hickory-backed OS resolver, in seconds
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Upper bound for a single query, after which it counts as a failed group
pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 10;
/// `DEFAULT_QUERY_TIMEOUT_SECS` as a `Duration`
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(DEFAULT_QUERY_TIMEOUT_SECS);
/// HTTP timeout for DoH requests, in seconds
pub const HTTP_TIMEOUT_SECS: u64 = 8;

// Concurrency
/// Maximum queries in flight at once during one discovery run
pub const DEFAULT_MAX_CONCURRENT_QUERIES: usize = 20;

// Wildcard detection
/// Share of same-type records that must carry identical data (0.0-1.0)
pub const DEFAULT_WILDCARD_THRESHOLD: f64 = 0.15;
/// Minimum number of same-type records before a group can count as a wildcard.
/// Defaults to half the well-known probe list.
pub const DEFAULT_WILDCARD_MIN_SAMPLE_SIZE: usize = WELL_KNOWN_SUBDOMAINS.len() / 2;

// Name syntax limits (RFC 1035)
/// Maximum length of a domain name without the trailing dot
pub const MAX_DOMAIN_LENGTH: usize = 253;
/// Maximum length of a single label
pub const MAX_LABEL_LENGTH: usize = 63;
