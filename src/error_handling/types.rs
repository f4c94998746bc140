//! Error type definitions.
//!
//! This module defines the error types and query outcome categories used
//! throughout the crate.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use crate::record::RecordType;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client used by DoH backends.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Errors raised by a resolver backend for a single query.
///
/// Inside a discovery run these are logged and counted, never propagated;
/// `discover_by_type` returns them to the caller.
#[derive(Error, Debug)]
pub enum ResolverError {
    /// No backend is registered under the requested key.
    #[error("Unknown resolver backend: {0}")]
    UnknownBackend(String),

    /// Transport-level HTTP failure talking to a DoH endpoint.
    #[error("HTTP request failed: {0}")]
    Http(#[from] ReqwestError),

    /// DoH endpoint answered with a non-success HTTP status.
    #[error("HTTP status {0} from resolver")]
    HttpStatus(u16),

    /// The DNS response carried a failure RCODE other than NXDOMAIN.
    #[error("DNS response code {code} for {name}")]
    ResponseCode {
        /// Queried name
        name: String,
        /// RCODE from the response
        code: u32,
    },

    /// Lookup failure reported by the OS resolver.
    #[error("DNS lookup failed: {0}")]
    Lookup(String),

    /// External resolver tool exited unsuccessfully.
    #[error("Resolver command failed: {0}")]
    Command(String),

    /// Failed to spawn or talk to an external resolver tool.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Query exceeded the per-query timeout.
    #[error("{record_type} query for {name} timed out")]
    Timeout {
        /// Queried name
        name: String,
        /// Queried type
        record_type: RecordType,
    },
}

/// Errors surfaced by the discovery entry points.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// The domain or hostname failed syntax validation; no query was issued.
    #[error("Invalid domain '{input}': {reason}")]
    InvalidDomain {
        /// The name as supplied
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// A single-shot query failed.
    #[error(transparent)]
    Resolver(#[from] ResolverError),

    /// Shared resources (HTTP client, OS resolver) could not be set up.
    #[error(transparent)]
    Initialization(#[from] InitializationError),
}

/// Terminal outcome of one dispatched query.
///
/// Every query reaches exactly one of these, which is what lets a discovery
/// run count its way to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum QueryOutcome {
    /// Backend returned at least one record
    Answered,
    /// Backend returned no records (includes NXDOMAIN)
    Empty,
    /// Backend returned an error
    Failed,
    /// Query exceeded the per-query timeout
    TimedOut,
    /// Query task panicked or was cancelled before reporting
    Aborted,
}

impl std::fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl QueryOutcome {
    /// Human-readable label used in statistics output.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryOutcome::Answered => "Answered",
            QueryOutcome::Empty => "Empty answer",
            QueryOutcome::Failed => "Resolver error",
            QueryOutcome::TimedOut => "Timed out",
            QueryOutcome::Aborted => "Aborted",
        }
    }

    /// Whether this outcome hides a problem the user may want to know about.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            QueryOutcome::Failed | QueryOutcome::TimedOut | QueryOutcome::Aborted
        )
    }
}
