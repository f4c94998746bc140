//! Error handling and query statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, resolver, discovery)
//! - Query outcome categories
//! - Thread-safe outcome counters for a discovery run
//!
//! Resolver errors are only fatal for single-shot queries. Inside a discovery
//! run every query ends in a `QueryOutcome` and the run carries on.

mod stats;
mod types;

// Re-export public API
pub use stats::QueryStats;
pub use types::{DiscoveryError, InitializationError, QueryOutcome, ResolverError};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordType;
    use strum::IntoEnumIterator;

    #[test]
    fn test_query_stats_initialization() {
        let stats = QueryStats::new();
        for outcome in QueryOutcome::iter() {
            assert_eq!(stats.get(outcome), 0);
        }
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_query_stats_record() {
        let stats = QueryStats::new();
        stats.record(QueryOutcome::Answered);
        stats.record(QueryOutcome::Answered);
        stats.record(QueryOutcome::Empty);
        stats.record(QueryOutcome::TimedOut);
        stats.record(QueryOutcome::Failed);

        assert_eq!(stats.get(QueryOutcome::Answered), 2);
        assert_eq!(stats.get(QueryOutcome::Empty), 1);
        assert_eq!(stats.total(), 5);
        assert_eq!(stats.total_failures(), 2);
    }

    #[test]
    fn test_query_outcome_failure_classification() {
        assert!(!QueryOutcome::Answered.is_failure());
        assert!(!QueryOutcome::Empty.is_failure());
        assert!(QueryOutcome::Failed.is_failure());
        assert!(QueryOutcome::TimedOut.is_failure());
        assert!(QueryOutcome::Aborted.is_failure());
    }

    #[test]
    fn test_error_messages() {
        let err = ResolverError::UnknownBackend("nope".to_string());
        assert_eq!(err.to_string(), "Unknown resolver backend: nope");

        let err = ResolverError::Timeout {
            name: "example.com.".to_string(),
            record_type: RecordType::MX,
        };
        assert_eq!(err.to_string(), "MX query for example.com. timed out");

        let err = DiscoveryError::from(ResolverError::HttpStatus(503));
        assert_eq!(err.to_string(), "HTTP status 503 from resolver");

        let err = DiscoveryError::InvalidDomain {
            input: "a b".to_string(),
            reason: "bad".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid domain 'a b': bad");
    }
}
