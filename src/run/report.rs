//! Result of a batched discovery run.

use std::sync::Arc;

use crate::error_handling::QueryStats;
use crate::record::Record;

/// Records and query statistics of one completed discovery run.
#[derive(Debug, Clone)]
pub struct DiscoveryReport {
    /// Normalized domain the run was for (trailing dot)
    pub domain: String,
    /// Deduplicated records after the wildcard pass
    pub records: Vec<Record>,
    /// Outcome counts of every query the run issued
    pub stats: Arc<QueryStats>,
    /// Wall-clock duration in seconds
    pub elapsed_seconds: f64,
}

impl DiscoveryReport {
    /// Number of queries whose failure the run absorbed.
    pub fn failed_queries(&self) -> usize {
        self.stats.total_failures()
    }
}
