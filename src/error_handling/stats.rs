//! Query statistics tracking.
//!
//! This module provides thread-safe counters of query outcomes during a
//! discovery run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::QueryOutcome;

/// Thread-safe query outcome tracker.
///
/// Tracks one counter per `QueryOutcome` using atomics, allowing concurrent
/// updates from every query task of a run. All outcomes start at zero.
///
/// # Thread Safety
///
/// This struct is thread-safe and can be shared across multiple tasks using `Arc`.
#[derive(Debug)]
pub struct QueryStats {
    outcomes: HashMap<QueryOutcome, AtomicUsize>,
}

impl QueryStats {
    /// Creates a tracker with every outcome at zero.
    pub fn new() -> Self {
        let mut outcomes = HashMap::new();
        for outcome in QueryOutcome::iter() {
            outcomes.insert(outcome, AtomicUsize::new(0));
        }
        QueryStats { outcomes }
    }

    /// Record one terminal query outcome.
    pub fn record(&self, outcome: QueryOutcome) {
        if let Some(counter) = self.outcomes.get(&outcome) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to record outcome {:?} which is not in the map. \
                 This indicates a bug in QueryStats initialization.",
                outcome
            );
        }
    }

    /// Get the count for an outcome.
    ///
    /// Returns 0 if the outcome is not in the map (should never happen if properly initialized).
    pub fn get(&self, outcome: QueryOutcome) -> usize {
        self.outcomes
            .get(&outcome)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total number of queries that reached a terminal outcome.
    pub fn total(&self) -> usize {
        QueryOutcome::iter().map(|o| self.get(o)).sum()
    }

    /// Number of queries whose failure was swallowed by the run.
    pub fn total_failures(&self) -> usize {
        QueryOutcome::iter()
            .filter(QueryOutcome::is_failure)
            .map(|o| self.get(o))
            .sum()
    }
}

impl Default for QueryStats {
    fn default() -> Self {
        Self::new()
    }
}
