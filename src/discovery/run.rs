//! Discovery run orchestration.
//!
//! A run is driven by a single coordinator that owns all mutable state: the
//! dedup sink, the candidate queue and the count of outstanding query groups.
//! Query tasks only talk to the resolver and hand their records back through
//! the `JoinSet`, so the decrement-then-drain step never races.
//!
//! Protocol:
//! 1. `NS` for the domain is the bootstrap. No NS records ends the run with an
//!    empty result.
//! 2. `SOA`, `A`, `AAAA`, `MX` and `TXT` for the domain run concurrently; the
//!    outstanding count starts at five.
//! 3. Every completion feeds the sink and subdomain inference, then decrements
//!    the count. At zero, each waiting candidate becomes an `A` query for
//!    `<label>.<domain>` and the count grows by one per query.
//! 4. The run is over when the count is zero and a drain queued nothing.
//!
//! A run feeding a record stream stops as soon as the stream is dropped;
//! queries still in flight are aborted and no further candidates are probed.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::config::DiscoveryOptions;
use crate::domain::is_within;
use crate::error_handling::{QueryOutcome, QueryStats, ResolverError};
use crate::initialization::init_semaphore;
use crate::record::{Record, RecordType};
use crate::resolver::Resolver;

use super::inference::infer_subdomains;
use super::queue::CandidateQueue;
use super::sink::DedupSink;
use super::subdomains::WELL_KNOWN_SUBDOMAINS;

/// Root-level query groups issued once the bootstrap found a delegation.
pub(crate) const ROOT_QUERY_TYPES: [RecordType; 5] = [
    RecordType::SOA,
    RecordType::A,
    RecordType::AAAA,
    RecordType::MX,
    RecordType::TXT,
];

/// Shared, read-only resources every query task of a run uses.
pub(crate) struct QueryContext {
    resolver: Arc<dyn Resolver>,
    semaphore: Arc<Semaphore>,
    stats: Arc<QueryStats>,
    timeout: Duration,
}

impl QueryContext {
    pub(crate) fn new(
        resolver: Arc<dyn Resolver>,
        stats: Arc<QueryStats>,
        options: &DiscoveryOptions,
    ) -> Self {
        Self {
            resolver,
            semaphore: init_semaphore(options.max_concurrency),
            stats,
            timeout: options.query_timeout,
        }
    }

    /// Runs one query to a terminal outcome.
    ///
    /// Errors and timeouts are logged, counted and turned into an empty
    /// answer; a failing query never fails the run.
    pub(crate) async fn run(&self, name: &str, record_type: RecordType) -> Vec<Record> {
        let _permit = match self.semaphore.acquire().await {
            Ok(permit) => permit,
            Err(_) => {
                self.stats.record(QueryOutcome::Aborted);
                return Vec::new();
            }
        };

        debug!("Querying {record_type} {name}");
        let result = tokio::time::timeout(self.timeout, self.resolver.query(name, record_type)).await;

        match result {
            Ok(Ok(records)) => {
                if records.is_empty() {
                    self.stats.record(QueryOutcome::Empty);
                } else {
                    self.stats.record(QueryOutcome::Answered);
                }
                records
            }
            Ok(Err(e)) => {
                warn!("{record_type} query for {name} failed: {e}");
                self.stats.record(QueryOutcome::Failed);
                Vec::new()
            }
            Err(_) => {
                let e = ResolverError::Timeout {
                    name: name.to_string(),
                    record_type,
                };
                warn!("{e} after {:?}", self.timeout);
                self.stats.record(QueryOutcome::TimedOut);
                Vec::new()
            }
        }
    }
}

/// Which unit of outstanding work a completion settles.
#[derive(Debug, Clone)]
pub(crate) enum QueryGroup {
    Root(RecordType),
    Candidate(String),
}

impl fmt::Display for QueryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryGroup::Root(record_type) => write!(f, "root {record_type}"),
            QueryGroup::Candidate(label) => write!(f, "candidate {label}"),
        }
    }
}

/// What a query task hands back to the coordinator.
#[derive(Debug)]
pub(crate) struct Completion {
    group: QueryGroup,
    records: Vec<Record>,
}

/// State of one discovery run for one domain.
pub(crate) struct DiscoveryRun {
    domain: String,
    ctx: Arc<QueryContext>,
    sink: DedupSink,
    queue: CandidateQueue,
    pending: usize,
    tasks: JoinSet<Completion>,
}

impl DiscoveryRun {
    /// Prepares a run; `domain` must already be normalized.
    ///
    /// The candidate queue is seeded with the well-known labels (unless
    /// disabled) followed by the caller's extra labels.
    pub(crate) fn new(
        domain: &str,
        resolver: Arc<dyn Resolver>,
        options: &DiscoveryOptions,
        stats: Arc<QueryStats>,
        listener: Option<UnboundedSender<Record>>,
    ) -> Self {
        let sink = match listener {
            Some(listener) => DedupSink::with_listener(domain, listener),
            None => DedupSink::new(domain),
        };

        let mut queue = CandidateQueue::new();
        if options.include_well_known {
            for label in WELL_KNOWN_SUBDOMAINS {
                queue.offer(label);
            }
        }
        for label in &options.subdomains {
            if !queue.offer(label) {
                debug!("Skipping extra subdomain '{label}' (duplicate or invalid)");
            }
        }

        Self {
            domain: domain.to_string(),
            ctx: Arc::new(QueryContext::new(resolver, stats, options)),
            sink,
            queue,
            pending: 0,
            tasks: JoinSet::new(),
        }
    }

    /// Drives the run to completion and returns the deduplicated records in
    /// first-seen order.
    pub(crate) async fn execute(mut self) -> Vec<Record> {
        let start = Instant::now();
        info!("Starting discovery for {}", self.domain);

        let delegation = self.bootstrap().await;
        if delegation.is_empty() {
            info!("No NS records for {}; nothing to discover", self.domain);
            return Vec::new();
        }
        self.absorb(delegation);

        if !self.stream_dropped() {
            for record_type in ROOT_QUERY_TYPES {
                let name = self.domain.clone();
                self.dispatch(QueryGroup::Root(record_type), name, record_type);
            }
        }

        while let Some(joined) = self.tasks.join_next().await {
            match joined {
                Ok(Completion { group, records }) => {
                    debug!("Query group {group} completed with {} record(s)", records.len());
                    self.absorb(records);
                }
                Err(e) => {
                    warn!("Query task for {} did not complete: {e}", self.domain);
                    self.ctx.stats.record(QueryOutcome::Aborted);
                }
            }

            if self.stream_dropped() {
                self.tasks.abort_all();
                break;
            }

            self.pending = self.pending.saturating_sub(1);
            if self.pending == 0 {
                self.drain_candidates();
            }
        }

        info!(
            "Discovery for {} finished: {} record(s), {} subdomain(s) probed in {:.2}s",
            self.domain,
            self.sink.len(),
            self.queue.checked_count(),
            start.elapsed().as_secs_f64()
        );
        self.sink.into_records()
    }

    /// Runs the NS bootstrap in its own task so a panicking backend cannot
    /// take the coordinator down with it.
    async fn bootstrap(&self) -> Vec<Record> {
        let ctx = Arc::clone(&self.ctx);
        let domain = self.domain.clone();
        let handle = tokio::spawn(async move { ctx.run(&domain, RecordType::NS).await });

        match handle.await {
            Ok(records) => records,
            Err(e) => {
                warn!("NS bootstrap for {} did not complete: {e}", self.domain);
                self.ctx.stats.record(QueryOutcome::Aborted);
                Vec::new()
            }
        }
    }

    fn stream_dropped(&self) -> bool {
        let dropped = self.sink.is_detached();
        if dropped {
            info!(
                "Record stream for {} was dropped; stopping discovery",
                self.domain
            );
        }
        dropped
    }

    fn dispatch(&mut self, group: QueryGroup, name: String, record_type: RecordType) {
        let ctx = Arc::clone(&self.ctx);
        self.pending += 1;
        self.tasks.spawn(async move {
            let records = ctx.run(&name, record_type).await;
            Completion { group, records }
        });
    }

    /// Feeds records through inference and into the sink.
    fn absorb(&mut self, records: Vec<Record>) {
        for record in records {
            if is_within(record.name(), &self.domain) {
                for label in infer_subdomains(&record, &self.domain) {
                    if self.queue.offer(&label) {
                        debug!("Inferred subdomain candidate {label} from {record}");
                    }
                }
            }
            self.sink.emit(record);
        }
    }

    fn drain_candidates(&mut self) {
        if self.queue.is_empty() {
            return;
        }
        let candidates = self.queue.drain();
        debug!(
            "Probing {} subdomain candidate(s) of {}",
            candidates.len(),
            self.domain
        );
        for label in candidates {
            let name = format!("{label}.{}", self.domain);
            self.dispatch(QueryGroup::Candidate(label), name, RecordType::A);
        }
    }
}
