//! Discovery entry points.
//!
//! `Discoverer` binds a `ResolverRegistry` to the three ways of asking for
//! records: a batched run with the wildcard pass, a streamed run without it,
//! and a single typed query. The free functions at the bottom use a lazily
//! built registry holding the default backends.

mod report;

use std::sync::Arc;
use std::time::Instant;

use log::info;
use once_cell::sync::OnceCell;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

use crate::config::DiscoveryOptions;
use crate::discovery::{collapse_wildcards, DiscoveryRun};
use crate::domain::normalize_domain;
use crate::error_handling::{DiscoveryError, InitializationError, QueryStats, ResolverError};
use crate::record::{Record, RecordType};
use crate::resolver::ResolverRegistry;

pub use report::DiscoveryReport;

/// Stream of records accepted by a running discovery.
///
/// Ends when the run completes. Records arrive in acceptance order and
/// each one appears once.
pub type RecordStream = UnboundedReceiverStream<Record>;

/// Runs discoveries against a registry of resolver backends.
///
/// Cheap to clone; clones share the registry.
#[derive(Clone)]
pub struct Discoverer {
    registry: Arc<ResolverRegistry>,
}

impl Discoverer {
    /// Creates a discoverer over a caller-built registry.
    pub fn new(registry: ResolverRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Creates a discoverer over the built-in backends
    /// (`cloudflare`, `google`, `system`, `dig`).
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the HTTP client or the system
    /// resolver cannot be set up.
    pub fn with_default_backends() -> Result<Self, InitializationError> {
        Ok(Self::new(ResolverRegistry::with_default_backends()?))
    }

    /// The registry this discoverer selects backends from.
    pub fn registry(&self) -> &ResolverRegistry {
        &self.registry
    }

    /// Discovers the records of `domain` and collapses wildcard groups.
    ///
    /// Resolver failures during the run are absorbed; a domain without NS
    /// records yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::InvalidDomain` if `domain` is not a valid
    /// domain name. No query is issued in that case.
    pub async fn discover_all(
        &self,
        domain: &str,
        options: &DiscoveryOptions,
    ) -> Result<Vec<Record>, DiscoveryError> {
        Ok(self.discover_all_with_report(domain, options).await?.records)
    }

    /// Same as [`discover_all`](Self::discover_all), also returning query
    /// statistics and timing.
    pub async fn discover_all_with_report(
        &self,
        domain: &str,
        options: &DiscoveryOptions,
    ) -> Result<DiscoveryReport, DiscoveryError> {
        let domain = normalize_domain(domain)?;
        let start = Instant::now();
        let stats = Arc::new(QueryStats::new());
        let resolver = self.registry.select(&options.backend);

        let records = DiscoveryRun::new(&domain, resolver, options, Arc::clone(&stats), None)
            .execute()
            .await;
        let found = records.len();
        let records = collapse_wildcards(records, &domain, &options.wildcard);
        if records.len() < found {
            info!(
                "Wildcard pass folded {} record(s) of {domain}",
                found - records.len()
            );
        }

        Ok(DiscoveryReport {
            domain,
            records,
            stats,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        })
    }

    /// Starts a discovery run and returns its records as they are accepted.
    ///
    /// The wildcard pass is not applied; it needs the complete set. Each call
    /// starts a new run. Must be called from within a Tokio runtime.
    /// Dropping the stream stops the run: queries in flight are aborted and
    /// remaining candidates are not probed.
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::InvalidDomain` for an invalid domain.
    pub fn discover_all_stream(
        &self,
        domain: &str,
        options: &DiscoveryOptions,
    ) -> Result<RecordStream, DiscoveryError> {
        let domain = normalize_domain(domain)?;
        let resolver = self.registry.select(&options.backend);
        let (tx, rx) = mpsc::unbounded_channel();

        let run = DiscoveryRun::new(
            &domain,
            resolver,
            options,
            Arc::new(QueryStats::new()),
            Some(tx),
        );
        tokio::spawn(run.execute());

        Ok(UnboundedReceiverStream::new(rx))
    }

    /// Queries one record type for one name, bypassing the orchestration.
    ///
    /// Uses `options.backend` and `options.query_timeout`; the other options
    /// don't apply.
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError::InvalidDomain` for an invalid name, and
    /// `DiscoveryError::Resolver` for an unknown backend key, a failed query
    /// or a timeout.
    pub async fn discover_by_type(
        &self,
        name: &str,
        record_type: RecordType,
        options: &DiscoveryOptions,
    ) -> Result<Vec<Record>, DiscoveryError> {
        let name = normalize_domain(name)?;
        let resolver = self.registry.select(&options.backend);

        let records = tokio::time::timeout(options.query_timeout, resolver.query(&name, record_type))
            .await
            .map_err(|_| ResolverError::Timeout {
                name: name.clone(),
                record_type,
            })??;
        Ok(records)
    }
}

static DEFAULT_DISCOVERER: OnceCell<Discoverer> = OnceCell::new();

fn default_discoverer() -> Result<&'static Discoverer, InitializationError> {
    DEFAULT_DISCOVERER.get_or_try_init(Discoverer::with_default_backends)
}

/// Runs [`Discoverer::discover_all`] against the default backends.
///
/// # Errors
///
/// Returns `DiscoveryError::InvalidDomain` for an invalid domain and
/// `DiscoveryError::Initialization` if the default backends can't be built.
pub async fn discover_all(
    domain: &str,
    options: &DiscoveryOptions,
) -> Result<Vec<Record>, DiscoveryError> {
    default_discoverer()?.discover_all(domain, options).await
}

/// Runs [`Discoverer::discover_all_stream`] against the default backends.
pub fn discover_all_stream(
    domain: &str,
    options: &DiscoveryOptions,
) -> Result<RecordStream, DiscoveryError> {
    default_discoverer()?.discover_all_stream(domain, options)
}

/// Runs [`Discoverer::discover_by_type`] against the default backends.
pub async fn discover_by_type(
    name: &str,
    record_type: RecordType,
    options: &DiscoveryOptions,
) -> Result<Vec<Record>, DiscoveryError> {
    default_discoverer()?
        .discover_by_type(name, record_type, options)
        .await
}
