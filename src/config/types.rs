//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and discovery configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BACKEND, DEFAULT_MAX_CONCURRENT_QUERIES, DEFAULT_QUERY_TIMEOUT,
    DEFAULT_QUERY_TIMEOUT_SECS, DEFAULT_WILDCARD_MIN_SAMPLE_SIZE, DEFAULT_WILDCARD_THRESHOLD,
};
use crate::record::RecordType;
use crate::resolver::Backend;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How discovered records are printed by the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns with a header row
    Table,
    /// Tab-separated zone-file columns, one record per line
    Zone,
    /// JSON array of records
    Json,
}

/// Parameters of the wildcard post-pass.
///
/// A `(type, data)` group is collapsed into one `*.domain` record when it holds
/// at least `threshold` of all records of that type and the type has at least
/// `min_sample_size` records. A group always needs at least two records, so a
/// single record is never rewritten to `*.domain`, whatever the two settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WildcardConfig {
    /// Minimum share of same-type records (0.0-1.0)
    pub threshold: f64,
    /// Minimum number of same-type records (a group itself needs two or more)
    pub min_sample_size: usize,
}

impl Default for WildcardConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_WILDCARD_THRESHOLD,
            min_sample_size: DEFAULT_WILDCARD_MIN_SAMPLE_SIZE,
        }
    }
}

/// Options recognized by the discovery entry points.
///
/// # Examples
///
/// ```no_run
/// use domain_records::{Backend, DiscoveryOptions};
///
/// let options = DiscoveryOptions {
///     backend: Backend::named("google"),
///     subdomains: vec!["vpn".to_string(), "intranet".to_string()],
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Resolver backend answering the queries
    pub backend: Backend,

    /// Extra subdomain labels to probe in addition to the well-known list
    pub subdomains: Vec<String>,

    /// Seed the candidate queue with the built-in well-known subdomains
    pub include_well_known: bool,

    /// Per-query timeout; an expired query counts as a zero-record answer
    pub query_timeout: Duration,

    /// Maximum queries in flight at once
    pub max_concurrency: usize,

    /// Wildcard post-pass parameters (batched discovery only)
    pub wildcard: WildcardConfig,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            backend: Backend::named(DEFAULT_BACKEND),
            subdomains: Vec::new(),
            include_well_known: true,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
            max_concurrency: DEFAULT_MAX_CONCURRENT_QUERIES,
            wildcard: WildcardConfig::default(),
        }
    }
}

/// Command-line options for the `domain_records` binary.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_records",
    version,
    about = "Discover the DNS records published for a domain"
)]
pub struct Opt {
    /// Domain to discover records for
    pub domain: String,

    /// Resolver backend (cloudflare, google, system, dig)
    #[arg(long, short = 'r', default_value = DEFAULT_BACKEND)]
    pub resolver: String,

    /// Extra subdomain label to probe (repeatable)
    #[arg(long = "subdomain", short = 's', value_name = "LABEL")]
    pub subdomains: Vec<String>,

    /// Query a single record type for the name instead of running discovery
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub record_type: Option<RecordType>,

    /// Print records as they are discovered (no wildcard collapsing)
    #[arg(long)]
    pub stream: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write records to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Per-query timeout in seconds
    #[arg(long, default_value_t = DEFAULT_QUERY_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Maximum concurrent queries
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENT_QUERIES)]
    pub max_concurrency: usize,

    /// Share of same-type records with identical data that marks a wildcard
    #[arg(long, default_value_t = DEFAULT_WILDCARD_THRESHOLD)]
    pub wildcard_threshold: f64,

    /// Minimum same-type records before wildcard detection applies
    #[arg(long, default_value_t = DEFAULT_WILDCARD_MIN_SAMPLE_SIZE)]
    pub wildcard_min_samples: usize,

    /// Skip probing the built-in list of well-known subdomains
    #[arg(long)]
    pub no_well_known: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Opt {
    /// Builds the discovery options described by the command line.
    pub fn to_options(&self) -> DiscoveryOptions {
        DiscoveryOptions {
            backend: Backend::named(&self.resolver),
            subdomains: self.subdomains.clone(),
            include_well_known: !self.no_well_known,
            query_timeout: Duration::from_secs(self.timeout_seconds),
            max_concurrency: self.max_concurrency.max(1),
            wildcard: WildcardConfig {
                threshold: self.wildcard_threshold,
                min_sample_size: self.wildcard_min_samples,
            },
        }
    }
}
