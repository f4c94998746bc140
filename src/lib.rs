//! domain_records library: DNS record discovery for a domain
//!
//! Zone transfers are rarely allowed, so this library reconstructs what a
//! domain publishes by issuing individual typed queries, following up on
//! subdomains implied by earlier answers (NS targets, mail exchangers, SPF
//! mechanisms), deduplicating the results, and collapsing wildcard catch-all
//! answers into a single `*.domain` record.
//!
//! # Example
//!
//! ```no_run
//! use domain_records::{discover_all, DiscoveryOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let records = discover_all("example.com", &DiscoveryOptions::default()).await?;
//! for record in &records {
//!     println!("{record}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod config;
mod discovery;
mod domain;
mod error_handling;
pub mod initialization;
mod record;
mod resolver;
mod run;

// Re-export public API
pub use config::{DiscoveryOptions, LogFormat, LogLevel, Opt, OutputFormat, WildcardConfig};
pub use discovery::{collapse_wildcards, WELL_KNOWN_SUBDOMAINS};
pub use domain::{is_within, normalize_domain, relative_label, to_fqdn};
pub use error_handling::{
    DiscoveryError, InitializationError, QueryOutcome, QueryStats, ResolverError,
};
pub use record::{unquote_txt, Record, RecordKey, RecordParseError, RecordType};
pub use resolver::{
    Backend, DigResolver, DohResolver, Resolver, ResolverRegistry, SystemResolver,
};
pub use run::{
    discover_all, discover_all_stream, discover_by_type, Discoverer, DiscoveryReport,
    RecordStream,
};
