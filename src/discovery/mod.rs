//! Discovery engine.
//!
//! This module provides the pieces of a discovery run:
//! - `DiscoveryRun` - the fan-out/join coordinator
//! - `DedupSink` - subtree filter and duplicate suppression
//! - `CandidateQueue` - never-repeating queue of subdomain labels
//! - Subdomain inference from NS, MX and SPF data
//! - `collapse_wildcards()` - wildcard post-pass over a finished run
//! - `WELL_KNOWN_SUBDOMAINS` - labels probed on every run

mod inference;
mod queue;
mod run;
mod sink;
mod subdomains;
mod wildcard;

pub(crate) use run::DiscoveryRun;
pub use subdomains::WELL_KNOWN_SUBDOMAINS;
pub use wildcard::collapse_wildcards;
