//! Main application modules.
//!
//! This module provides record rendering and statistics printing used by the
//! command-line binary.

pub mod output;
pub mod statistics;

// Re-export public API
pub use output::{render_json, render_line, render_table, render_zone, RecordWriter};
pub use statistics::{format_summary, print_final_statistics, print_query_statistics};
