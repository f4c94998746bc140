//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{QueryOutcome, QueryStats};
use crate::run::DiscoveryReport;

/// Prints query outcome counts to the log.
pub fn print_query_statistics(stats: &QueryStats) {
    let total = stats.total();
    if total == 0 {
        return;
    }

    info!("Query Outcomes ({} total):", total);
    for outcome in QueryOutcome::iter() {
        let count = stats.get(outcome);
        if count > 0 {
            info!("   {}: {}", outcome.as_str(), count);
        }
    }
}

/// One-line summary of a finished run.
pub fn format_summary(report: &DiscoveryReport) -> String {
    let count = report.records.len();
    let failed = report.failed_queries();
    let mut summary = format!(
        "✅ Found {} record{} for {} in {:.1}s ({} quer{}",
        count,
        if count == 1 { "" } else { "s" },
        report.domain,
        report.elapsed_seconds,
        report.stats.total(),
        if report.stats.total() == 1 { "y" } else { "ies" },
    );
    if failed > 0 {
        summary.push_str(&format!(", {failed} failed"));
    }
    summary.push(')');
    summary
}

/// Prints final statistics of a run: outcome counts to the log and a
/// one-line summary to stderr.
pub fn print_final_statistics(report: &DiscoveryReport) {
    print_query_statistics(&report.stats);
    eprintln!("{}", format_summary(report));
}
