//! Wildcard detection post-pass.
//!
//! A wildcard (`*.example.com`) makes every probed name resolve to the same
//! answer, which floods the result with one address record per probed label.
//! This pass detects such groups statistically and replaces each with a single
//! synthetic `*.domain` record.

use std::collections::{HashMap, HashSet};

use log::info;

use crate::config::WildcardConfig;
use crate::domain::to_fqdn;
use crate::record::{Record, RecordType};

/// Collapses wildcard-catchall groups of address records into `*.domain`.
///
/// Address-bearing records (A, AAAA, CNAME) are grouped by `(type, data)`.
/// A group is wildcard evidence when its type has at least
/// `config.min_sample_size` records, the group holds at least two names, and
/// the group's share of its type is at least `config.threshold`. Each such
/// group is emitted once, renamed to `*.domain`, at the position of its first
/// member. Everything else passes through unchanged and in order.
///
/// # Arguments
///
/// * `records` - The complete, deduplicated record list of a run
/// * `domain` - The domain the run was for
/// * `config` - Threshold and sample floor
pub fn collapse_wildcards(
    records: Vec<Record>,
    domain: &str,
    config: &WildcardConfig,
) -> Vec<Record> {
    let wildcard_groups = find_wildcard_groups(&records, config);
    if wildcard_groups.is_empty() {
        return records;
    }

    let wildcard_name = format!("*.{}", to_fqdn(domain));
    let mut emitted: HashSet<(RecordType, String)> = HashSet::new();
    let mut collapsed = Vec::with_capacity(records.len());

    for record in records {
        let key = (record.record_type(), record.data().to_string());
        if !wildcard_groups.contains(&key) {
            collapsed.push(record);
            continue;
        }
        if emitted.insert(key) {
            collapsed.push(record.renamed(&wildcard_name));
        }
    }

    collapsed
}

fn find_wildcard_groups(
    records: &[Record],
    config: &WildcardConfig,
) -> HashSet<(RecordType, String)> {
    let mut type_totals: HashMap<RecordType, usize> = HashMap::new();
    let mut group_sizes: HashMap<(RecordType, &str), usize> = HashMap::new();

    for record in records
        .iter()
        .filter(|r| r.record_type().is_address_bearing())
    {
        *type_totals.entry(record.record_type()).or_insert(0) += 1;
        *group_sizes
            .entry((record.record_type(), record.data()))
            .or_insert(0) += 1;
    }

    group_sizes
        .into_iter()
        .filter(|((record_type, data), size)| {
            let total = type_totals.get(record_type).copied().unwrap_or(0);
            let is_wildcard = total >= config.min_sample_size
                && *size >= 2
                && (*size as f64 / total as f64) >= config.threshold;
            if is_wildcard {
                info!(
                    "Wildcard detected: {size} of {total} {record_type} records resolve to {data}"
                );
            }
            is_wildcard
        })
        .map(|((record_type, data), _)| (record_type, data.to_string()))
        .collect()
}
