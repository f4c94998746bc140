//! Deduplicating record sink.

use std::collections::HashSet;

use tokio::sync::mpsc::UnboundedSender;

use crate::domain::is_within;
use crate::record::{Record, RecordKey};

/// Accumulates the records of one discovery run.
///
/// A record is accepted only if its name lies in the domain's subtree and its
/// `(name, type, data)` identity hasn't been seen yet. Accepted records keep
/// first-seen order and are forwarded to the listener, if any.
pub(crate) struct DedupSink {
    domain: String,
    seen: HashSet<RecordKey>,
    records: Vec<Record>,
    listener: Option<UnboundedSender<Record>>,
    detached: bool,
}

impl DedupSink {
    pub(crate) fn new(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            seen: HashSet::new(),
            records: Vec::new(),
            listener: None,
            detached: false,
        }
    }

    /// Creates a sink that also pushes every accepted record to `listener`.
    pub(crate) fn with_listener(domain: &str, listener: UnboundedSender<Record>) -> Self {
        Self {
            listener: Some(listener),
            ..Self::new(domain)
        }
    }

    /// Offers a record; returns `true` if it was accepted.
    pub(crate) fn emit(&mut self, record: Record) -> bool {
        if !is_within(record.name(), &self.domain) {
            return false;
        }
        if !self.seen.insert(record.key()) {
            return false;
        }

        let closed = self
            .listener
            .as_ref()
            .is_some_and(|listener| listener.send(record.clone()).is_err());
        if closed {
            log::debug!("Record stream consumer dropped for {}", self.domain);
            self.listener = None;
            self.detached = true;
        }

        self.records.push(record);
        true
    }

    /// `true` once the listener this sink was created with has gone away.
    pub(crate) fn is_detached(&self) -> bool {
        self.detached
            || self
                .listener
                .as_ref()
                .is_some_and(UnboundedSender::is_closed)
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn into_records(self) -> Vec<Record> {
        self.records
    }
}
