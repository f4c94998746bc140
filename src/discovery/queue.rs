//! Subdomain candidate queue.

use std::collections::HashSet;

use crate::domain::{is_valid_subdomain, normalize_label};

/// Ordered, never-repeating queue of subdomain labels to probe.
///
/// A label is accepted at most once for the lifetime of a run: the `known`
/// set remembers every label ever offered, whether it is still waiting or
/// was already drained.
#[derive(Debug, Default)]
pub(crate) struct CandidateQueue {
    known: HashSet<String>,
    waiting: Vec<String>,
    checked: HashSet<String>,
}

impl CandidateQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Offers a label; returns `true` if it was queued.
    ///
    /// Labels are lowercased; empty labels, labels that aren't valid hostname
    /// syntax and labels seen before are refused.
    pub(crate) fn offer(&mut self, label: &str) -> bool {
        let Some(label) = normalize_label(label) else {
            return false;
        };
        if !is_valid_subdomain(&label) {
            log::debug!("Ignoring subdomain candidate with invalid syntax: {label}");
            return false;
        }
        if !self.known.insert(label.clone()) {
            return false;
        }
        self.waiting.push(label);
        true
    }

    /// Takes every waiting label, marking each as checked.
    pub(crate) fn drain(&mut self) -> Vec<String> {
        let waiting = std::mem::take(&mut self.waiting);
        waiting
            .into_iter()
            .filter(|label| self.checked.insert(label.clone()))
            .collect()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.waiting.is_empty()
    }

    pub(crate) fn checked_count(&self) -> usize {
        self.checked.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_never_repeats_a_label() {
        let mut queue = CandidateQueue::new();
        assert!(queue.offer("mail"));
        assert!(!queue.offer("mail"));
        assert!(!queue.offer("MAIL"));
        assert_eq!(queue.drain(), vec!["mail"]);

        // Still refused after it was drained
        assert!(!queue.offer("mail"));
        assert!(queue.drain().is_empty());
        assert_eq!(queue.checked_count(), 1);
    }

    #[test]
    fn test_queue_preserves_offer_order() {
        let mut queue = CandidateQueue::new();
        for label in ["www", "api", "mail"] {
            queue.offer(label);
        }
        assert_eq!(queue.drain(), vec!["www", "api", "mail"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_rejects_invalid_labels() {
        let mut queue = CandidateQueue::new();
        assert!(!queue.offer(""));
        assert!(!queue.offer("."));
        assert!(!queue.offer("%{i}._spf"));
        assert!(!queue.offer("-bad"));
        assert!(queue.offer("_spf"));
        assert!(queue.offer("ns1.dns"));
        assert_eq!(queue.drain(), vec!["_spf", "ns1.dns"]);
    }
}
