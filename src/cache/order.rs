//! Insertion Order Module
//!
//! Tracks insertion order for oldest-first capacity eviction.

use std::collections::BTreeMap;

// == Insertion Order ==
/// Index of keys by insertion sequence number.
///
/// Every insert or overwrite gets a fresh, strictly increasing sequence
/// number, so the smallest sequence number is always the oldest entry.
/// Reads never reorder keys.
#[derive(Debug, Default)]
pub struct InsertionOrder {
    /// Sequence number -> key
    order: BTreeMap<u64, String>,
    /// Next sequence number to hand out
    next_seq: u64,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record ==
    /// Records `key` as the newest entry and returns its sequence number.
    ///
    /// Callers overwriting a key must [`remove`](Self::remove) its previous
    /// sequence number first.
    pub fn record(&mut self, key: &str) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.order.insert(seq, key.to_string());
        seq
    }

    // == Remove ==
    /// Forgets the entry inserted under `seq`.
    pub fn remove(&mut self, seq: u64) {
        self.order.remove(&seq);
    }

    // == Pop Oldest ==
    /// Returns and removes the oldest key.
    ///
    /// Returns None if tracker is empty.
    pub fn pop_oldest(&mut self) -> Option<String> {
        self.order.pop_first().map(|(_, key)| key)
    }

    // == Peek Oldest ==
    /// Returns the oldest key without removing it.
    #[cfg(test)]
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.first_key_value().map(|(_, key)| key)
    }

    // == Clear ==
    /// Drops every tracked key. Sequence numbers keep increasing.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
