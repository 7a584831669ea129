//! Shared id source for orders.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic id source shared by every order in the process.
///
/// # Architecture Note
/// The counter is an explicit value rather than a hidden static so that
/// tests can build an isolated sequence per scenario. The application
/// wiring ([`OrderDesk`](crate::lifecycle::OrderDesk)) owns one
/// `Arc<OrderSequence>` and threads it through every order it creates,
/// regardless of the item variant the order holds. Ids are never reused,
/// even when an order is discarded.
#[derive(Debug)]
pub struct OrderSequence {
    // Holds the count of ids issued so far; the first id handed out is 1.
    issued: AtomicU64,
}

impl OrderSequence {
    /// Creates a sequence whose first issued id will be 1.
    pub fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
        }
    }

    /// Issues the next id. Safe under concurrent callers; each caller
    /// gets a distinct value and the sequence stays strictly increasing.
    pub fn next_id(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl Default for OrderSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn issues_ids_from_one_upwards() {
        let sequence = OrderSequence::new();
        assert_eq!(sequence.next_id(), 1);
        assert_eq!(sequence.next_id(), 2);
        assert_eq!(sequence.next_id(), 3);
    }

    #[test]
    fn issues_distinct_ids_under_concurrent_callers() {
        let sequence = Arc::new(OrderSequence::new());
        let mut threads = Vec::new();
        for _ in 0..8 {
            let sequence = Arc::clone(&sequence);
            threads.push(std::thread::spawn(move || {
                (0..100).map(|_| sequence.next_id()).collect::<Vec<_>>()
            }));
        }

        let mut all = HashSet::new();
        for thread in threads {
            for id in thread.join().unwrap() {
                assert!(all.insert(id), "id {} issued twice", id);
            }
        }
        assert_eq!(all.len(), 800);
        assert!(all.contains(&1) && all.contains(&800));
    }
}
