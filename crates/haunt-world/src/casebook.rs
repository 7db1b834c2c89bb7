//! A hunter's personal evidence collection.
//!
//! Only the owning hunter writes to its casebook, but a partner sharing the
//! same room reads it while comparing notes, so the entries sit behind
//! their own small lock. A casebook lock is always the innermost lock taken
//! and is never held while acquiring anything else.

use std::sync::{Mutex, MutexGuard, PoisonError};

use haunt_types::Evidence;

/// Evidence a single hunter has collected, in collection order.
#[derive(Debug, Default)]
pub struct Casebook {
    entries: Mutex<Vec<Evidence>>,
}

impl Casebook {
    /// Create an empty casebook.
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    fn entries(&self) -> MutexGuard<'_, Vec<Evidence>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append an item and return the number of ghostly items now held.
    pub fn record(&self, evidence: Evidence) -> u32 {
        let mut entries = self.entries();
        entries.push(evidence);
        count_ghostly(&entries)
    }

    /// Copy of all entries.
    pub fn snapshot(&self) -> Vec<Evidence> {
        self.entries().clone()
    }

    /// Number of ghostly items held.
    pub fn ghostly_count(&self) -> u32 {
        count_ghostly(&self.entries())
    }

    /// Total number of items held.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Whether nothing has been collected yet.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Whether an exact duplicate (class and reading) of `evidence` is held.
    pub fn holds_duplicate(&self, evidence: &Evidence) -> bool {
        self.entries().iter().any(|e| e.is_duplicate_of(evidence))
    }
}

fn count_ghostly(entries: &[Evidence]) -> u32 {
    let n = entries.iter().filter(|e| e.is_ghostly()).count();
    u32::try_from(n).unwrap_or(u32::MAX)
}
