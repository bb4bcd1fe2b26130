//! Sold-out tracking for the current client process
//!
//! A grow-only set of product ids flagged unavailable for purchase. The set
//! lives for the lifetime of the client and is not persisted; sold-out
//! state learned from the backend or the order flow is marked here so every
//! listing renders it consistently.

use std::collections::HashSet;
use std::sync::Mutex;

/// Set of product ids marked sold out in this client process
#[derive(Debug, Default)]
pub struct SoldOutSet {
    ids: Mutex<HashSet<u64>>,
}

impl SoldOutSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a product as sold out; marking twice is a no-op
    pub fn mark(&self, product_id: u64) {
        let mut ids = self.ids.lock().unwrap();
        ids.insert(product_id);
    }

    /// Whether a product has been marked sold out
    pub fn is_marked(&self, product_id: u64) -> bool {
        let ids = self.ids.lock().unwrap();
        ids.contains(&product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_is_idempotent() {
        let set = SoldOutSet::new();
        assert!(!set.is_marked(1));

        set.mark(1);
        assert!(set.is_marked(1));

        set.mark(1);
        set.mark(1);
        assert!(set.is_marked(1));
        assert!(!set.is_marked(2));
    }
}
