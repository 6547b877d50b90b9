//! Product identifiers.
//!
//! A store hands out an opaque id for every product it owns. Identity is
//! by id, not by name: two products may share a name and remain distinct
//! entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier for a product owned by a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(u64);

impl ProductId {
    /// Generate a new unique id.
    pub(crate) fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }

    /// Get the numeric value of the id.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_generation_is_unique() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        assert_ne!(a, b);
    }
}
