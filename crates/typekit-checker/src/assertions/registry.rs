//! Pending assertion bags.

use super::AssertionBag;
use indexmap::IndexMap;
use tracing::trace;

/// Registry key: the test class and the lower-cased test method.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssertionKey {
    pub test_class: String,
    pub test_method: String,
}

impl AssertionKey {
    #[must_use]
    pub fn new(test_class: impl Into<String>, test_method: impl Into<String>) -> Self {
        Self {
            test_class: test_class.into(),
            test_method: test_method.into(),
        }
    }
}

/// Bags waiting for reconciliation, in insertion order.
///
/// Owned by the analysis driver. Collection reads and replaces a method's bag;
/// reconciliation takes every bag of a class at once, so nothing outlives the
/// analysis of the class's methods.
#[derive(Debug, Default)]
pub struct AssertionRegistry {
    entries: IndexMap<AssertionKey, AssertionBag>,
}

impl AssertionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current bag of a method, or an empty one.
    #[must_use]
    pub fn get(&self, test_class: &str, test_method: &str) -> AssertionBag {
        self.entries
            .get(&AssertionKey::new(test_class, test_method))
            .cloned()
            .unwrap_or_default()
    }

    /// Replace a method's bag.
    pub fn set(&mut self, test_class: &str, test_method: &str, bag: AssertionBag) {
        trace!(test_class, test_method, entries = bag.len(), "assertion bag stored");
        self.entries
            .insert(AssertionKey::new(test_class, test_method), bag);
    }

    /// Remove and return every bag of `test_class`, in insertion order. Bags
    /// of other classes stay.
    pub fn take(&mut self, test_class: &str) -> Vec<AssertionBag> {
        let mut taken = Vec::new();
        self.entries.retain(|key, bag| {
            if key.test_class == test_class {
                taken.push(std::mem::take(bag));
                false
            } else {
                true
            }
        });
        trace!(test_class, count = taken.len(), "assertion bags taken");
        taken
    }

    /// Pending entries, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&AssertionKey, &AssertionBag)> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/registry_tests.rs"]
mod tests;
