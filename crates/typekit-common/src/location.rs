//! Source locations.
//!
//! The host owns source positions; the plugin only needs the file a node
//! belongs to and its byte range, so that reconciliation can ask whether one
//! node lies inside another.

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// A byte range inside one source file.
///
/// `start` is inclusive, `end` is exclusive. Files are shared `Arc<str>` so
/// locations are cheap to clone when copied into assertion data.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CodeLocation {
    pub file: Arc<str>,
    pub start: u32,
    pub end: u32,
}

impl CodeLocation {
    #[must_use]
    pub fn new(file: impl Into<Arc<str>>, start: u32, end: u32) -> Self {
        Self {
            file: file.into(),
            start,
            end: end.max(start),
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `[from, to]` lies within this location's range.
    #[must_use]
    pub const fn contains_range(&self, from: u32, to: u32) -> bool {
        from >= self.start && to <= self.end
    }

    /// Whether `other` is in the same file and lies within this location.
    #[must_use]
    pub fn contains(&self, other: &CodeLocation) -> bool {
        self.file == other.file && self.contains_range(other.start, other.end)
    }
}

impl fmt::Display for CodeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}..{}", self.file, self.start, self.end)
    }
}

#[cfg(test)]
#[path = "../tests/location_tests.rs"]
mod tests;
