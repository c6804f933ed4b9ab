//! Version-keyed cached sorted view.
//!
//! [`SortCache`] memoizes a sorted copy of a collection and recomputes
//! it only when the owner's change marker has moved. The marker is an
//! explicit counter bumped by every mutating operation, so staleness is
//! impossible by construction rather than by convention.

use std::cmp::Ordering;

/// Caches a sorted view of a collection, keyed on a version marker.
///
/// The cache is decoupled from any specific element type: the owner
/// supplies the items, the key function, and the current version on
/// every access.
#[derive(Debug)]
pub struct SortCache<T> {
    sorted: Vec<T>,
    version: Option<u64>,
    descending: bool,
}

impl<T> SortCache<T> {
    /// Creates an empty cache. With `descending` set, views are ordered
    /// from the highest key to the lowest.
    pub fn new(descending: bool) -> Self {
        Self {
            sorted: Vec::new(),
            version: None,
            descending,
        }
    }

    /// Drops the cached view; the next access recomputes.
    pub fn invalidate(&mut self) {
        self.version = None;
        self.sorted.clear();
    }
}

impl<T: Clone> SortCache<T> {
    /// Returns the sorted view of `items` for `version`.
    ///
    /// Recomputes when `version` differs from the version the cache was
    /// built at; otherwise serves the cached copy without touching
    /// `items`. Incomparable keys (NaN) are treated as equal.
    pub fn view<K, F>(&mut self, version: u64, items: &[T], key: F) -> &[T]
    where
        K: PartialOrd,
        F: Fn(&T) -> K,
    {
        if self.version != Some(version) {
            self.sorted = items.to_vec();
            self.sorted
                .sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal));
            if self.descending {
                self.sorted.reverse();
            }
            self.version = Some(version);
        }
        &self.sorted
    }
}
