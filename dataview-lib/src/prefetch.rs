//! Route prefetch cache
//!
//! Remembers which routes have already been prefetched in this session so
//! hover and focus handlers fire the prefetch at most once per route.

use chrono::DateTime;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// Session-scoped set of prefetched routes.
///
/// Entries are never evicted; the cache lives as long as the session that
/// created it. Pass it to whatever triggers prefetches rather than keeping
/// it in a global.
///
/// # Example
///
/// ```
/// use dataview_lib::prefetch::PrefetchCache;
///
/// let cache = PrefetchCache::new();
/// assert!(cache.should_prefetch("/products/42"));
/// assert!(!cache.should_prefetch("/products/42"));
/// assert!(cache.contains("/products/42"));
/// ```
#[derive(Debug, Default)]
pub struct PrefetchCache {
    routes: DashMap<String, DateTime<Utc>>,
}

impl PrefetchCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            routes: DashMap::new(),
        }
    }

    /// Marks a route as prefetched.
    ///
    /// Returns `true` the first time a route is seen, meaning the caller
    /// should issue the prefetch now.
    pub fn should_prefetch(&self, route: &str) -> bool {
        if self.routes.contains_key(route) {
            return false;
        }
        match self.routes.entry(route.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(Utc::now());
                log::trace!("Prefetching route {}", route);
                true
            }
        }
    }

    /// Returns `true` if the route has been prefetched.
    pub fn contains(&self, route: &str) -> bool {
        self.routes.contains_key(route)
    }

    /// Returns when the route was first prefetched.
    pub fn prefetched_at(&self, route: &str) -> Option<DateTime<Utc>> {
        self.routes.get(route).map(|entry| *entry.value())
    }

    /// Returns the number of prefetched routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if nothing has been prefetched.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn test_routes_are_independent() {
        let cache = PrefetchCache::new();
        assert!(cache.is_empty());
        assert!(cache.should_prefetch("/orders"));
        assert!(cache.should_prefetch("/products"));
        assert!(!cache.should_prefetch("/orders"));
        assert_eq!(cache.len(), 2);
        assert!(cache.prefetched_at("/orders").is_some());
        assert!(cache.prefetched_at("/staff").is_none());
    }

    #[test]
    fn test_concurrent_callers_prefetch_once() {
        let cache = Arc::new(PrefetchCache::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = cache.clone();
                thread::spawn(move || cache.should_prefetch("/categories"))
            })
            .collect();

        let first: usize = handles
            .into_iter()
            .map(|h| usize::from(h.join().unwrap()))
            .sum();
        assert_eq!(first, 1);
    }
}
