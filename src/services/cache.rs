//! In-memory query cache shared by every `use_query` hook on the page.
//!
//! Values are keyed by request URL and live only as long as the page. Nothing
//! is persisted; entries are dropped by explicit invalidation.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

#[derive(Default)]
pub struct QueryCache {
    entries: HashMap<String, Rc<dyn Any>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value for `key` if present and of type `T`.
    pub fn get<T: 'static>(&self, key: &str) -> Option<Rc<T>> {
        self.entries
            .get(key)
            .cloned()
            .and_then(|value| value.downcast::<T>().ok())
    }

    pub fn insert<T: 'static>(&mut self, key: impl Into<String>, value: Rc<T>) {
        self.entries.insert(key.into(), value);
    }

    /// Drops one entry. Returns whether anything was removed.
    pub fn invalidate(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }
}

impl fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryCache")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

thread_local! {
    static CACHE: RefCell<QueryCache> = RefCell::new(QueryCache::new());
}

/// Runs `f` against the page-wide cache.
pub fn with_cache<R>(f: impl FnOnce(&mut QueryCache) -> R) -> R {
    CACHE.with(|cache| f(&mut cache.borrow_mut()))
}

pub fn cached<T: 'static>(key: &str) -> Option<Rc<T>> {
    with_cache(|cache| cache.get(key))
}

pub fn store<T: 'static>(key: &str, value: Rc<T>) {
    with_cache(|cache| cache.insert(key, value));
}

/// Forces the next `use_query` mount for `key` to start from a cold fetch.
pub fn invalidate(key: &str) -> bool {
    with_cache(|cache| cache.invalidate(key))
}
