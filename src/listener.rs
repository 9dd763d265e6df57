//! Eviction listener: a callback invoked whenever the cache evicts an entry.
//!
//! A cache holds at most one listener. It receives ownership of the evicted
//! key and value after the entry has been removed from both the key index and
//! the recency list, so by the time it runs the cache no longer reports that
//! key.
//!
//! # Example
//! ```
//! use bytelru::LruCache;
//! use std::sync::{Arc, Mutex};
//!
//! let evicted = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&evicted);
//!
//! let mut cache = LruCache::with_on_evicted(10, move |key: String, _value: String| {
//!     sink.lock().unwrap().push(key);
//! });
//!
//! cache.add("a".to_string(), "1234".to_string());
//! cache.add("b".to_string(), "1234".to_string());
//! cache.add("c".to_string(), "1234".to_string()); // over budget, "a" goes
//!
//! assert_eq!(*evicted.lock().unwrap(), vec!["a".to_string()]);
//! ```
//!
//! The listener runs synchronously inside `add` / `remove_oldest`, while the
//! cache is mutably borrowed, so it cannot call back into the same cache.
//! Listeners must be `Send` so a cache can be moved into a caller's lock.

/// Receives entries as they are evicted.
pub trait EvictionListener<V> {
    fn on_evict(&mut self, key: String, value: V);
}

impl<V, F> EvictionListener<V> for F
where
    F: FnMut(String, V),
{
    #[inline]
    fn on_evict(&mut self, key: String, value: V) {
        self(key, value)
    }
}

/// Boxed listener as stored by the cache.
pub type BoxedListener<V> = Box<dyn EvictionListener<V> + Send>;
