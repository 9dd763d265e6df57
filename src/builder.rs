//! Builder for [`LruCache`].
//!
//! Gathers the byte budget, an optional eviction listener and an optional
//! preallocation hint, then constructs the cache in one step.
//!
//! ## Example
//!
//! ```rust
//! use bytelru::CacheBuilder;
//!
//! let mut cache = CacheBuilder::new(1024)
//!     .capacity_hint(64)
//!     .on_evicted(|key: String, value: Vec<u8>| {
//!         println!("evicted {key} ({} bytes)", value.len());
//!     })
//!     .build();
//!
//! cache.add("page:1".to_string(), vec![0u8; 512]);
//! assert_eq!(cache.used_bytes(), 6 + 512);
//! ```

use std::fmt;

use crate::listener::{BoxedListener, EvictionListener};
use crate::policy::lru::LruCache;
use crate::size::ByteSize;

/// Builder for creating [`LruCache`] instances.
pub struct CacheBuilder<V> {
    max_bytes: u64,
    capacity_hint: usize,
    on_evicted: Option<BoxedListener<V>>,
}

impl<V: ByteSize> CacheBuilder<V> {
    /// Starts a builder for a cache with a budget of `max_bytes`.
    ///
    /// `0` means unbounded.
    pub fn new(max_bytes: u64) -> Self {
        Self {
            max_bytes,
            capacity_hint: 0,
            on_evicted: None,
        }
    }

    /// Preallocates room for `entries` entries in the index and recency list.
    pub fn capacity_hint(mut self, entries: usize) -> Self {
        self.capacity_hint = entries;
        self
    }

    /// Registers the eviction listener. A later call replaces an earlier one.
    pub fn on_evicted<L>(mut self, listener: L) -> Self
    where
        L: EvictionListener<V> + Send + 'static,
    {
        self.on_evicted = Some(Box::new(listener));
        self
    }

    pub fn build(self) -> LruCache<V> {
        let mut cache = LruCache::with_capacity(self.max_bytes, self.capacity_hint);
        cache.set_boxed_on_evicted(self.on_evicted);
        cache
    }
}

impl<V> fmt::Debug for CacheBuilder<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheBuilder")
            .field("max_bytes", &self.max_bytes)
            .field("capacity_hint", &self.capacity_hint)
            .field("has_listener", &self.on_evicted.is_some())
            .finish()
    }
}
