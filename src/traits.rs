//! # Cache Traits
//!
//! The smallest interface a byte-budgeted cache exposes, split the same way
//! the concrete cache is used:
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<V>                 │
//!   │                                         │
//!   │  add(&mut, String, V)                   │
//!   │  get(&mut, &str) → Option<&V>           │
//!   │  len(&) → usize                         │
//!   │  is_empty(&) → bool                     │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          EvictingCache<V>               │
//!   │                                         │
//!   │  remove_oldest(&mut) → bool             │
//!   │  used_bytes(&) → u64                    │
//!   │  max_bytes(&) → u64                     │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! Code written against these traits does not depend on which entry a policy
//! picks as "oldest", so a different eviction order can be dropped in behind
//! the same calls.
//!
//! ## Example Usage
//!
//! ```
//! use bytelru::LruCache;
//! use bytelru::traits::{CoreCache, EvictingCache};
//!
//! fn warm<C: CoreCache<String>>(cache: &mut C, rows: &[(&str, &str)]) {
//!     for (key, value) in rows {
//!         cache.add((*key).to_string(), (*value).to_string());
//!     }
//! }
//!
//! fn shed<C: EvictingCache<String>>(cache: &mut C, target: u64) {
//!     while cache.used_bytes() > target && cache.remove_oldest() {}
//! }
//!
//! let mut cache = LruCache::new(0);
//! warm(&mut cache, &[("a", "1111"), ("b", "2222"), ("c", "3333")]);
//! shed(&mut cache, 10);
//! assert_eq!(cache.len(), 2);
//! ```
//!
//! ## Thread Safety
//!
//! Implementations are single-threaded; callers sharing a cache across
//! threads wrap it in their own lock.

/// Operations every cache supports.
pub trait CoreCache<V> {
    /// Inserts or replaces `key`, marking it most recently used.
    ///
    /// May evict other entries to stay within the byte budget.
    fn add(&mut self, key: String, value: V);

    /// Looks up `key`, marking it most recently used on a hit.
    fn get(&mut self, key: &str) -> Option<&V>;

    /// Number of live entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A cache that tracks a byte budget and can shed its oldest entry on demand.
pub trait EvictingCache<V>: CoreCache<V> {
    /// Evicts the entry the policy considers oldest.
    ///
    /// Returns `false` when there was nothing to evict.
    fn remove_oldest(&mut self) -> bool;

    /// Bytes currently charged against the budget.
    fn used_bytes(&self) -> u64;

    /// Configured budget; `0` means unbounded.
    fn max_bytes(&self) -> u64;
}
