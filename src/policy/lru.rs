//! # Byte-Budgeted Least Recently Used (LRU) Cache
//!
//! A string-keyed cache that charges every entry `key.len() + value.byte_len()`
//! bytes and evicts least recently used entries whenever the running total
//! exceeds a configured budget.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                           LruCache<V>                                │
//!   │                                                                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  FxHashMap<String, NodeId>  (key index)                      │   │
//!   │   │                                                              │   │
//!   │   │   "a" ───────────────────────────────────────────────┐       │   │
//!   │   │   "b" ─────────────────────────────────────┐         │       │   │
//!   │   │   "c" ───────────────────────────┐         │         │       │   │
//!   │   └──────────────────────────────────┼─────────┼─────────┼───────┘   │
//!   │                                      ▼         ▼         ▼           │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  RecencyList<Entry<V>>                                       │   │
//!   │   │                                                              │   │
//!   │   │  head ──► [c] ◄──► [b] ◄──► [a] ◄── tail                     │   │
//!   │   │          (MRU)              (LRU)                            │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   │                                                                      │
//!   │   used_bytes = Σ key.len() + value.byte_len()     max_bytes (0 = ∞)  │
//!   │   on_evicted: Option<listener>                                       │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations Flow
//!
//! ```text
//!   add("d", v) with max_bytes = 15, every entry 5 bytes
//!   ═══════════════════════════════════════════════════════════════════════
//!
//!   Before:  head ──► [c] ◄──► [b] ◄──► [a] ◄── tail     used = 15
//!
//!   1. push [d] at head                                 used = 20
//!   2. while used > max: remove_oldest()
//!        pop [a], used -= 5, drop "a" from index        used = 15
//!        on_evicted("a", v_a)
//!
//!   After:   head ──► [d] ◄──► [c] ◄──► [b] ◄── tail     used = 15
//! ```
//!
//! An entry whose own size exceeds the budget cannot stay: the loop evicts
//! everything behind it and then the entry itself, leaving the cache empty.
//!
//! ## Methods
//!
//! | Method               | Complexity | Description                                 |
//! |----------------------|------------|---------------------------------------------|
//! | `new(max_bytes)`     | O(1)       | Empty cache; `0` disables the budget        |
//! | `add(k, v)`          | O(1)*      | Insert or replace, then evict to budget     |
//! | `get(k)`             | O(1)       | Lookup and promote to MRU                   |
//! | `try_get(k)`         | O(1)       | `get` returning `NotFoundError` on a miss   |
//! | `peek(k)`            | O(1)       | Lookup without promotion                    |
//! | `remove_oldest()`    | O(1)       | Evict the LRU entry and notify the listener |
//! | `peek_oldest()`      | O(1)       | The next eviction victim                    |
//! | `len()`              | O(1)       | Live entries (not bytes)                    |
//! | `used_bytes()`       | O(1)       | Bytes charged against the budget            |
//! | `clear()`            | O(n)       | Drop everything without notification        |
//! | `check_invariants()` | O(n)       | Index / list / byte accounting agreement    |
//!
//! \* plus O(k) for k evictions triggered by one `add`.
//!
//! ## Thread Safety
//!
//! `LruCache` is single-threaded. It is `Send` when `V: Send`, so callers that
//! need sharing put it behind their own `Mutex`.

use std::fmt;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::ds::{NodeId, RecencyList};
use crate::error::{InvariantError, NotFoundError};
use crate::listener::{BoxedListener, EvictionListener};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    LruMetricsReadRecorder, LruMetricsRecorder, MetricsSnapshotProvider,
};
use crate::size::{entry_charge, saturate, ByteSize};
use crate::traits::{CoreCache, EvictingCache};

/// Record stored in the recency list. The key is kept here as well as in the
/// index so eviction from the tail can find its index slot.
struct Entry<V> {
    key: String,
    value: V,
}

/// Byte-budgeted LRU cache.
///
/// # Example
/// ```
/// use bytelru::LruCache;
///
/// // "a"/"b"/"c" each cost 1 (key) + 4 (value) = 5 bytes.
/// let mut cache = LruCache::new(10);
/// cache.add("a".to_string(), "aaaa".to_string());
/// cache.add("b".to_string(), "bbbb".to_string());
/// assert_eq!(cache.used_bytes(), 10);
///
/// cache.add("c".to_string(), "cccc".to_string());
/// assert!(cache.get("a").is_none());
/// assert_eq!(cache.len(), 2);
/// ```
pub struct LruCache<V> {
    index: FxHashMap<String, NodeId>,
    list: RecencyList<Entry<V>>,
    max_bytes: u64,
    // Exact total; `used_bytes()` saturates it to `u64`.
    used_bytes: u128,
    on_evicted: Option<BoxedListener<V>>,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<V: ByteSize> LruCache<V> {
    /// Creates an empty cache with a byte budget of `max_bytes`.
    ///
    /// A budget of `0` means unbounded: `add` never evicts.
    pub fn new(max_bytes: u64) -> Self {
        Self::with_capacity(max_bytes, 0)
    }

    /// Creates an empty cache with room for `entries` entries preallocated.
    pub fn with_capacity(max_bytes: u64, entries: usize) -> Self {
        Self {
            index: FxHashMap::with_capacity_and_hasher(entries, Default::default()),
            list: RecencyList::with_capacity(entries),
            max_bytes,
            used_bytes: 0,
            on_evicted: None,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        }
    }

    /// Creates an empty cache that reports every eviction to `listener`.
    pub fn with_on_evicted<L>(max_bytes: u64, listener: L) -> Self
    where
        L: EvictionListener<V> + Send + 'static,
    {
        let mut cache = Self::new(max_bytes);
        cache.set_on_evicted(listener);
        cache
    }

    /// Installs `listener`, replacing any previous one.
    pub fn set_on_evicted<L>(&mut self, listener: L)
    where
        L: EvictionListener<V> + Send + 'static,
    {
        self.on_evicted = Some(Box::new(listener));
    }

    pub(crate) fn set_boxed_on_evicted(&mut self, listener: Option<BoxedListener<V>>) {
        self.on_evicted = listener;
    }

    /// Removes and returns the current listener; later evictions are silent.
    pub fn take_on_evicted(&mut self) -> Option<BoxedListener<V>> {
        self.on_evicted.take()
    }

    /// Inserts `value` under `key`, or replaces the value of a live key.
    ///
    /// Either way the key becomes the most recently used entry. Afterwards the
    /// least recently used entries are evicted until `used_bytes() <=
    /// max_bytes()` (unless the budget is `0`). The replaced value of an
    /// existing key is dropped without notifying the listener.
    pub fn add(&mut self, key: String, value: V) {
        if let Some(&id) = self.index.get(key.as_str()) {
            self.list.move_to_front(id);
            if let Some(entry) = self.list.get_mut(id) {
                let old_bytes = entry.value.byte_len();
                let new_bytes = value.byte_len();
                self.used_bytes = self
                    .used_bytes
                    .saturating_sub(u128::from(old_bytes))
                    .saturating_add(u128::from(new_bytes));
                entry.value = value;
                trace!(
                    key = %key,
                    old_bytes,
                    new_bytes,
                    used_bytes = saturate(self.used_bytes),
                    "updated cache entry"
                );
            }
            #[cfg(feature = "metrics")]
            self.metrics.record_add_update();
        } else {
            let charge = entry_charge(&key, &value);
            let id = self.list.push_front(Entry {
                key: key.clone(),
                value,
            });
            self.index.insert(key, id);
            self.used_bytes = self.used_bytes.saturating_add(charge);
            trace!(
                bytes = saturate(charge),
                used_bytes = saturate(self.used_bytes),
                "added cache entry"
            );
            #[cfg(feature = "metrics")]
            self.metrics.record_add_new();
        }

        self.evict_to_budget();

        #[cfg(debug_assertions)]
        self.debug_validate();
    }

    /// Returns the value for `key` and marks it most recently used.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let Some(&id) = self.index.get(key) else {
            trace!(key, "cache miss");
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_front(id);
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Like [`get`](Self::get), but reports a miss as a [`NotFoundError`].
    pub fn try_get(&mut self, key: &str) -> Result<&V, NotFoundError> {
        self.get(key).ok_or_else(|| NotFoundError::new(key))
    }

    /// Returns the value for `key` without touching recency order.
    pub fn peek(&self, key: &str) -> Option<&V> {
        let value = self
            .index
            .get(key)
            .and_then(|&id| self.list.get(id))
            .map(|entry| &entry.value);

        #[cfg(feature = "metrics")]
        match value {
            Some(_) => self.metrics.record_peek_hit(),
            None => self.metrics.record_peek_miss(),
        }

        value
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// The entry the next eviction would remove.
    pub fn peek_oldest(&self) -> Option<(&str, &V)> {
        self.list
            .back()
            .map(|entry| (entry.key.as_str(), &entry.value))
    }

    /// Evicts the least recently used entry.
    ///
    /// The entry is removed from the recency list, the key index and the byte
    /// total before the listener sees it. Returns `false` if the cache was
    /// empty.
    pub fn remove_oldest(&mut self) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_oldest_call();

        let Some(Entry { key, value }) = self.list.pop_back() else {
            return false;
        };
        let charge = entry_charge(&key, &value);
        self.used_bytes = self.used_bytes.saturating_sub(charge);
        self.index.remove(key.as_str());

        let bytes = saturate(charge);
        debug!(
            key = %key,
            bytes,
            used_bytes = saturate(self.used_bytes),
            max_bytes = self.max_bytes,
            "evicted least recently used entry"
        );
        #[cfg(feature = "metrics")]
        self.metrics.record_evicted_entry(bytes);

        if let Some(listener) = self.on_evicted.as_mut() {
            listener.on_evict(key, value);
        }
        true
    }

    fn evict_to_budget(&mut self) {
        if !self.over_budget() {
            return;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_evict_call();

        while self.over_budget() {
            if !self.remove_oldest() {
                break;
            }
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Bytes currently charged against the budget, saturating at `u64::MAX`.
    pub fn used_bytes(&self) -> u64 {
        saturate(self.used_bytes)
    }

    fn over_budget(&self) -> bool {
        self.max_bytes != 0 && self.used_bytes > u128::from(self.max_bytes)
    }

    /// The configured budget; `0` means unbounded.
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Iterates `(key, value)` pairs from most to least recently used.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &V)> + '_ {
        self.list
            .iter()
            .map(|entry| (entry.key.as_str(), &entry.value))
    }

    /// Drops every entry without notifying the listener.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.index.clear();
        self.list.clear();
        self.used_bytes = 0;
    }

    /// Verifies that the key index, the recency list and the byte total agree.
    ///
    /// The budget itself is not checked here: if a listener panics part way
    /// through eviction the cache is consistent but may still hold more than
    /// `max_bytes` until the next `add`.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.list.validate_links().map_err(InvariantError::new)?;

        if self.index.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but recency list holds {} entries",
                self.index.len(),
                self.list.len()
            )));
        }

        for (key, &id) in &self.index {
            match self.list.get(id) {
                Some(entry) if entry.key == *key => {},
                Some(entry) => {
                    return Err(InvariantError::new(format!(
                        "index key {:?} points at entry {:?}",
                        key, entry.key
                    )));
                },
                None => {
                    return Err(InvariantError::new(format!(
                        "index key {:?} points at a dead node",
                        key
                    )));
                },
            }
        }

        let actual: u128 = self
            .list
            .iter()
            .map(|entry| entry_charge(&entry.key, &entry.value))
            .sum();
        if actual != self.used_bytes {
            return Err(InvariantError::new(format!(
                "used_bytes is {} but entries sum to {}",
                self.used_bytes, actual
            )));
        }

        Ok(())
    }

    #[cfg(debug_assertions)]
    fn debug_validate(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("lru cache invariant violated: {}", err);
        }
        assert!(
            !self.over_budget(),
            "lru cache left over budget after add: {} > {}",
            self.used_bytes,
            self.max_bytes
        );
    }
}

#[cfg(feature = "metrics")]
impl<V: ByteSize> LruCache<V> {
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            add_calls: self.metrics.add_calls,
            add_updates: self.metrics.add_updates,
            add_new: self.metrics.add_new,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            evicted_bytes: self.metrics.evicted_bytes,
            remove_oldest_calls: self.metrics.remove_oldest_calls,
            clear_calls: self.metrics.clear_calls,
            peek_calls: self.metrics.peek_calls.get(),
            peek_hits: self.metrics.peek_hits.get(),
            cache_len: self.len(),
            used_bytes: self.used_bytes(),
            max_bytes: self.max_bytes,
        }
    }
}

#[cfg(feature = "metrics")]
impl<V: ByteSize> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCache<V> {
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<V: ByteSize> CoreCache<V> for LruCache<V> {
    #[inline]
    fn add(&mut self, key: String, value: V) {
        LruCache::add(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &str) -> Option<&V> {
        LruCache::get(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        LruCache::len(self)
    }
}

impl<V: ByteSize> EvictingCache<V> for LruCache<V> {
    #[inline]
    fn remove_oldest(&mut self) -> bool {
        LruCache::remove_oldest(self)
    }

    #[inline]
    fn used_bytes(&self) -> u64 {
        LruCache::used_bytes(self)
    }

    #[inline]
    fn max_bytes(&self) -> u64 {
        self.max_bytes
    }
}

impl<V> fmt::Debug for LruCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.list.len())
            .field("used_bytes", &saturate(self.used_bytes))
            .field("max_bytes", &self.max_bytes)
            .field("has_listener", &self.on_evicted.is_some())
            .finish_non_exhaustive()
    }
}

impl<V: ByteSize> Default for LruCache<V> {
    /// An unbounded cache.
    fn default() -> Self {
        Self::new(0)
    }
}

impl<V: ByteSize> Extend<(String, V)> for LruCache<V> {
    fn extend<T: IntoIterator<Item = (String, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}
