use std::cell::Cell;

use crate::metrics::traits::{LruMetricsReadRecorder, LruMetricsRecorder};

/// Live counters owned by a cache.
///
/// Read-path counters sit in `Cell`s so `peek(&self)` can record without a
/// mutable borrow. The cache is never `Sync`, so plain cells suffice.
#[derive(Debug, Default)]
pub struct LruMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub add_calls: u64,
    pub add_updates: u64,
    pub add_new: u64,
    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub evicted_bytes: u64,
    pub remove_oldest_calls: u64,
    pub clear_calls: u64,
    pub peek_calls: Cell<u64>,
    pub peek_hits: Cell<u64>,
}

impl LruMetricsRecorder for LruMetrics {
    fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }

    fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }

    fn record_add_new(&mut self) {
        self.add_calls += 1;
        self.add_new += 1;
    }

    fn record_add_update(&mut self) {
        self.add_calls += 1;
        self.add_updates += 1;
    }

    fn record_evict_call(&mut self) {
        self.evict_calls += 1;
    }

    fn record_evicted_entry(&mut self, bytes: u64) {
        self.evicted_entries += 1;
        self.evicted_bytes += bytes;
    }

    fn record_remove_oldest_call(&mut self) {
        self.remove_oldest_calls += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl LruMetricsReadRecorder for LruMetrics {
    fn record_peek_hit(&self) {
        self.peek_calls.set(self.peek_calls.get() + 1);
        self.peek_hits.set(self.peek_hits.get() + 1);
    }

    fn record_peek_miss(&self) {
        self.peek_calls.set(self.peek_calls.get() + 1);
    }
}
