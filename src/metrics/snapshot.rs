/// Point-in-time copy of an [`LruCache`](crate::LruCache)'s counters and gauges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LruMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub add_calls: u64,
    pub add_updates: u64,
    pub add_new: u64,

    // `evict_calls` counts adds that went over budget; `evicted_*` count
    // every eviction, including explicit `remove_oldest` calls.
    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub evicted_bytes: u64,

    pub remove_oldest_calls: u64,
    pub clear_calls: u64,

    pub peek_calls: u64,
    pub peek_hits: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub used_bytes: u64,
    pub max_bytes: u64,
}

impl LruMetricsSnapshot {
    /// Fraction of `get` calls that hit, or `None` before the first call.
    pub fn hit_ratio(&self) -> Option<f64> {
        if self.get_calls == 0 {
            None
        } else {
            Some(self.get_hits as f64 / self.get_calls as f64)
        }
    }
}
