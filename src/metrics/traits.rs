//! # Metrics Traits
//!
//! ```text
//!   ┌─────────────────────────────┐
//!   │     LruMetricsRecorder      │   written by the cache (&mut self)
//!   │  get_hit/get_miss/add/evict │
//!   └──────────────┬──────────────┘
//!                  │
//!   ┌──────────────┴──────────────┐
//!   │    LruMetricsReadRecorder   │   written from &self paths (peek)
//!   └─────────────────────────────┘
//!
//!   Consumption (decoupled from recording):
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Counters recorded from mutating cache operations.
pub trait LruMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_add_new(&mut self);
    fn record_add_update(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self, bytes: u64);
    fn record_remove_oldest_call(&mut self);
    fn record_clear(&mut self);
}

/// Counters recorded from read-only paths.
pub trait LruMetricsReadRecorder {
    fn record_peek_hit(&self);
    fn record_peek_miss(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Export/publish metrics to monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
