//! Optional counters for cache activity (`metrics` feature).
//!
//! Recording, snapshotting and export are separate concerns:
//! [`metrics_impl::LruMetrics`] is written by the cache on every operation,
//! [`snapshot::LruMetricsSnapshot`] is a plain copy handed to callers, and
//! [`exporter::PrometheusTextExporter`] publishes a snapshot.

pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
