pub use crate::builder::CacheBuilder;
pub use crate::error::{InvariantError, NotFoundError};
pub use crate::listener::EvictionListener;
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::LruMetricsSnapshot;
pub use crate::policy::lru::LruCache;
pub use crate::size::ByteSize;
pub use crate::traits::{CoreCache, EvictingCache};
