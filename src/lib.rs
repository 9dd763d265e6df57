//! bytelru: a byte-budgeted least-recently-used cache.
//!
//! Entries are charged `key.len() + value.byte_len()` bytes. When an `add`
//! pushes the total over the budget, least recently used entries are evicted
//! and handed to an optional listener.
//!
//! ```
//! use bytelru::LruCache;
//!
//! let mut cache = LruCache::new(10);
//! cache.add("a".to_string(), vec![0u8; 4]);
//! cache.add("b".to_string(), vec![0u8; 4]);
//! cache.get("a");
//! cache.add("c".to_string(), vec![0u8; 4]);
//!
//! assert!(cache.contains("a"));
//! assert!(!cache.contains("b"));
//! assert_eq!(cache.used_bytes(), 10);
//! ```

pub mod builder;
pub mod ds;
pub mod error;
pub mod listener;
pub mod policy;
pub mod prelude;
pub mod size;
pub mod traits;

#[cfg(feature = "metrics")]
pub mod metrics;

pub use builder::CacheBuilder;
pub use error::{InvariantError, NotFoundError};
pub use listener::EvictionListener;
pub use policy::lru::LruCache;
pub use size::ByteSize;
