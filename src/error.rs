//! Error types for the bytelru library.
//!
//! ## Key Components
//!
//! - [`NotFoundError`]: Returned by [`LruCache::try_get`](crate::LruCache::try_get)
//!   when a key has no live entry. Expected and recoverable.
//! - [`InvariantError`]: Returned by
//!   [`LruCache::check_invariants`](crate::LruCache::check_invariants) when the
//!   key index, recency list and byte accounting disagree.
//!
//! ## Example Usage
//!
//! ```
//! use bytelru::LruCache;
//! use bytelru::error::NotFoundError;
//!
//! let mut cache: LruCache<String> = LruCache::new(0);
//! let err: NotFoundError = cache.try_get("missing").unwrap_err();
//! assert_eq!(err.key(), "missing");
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// NotFoundError
// ---------------------------------------------------------------------------

/// The requested key has no live entry.
///
/// Either it was never added or it has been evicted. Carries the key that
/// was looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFoundError {
    key: String,
}

impl NotFoundError {
    #[inline]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// The key that was not found.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key not found: {:?}", self.key)
    }
}

impl std::error::Error for NotFoundError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
