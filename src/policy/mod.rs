//! Eviction policies.
//!
//! Only least-recently-used eviction is provided. Policies implement
//! [`CoreCache`](crate::traits::CoreCache) and
//! [`EvictingCache`](crate::traits::EvictingCache) so callers can stay
//! policy-agnostic.

pub mod lru;
