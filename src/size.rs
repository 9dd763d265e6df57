//! Byte sizing for cached values.
//!
//! The cache charges every entry `key.len() + value.byte_len()` bytes against
//! its budget. It never looks inside a value; the size is purely an accounting
//! figure reported by the value itself.
//!
//! # Example
//! ```
//! use bytelru::ByteSize;
//!
//! struct Thumbnail {
//!     pixels: Vec<u8>,
//! }
//!
//! impl ByteSize for Thumbnail {
//!     fn byte_len(&self) -> u64 {
//!         self.pixels.len() as u64
//!     }
//! }
//!
//! let thumb = Thumbnail { pixels: vec![0; 64] };
//! assert_eq!(thumb.byte_len(), 64);
//! ```

use std::rc::Rc;
use std::sync::Arc;

/// A value that reports how many bytes it accounts for.
///
/// The result must be stable for as long as the value sits in a cache: the
/// cache subtracts the size it reads at eviction time, so a value whose
/// reported size drifts while cached skews the running total.
pub trait ByteSize {
    fn byte_len(&self) -> u64;
}

impl ByteSize for str {
    #[inline]
    fn byte_len(&self) -> u64 {
        self.len() as u64
    }
}

impl ByteSize for [u8] {
    #[inline]
    fn byte_len(&self) -> u64 {
        self.len() as u64
    }
}

impl ByteSize for String {
    #[inline]
    fn byte_len(&self) -> u64 {
        self.len() as u64
    }
}

impl ByteSize for Vec<u8> {
    #[inline]
    fn byte_len(&self) -> u64 {
        self.len() as u64
    }
}

impl<const N: usize> ByteSize for [u8; N] {
    #[inline]
    fn byte_len(&self) -> u64 {
        N as u64
    }
}

impl<T: ByteSize + ?Sized> ByteSize for Box<T> {
    #[inline]
    fn byte_len(&self) -> u64 {
        (**self).byte_len()
    }
}

impl<T: ByteSize + ?Sized> ByteSize for Rc<T> {
    #[inline]
    fn byte_len(&self) -> u64 {
        (**self).byte_len()
    }
}

impl<T: ByteSize + ?Sized> ByteSize for Arc<T> {
    #[inline]
    fn byte_len(&self) -> u64 {
        (**self).byte_len()
    }
}

/// Bytes an entry is charged: key length plus the value's reported size.
///
/// Saturates at `u64::MAX` for values that report sizes near the top of the
/// range.
#[inline]
pub fn entry_bytes<V: ByteSize + ?Sized>(key: &str, value: &V) -> u64 {
    saturate(entry_charge(key, value))
}

/// Exact charge of an entry. Cannot wrap even for `u64::MAX`-sized values.
#[inline]
pub(crate) fn entry_charge<V: ByteSize + ?Sized>(key: &str, value: &V) -> u128 {
    key.len() as u128 + u128::from(value.byte_len())
}

#[inline]
pub(crate) fn saturate(bytes: u128) -> u64 {
    u64::try_from(bytes).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_bytes_report_length() {
        assert_eq!("hello".byte_len(), 5);
        assert_eq!(String::from("héllo").byte_len(), 6);
        assert_eq!(vec![0u8; 12].byte_len(), 12);
        assert_eq!([0u8; 7].byte_len(), 7);
        assert_eq!(b"abc"[..].byte_len(), 3);
    }

    #[test]
    fn smart_pointers_delegate_to_pointee() {
        let boxed: Box<str> = "abcd".into();
        let shared: Arc<[u8]> = Arc::from(vec![1u8, 2, 3]);
        let local = Rc::new(String::from("xy"));

        assert_eq!(boxed.byte_len(), 4);
        assert_eq!(shared.byte_len(), 3);
        assert_eq!(local.byte_len(), 2);
        assert_eq!(Box::new(vec![0u8; 9]).byte_len(), 9);
    }

    #[test]
    fn entry_bytes_counts_key_and_value() {
        assert_eq!(entry_bytes("a", &vec![0u8; 4]), 5);
        assert_eq!(entry_bytes("", &String::new()), 0);
        assert_eq!(entry_bytes("key", "value"), 8);
    }

    #[test]
    fn entry_bytes_saturates_instead_of_wrapping() {
        struct Huge;
        impl ByteSize for Huge {
            fn byte_len(&self) -> u64 {
                u64::MAX
            }
        }

        assert_eq!(entry_bytes("a", &Huge), u64::MAX);
        assert_eq!(entry_charge("a", &Huge), u128::from(u64::MAX) + 1);
        assert_eq!(saturate(u128::from(u64::MAX) * 2), u64::MAX);
        assert_eq!(saturate(42), 42);
    }
}
