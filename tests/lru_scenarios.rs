// ==============================================
// LRU BEHAVIOUR SCENARIOS (integration)
// ==============================================
//
// End-to-end scenarios against the public API: byte accounting, eviction
// order, the listener contract and the policy-agnostic traits.

use std::sync::{Arc, Mutex};

use bytelru::traits::{CoreCache, EvictingCache};
use bytelru::{ByteSize, CacheBuilder, LruCache};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Payload {
    len: u64,
}

impl ByteSize for Payload {
    fn byte_len(&self) -> u64 {
        self.len
    }
}

fn v(len: u64) -> Payload {
    Payload { len }
}

fn sum_of_entries(cache: &LruCache<Payload>) -> u64 {
    cache
        .iter()
        .map(|(key, value)| key.len() as u64 + value.byte_len())
        .sum()
}

mod capacity {
    use super::*;

    #[test]
    fn ten_byte_budget_evicts_oldest_of_three() {
        let mut cache = LruCache::new(10);
        cache.add("a".to_string(), v(4));
        cache.add("b".to_string(), v(4));
        assert_eq!(cache.used_bytes(), 10);
        assert_eq!(cache.len(), 2);

        cache.add("c".to_string(), v(4));
        assert_eq!(cache.used_bytes(), 10);
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn unbounded_cache_keeps_everything() {
        let evictions = Arc::new(Mutex::new(0usize));
        let counter = Arc::clone(&evictions);
        let mut cache = CacheBuilder::<Payload>::new(0)
            .on_evicted(move |_key: String, _value: Payload| *counter.lock().unwrap() += 1)
            .build();

        for i in 0..1000 {
            cache.add(format!("entry-{i:04}"), v(64));
        }

        assert_eq!(cache.len(), 1000);
        assert_eq!(*evictions.lock().unwrap(), 0);
        assert_eq!(cache.used_bytes(), 1000 * (10 + 64));
    }

    #[test]
    fn oversized_update_leaves_no_other_entries() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let mut cache = LruCache::with_on_evicted(12, move |key: String, _value: Payload| {
            sink.lock().unwrap().push(key);
        });
        cache.add("a".to_string(), v(3));
        cache.add("b".to_string(), v(3));
        cache.add("c".to_string(), v(3));

        cache.add("b".to_string(), v(50));

        assert_eq!(cache.len(), 0);
        assert_eq!(cache.used_bytes(), 0);
        assert_eq!(*log.lock().unwrap(), vec!["a", "c", "b"]);
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn growing_update_keeps_updated_key_when_it_fits() {
        let mut cache = LruCache::new(12);
        cache.add("a".to_string(), v(3));
        cache.add("b".to_string(), v(3));
        cache.add("c".to_string(), v(3));

        cache.add("a".to_string(), v(9));

        assert!(cache.contains("a"));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.used_bytes(), 10);
    }

    #[test]
    fn shrinking_update_frees_budget() {
        let mut cache = LruCache::new(12);
        cache.add("a".to_string(), v(9));
        cache.add("a".to_string(), v(1));
        cache.add("b".to_string(), v(3));
        cache.add("c".to_string(), v(3));

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.used_bytes(), 2 + 4 + 4);
    }
}

mod ordering {
    use super::*;

    #[test]
    fn strict_lru_order_without_access() {
        let mut cache = LruCache::new(15);
        for key in ["A", "B", "C"] {
            cache.add(key.to_string(), v(4));
        }
        cache.add("D".to_string(), v(4));

        assert!(!cache.contains("A"));
        let order: Vec<&str> = cache.iter().map(|(k, _)| k).collect();
        assert_eq!(order, vec!["D", "C", "B"]);
    }

    #[test]
    fn get_changes_next_victim() {
        let mut cache = LruCache::new(15);
        for key in ["A", "B", "C"] {
            cache.add(key.to_string(), v(4));
        }
        assert_eq!(cache.peek_oldest().map(|(k, _)| k), Some("A"));

        cache.get("A");
        assert_eq!(cache.peek_oldest().map(|(k, _)| k), Some("B"));

        cache.add("D".to_string(), v(4));
        assert!(cache.contains("A"));
        assert!(!cache.contains("B"));
    }

    #[test]
    fn get_is_idempotent_for_accounting() {
        let mut cache = LruCache::new(100);
        cache.add("x".to_string(), v(7));
        cache.add("y".to_string(), v(7));
        for _ in 0..5 {
            assert!(cache.get("x").is_some());
            assert_eq!(cache.len(), 2);
            assert_eq!(cache.used_bytes(), 16);
        }
    }
}

mod listener_contract {
    use super::*;

    #[test]
    fn called_once_per_eviction_with_matching_pair() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let mut cache = LruCache::with_on_evicted(20, move |key: String, value: Payload| {
            sink.lock().unwrap().push((key, value));
        });

        for (i, key) in ["k1", "k2", "k3", "k4", "k5", "k6"].iter().enumerate() {
            cache.add((*key).to_string(), v(i as u64 + 1));
        }

        let log = log.lock().unwrap();
        let mut keys: Vec<&str> = log.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["k1", "k2", "k3", "k4"]);
        keys.dedup();
        assert_eq!(keys.len(), 4);
        for (key, value) in log.iter() {
            let expected = key[1..].parse::<u64>().unwrap();
            assert_eq!(value.len, expected);
            assert!(!cache.contains(key));
        }
        assert_eq!(cache.used_bytes(), sum_of_entries(&cache));
    }

    #[test]
    fn evicted_entry_is_gone_before_listener_runs() {
        // The listener cannot borrow the cache, so it records what the next
        // observable state must look like: the key it was handed is already
        // absent once add() returns, and the byte total excludes it.
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut cache = LruCache::with_on_evicted(6, move |key: String, value: Payload| {
            sink.lock().unwrap().push(key.len() as u64 + value.byte_len());
        });

        cache.add("a".to_string(), v(5));
        cache.add("b".to_string(), v(5));

        assert_eq!(*seen.lock().unwrap(), vec![6]);
        assert_eq!(cache.used_bytes(), 6);
        assert!(cache.try_get("a").is_err());
    }

    #[test]
    fn panicking_listener_leaves_consistent_state() {
        let mut cache = LruCache::with_on_evicted(5, |key: String, _value: Payload| {
            panic!("listener failed for {key}");
        });
        cache.add("a".to_string(), v(4));

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            cache.add("b".to_string(), v(4));
        }));
        assert!(result.is_err());

        assert!(!cache.contains("a"));
        assert!(cache.contains("b"));
        assert_eq!(cache.used_bytes(), 5);
        assert!(cache.check_invariants().is_ok());
    }
}

mod traits {
    use super::*;

    fn fill<C: CoreCache<Payload>>(cache: &mut C, n: usize) {
        for i in 0..n {
            cache.add(format!("{i}"), v(4));
        }
    }

    fn shed_to<C: EvictingCache<Payload>>(cache: &mut C, target: u64) -> usize {
        let mut evicted = 0;
        while cache.used_bytes() > target && cache.remove_oldest() {
            evicted += 1;
        }
        evicted
    }

    #[test]
    fn cache_is_usable_through_traits() {
        let mut cache: LruCache<Payload> = LruCache::new(0);
        fill(&mut cache, 6);
        assert_eq!(CoreCache::len(&cache), 6);
        assert!(!CoreCache::is_empty(&cache));
        assert_eq!(EvictingCache::max_bytes(&cache), 0);

        let evicted = shed_to(&mut cache, 12);
        assert_eq!(evicted, 4);
        assert_eq!(cache.len(), 2);
        assert!(CoreCache::get(&mut cache, "5").is_some());
        assert!(CoreCache::get(&mut cache, "0").is_none());
    }

    #[test]
    fn cache_can_be_shared_behind_a_lock() {
        fn assert_send<T: Send>() {}
        assert_send::<LruCache<Payload>>();

        let shared = Arc::new(Mutex::new(LruCache::new(100)));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let cache = Arc::clone(&shared);
                std::thread::spawn(move || {
                    for i in 0..10 {
                        cache.lock().unwrap().add(format!("{t}-{i}"), v(1));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let cache = shared.lock().unwrap();
        assert!(cache.used_bytes() <= 100);
        assert!(cache.check_invariants().is_ok());
    }
}
