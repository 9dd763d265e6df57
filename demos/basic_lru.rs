use bytelru::LruCache;

fn main() {
    // Each entry costs key bytes + value bytes: "1" + "alpha" = 6.
    let mut cache: LruCache<String> = LruCache::new(12);

    cache.add("1".to_string(), "alpha".to_string());
    cache.add("2".to_string(), "bravo".to_string());

    if let Some(value) = cache.get("1") {
        println!("hit 1: {}", value);
    }

    cache.add("3".to_string(), "gamma".to_string());

    println!("contains 2? {}", cache.contains("2"));
    println!("used {} of {} bytes", cache.used_bytes(), cache.max_bytes());
}

// Expected output:
// hit 1: alpha
// contains 2? false
// used 12 of 12 bytes
//
// Explanation: budget=12 bytes, two 6-byte entries fill it. After get("1"),
// key "1" is most recently used and "2" is oldest. Adding "3" pushes the
// total to 18, so "2" is evicted.
