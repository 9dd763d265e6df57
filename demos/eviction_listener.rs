use bytelru::{ByteSize, CacheBuilder};

struct Page {
    body: Vec<u8>,
}

impl ByteSize for Page {
    fn byte_len(&self) -> u64 {
        self.body.len() as u64
    }
}

fn main() {
    let mut cache = CacheBuilder::new(1024)
        .capacity_hint(8)
        .on_evicted(|key: String, page: Page| {
            println!("evicted {key} ({} bytes)", page.body.len());
        })
        .build();

    for (path, len) in [("/index", 300), ("/about", 300), ("/blog", 300)] {
        cache.add(path.to_string(), Page { body: vec![0; len] });
    }
    cache.get("/index");

    // Over budget: "/about" is the least recently used page.
    cache.add("/feed".to_string(), Page { body: vec![0; 200] });

    // Shed one more by hand.
    cache.remove_oldest();

    let remaining: Vec<&str> = cache.iter().map(|(key, _)| key).collect();
    println!("remaining {remaining:?}, {} bytes", cache.used_bytes());
}

// Expected output:
// evicted /about (300 bytes)
// evicted /blog (300 bytes)
// remaining ["/feed", "/index"], 511 bytes
