use bytelru::LruCache;
use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};

// 8-byte key + 56-byte value = 64 bytes per entry.
const ENTRY_BYTES: u64 = 64;

fn key(i: u64) -> String {
    format!("{i:08}")
}

fn filled(entries: u64) -> LruCache<[u8; 56]> {
    let mut cache = LruCache::with_capacity(entries * ENTRY_BYTES, entries as usize);
    for i in 0..entries {
        cache.add(key(i), [0u8; 56]);
    }
    cache
}

fn bench_lru_add_get(c: &mut Criterion) {
    c.bench_function("lru_add_get", |b| {
        b.iter_batched(
            || filled(1024),
            |mut cache| {
                for i in 0..1024u64 {
                    cache.add(std::hint::black_box(key(i + 10_000)), [1u8; 56]);
                    let _ = std::hint::black_box(cache.get(&key(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_remove_oldest(c: &mut Criterion) {
    c.bench_function("lru_remove_oldest", |b| {
        b.iter_batched(
            || filled(1024),
            |mut cache| {
                while std::hint::black_box(cache.remove_oldest()) {}
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_lru_eviction_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("lru_eviction_churn");
    group.throughput(Throughput::Elements(4096));
    group.bench_function("with_listener", |b| {
        b.iter_batched(
            || {
                let mut cache = filled(1024);
                cache.set_on_evicted(|key: String, value: [u8; 56]| {
                    std::hint::black_box((key, value));
                });
                cache
            },
            |mut cache| {
                for i in 0..4096u64 {
                    cache.add(std::hint::black_box(key(10_000 + i)), [2u8; 56]);
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("silent", |b| {
        b.iter_batched(
            || filled(1024),
            |mut cache| {
                for i in 0..4096u64 {
                    cache.add(std::hint::black_box(key(10_000 + i)), [2u8; 56]);
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_lru_get_hotset(c: &mut Criterion) {
    c.bench_function("lru_get_hotset", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        let keys: Vec<String> = (0..4096).map(|_| key(rng.gen_range(0..256))).collect();
        b.iter_batched(
            || filled(4096),
            |mut cache| {
                for k in &keys {
                    let _ = std::hint::black_box(cache.get(k));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_lru_add_get,
    bench_lru_remove_oldest,
    bench_lru_eviction_churn,
    bench_lru_get_hotset
);
criterion_main!(benches);
