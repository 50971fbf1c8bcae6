//! Olelo Dictionary Benchmarks
//!
//! Benchmarks for the Lanai Trie, implemented with the Criterion framework.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench --features benchmarking
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, measurement::WallTime, BenchmarkId, Criterion,
    SamplingMode, Throughput,
};
use olelo_dictionary_lib::data_structures::LanaiTrie;
use std::time::Duration;

/// Deterministic pseudo-words spread over the whole alphabet.
fn generate_words(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let mut n = i * 7919 + 13;
            let len = 3 + i % 6;
            (0..len)
                .map(|_| {
                    let c = (b'a' + (n % 26) as u8) as char;
                    n /= 3;
                    n += i;
                    c
                })
                .collect()
        })
        .collect()
}

/// Benchmark the Lanai Trie
fn bench_lanai_trie(c: &mut Criterion) {
    let mut group = c.benchmark_group("lanai_trie");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1000, 10_000].iter() {
        let words = generate_words(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert", size), &words, |b, words| {
            b.iter(|| {
                let mut trie = LanaiTrie::new();
                for word in words {
                    trie.insert(black_box(word));
                }
                trie
            });
        });

        let trie: LanaiTrie = words.iter().collect();
        group.bench_with_input(BenchmarkId::new("lookup", size), &words, |b, words| {
            b.iter(|| {
                for word in words {
                    black_box(trie.lookup(word));
                }
            });
        });

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("suggest", size), &trie, |b, trie| {
            let mut prefix_index = 0u8;
            b.iter(|| {
                let prefix = ((b'a' + prefix_index % 26) as char).to_string();
                prefix_index = prefix_index.wrapping_add(1);
                black_box(trie.suggest(&prefix));
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_measurement(WallTime)
        .significance_level(0.01)
        .noise_threshold(0.02)
        .confidence_level(0.99);
    targets = bench_lanai_trie
}

criterion_main!(benches);
