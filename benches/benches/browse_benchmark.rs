//! Benchmarks for the list transform, envelope decoding and cache hits.
//!
//! Run with: `cargo bench --package bourse-bench`

use bourse_bench::{candles, envelope, instruments};
use bourse_lib::{
    CacheKey, CacheMode, CacheStore, CachedLoader, Candle, FileStore, FilterState, Instrument,
    PAGE_SIZE, Symbol, candles_for_symbol, filter_and_paginate, unwrap_hits,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn filter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_and_paginate");

    let filters = [
        ("none", FilterState::new()),
        ("type", FilterState::new().with_type("Cryptocurrency")),
        ("type+search", FilterState::new().with_type("Fund").with_search("7")),
    ];

    for size in SIZES {
        let records = instruments(size);
        group.throughput(Throughput::Elements(size as u64));

        for (name, filter) in &filters {
            group.bench_with_input(BenchmarkId::new(*name, size), &records, |b, records| {
                b.iter(|| filter_and_paginate(black_box(records), filter, 2, PAGE_SIZE).total_pages);
            });
        }
    }

    group.finish();
}

fn candle_grouping_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("candles_for_symbol");
    let symbols = ["BTC", "ETH", "AAPL", "MSFT", "SPY"];
    let target = Symbol::new("eth");

    for per_symbol in [250, 2_500] {
        let all = candles(&symbols, per_symbol);
        group.throughput(Throughput::Elements(all.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(per_symbol), &all, |b, all| {
            b.iter(|| candles_for_symbol(black_box(all), &target).len());
        });
    }

    group.finish();
}

fn envelope_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("unwrap_hits");

    for size in [1_000, 10_000] {
        let body = envelope(&instruments(size));
        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(BenchmarkId::new("instruments", size), &body, |b, body| {
            b.iter(|| unwrap_hits::<Instrument>(black_box(body)).map(|r| r.len()));
        });
    }

    let body = envelope(&candles(&["BTC", "ETH"], 5_000));
    group.throughput(Throughput::Bytes(body.len() as u64));
    group.bench_function("candles/10000", |b| {
        b.iter(|| unwrap_hits::<Candle>(black_box(&body)).map(|r| r.len()));
    });

    group.finish();
}

fn cache_hit_benchmark(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("Failed to create runtime");
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let records = instruments(1_000);

    let stores = [
        ("memory", CacheStore::in_memory()),
        (
            "file",
            CacheStore::new(Arc::new(
                FileStore::new(temp_dir.path().to_path_buf()).expect("Failed to open file store"),
            )),
        ),
    ];

    let mut group = c.benchmark_group("cache_hit");
    for (name, store) in stores {
        let loader = CachedLoader::with_default_freshness(store);
        loader
            .store()
            .put(&CacheKey::exchange_data(), &records)
            .expect("Failed to seed cache");

        group.bench_function(name, |b| {
            b.to_async(&rt).iter(|| async {
                let loaded: Result<Vec<Instrument>, String> = loader
                    .load(&CacheKey::exchange_data(), CacheMode::Use, || async {
                        Err("cache miss".to_string())
                    })
                    .await;
                loaded.map(|r| r.len())
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    filter_benchmark,
    candle_grouping_benchmark,
    envelope_benchmark,
    cache_hit_benchmark
);
criterion_main!(benches);
