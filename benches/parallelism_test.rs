use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rayon::prelude::*;
use serde_json::json;
use std::time::Duration;
use tincture::{ColorHelper, PropertyIdentifier, SequentialPalette};

fn series_keys(size: usize) -> Vec<String> {
    (0..size).map(|i| format!("series-{}", i % 64)).collect()
}

pub fn bench_shared_helper(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared_helper");
    group.sample_size(100);
    group.measurement_time(Duration::from_secs(10));

    let palette = SequentialPalette::default();
    let helper = ColorHelper::new(&palette)
        .with_fill_property(PropertyIdentifier::new("dataPoint", "fill"));
    let no_objects = json!({});

    for size in [100, 1000, 10000].iter() {
        let keys = series_keys(*size);

        // Sequential resolution
        group.bench_with_input(BenchmarkId::new("sequential", size), &keys, |b, keys| {
            b.iter(|| {
                keys.iter()
                    .map(|key| helper.get_color_for_series_value(&no_objects, key, None))
                    .for_each(|color| {
                        black_box(color);
                    });
            });
        });

        // Many readers of one helper
        group.bench_with_input(BenchmarkId::new("parallel", size), &keys, |b, keys| {
            b.iter(|| {
                keys.par_iter().for_each(|key| {
                    black_box(helper.get_color_for_series_value(&no_objects, key, None));
                });
            });
        });

        // Batch processing for better parallel efficiency
        group.bench_with_input(BenchmarkId::new("parallel_chunked", size), &keys, |b, keys| {
            b.iter(|| {
                keys.par_chunks(128).for_each(|chunk| {
                    chunk.iter().for_each(|key| {
                        black_box(helper.get_color_for_measure(&no_objects, key, None));
                    });
                });
            });
        });
    }
    group.finish();
}

// Configure and run benchmarks
criterion_group!(
    name = parallel_benches;
    config = Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(10))
        .noise_threshold(0.05);
    targets = bench_shared_helper
);
criterion_main!(parallel_benches);
