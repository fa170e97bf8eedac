use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;
use tincture::{
    calculate_highlight_color, create_linear_color_scale, hex_blend, parse_color_string, rotate,
    shade_color,
};

const INPUTS: [&str; 4] = ["#45D0E8", "#09f", "rgb(1, 26, 3)", "rgba(1, 2, 3, 0.19)"];

pub fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(100);
    group.measurement_time(Duration::from_secs(10));

    for input in INPUTS.iter() {
        group.bench_with_input(BenchmarkId::new("parse_color_string", input), input, |b, &input| {
            b.iter(|| black_box(parse_color_string(black_box(input))));
        });
    }
    group.finish();
}

pub fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");
    group.sample_size(100);
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("rotate", |b| {
        b.iter(|| black_box(rotate(black_box("#45D0E8"), 0.25)));
    });

    group.bench_function("hex_blend", |b| {
        b.iter(|| black_box(hex_blend(black_box("#FF33FF"), 0.75, black_box("#6699FF"))));
    });

    group.bench_function("shade_color", |b| {
        b.iter(|| black_box(shade_color(black_box("#00B8AA"), -0.25)));
    });

    group.bench_function("calculate_highlight_color", |b| {
        let yellow = parse_color_string("#FFFF00").unwrap();
        b.iter(|| black_box(calculate_highlight_color(black_box(&yellow), 0.8, 0.2)));
    });

    group.finish();
}

pub fn bench_scales(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_scale");
    group.sample_size(100);
    group.measurement_time(Duration::from_secs(10));

    for stops in [2usize, 8, 64].iter() {
        let domain: Vec<f64> = (0..*stops).map(|i| i as f64).collect();
        let range: Vec<String> = (0..*stops)
            .map(|i| format!("#{:02X}{:02X}{:02X}", i % 256, (i * 7) % 256, 255 - i % 256))
            .collect();
        let scale = create_linear_color_scale(&domain, &range, true).unwrap();
        let probe = (*stops as f64 - 1.0) * 0.75 + 0.3;

        group.bench_with_input(BenchmarkId::new("color_for", stops), &probe, |b, &probe| {
            b.iter(|| black_box(scale.color_for(black_box(Some(probe))).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(10));
    targets = bench_parsing, bench_transforms, bench_scales
);
criterion_main!(benches);
