use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use geopattern_rs::{GeoPattern, PatternKind};
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for kind in PatternKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind.name()), &kind, |b, &kind| {
            b.iter(|| {
                let pattern = GeoPattern::new(black_box("GitHub"), kind);
                black_box(pattern.svg_string().len());
            });
        });
    }
    group.finish();
}

fn bench_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("views");
    let pattern = GeoPattern::new("GitHub", PatternKind::Hexagons);
    group.bench_function("svg_string", |b| {
        b.iter(|| {
            black_box(pattern.svg_string().len());
        });
    });
    group.bench_function("base64_string", |b| {
        b.iter(|| {
            black_box(pattern.base64_string().len());
        });
    });
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_generate, bench_views
);
criterion_main!(benches);
