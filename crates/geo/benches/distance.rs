//! Benchmarks for geo crate distance and nearest-search operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use waypoint_geo::{haversine_distance, nearest, Coordinate};

fn create_candidates(count: usize) -> Vec<Coordinate> {
    (0..count)
        .map(|i| {
            // Generate points in a grid around San Francisco
            let lat = 37.0 + (i as f64 * 0.01) % 2.0;
            let lon = -122.0 + (i as f64 * 0.01) % 2.0;
            Coordinate::new(lat, lon)
        })
        .collect()
}

fn bench_single_distance(c: &mut Criterion) {
    let san_francisco = Coordinate::new(37.7749, -122.4194);
    let los_angeles = Coordinate::new(34.0522, -118.2437);

    c.bench_function("haversine_single", |b| {
        b.iter(|| haversine_distance(black_box(&san_francisco), black_box(&los_angeles)))
    });
}

fn bench_nearest_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_scan");
    let target = Coordinate::new(40.7128, -74.0060);

    for size in [10, 100, 1000, 10000].iter() {
        let candidates = create_candidates(*size);

        group.bench_with_input(BenchmarkId::new("linear", size), size, |b, _| {
            b.iter(|| nearest(black_box(&target), black_box(&candidates)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_distance, bench_nearest_scan);
criterion_main!(benches);
