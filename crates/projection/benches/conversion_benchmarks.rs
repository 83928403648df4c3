//! Benchmarks for projection and path/row conversions.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geo_common::LatLong;
use projection::region::classify_path_row;
use projection::{
    LambertAzimuthal, OrbitalPathRowModel, PolarStereographic, ProjectionTransformation,
    Sinusoidal,
};

fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward");

    let projections: Vec<(&str, Box<dyn ProjectionTransformation>)> = vec![
        ("lambert", Box::new(LambertAzimuthal::continental("NA", -100.0, 45.0))),
        ("sinusoidal", Box::new(Sinusoidal::modis())),
        ("polar", Box::new(PolarStereographic::antarctic())),
    ];

    for (name, projection) in &projections {
        let position = if *name == "polar" {
            LatLong::new(-75.0, 45.0)
        } else {
            LatLong::new(40.0, -90.0)
        };
        group.bench_with_input(BenchmarkId::from_parameter(name), &position, |b, p| {
            b.iter(|| projection.forward(black_box(*p)))
        });
    }

    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");

    let lambert = LambertAzimuthal::continental("NA", -100.0, 45.0);
    group.bench_function("lambert", |b| {
        b.iter(|| lambert.inverse(black_box(850_045.5), black_box(-504_360.1)))
    });

    // Exercises the iterative latitude solver
    let polar = PolarStereographic::antarctic();
    group.bench_function("polar", |b| {
        b.iter(|| polar.inverse(black_box(1_000_000.0), black_box(1_500_000.0)))
    });

    group.finish();
}

fn bench_path_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_row");
    let model = OrbitalPathRowModel::wrs2();

    group.bench_function("lat_long_to_path_row", |b| {
        b.iter(|| model.lat_long_to_path_row(black_box(LatLong::new(43.55, -96.7))))
    });
    group.bench_function("path_row_to_lat_long", |b| {
        b.iter(|| model.path_row_to_lat_long(black_box(29.0), black_box(30.0)))
    });
    group.bench_function("classify_sweep", |b| {
        b.iter(|| {
            let mut count = 0;
            for lat in (-80..=80).step_by(10) {
                for lon in (-180..180).step_by(10) {
                    let pr = model.lat_long_to_path_row(LatLong::new(lat as f64, lon as f64));
                    count += classify_path_row(pr).code();
                }
            }
            black_box(count)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_forward, bench_inverse, bench_path_row);
criterion_main!(benches);
