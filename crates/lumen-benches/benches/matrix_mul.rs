// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use lumen_math::{
    accumulate_columns, rotate_x, rotate_y, Matrix, Matrix4d, Matrix4f, Vec4f,
};
use std::{hint::black_box, time::Duration};

fn sample_transform() -> Matrix4f {
    Matrix4f::translation(1.0, -2.0, 3.0) * rotate_x(0.4_f32) * rotate_y(-1.1_f32) * Matrix4f::scale(2.0, 0.5, 1.5)
}

fn generic_product(a: &Matrix4f, b: &Matrix4f) -> Matrix4f {
    Matrix::from_columns(b.columns().map(|col| accumulate_columns(a.columns(), &col)))
}

fn bench_matrix_products(c: &mut Criterion) {
    let a = sample_transform();
    let b = a.inverse();
    let v = Vec4f::new(0.25, -4.0, 9.5, 1.0);

    let mut group = c.benchmark_group("mat4f_mul");
    group.warm_up_time(Duration::from_secs(2));
    group.measurement_time(Duration::from_secs(5));
    group.throughput(Throughput::Elements(1));
    // `lane` runs the SSE/NEON path unless built with `scalar_only`.
    group.bench_function(
        if lumen_math::simd::SIMD_LANE_ENABLED {
            "lane"
        } else {
            "lane_disabled"
        },
        |bch| bch.iter(|| black_box(black_box(a) * black_box(b))),
    );
    group.bench_function("generic", |bch| {
        bch.iter(|| black_box(generic_product(black_box(&a), black_box(&b))))
    });
    group.bench_function("vector", |bch| {
        bch.iter(|| black_box(black_box(a) * black_box(v)))
    });
    group.finish();

    let ad = Matrix4d::translation(1.0, -2.0, 3.0) * rotate_x(0.4_f64) * Matrix4d::scale(2.0, 0.5, 1.5);
    let mut group = c.benchmark_group("mat4d");
    group.bench_function("mul", |bch| bch.iter(|| black_box(black_box(ad) * black_box(ad))));
    group.bench_function("inverse", |bch| bch.iter(|| black_box(black_box(ad).inverse())));
    group.bench_function("det", |bch| bch.iter(|| black_box(black_box(ad).det())));
    group.finish();
}

criterion_group!(benches, bench_matrix_products);
criterion_main!(benches);
