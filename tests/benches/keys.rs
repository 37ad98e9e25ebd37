//! Key generation and field-level costs through the public key types

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ecclab::prelude::*;
use ecclab_tests::{named_curve, rng};

const CURVES: [&str; 3] = ["secp192k1", "prime256v1", "secp521r1"];

fn bench_keygen(c: &mut Criterion) {
    let mut group = c.benchmark_group("Keys");
    let mut rng = rng(42);

    for name in CURVES {
        let curve = named_curve(name);
        group.bench_with_input(BenchmarkId::new("generate", name), &curve, |b, curve| {
            b.iter(|| black_box(PrivateKey::generate(curve, &mut rng).unwrap()));
        });

        let key = PrivateKey::generate(&curve, &mut rng).unwrap();
        let bytes = key.public_key().to_uncompressed().unwrap();
        group.bench_with_input(BenchmarkId::new("parse-public", name), &bytes, |b, bytes| {
            b.iter(|| black_box(PublicKey::from_uncompressed(&curve, bytes).unwrap()));
        });
    }
    group.finish();
}

fn bench_square_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("Field-SquareRoot");

    for name in CURVES {
        let curve = named_curve(name);
        let g = curve.generator().unwrap();
        let (gx, gy) = g.coordinates().unwrap();
        let rhs = curve.element(gy.clone()).square();
        group.bench_with_input(BenchmarkId::new("sqrt", name), &rhs, |b, rhs| {
            b.iter(|| black_box(rhs.square_root().unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("lift-x", name), gx, |b, gx| {
            b.iter(|| black_box(curve.get_point_with_x(gx).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_keygen, bench_square_root);
criterion_main!(benches);
