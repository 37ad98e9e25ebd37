//! Benchmarks for ECDSA signing and verification across curve sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ecclab_algorithms::ec::Curve;
use ecclab_api::HashAlgorithm;
use ecclab_params::curves::presets;
use ecclab_params::CurveEntry;
use ecclab_sign::ecdsa;
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const CURVES: [&CurveEntry; 3] = [
    &presets::SECP192K1,
    &presets::PRIME256V1,
    &presets::SECP521R1,
];

const MESSAGE: &[u8] = b"benchmark message for ECDSA";

fn private_scalar(curve: &Curve) -> BigUint {
    curve.order().map(|n| n >> 1u32).unwrap_or_default()
}

fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa_sign");
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for entry in CURVES {
        let curve = Curve::from_entry(entry).unwrap();
        let d = private_scalar(&curve);
        group.bench_with_input(BenchmarkId::from_parameter(entry.name), &curve, |b, curve| {
            b.iter(|| {
                black_box(
                    ecdsa::sign(curve, &d, MESSAGE, HashAlgorithm::Sha256, None, &mut rng)
                        .unwrap(),
                )
            });
        });
    }
    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa_verify");
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for entry in CURVES {
        let curve = Curve::from_entry(entry).unwrap();
        let d = private_scalar(&curve);
        let q = curve.generator().unwrap().scalar_mul(&d);
        let signature =
            ecdsa::sign(&curve, &d, MESSAGE, HashAlgorithm::Sha256, None, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(entry.name), &q, |b, q| {
            b.iter(|| black_box(ecdsa::verify(q, MESSAGE, &signature)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sign, bench_verify);
criterion_main!(benches);
