//! Comparison benchmarks for ECDH across curve sizes and multipliers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ecclab_algorithms::ec::Curve;
use ecclab_algorithms::random::random_integer_between;
use ecclab_kem::{shared_secret, shared_secret_x_only};
use ecclab_params::curves::presets;
use ecclab_params::CurveEntry;
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const CURVES: [&CurveEntry; 4] = [
    &presets::SECP192K1,
    &presets::PRIME256V1,
    &presets::SECP384R1,
    &presets::SECP521R1,
];

fn bench_ecdh_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("ECDH-Comparison");
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for entry in CURVES {
        let curve = Curve::from_entry(entry).unwrap();
        let n = curve.order().unwrap().clone();
        let one = BigUint::from(1u32);
        let d = random_integer_between(&one, &(&n - 1u32), &mut rng).unwrap();
        let peer_scalar = random_integer_between(&one, &(&n - 1u32), &mut rng).unwrap();
        let peer = curve.generator().unwrap().scalar_mul(&peer_scalar);

        group.bench_with_input(BenchmarkId::new("full", entry.name), &peer, |b, peer| {
            b.iter(|| black_box(shared_secret(&curve, &d, peer).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("x-only", entry.name), &peer, |b, peer| {
            b.iter(|| black_box(shared_secret_x_only(&curve, &d, peer).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ecdh_comparison);
criterion_main!(benches);
