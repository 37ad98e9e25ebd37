//! Shared fixtures for the ecclab integration tests and benchmarks

use std::sync::Once;

use ecclab_algorithms::ec::{Curve, CurveParameters};
use ecclab_params::CurveRegistry;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test subscriber once per process, filtered by `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Reproducible RNG
pub fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// `y^2 = x^3 + x + 1` over F_23 with the generator `(3, 10)` of order 28
pub fn toy_curve() -> Curve {
    Curve::new(
        CurveParameters::short_weierstrass(1, 1, 23u32)
            .with_generator(3u32, 10u32)
            .with_order(28u32, 1u32)
            .with_name("toy23"),
    )
    .expect("toy curve is valid")
}

/// The same curve with the prime-order subgroup generated by `(5, 4)`
pub fn toy_subgroup() -> Curve {
    Curve::new(
        CurveParameters::short_weierstrass(1, 1, 23u32)
            .with_generator(5u32, 4u32)
            .with_order(7u32, 4u32)
            .with_name("toy23-7"),
    )
    .expect("toy subgroup is valid")
}

/// A built-in curve by name
pub fn named_curve(name: &str) -> Curve {
    let registry = CurveRegistry::with_builtin();
    let entry = registry.get(name).expect("curve is built in");
    Curve::from_entry(entry).expect("built-in curve is valid")
}
