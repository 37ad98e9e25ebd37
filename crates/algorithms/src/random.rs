//! Unbiased random integers

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::error::{validate, Error, Result};

/// Uniform integer in `[0, bound)`.
///
/// Draws the minimal number of bytes covering `bound - 1` and rejects
/// samples at or above the largest multiple of `bound` those bytes can
/// hold, so the final reduction is unbiased.
pub fn random_below<R: RngCore + CryptoRng>(bound: &BigUint, rng: &mut R) -> Result<BigUint> {
    validate::parameter(!bound.is_zero(), "bound", "must be positive")?;
    if bound.is_one() {
        return Ok(BigUint::zero());
    }

    let byte_count = (bound - 1u32).bits().div_ceil(8) as usize;
    let space = BigUint::one() << (8 * byte_count);
    let cutoff = (&space / bound) * bound;

    // Samples become private scalars and nonces
    let mut buf = Zeroizing::new(vec![0u8; byte_count]);
    loop {
        rng.try_fill_bytes(buf.as_mut_slice())
            .map_err(|e| Error::RandomGeneration {
                details: e.to_string(),
            })?;
        let candidate = BigUint::from_bytes_le(&buf);
        if candidate < cutoff {
            return Ok(candidate % bound);
        }
    }
}

/// Uniform integer in the inclusive range `[min, max]`
pub fn random_integer_between<R: RngCore + CryptoRng>(
    min: &BigUint,
    max: &BigUint,
    rng: &mut R,
) -> Result<BigUint> {
    validate::parameter(min <= max, "range", "min must not exceed max")?;
    let width = max - min + 1u32;
    Ok(random_below(&width, rng)? + min)
}

/// Uniform integer with at most `bits` bits
pub fn random_bits<R: RngCore + CryptoRng>(bits: u64, rng: &mut R) -> Result<BigUint> {
    random_below(&(BigUint::one() << bits), rng)
}
