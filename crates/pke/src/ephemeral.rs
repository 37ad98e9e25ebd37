//! Ephemeral scalars shared by both schemes

use ecclab_algorithms::random;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};

/// Uniform scalar in `[1, n - 1]`
pub(crate) fn random_scalar<R: RngCore + CryptoRng>(n: &BigUint, rng: &mut R) -> Result<BigUint> {
    Ok(random::random_integer_between(&BigUint::one(), &(n - 1u32), rng)?)
}

/// Reject scalars outside `[1, n - 1]`
pub(crate) fn check_scalar(k: &BigUint, n: &BigUint, reason: &'static str) -> Result<()> {
    if k.is_zero() || k >= n {
        return Err(Error::InvalidKey(reason));
    }
    Ok(())
}
