//! Primality testing and prime generation

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::error::{validate, Result};
use crate::random;

/// Miller-Rabin rounds used by [`random_prime`]
pub const DEFAULT_ROUNDS: usize = 5;

const SMALL_PRIMES: [u32; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

// Deterministic witnesses for curve construction
const FIXED_BASES: usize = 24;

// Some(answer) when trial division decides
fn trial_division(candidate: &BigUint) -> Option<bool> {
    if *candidate < BigUint::from(2u32) {
        return Some(false);
    }
    for &p in SMALL_PRIMES.iter() {
        let p = BigUint::from(p);
        if *candidate == p {
            return Some(true);
        }
        if (candidate % &p).is_zero() {
            return Some(false);
        }
    }
    None
}

struct Witness {
    n: BigUint,
    n_minus_one: BigUint,
    d: BigUint,
    s: u64,
}

impl Witness {
    fn new(n: &BigUint) -> Self {
        let n_minus_one = n - 1u32;
        let s = n_minus_one.trailing_zeros().unwrap_or(0);
        Self {
            n: n.clone(),
            d: &n_minus_one >> s,
            n_minus_one,
            s,
        }
    }

    // true if `base` does not prove n composite
    fn passes(&self, base: &BigUint) -> bool {
        let mut y = base.modpow(&self.d, &self.n);
        if y.is_one() || y == self.n_minus_one {
            return true;
        }
        for _ in 1..self.s {
            y = &y * &y % &self.n;
            if y == self.n_minus_one {
                return true;
            }
            if y.is_one() {
                return false;
            }
        }
        false
    }
}

/// Probabilistic primality test: trial division by the primes below 256,
/// then `rounds` Miller-Rabin rounds with random bases in `[2, n - 2]`
pub fn is_probable_prime<R: RngCore + CryptoRng>(
    candidate: &BigUint,
    rounds: usize,
    rng: &mut R,
) -> Result<bool> {
    validate::parameter(rounds >= 1, "rounds", "at least one round is required")?;
    if let Some(answer) = trial_division(candidate) {
        return Ok(answer);
    }
    let witness = Witness::new(candidate);
    let low = BigUint::from(2u32);
    let high = candidate - 2u32;
    for _ in 0..rounds {
        let base = random::random_integer_between(&low, &high, rng)?;
        if !witness.passes(&base) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Miller-Rabin with the first small primes as fixed bases.
///
/// Deterministic below `3.3 * 10^24`, and with error probability below
/// `4^-24` for larger inputs. Used to validate curve moduli without a
/// random source.
pub fn is_prime(candidate: &BigUint) -> bool {
    if let Some(answer) = trial_division(candidate) {
        return answer;
    }
    let witness = Witness::new(candidate);
    SMALL_PRIMES[..FIXED_BASES]
        .iter()
        .all(|&base| witness.passes(&BigUint::from(base)))
}

/// Random prime of exactly `bits` bits
pub fn random_prime<R: RngCore + CryptoRng>(bits: u64, rng: &mut R) -> Result<BigUint> {
    validate::parameter(bits >= 8, "bits", "prime size must be at least 8 bits")?;
    let top = BigUint::one() << (bits - 1);
    loop {
        let candidate = random::random_bits(bits, rng)? | &top | BigUint::one();
        if is_probable_prime(&candidate, DEFAULT_ROUNDS, rng)? {
            return Ok(candidate);
        }
    }
}
