//! ECDSA over any validated [`Curve`] with a generator of known order
//!
//! Signing follows SEC 1 section 4.1.3 with the digest truncated to the bit
//! length of `n` by a plain right shift. Arithmetic modulo `n` uses
//! [`FieldElement`], so `n` must be prime for inverses to exist; curves
//! whose order is composite fail at the first non-invertible value.
//!
//! The module also implements the classic nonce-reuse attack: two
//! signatures over different messages made with the same nonce share `r`,
//! which is enough to solve for the nonce and then for the private key.

mod signature;


pub use signature::Signature;

use ecclab_algorithms::ec::{Curve, Point};
use ecclab_algorithms::{hash, random, FieldElement};
use ecclab_api::HashAlgorithm;
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};

/// Nonce and private scalar recovered from two signatures sharing a nonce
#[derive(Clone, PartialEq, Eq)]
pub struct RecoveredKey {
    /// The reused nonce `k`
    pub nonce: BigUint,
    /// The private scalar `d`
    pub private: BigUint,
}

impl std::fmt::Debug for RecoveredKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecoveredKey").finish_non_exhaustive()
    }
}

/// Leftmost `bitlen(n)` bits of the digest as an integer
pub fn truncate_digest(digest: &[u8], order: &BigUint) -> BigUint {
    let e = BigUint::from_bytes_be(digest);
    let digest_bits = 8 * digest.len() as u64;
    let order_bits = order.bits();
    if digest_bits > order_bits {
        e >> (digest_bits - order_bits)
    } else {
        e
    }
}

fn in_range(value: &BigUint, n: &BigUint) -> bool {
    !value.is_zero() && value < n
}

/// Sign a digest with private scalar `d`.
///
/// Without `nonce`, `k` is drawn uniformly from `[1, n - 1]` and redrawn
/// whenever `r` or `s` comes out zero. A supplied nonce must lie in
/// `[1, n - 1]`, and a supplied nonce that yields `r = 0` or `s = 0` is an
/// error instead of being replaced.
pub fn sign_digest<R: RngCore + CryptoRng>(
    curve: &Curve,
    d: &BigUint,
    digest: &[u8],
    hash: Option<HashAlgorithm>,
    nonce: Option<&BigUint>,
    rng: &mut R,
) -> Result<Signature> {
    let (g, n) = curve.domain()?;
    if !in_range(d, n) {
        return Err(Error::InvalidKey("private scalar outside [1, n - 1]"));
    }
    if let Some(k) = nonce {
        if !in_range(k, n) {
            return Err(Error::Nonce("supplied nonce outside [1, n - 1]"));
        }
    }

    let e = FieldElement::new(truncate_digest(digest, n), n.clone());
    let d = e.with_value(d.clone());
    let one = BigUint::one();
    let n_minus_one = n - 1u32;

    loop {
        let k = match nonce {
            Some(k) => k.clone(),
            None => random::random_integer_between(&one, &n_minus_one, rng)?,
        };
        match sign_with_nonce(&g, &d, &e, &k) {
            Ok(Some(signature)) => {
                debug!(curve = %curve, hash = ?hash, "ECDSA signature created");
                return Ok(signature.with_hash(hash));
            }
            Ok(None) if nonce.is_some() => {
                return Err(Error::Nonce("supplied nonce yields r = 0 or s = 0"));
            }
            Ok(None) => trace!("degenerate nonce drawn, retrying"),
            Err(err) => return Err(err),
        }
    }
}

// None when the nonce is degenerate (r = 0 or s = 0)
fn sign_with_nonce(
    g: &Point,
    d: &FieldElement,
    e: &FieldElement,
    k: &BigUint,
) -> Result<Option<Signature>> {
    let kg = g.scalar_mul(k);
    let Some(x) = kg.x() else {
        return Ok(None);
    };
    let r = e.with_value(x.value().clone());
    if r.is_zero() {
        return Ok(None);
    }
    let k = e.with_value(k.clone());
    let s = (e + &(d * &r)).divide(&k)?;
    if s.is_zero() {
        return Ok(None);
    }
    Ok(Some(Signature::new(r.value().clone(), s.value().clone(), None)))
}

/// Hash `message` with `hash` and sign the digest
pub fn sign<R: RngCore + CryptoRng>(
    curve: &Curve,
    d: &BigUint,
    message: &[u8],
    hash: HashAlgorithm,
    nonce: Option<&BigUint>,
    rng: &mut R,
) -> Result<Signature> {
    let digest = hash::digest(hash, message);
    sign_digest(curve, d, &digest, Some(hash), nonce, rng)
}

/// Verify a signature over a digest against public point `q`.
///
/// Returns `false` for out-of-range components, curves without a
/// generator or order, and points of another curve.
pub fn verify_digest(q: &Point, digest: &[u8], signature: &Signature) -> bool {
    let curve = q.curve();
    let Ok((g, n)) = curve.domain() else {
        return false;
    };
    if q.is_neutral() || !q.is_on_curve() {
        return false;
    }
    if !in_range(signature.r(), n) || !in_range(signature.s(), n) {
        debug!(curve = %curve, "ECDSA signature components out of range");
        return false;
    }

    let e = FieldElement::new(truncate_digest(digest, n), n.clone());
    let r = e.with_value(signature.r().clone());
    let Ok(w) = e.with_value(signature.s().clone()).inverse() else {
        return false;
    };
    let u1 = &e * &w;
    let u2 = &r * &w;

    let sum = &g.scalar_mul(u1.value()) + &q.scalar_mul(u2.value());
    let valid = match sum.x() {
        Some(x) => e.with_value(x.value().clone()) == r,
        None => false,
    };
    debug!(curve = %curve, valid, "ECDSA verification");
    valid
}

/// Verify a signature over `message`, hashing it with the algorithm the
/// signature records. Signatures without a recorded algorithm fail.
pub fn verify(q: &Point, message: &[u8], signature: &Signature) -> bool {
    match signature.hash() {
        Some(hash) => verify_digest(q, &hash::digest(hash, message), signature),
        None => false,
    }
}

/// Recover nonce and private key from two digests signed with one nonce.
///
/// `k = (e1 - e2) / (s1 - s2)` and `d = (k * s1 - e1) / r`, all mod `n`.
/// The digests must differ, the `r` values must match and the `s` values
/// must differ. The recovered `d` is checked against `q`.
pub fn recover_from_reused_nonce_digests(
    q: &Point,
    digest1: &[u8],
    signature1: &Signature,
    digest2: &[u8],
    signature2: &Signature,
) -> Result<RecoveredKey> {
    let (g, n) = q.curve().domain()?;
    if digest1 == digest2 {
        return Err(Error::RecoveryPrecondition("messages must differ"));
    }
    if signature1.r() != signature2.r() {
        return Err(Error::RecoveryPrecondition(
            "signatures do not share r, the nonce was not reused",
        ));
    }
    if signature1.s() == signature2.s() {
        return Err(Error::RecoveryPrecondition("signatures share s"));
    }

    let e1 = FieldElement::new(truncate_digest(digest1, n), n.clone());
    let e2 = e1.with_value(truncate_digest(digest2, n));
    let s1 = e1.with_value(signature1.s().clone());
    let s2 = e1.with_value(signature2.s().clone());
    let r = e1.with_value(signature1.r().clone());

    let k = (&e1 - &e2).divide(&(&s1 - &s2))?;
    let d = (&(&k * &s1) - &e1).divide(&r)?;

    if d.is_zero() || g.scalar_mul(d.value()) != *q {
        warn!(curve = %q.curve(), "nonce reuse recovery produced a key that does not match");
        return Err(Error::RecoveryMismatch);
    }
    warn!(curve = %q.curve(), "private key recovered from reused ECDSA nonce");
    Ok(RecoveredKey {
        nonce: k.value().clone(),
        private: d.value().clone(),
    })
}

/// [`recover_from_reused_nonce_digests`] over messages, hashed with the
/// algorithm the signatures record
pub fn recover_from_reused_nonce(
    q: &Point,
    message1: &[u8],
    signature1: &Signature,
    message2: &[u8],
    signature2: &Signature,
) -> Result<RecoveredKey> {
    if message1 == message2 {
        return Err(Error::RecoveryPrecondition("messages must differ"));
    }
    let hash = match (signature1.hash(), signature2.hash()) {
        (Some(a), Some(b)) if a == b => a,
        (Some(_), Some(_)) => {
            return Err(Error::RecoveryPrecondition(
                "signatures use different hash algorithms",
            ))
        }
        _ => return Err(Error::MissingHash),
    };
    recover_from_reused_nonce_digests(
        q,
        &hash::digest(hash, message1),
        signature1,
        &hash::digest(hash, message2),
        signature2,
    )
}
