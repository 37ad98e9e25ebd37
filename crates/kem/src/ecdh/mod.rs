//! Diffie-Hellman over any validated curve
//!
//! Both parties multiply the other's public point by their own scalar and
//! land on the same point `d_a * d_b * G`. The X coordinate of that point,
//! big-endian at field width, is the shared secret.


use ecclab_algorithms::ec::{Curve, Point};
use ecclab_algorithms::encoding;
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::debug;

use crate::error::{validate, Error, Result};

fn check_inputs(curve: &Curve, d: &BigUint, peer: &Point) -> Result<()> {
    if peer.curve() != curve {
        debug!(curve = %curve, peer = %peer.curve(), "ECDH peer on another curve");
        return Err(Error::CurveMismatch);
    }
    validate::key(!d.is_zero(), "ECDH private", "scalar must be non-zero")?;
    if let Some(n) = curve.order() {
        validate::key(d < n, "ECDH private", "scalar must be below the group order")?;
    }
    validate::key(!peer.is_neutral(), "ECDH peer", "point at infinity")?;
    validate::key(peer.is_on_curve(), "ECDH peer", "point is not on the curve")
}

/// `d * peer`, rejecting peers from another curve and neutral results
pub fn shared_point(curve: &Curve, d: &BigUint, peer: &Point) -> Result<Point> {
    check_inputs(curve, d, peer)?;
    let shared = peer.scalar_mul(d);
    validate::agreement(!shared.is_neutral(), "shared point is the point at infinity")?;
    debug!(curve = %curve, "ECDH shared point computed");
    Ok(shared)
}

/// X coordinate of the shared point, big-endian at field width
pub fn shared_secret(curve: &Curve, d: &BigUint, peer: &Point) -> Result<Vec<u8>> {
    let shared = shared_point(curve, d, peer)?;
    let (x, _) = shared.coordinates().ok_or(Error::Agreement {
        details: "shared point is the point at infinity",
    })?;
    Ok(encoding::int_to_bytes_be(x, curve.byte_length())?)
}

/// Same bytes as [`shared_secret`], computed with the X-only ladder
pub fn shared_secret_x_only(curve: &Curve, d: &BigUint, peer: &Point) -> Result<Vec<u8>> {
    check_inputs(curve, d, peer)?;
    let x = peer.scalar_mul_x_only(d).ok_or(Error::Agreement {
        details: "shared point is the point at infinity",
    })?;
    debug!(curve = %curve, "ECDH shared secret computed with the X-only ladder");
    Ok(encoding::int_to_bytes_be(x.value(), curve.byte_length())?)
}
