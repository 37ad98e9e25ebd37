//! Scalar multiplication strategies
//!
//! Two strategies are provided. [`DoubleAndAdd`] walks the scalar from the
//! most significant bit in affine coordinates. [`XOnlyLadder`] is the
//! Izu-Takagi Montgomery ladder over projective `(X : Z)` pairs, which
//! never touches Y; the full point is rebuilt from the two ladder registers
//! when needed.

use num_bigint::BigUint;
use num_traits::Zero;

use super::{Affine, Curve, CurveModel, Point};
use crate::field::FieldElement;

/// A way of computing `k * P`
pub trait ScalarMultiplication {
    /// Name used in logs and benchmarks
    fn name(&self) -> &'static str;

    /// `k * point`. `k = 0` and the neutral element give the neutral element.
    fn multiply(&self, k: &BigUint, point: &Point) -> Point;
}

fn bits_msb_first(k: &BigUint) -> impl Iterator<Item = bool> {
    let bytes = k.to_bytes_le();
    (0..k.bits())
        .rev()
        .map(move |i| (bytes[(i / 8) as usize] >> (i % 8)) & 1 == 1)
}

/// Left-to-right binary double-and-add
#[derive(Clone, Copy, Debug, Default)]
pub struct DoubleAndAdd;

impl ScalarMultiplication for DoubleAndAdd {
    fn name(&self) -> &'static str {
        "double-and-add"
    }

    fn multiply(&self, k: &BigUint, point: &Point) -> Point {
        let shape = point.curve().shape();
        let mut acc: Option<Affine> = None;
        for bit in bits_msb_first(k) {
            acc = shape.add(acc.as_ref(), acc.as_ref());
            if bit {
                acc = shape.add(acc.as_ref(), point.affine());
            }
        }
        Point::from_parts(point.curve(), acc)
    }
}

/// Izu-Takagi X-only Montgomery ladder.
///
/// `R0 = (1 : 0)` starts as the neutral element and `R1 = (x : 1)` as `P`;
/// the invariant `R1 - R0 = P` holds after every step.
#[derive(Clone, Copy, Debug, Default)]
pub struct XOnlyLadder;

type Projective = (FieldElement, FieldElement);

impl XOnlyLadder {
    /// X coordinate of `k * point`, or `None` when the result is the neutral
    /// element (including `k = 0` and a neutral `point`)
    pub fn multiply_x(&self, k: &BigUint, point: &Point) -> Option<FieldElement> {
        let (r0, _) = self.ladder(k, point)?;
        to_affine_x(&r0)
    }

    // Both ladder registers after processing every bit of k
    fn ladder(&self, k: &BigUint, point: &Point) -> Option<(Projective, Projective)> {
        let (x, _) = point.affine()?;
        let (a, b) = (point.curve().a(), point.curve().b());

        let mut r0 = (x.with_value(BigUint::from(1u32)), x.with_value(BigUint::zero()));
        let mut r1 = (x.clone(), x.with_value(BigUint::from(1u32)));
        for bit in bits_msb_first(k) {
            if bit {
                r0 = x_add(&r0, &r1, x, a, b);
                r1 = x_double(&r1, a, b);
            } else {
                r1 = x_add(&r0, &r1, x, a, b);
                r0 = x_double(&r0, a, b);
            }
        }
        Some((r0, r1))
    }
}

impl ScalarMultiplication for XOnlyLadder {
    fn name(&self) -> &'static str {
        "x-only ladder"
    }

    fn multiply(&self, k: &BigUint, point: &Point) -> Point {
        let curve = point.curve();
        let Some(((x, y), (r0, r1))) = point.affine().zip(self.ladder(k, point)) else {
            return curve.neutral();
        };
        let Some(xq) = to_affine_x(&r0) else {
            return curve.neutral();
        };
        let Some(xq1) = to_affine_x(&r1) else {
            // (k + 1)P is neutral, so kP = -P
            return -point;
        };
        if y.is_zero() {
            // P has order two and kP is not neutral
            return point.clone();
        }

        // Okeya-Sakurai: y_Q = (2b + (a + x x_Q)(x + x_Q) - x_{Q+P}(x - x_Q)^2) / 2y
        let (a, b) = (curve.a(), curve.b());
        let numerator = b.scale(2) + (a + &(x * &xq)) * (x + &xq) - &xq1 * &(x - &xq).square();
        match numerator.divide(&y.scale(2)) {
            Ok(yq) => Point::from_parts(curve, Some((xq, yq))),
            Err(_) => curve.neutral(),
        }
    }
}

fn to_affine_x((x, z): &Projective) -> Option<FieldElement> {
    x.divide(z).ok()
}

// X' = (X^2 - aZ^2)^2 - 8bXZ^3
// Z' = 4Z(X^3 + aXZ^2 + bZ^3)
fn x_double((x, z): &Projective, a: &FieldElement, b: &FieldElement) -> Projective {
    let xx = x.square();
    let zz = z.square();
    let zzz = &zz * z;
    let x_out = (&xx - &(a * &zz)).square() - (b * &(x * &zzz)).scale(8);
    let z_out = (z * &((&xx * x) + (a * &(x * &zz)) + (b * &zzz))).scale(4);
    (x_out, z_out)
}

// Differential addition with known difference x_d:
// X3 = 2(X1Z2 + X2Z1)(X1X2 + aZ1Z2) + 4bZ1^2Z2^2 - x_d(X1Z2 - X2Z1)^2
// Z3 = (X1Z2 - X2Z1)^2
fn x_add(
    (x1, z1): &Projective,
    (x2, z2): &Projective,
    x_d: &FieldElement,
    a: &FieldElement,
    b: &FieldElement,
) -> Projective {
    let x1z2 = x1 * z2;
    let x2z1 = x2 * z1;
    let z1z2 = z1 * z2;
    let diff = (&x1z2 - &x2z1).square();
    let x_out = ((&x1z2 + &x2z1) * ((x1 * x2) + (a * &z1z2))).scale(2)
        + (b * &z1z2.square()).scale(4)
        - x_d * &diff;
    (x_out, diff)
}

/// The point with X coordinate `x` whose Y coordinate has the requested
/// parity. Completes an X-only result when the caller tracks the parity.
pub fn recover_point(curve: &Curve, x: &BigUint, y_odd: bool) -> Option<Point> {
    curve.uncompress(x, y_odd)
}
