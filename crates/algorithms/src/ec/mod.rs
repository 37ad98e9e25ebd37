//! Elliptic curves over prime fields
//!
//! A [`Curve`] is a cheap, shareable handle on validated domain parameters.
//! [`Point`]s keep a handle on their curve, so the group law can be used
//! through operators (`&p + &q`, `-&p`, `&p * &k`).
//!
//! The group law itself lives behind the [`CurveModel`] trait, implemented
//! by each curve shape. Only the short Weierstrass shape exists today; it
//! is wrapped in the [`CurveShape`] enum so callers never name it directly.

mod curve;
mod point;
mod scalar_mul;
mod weierstrass;


use std::sync::Arc;

use num_bigint::BigUint;

use crate::field::FieldElement;

pub use curve::{Curve, CurveParameters, CurveShape, PointEnumeration};
pub use point::{Point, UNCOMPRESSED_TAG};
pub use scalar_mul::{recover_point, DoubleAndAdd, ScalarMultiplication, XOnlyLadder};
pub use weierstrass::ShortWeierstrass;

/// Affine coordinates `(x, y)` of a non-neutral point
pub type Affine = (FieldElement, FieldElement);

/// Group-law operations provided by every curve shape.
///
/// Points are passed as `Option<&Affine>`, where `None` is the neutral
/// element. Implementations never validate their inputs; [`Curve`] and
/// [`Point`] do that.
pub trait CurveModel {
    /// Short identifier of the curve shape
    fn curve_type(&self) -> &'static str;

    /// Modulus of the base field
    fn field_modulus(&self) -> &Arc<BigUint>;

    /// Whether the curve equation is singular
    fn is_singular(&self) -> bool;

    /// Whether the point satisfies the curve equation. The neutral element
    /// always does.
    fn contains(&self, point: Option<&Affine>) -> bool;

    /// Group addition
    fn add(&self, lhs: Option<&Affine>, rhs: Option<&Affine>) -> Option<Affine>;

    /// Additive inverse
    fn negate(&self, point: Option<&Affine>) -> Option<Affine>;

    /// Both points with the given X coordinate, or `None` if there are none
    fn lift_x(&self, x: &FieldElement) -> Option<(Affine, Affine)>;

    /// Compressed form `(x, y is odd)`
    fn compress(&self, point: &Affine) -> (BigUint, bool);

    /// Inverse of [`CurveModel::compress`]. `None` if `x` is not reduced,
    /// no point has that X coordinate, or no root has the requested parity.
    fn uncompress(&self, x: &BigUint, y_odd: bool) -> Option<Affine> {
        if x >= self.field_modulus().as_ref() {
            return None;
        }
        let x = FieldElement::in_field(x.clone(), self.field_modulus());
        let (first, second) = self.lift_x(&x)?;
        [first, second]
            .into_iter()
            .find(|(_, y)| y.is_odd() == y_odd)
    }
}
