//! Short Weierstrass curves `y^2 = x^3 + ax + b`

use std::sync::Arc;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::One;

use super::{Affine, CurveModel};
use crate::error::Result;
use crate::field::FieldElement;

/// Coefficients of a short Weierstrass curve over `F_p`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortWeierstrass {
    a: FieldElement,
    b: FieldElement,
}

impl ShortWeierstrass {
    /// Curve with coefficients `a` and `b` reduced modulo `modulus`
    pub fn new(a: &BigInt, b: &BigInt, modulus: &Arc<BigUint>) -> Self {
        let signed_modulus = BigInt::from_biguint(Sign::Plus, modulus.as_ref().clone());
        let reduce = |v: &BigInt| {
            FieldElement::in_field(v.mod_floor(&signed_modulus).magnitude().clone(), modulus)
        };
        Self {
            a: reduce(a),
            b: reduce(b),
        }
    }

    /// The `a` coefficient
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// The `b` coefficient
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// `4a^3 + 27b^2`
    pub fn discriminant_term(&self) -> FieldElement {
        self.a.pow(&BigUint::from(3u32)).scale(4) + self.b.square().scale(27)
    }

    /// `x^3 + ax + b`
    pub fn rhs(&self, x: &FieldElement) -> FieldElement {
        x.square() * x + &self.a * x + &self.b
    }

    /// `j = 1728 * 4a^3 / (4a^3 + 27b^2)`; fails only for singular curves
    pub fn j_invariant(&self) -> Result<FieldElement> {
        let four_a_cubed = self.a.pow(&BigUint::from(3u32)).scale(4);
        four_a_cubed.scale(1728).divide(&self.discriminant_term())
    }

    /// Whether the curve has an efficiently computable endomorphism
    /// (GLV examples: `b = 0, p = 1 mod 4` or `a = 0, p = 1 mod 3`)
    pub fn is_koblitz(&self) -> bool {
        let p = self.a.modulus();
        (self.b.is_zero() && (p % 4u32).is_one())
            || (self.a.is_zero() && (p % 3u32).is_one())
    }
}

impl CurveModel for ShortWeierstrass {
    fn curve_type(&self) -> &'static str {
        "shortweierstrass"
    }

    fn field_modulus(&self) -> &Arc<BigUint> {
        self.a.shared_modulus()
    }

    fn is_singular(&self) -> bool {
        self.discriminant_term().is_zero()
    }

    fn contains(&self, point: Option<&Affine>) -> bool {
        match point {
            None => true,
            Some((x, y)) => y.square() == self.rhs(x),
        }
    }

    fn add(&self, lhs: Option<&Affine>, rhs: Option<&Affine>) -> Option<Affine> {
        let (x1, y1) = match lhs {
            None => return rhs.cloned(),
            Some(point) => point,
        };
        let (x2, y2) = match rhs {
            None => return Some((x1.clone(), y1.clone())),
            Some(point) => point,
        };

        if x1 == x2 && *y1 == -y2 {
            return None;
        }

        // Denominators are non-zero here for any odd p
        let slope = if x1 == x2 && y1 == y2 {
            (x1.square().scale(3) + &self.a)
                .divide(&y1.scale(2))
                .ok()?
        } else {
            (y1 - y2).divide(&(x1 - x2)).ok()?
        };

        let x3 = slope.square() - x1 - x2;
        let y3 = &slope * &(x1 - &x3) - y1;
        Some((x3, y3))
    }

    fn negate(&self, point: Option<&Affine>) -> Option<Affine> {
        point.map(|(x, y)| (x.clone(), -y))
    }

    fn lift_x(&self, x: &FieldElement) -> Option<(Affine, Affine)> {
        let (even, odd) = self.rhs(x).square_root()?;
        Some(((x.clone(), even), (x.clone(), odd)))
    }

    fn compress(&self, point: &Affine) -> (BigUint, bool) {
        (point.0.value().clone(), point.1.is_odd())
    }
}
