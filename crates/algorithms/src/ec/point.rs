//! Points on a [`Curve`]

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigUint;

use super::{Affine, Curve, CurveModel, DoubleAndAdd, ScalarMultiplication, XOnlyLadder};
use crate::error::{validate, Error, Result};
use crate::field::FieldElement;

/// Leading byte of an uncompressed point encoding
pub const UNCOMPRESSED_TAG: u8 = 0x04;

/// A point of a curve, or its neutral element.
///
/// Every point carries a handle on its curve. Points built through the
/// public API always satisfy the curve equation.
#[derive(Clone)]
pub struct Point {
    curve: Curve,
    coords: Option<Affine>,
}

impl Point {
    /// The point `(x, y)` on `curve`, rejecting coordinates that are not
    /// reduced or do not satisfy the curve equation
    pub fn new(curve: &Curve, x: BigUint, y: BigUint) -> Result<Self> {
        curve.point(x, y)
    }

    /// The neutral element of `curve`
    pub fn neutral(curve: &Curve) -> Self {
        Self::from_parts(curve, None)
    }

    pub(crate) fn from_parts(curve: &Curve, coords: Option<Affine>) -> Self {
        Self {
            curve: curve.clone(),
            coords,
        }
    }

    pub(crate) fn affine(&self) -> Option<&Affine> {
        self.coords.as_ref()
    }

    /// The curve this point belongs to
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Whether this is the neutral element
    pub fn is_neutral(&self) -> bool {
        self.coords.is_none()
    }

    /// The X coordinate, `None` for the neutral element
    pub fn x(&self) -> Option<&FieldElement> {
        self.coords.as_ref().map(|(x, _)| x)
    }

    /// The Y coordinate, `None` for the neutral element
    pub fn y(&self) -> Option<&FieldElement> {
        self.coords.as_ref().map(|(_, y)| y)
    }

    /// Affine coordinates as integers
    pub fn coordinates(&self) -> Option<(&BigUint, &BigUint)> {
        self.coords.as_ref().map(|(x, y)| (x.value(), y.value()))
    }

    /// Whether the point satisfies its curve equation
    pub fn is_on_curve(&self) -> bool {
        self.curve.on_curve(self)
    }

    /// `self + other`, failing if the curves differ
    pub fn checked_add(&self, other: &Point) -> Result<Point> {
        if self.curve != other.curve {
            return Err(Error::IncompatibleCurve);
        }
        Ok(self.curve.add(self, other))
    }

    /// `self + self`
    pub fn double(&self) -> Point {
        self.curve.add(self, self)
    }

    /// `k * self` with [`DoubleAndAdd`]
    pub fn scalar_mul(&self, k: &BigUint) -> Point {
        DoubleAndAdd.multiply(k, self)
    }

    /// X coordinate of `k * self` with the [`XOnlyLadder`]; `None` when
    /// the product is the neutral element
    pub fn scalar_mul_x_only(&self, k: &BigUint) -> Option<FieldElement> {
        XOnlyLadder.multiply_x(k, self)
    }

    /// `(x, y is odd)`, `None` for the neutral element
    pub fn compress(&self) -> Option<(BigUint, bool)> {
        self.curve.compress(self)
    }

    /// `0x04 || X || Y`, each coordinate big-endian at the field width
    pub fn to_uncompressed_bytes(&self) -> Result<Vec<u8>> {
        let (x, y) = self.coords.as_ref().ok_or_else(|| {
            Error::param("point", "the neutral element has no affine encoding")
        })?;
        let mut out = Vec::with_capacity(1 + 2 * self.curve.byte_length());
        out.push(UNCOMPRESSED_TAG);
        out.extend_from_slice(&x.to_bytes_be());
        out.extend_from_slice(&y.to_bytes_be());
        Ok(out)
    }

    /// Parse `0x04 || X || Y` and check the result is on `curve`
    pub fn from_uncompressed_bytes(curve: &Curve, bytes: &[u8]) -> Result<Self> {
        let width = curve.byte_length();
        validate::length("uncompressed point", bytes.len(), 1 + 2 * width)?;
        if bytes[0] != UNCOMPRESSED_TAG {
            return Err(Error::UnsupportedFormat { tag: bytes[0] });
        }
        let x = BigUint::from_bytes_be(&bytes[1..1 + width]);
        let y = BigUint::from_bytes_be(&bytes[1 + width..]);
        curve.point(x, y)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords && self.curve == other.curve
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coords.hash(state);
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coords {
            None => write!(f, "Point(neutral on {})", self.curve),
            Some((x, y)) => write!(f, "Point({x}, {y} on {})", self.curve),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coords {
            None => f.write_str("(neutral)"),
            Some((x, y)) => write!(f, "({x}, {y})"),
        }
    }
}

impl Add<&Point> for &Point {
    type Output = Point;

    /// # Panics
    ///
    /// Panics if the points belong to different curves; see
    /// [`Point::checked_add`].
    fn add(self, rhs: &Point) -> Point {
        self.curve.add(self, rhs)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        &self + &rhs
    }
}

impl Sub<&Point> for &Point {
    type Output = Point;

    fn sub(self, rhs: &Point) -> Point {
        self + &-rhs
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        &self - &rhs
    }
}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::from_parts(&self.curve, self.curve.shape().negate(self.affine()))
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        -&self
    }
}

impl Mul<&BigUint> for &Point {
    type Output = Point;

    fn mul(self, k: &BigUint) -> Point {
        self.scalar_mul(k)
    }
}

impl Mul<&Point> for &BigUint {
    type Output = Point;

    fn mul(self, point: &Point) -> Point {
        point.scalar_mul(self)
    }
}
