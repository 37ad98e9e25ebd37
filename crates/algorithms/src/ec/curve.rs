//! Validated curve handles

use std::fmt;
use std::sync::Arc;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;
use tracing::debug;

use ecclab_params::{CurveEntry, DomainParameters};

use super::{Affine, CurveModel, Point, ShortWeierstrass};
use crate::encoding;
use crate::error::{validate, Error, Result};
use crate::field::FieldElement;
use crate::primes;

/// The concrete shape of a curve.
///
/// Curve operations dispatch on this enum, so code holding a [`Curve`]
/// never needs to know which shape it has.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CurveShape {
    /// `y^2 = x^3 + ax + b`
    ShortWeierstrass(ShortWeierstrass),
}

impl CurveModel for CurveShape {
    fn curve_type(&self) -> &'static str {
        match self {
            Self::ShortWeierstrass(curve) => curve.curve_type(),
        }
    }

    fn field_modulus(&self) -> &Arc<BigUint> {
        match self {
            Self::ShortWeierstrass(curve) => curve.field_modulus(),
        }
    }

    fn is_singular(&self) -> bool {
        match self {
            Self::ShortWeierstrass(curve) => curve.is_singular(),
        }
    }

    fn contains(&self, point: Option<&Affine>) -> bool {
        match self {
            Self::ShortWeierstrass(curve) => curve.contains(point),
        }
    }

    fn add(&self, lhs: Option<&Affine>, rhs: Option<&Affine>) -> Option<Affine> {
        match self {
            Self::ShortWeierstrass(curve) => curve.add(lhs, rhs),
        }
    }

    fn negate(&self, point: Option<&Affine>) -> Option<Affine> {
        match self {
            Self::ShortWeierstrass(curve) => curve.negate(point),
        }
    }

    fn lift_x(&self, x: &FieldElement) -> Option<(Affine, Affine)> {
        match self {
            Self::ShortWeierstrass(curve) => curve.lift_x(x),
        }
    }

    fn compress(&self, point: &Affine) -> (BigUint, bool) {
        match self {
            Self::ShortWeierstrass(curve) => curve.compress(point),
        }
    }
}

/// Unvalidated curve description, the input of [`Curve::new`].
///
/// Only `a`, `b` and `p` are required. Curves without generator or order
/// support the group law but not key generation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CurveParameters {
    /// The `a` coefficient, may be negative
    pub a: BigInt,
    /// The `b` coefficient, may be negative
    pub b: BigInt,
    /// The prime field modulus
    pub p: BigUint,
    /// Order of the generator
    pub order: Option<BigUint>,
    /// `#E(F_p) / order`
    pub cofactor: Option<BigUint>,
    /// Generator coordinates
    pub generator: Option<(BigUint, BigUint)>,
    /// Informational name
    pub name: Option<String>,
}

impl CurveParameters {
    /// Raw short Weierstrass curve `y^2 = x^3 + ax + b mod p`
    pub fn short_weierstrass(a: impl Into<BigInt>, b: impl Into<BigInt>, p: impl Into<BigUint>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            p: p.into(),
            ..Self::default()
        }
    }

    /// Set the generator
    pub fn with_generator(mut self, x: impl Into<BigUint>, y: impl Into<BigUint>) -> Self {
        self.generator = Some((x.into(), y.into()));
        self
    }

    /// Set the generator order and the cofactor
    pub fn with_order(mut self, order: impl Into<BigUint>, cofactor: impl Into<BigUint>) -> Self {
        self.order = Some(order.into());
        self.cofactor = Some(cofactor.into());
        self
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Parse a hexadecimal parameter set
    pub fn from_domain(params: &DomainParameters) -> Result<Self> {
        let parse = |name: &'static str, hex: &str| {
            BigUint::parse_bytes(hex.as_bytes(), 16)
                .ok_or_else(|| Error::domain(format!("parameter {name} is not valid hexadecimal")))
        };
        Ok(Self {
            a: BigInt::from_biguint(Sign::Plus, parse("a", params.a)?),
            b: BigInt::from_biguint(Sign::Plus, parse("b", params.b)?),
            p: parse("p", params.p)?,
            order: Some(parse("n", params.n)?),
            cofactor: Some(BigUint::from(params.h)),
            generator: Some((parse("gx", params.gx)?, parse("gy", params.gy)?)),
            name: None,
        })
    }
}

struct CurveData {
    shape: CurveShape,
    order: Option<BigUint>,
    cofactor: Option<BigUint>,
    generator: Option<Affine>,
    name: Option<String>,
}

/// A validated elliptic curve over a prime field.
///
/// Cloning is cheap: all clones share the same immutable parameters.
/// Construction guarantees that the modulus is an odd prime, the curve is
/// non-singular, a supplied generator lies on the curve, and
/// `order * generator` is the neutral element when both are supplied.
#[derive(Clone)]
pub struct Curve {
    inner: Arc<CurveData>,
}

impl Curve {
    /// Validate `params` and build the curve
    pub fn new(params: CurveParameters) -> Result<Self> {
        let label = params.name.clone();
        Self::build(params).map_err(|err| {
            debug!(
                curve = label.as_deref().unwrap_or("<unnamed>"),
                error = %err,
                "rejected domain parameters"
            );
            err
        })
    }

    fn build(params: CurveParameters) -> Result<Self> {
        let CurveParameters {
            a,
            b,
            p,
            order,
            cofactor,
            generator,
            name,
        } = params;

        validate::domain(p > BigUint::from(3u32), "modulus must be a prime greater than 3")?;
        validate::domain(primes::is_prime(&p), "modulus is not prime")?;
        let modulus = Arc::new(p);

        let shape = CurveShape::ShortWeierstrass(ShortWeierstrass::new(&a, &b, &modulus));
        validate::domain(!shape.is_singular(), "curve is singular (4a^3 + 27b^2 = 0 mod p)")?;

        if let Some(n) = &order {
            validate::domain(!n.is_zero(), "order must be positive")?;
        }
        if let Some(h) = &cofactor {
            validate::domain(!h.is_zero(), "cofactor must be positive")?;
        }

        let generator = match generator {
            None => None,
            Some((gx, gy)) => {
                validate::domain(
                    gx < *modulus && gy < *modulus,
                    "generator coordinates exceed the modulus",
                )?;
                let g = (
                    FieldElement::in_field(gx, &modulus),
                    FieldElement::in_field(gy, &modulus),
                );
                validate::domain(shape.contains(Some(&g)), "generator is not on the curve")?;
                Some(g)
            }
        };

        let curve = Curve {
            inner: Arc::new(CurveData {
                shape,
                order,
                cofactor,
                generator,
                name,
            }),
        };

        if let (Some(g), Some(n)) = (curve.generator(), curve.order()) {
            validate::domain(
                g.scalar_mul(n).is_neutral(),
                "order * generator is not the neutral element",
            )?;
        }

        debug!(curve = %curve, bits = curve.modulus().bits(), "constructed curve");
        Ok(curve)
    }

    /// Build an unnamed curve from a registry parameter set
    pub fn from_domain_parameters(params: &DomainParameters) -> Result<Self> {
        Self::new(CurveParameters::from_domain(params)?)
    }

    /// Build a named curve from a registry entry
    pub fn from_entry(entry: &CurveEntry) -> Result<Self> {
        Self::new(CurveParameters::from_domain(&entry.params)?.with_name(entry.name))
    }

    /// The curve shape
    pub fn shape(&self) -> &CurveShape {
        &self.inner.shape
    }

    /// Short identifier of the curve shape
    pub fn curve_type(&self) -> &'static str {
        self.inner.shape.curve_type()
    }

    /// Informational name
    pub fn name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    /// The field modulus `p`
    pub fn modulus(&self) -> &BigUint {
        self.inner.shape.field_modulus()
    }

    /// The `a` coefficient
    pub fn a(&self) -> &FieldElement {
        match &self.inner.shape {
            CurveShape::ShortWeierstrass(curve) => curve.a(),
        }
    }

    /// The `b` coefficient
    pub fn b(&self) -> &FieldElement {
        match &self.inner.shape {
            CurveShape::ShortWeierstrass(curve) => curve.b(),
        }
    }

    /// Order `n` of the generator
    pub fn order(&self) -> Option<&BigUint> {
        self.inner.order.as_ref()
    }

    /// Cofactor `h`
    pub fn cofactor(&self) -> Option<&BigUint> {
        self.inner.cofactor.as_ref()
    }

    /// The generator `G`
    pub fn generator(&self) -> Option<Point> {
        self.inner
            .generator
            .clone()
            .map(|g| Point::from_parts(self, Some(g)))
    }

    /// Generator and group order, both required by the protocols
    pub fn domain(&self) -> Result<(Point, &BigUint)> {
        let g = self
            .generator()
            .ok_or(Error::IncompleteDomain { missing: "generator" })?;
        let n = self
            .order()
            .ok_or(Error::IncompleteDomain { missing: "order" })?;
        Ok((g, n))
    }

    /// Whether a generator was supplied
    pub fn has_generator(&self) -> bool {
        self.inner.generator.is_some()
    }

    /// Byte width of one coordinate
    pub fn byte_length(&self) -> usize {
        encoding::byte_length(self.modulus())
    }

    /// An element of the base field
    pub fn element(&self, value: BigUint) -> FieldElement {
        FieldElement::in_field(value, self.inner.shape.field_modulus())
    }

    /// The neutral element
    pub fn neutral(&self) -> Point {
        Point::from_parts(self, None)
    }

    /// Whether `point` is the neutral element
    pub fn is_neutral(&self, point: &Point) -> bool {
        point.is_neutral()
    }

    /// Whether `point` belongs to this curve and satisfies its equation
    pub fn on_curve(&self, point: &Point) -> bool {
        point.curve() == self && self.inner.shape.contains(point.affine())
    }

    /// Group addition of two points of this curve
    ///
    /// # Panics
    ///
    /// Panics if either point belongs to a different curve.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Point {
        assert!(
            lhs.curve() == self && rhs.curve() == self,
            "cannot add points of different curves"
        );
        Point::from_parts(self, self.inner.shape.add(lhs.affine(), rhs.affine()))
    }

    /// Additive inverse
    pub fn negate(&self, point: &Point) -> Point {
        Point::from_parts(self, self.inner.shape.negate(point.affine()))
    }

    /// The point `(x, y)`, validated against the curve equation
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Point> {
        validate::parameter(
            x < *self.modulus() && y < *self.modulus(),
            "point",
            "coordinate exceeds the field modulus",
        )?;
        let coords = (self.element(x), self.element(y));
        if !self.inner.shape.contains(Some(&coords)) {
            return Err(Error::PointNotOnCurve);
        }
        Ok(Point::from_parts(self, Some(coords)))
    }

    /// Both points with X coordinate `x`, even Y first; `None` if `x` is not
    /// reduced or `x^3 + ax + b` is a non-residue. When `y = 0` both
    /// entries are the same point.
    pub fn get_point_with_x(&self, x: &BigUint) -> Option<(Point, Point)> {
        if x >= self.modulus() {
            return None;
        }
        let (first, second) = self.inner.shape.lift_x(&self.element(x.clone()))?;
        Some((
            Point::from_parts(self, Some(first)),
            Point::from_parts(self, Some(second)),
        ))
    }

    /// `(x, y is odd)`, or `None` for the neutral element
    pub fn compress(&self, point: &Point) -> Option<(BigUint, bool)> {
        point.affine().map(|coords| self.inner.shape.compress(coords))
    }

    /// The point with X coordinate `x` and the requested Y parity
    pub fn uncompress(&self, x: &BigUint, y_odd: bool) -> Option<Point> {
        self.inner
            .shape
            .uncompress(x, y_odd)
            .map(|coords| Point::from_parts(self, Some(coords)))
    }

    /// Every point of the curve, neutral first, then by increasing `x`.
    ///
    /// Brute force over the whole field: only usable for toy curves.
    pub fn enumerate_points(&self) -> PointEnumeration {
        PointEnumeration {
            curve: self.clone(),
            next_x: BigUint::zero(),
            pending: None,
            started: false,
        }
    }

    /// `#E(F_p)` by counting [`Curve::enumerate_points`]
    pub fn naive_order_calculation(&self) -> BigUint {
        BigUint::from(self.enumerate_points().count())
    }

    /// `#E(F_p) = h * n`, when both are known
    pub fn curve_order(&self) -> Option<BigUint> {
        Some(self.cofactor()? * self.order()?)
    }

    /// Frobenius trace `t = p + 1 - #E(F_p)`
    pub fn frobenius_trace(&self) -> Option<BigInt> {
        let count = BigInt::from_biguint(Sign::Plus, self.curve_order()?);
        let p = BigInt::from_biguint(Sign::Plus, self.modulus().clone());
        Some(p + 1 - count)
    }

    /// Whether `#E(F_p) = p`, which makes the discrete log easy
    pub fn is_anomalous(&self) -> Option<bool> {
        Some(self.curve_order()? == *self.modulus())
    }

    /// Whether the curve admits a GLV endomorphism
    pub fn is_koblitz(&self) -> bool {
        match &self.inner.shape {
            CurveShape::ShortWeierstrass(curve) => curve.is_koblitz(),
        }
    }

    /// The j-invariant
    pub fn j_invariant(&self) -> Result<FieldElement> {
        match &self.inner.shape {
            CurveShape::ShortWeierstrass(curve) => curve.j_invariant(),
        }
    }

    /// Rough security level in bits: half the bit length of `n`, four bits
    /// less for Koblitz curves
    pub fn security_bit_estimate(&self) -> Option<u64> {
        let bits = self.order()?.bits() / 2;
        if self.is_koblitz() {
            Some(bits.saturating_sub(4))
        } else {
            Some(bits)
        }
    }
}

impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.shape == other.inner.shape
                && self.inner.order == other.inner.order
                && self.inner.cofactor == other.inner.cofactor
                && self.inner.generator == other.inner.generator)
    }
}

impl Eq for Curve {}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "ShortWeierstrassCurve<{name}>"),
            None => write!(
                f,
                "ShortWeierstrassCurve<y^2 = x^3 + {} x + {} mod 0x{:x}>",
                self.a(),
                self.b(),
                self.modulus()
            ),
        }
    }
}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("name", &self.inner.name)
            .field("shape", &self.inner.shape)
            .field("order", &self.inner.order)
            .field("cofactor", &self.inner.cofactor)
            .field("generator", &self.inner.generator)
            .finish()
    }
}

/// Iterator returned by [`Curve::enumerate_points`]
#[derive(Clone, Debug)]
pub struct PointEnumeration {
    curve: Curve,
    next_x: BigUint,
    pending: Option<Point>,
    started: bool,
}

impl Iterator for PointEnumeration {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if !self.started {
            self.started = true;
            return Some(self.curve.neutral());
        }
        if let Some(point) = self.pending.take() {
            return Some(point);
        }
        while self.next_x < *self.curve.modulus() {
            let x = self.next_x.clone();
            self.next_x += 1u32;
            if let Some((first, second)) = self.curve.get_point_with_x(&x) {
                if first != second {
                    self.pending = Some(second);
                }
                return Some(first);
            }
        }
        None
    }
}
