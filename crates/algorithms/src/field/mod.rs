//! Elements of a prime field `Z/pZ`
//!
//! [`FieldElement`] pairs a value with a shared modulus. Elements are
//! immutable: every operation returns a new element. The operator traits
//! (`+`, `-`, `*`, unary `-`) treat mixing moduli as a programming error and
//! panic; the `checked_*` methods report it as [`Error::IncompatibleField`].

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};
use std::sync::{Arc, OnceLock};

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::encoding;
use crate::error::{Error, Result};

#[cfg(test)]
mod tests;

// Largest magnitude shown as a negative signed value
const SIGNED_LIMIT: u64 = 1_000_000_000;

/// An element of the prime field `Z/pZ`, always reduced into `[0, p)`.
#[derive(Clone)]
pub struct FieldElement {
    value: BigUint,
    modulus: Arc<BigUint>,
    // Euler's criterion, computed at most once per element
    residue: OnceLock<bool>,
}

impl FieldElement {
    /// Create `value mod modulus`.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero.
    pub fn new(value: BigUint, modulus: BigUint) -> Self {
        Self::in_field(value, &Arc::new(modulus))
    }

    /// Create an element from a machine integer
    pub fn from_u64(value: u64, modulus: BigUint) -> Self {
        Self::new(BigUint::from(value), modulus)
    }

    /// Create an element from a signed integer. Negative values wrap to
    /// their non-negative representative.
    pub fn from_bigint(value: &BigInt, modulus: BigUint) -> Self {
        let signed_modulus = BigInt::from_biguint(Sign::Plus, modulus.clone());
        let reduced = value.mod_floor(&signed_modulus);
        Self::new(reduced.magnitude().clone(), modulus)
    }

    /// Create an element in the field described by a shared modulus.
    ///
    /// Elements built from the same `Arc` compare fields by pointer, which
    /// keeps curve arithmetic from re-comparing large moduli.
    pub fn in_field(value: BigUint, modulus: &Arc<BigUint>) -> Self {
        assert!(!modulus.is_zero(), "field modulus must be non-zero");
        let value = if value < **modulus {
            value
        } else {
            value % modulus.as_ref()
        };
        Self {
            value,
            modulus: Arc::clone(modulus),
            residue: OnceLock::new(),
        }
    }

    /// An element of the same field with a different value
    pub fn with_value(&self, value: BigUint) -> Self {
        Self::in_field(value, &self.modulus)
    }

    /// The additive identity of the field
    pub fn zero(modulus: BigUint) -> Self {
        Self::new(BigUint::zero(), modulus)
    }

    /// The multiplicative identity of the field
    pub fn one(modulus: BigUint) -> Self {
        Self::new(BigUint::one(), modulus)
    }

    /// The reduced value
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The field modulus `p`
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// The shared modulus handle
    pub fn shared_modulus(&self) -> &Arc<BigUint> {
        &self.modulus
    }

    /// Whether the value is zero
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Whether the value is one
    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    /// Whether the (reduced) value is odd
    pub fn is_odd(&self) -> bool {
        self.value.is_odd()
    }

    /// Whether both elements live in the same field
    pub fn same_field(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.modulus, &other.modulus) || self.modulus == other.modulus
    }

    fn check_field(&self, other: &Self) -> Result<()> {
        if self.same_field(other) {
            Ok(())
        } else {
            Err(Error::IncompatibleField)
        }
    }

    fn expect_field(&self, other: &Self) {
        assert!(
            self.same_field(other),
            "cannot combine elements of different prime fields (0x{:x} and 0x{:x})",
            self.modulus.as_ref(),
            other.modulus.as_ref()
        );
    }

    fn add_raw(&self, rhs: &Self) -> Self {
        self.with_value(&self.value + &rhs.value)
    }

    fn sub_raw(&self, rhs: &Self) -> Self {
        if self.value >= rhs.value {
            self.with_value(&self.value - &rhs.value)
        } else {
            self.with_value(self.modulus.as_ref() - &rhs.value + &self.value)
        }
    }

    fn mul_raw(&self, rhs: &Self) -> Self {
        self.with_value(&self.value * &rhs.value)
    }

    /// `self + rhs`, failing if the moduli differ
    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.add_raw(rhs))
    }

    /// `self - rhs`, failing if the moduli differ
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.sub_raw(rhs))
    }

    /// `self * rhs`, failing if the moduli differ
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.mul_raw(rhs))
    }

    /// Multiply by a small integer constant
    pub fn scale(&self, k: u32) -> Self {
        self.with_value(&self.value * k)
    }

    /// `self^2`
    pub fn square(&self) -> Self {
        self.mul_raw(self)
    }

    /// `self^exponent mod p`
    pub fn pow(&self, exponent: &BigUint) -> Self {
        self.with_value(self.value.modpow(exponent, &self.modulus))
    }

    /// The multiplicative inverse, found with the extended Euclidean
    /// algorithm on `(value, p)`.
    pub fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero {
                context: "field inverse",
            });
        }
        let value = BigInt::from_biguint(Sign::Plus, self.value.clone());
        let modulus = BigInt::from_biguint(Sign::Plus, self.modulus.as_ref().clone());
        let egcd = value.extended_gcd(&modulus);
        if !egcd.gcd.is_one() {
            return Err(Error::param(
                "field element",
                "not invertible, modulus shares a factor with the value",
            ));
        }
        let inverse = egcd.x.mod_floor(&modulus);
        Ok(self.with_value(inverse.magnitude().clone()))
    }

    /// `self / rhs`, i.e. `self * rhs^-1`
    pub fn divide(&self, rhs: &Self) -> Result<Self> {
        self.check_field(rhs)?;
        Ok(self.mul_raw(&rhs.inverse()?))
    }

    /// Euler's criterion: `self^((p-1)/2) == 1`.
    ///
    /// Zero is not counted as a residue. The result is cached on the element.
    pub fn is_quadratic_residue(&self) -> bool {
        *self.residue.get_or_init(|| {
            if self.value.is_zero() {
                return false;
            }
            let exponent = (self.modulus.as_ref() - 1u32) >> 1u32;
            self.value.modpow(&exponent, &self.modulus).is_one()
        })
    }

    /// Legendre symbol: `0` for zero, `1` for residues, `-1` otherwise
    pub fn legendre_symbol(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.is_quadratic_residue() {
            1
        } else {
            -1
        }
    }

    /// Both square roots `(r, -r)`, even-valued root first, or `None` for a
    /// non-residue. Zero yields `(0, 0)`.
    pub fn square_root(&self) -> Option<(Self, Self)> {
        if self.is_zero() {
            return Some((self.clone(), self.clone()));
        }
        if !self.is_quadratic_residue() {
            return None;
        }

        let p = self.modulus.as_ref();
        let root = if *p == BigUint::from(2u32) {
            self.clone()
        } else if p % 4u32 == BigUint::from(3u32) {
            let root = self.pow(&((p + 1u32) >> 2u32));
            debug_assert!(root.square() == *self);
            root
        } else {
            self.tonelli_shanks()?
        };

        let negated = -&root;
        if root.is_odd() {
            Some((negated, root))
        } else {
            Some((root, negated))
        }
    }

    /// A fourth root, or `None` when none exists in the field.
    ///
    /// Candidates are the square roots of both square roots, tried in the
    /// order [`square_root`](Self::square_root) returns them.
    pub fn quartic_root(&self) -> Option<Self> {
        let (r1, r2) = self.square_root()?;
        [r1, r2]
            .iter()
            .filter_map(|root| root.square_root())
            .flat_map(|(a, b)| [a, b])
            .find(|candidate| candidate.square().square() == *self)
    }

    /// The value as a signed integer, negative when `p - value` is the
    /// smaller representative and below `10^9`
    pub fn signed_value(&self) -> BigInt {
        let negated = self.modulus.as_ref() - &self.value;
        if self.is_zero() || negated >= self.value || negated >= BigUint::from(SIGNED_LIMIT) {
            BigInt::from_biguint(Sign::Plus, self.value.clone())
        } else {
            BigInt::from_biguint(Sign::Minus, negated)
        }
    }

    // Tonelli-Shanks for p = 1 mod 4. Caller guarantees a non-zero residue.
    fn tonelli_shanks(&self) -> Option<Self> {
        let p_minus_one = self.modulus.as_ref() - 1u32;
        let s = p_minus_one.trailing_zeros()?;
        let q = &p_minus_one >> s;
        let z = self.first_non_residue()?;

        let mut m = s;
        let mut c = z.pow(&q);
        let mut t = self.pow(&q);
        let mut r = self.pow(&((&q + 1u32) >> 1u32));

        while !t.is_one() {
            // least i in (0, m) with t^(2^i) == 1
            let mut i = 0u64;
            let mut power = t.clone();
            while !power.is_one() {
                power = power.square();
                i += 1;
                if i == m {
                    return None;
                }
            }
            let b = c.pow(&(BigUint::one() << (m - i - 1)));
            m = i;
            c = b.square();
            t = &t * &c;
            r = &r * &b;
        }
        Some(r)
    }

    fn first_non_residue(&self) -> Option<Self> {
        let mut z = BigUint::from(2u32);
        while z < *self.modulus {
            let candidate = self.with_value(z.clone());
            if candidate.legendre_symbol() == -1 {
                return Some(candidate);
            }
            z += 1u32;
        }
        None
    }

    /// Byte width of the field: `ceil(bitlen(p) / 8)`
    pub fn byte_length(&self) -> usize {
        encoding::byte_length(&self.modulus)
    }

    /// Big-endian encoding at the width of the field
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let width = self.byte_length();
        let mut out = vec![0u8; width];
        if !self.value.is_zero() {
            let raw = self.value.to_bytes_be();
            out[width - raw.len()..].copy_from_slice(&raw);
        }
        out
    }
}

macro_rules! impl_field_op {
    ($trait:ident, $method:ident, $raw:ident) => {
        impl<'a> $trait<&'a FieldElement> for &FieldElement {
            type Output = FieldElement;

            fn $method(self, rhs: &'a FieldElement) -> FieldElement {
                self.expect_field(rhs);
                self.$raw(rhs)
            }
        }

        impl<'a> $trait<&'a FieldElement> for FieldElement {
            type Output = FieldElement;

            fn $method(self, rhs: &'a FieldElement) -> FieldElement {
                (&self).$method(rhs)
            }
        }

        impl $trait<FieldElement> for &FieldElement {
            type Output = FieldElement;

            fn $method(self, rhs: FieldElement) -> FieldElement {
                self.$method(&rhs)
            }
        }

        impl $trait<FieldElement> for FieldElement {
            type Output = FieldElement;

            fn $method(self, rhs: FieldElement) -> FieldElement {
                (&self).$method(&rhs)
            }
        }
    };
}

impl_field_op!(Add, add, add_raw);
impl_field_op!(Sub, sub, sub_raw);
impl_field_op!(Mul, mul, mul_raw);

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        if self.is_zero() {
            self.clone()
        } else {
            self.with_value(self.modulus.as_ref() - &self.value)
        }
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -&self
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.same_field(other)
    }
}

impl Eq for FieldElement {}

impl Hash for FieldElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.modulus.hash(state);
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{:x} mod 0x{:x})", self.value, self.modulus.as_ref())
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.value)
    }
}
