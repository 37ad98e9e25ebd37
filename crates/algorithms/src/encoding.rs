//! Fixed-width integer encodings

use num_bigint::BigUint;
use num_traits::Zero;

use crate::error::{validate, Result};

/// Number of bytes needed for any residue modulo `modulus`: `ceil(bitlen/8)`
pub fn byte_length(modulus: &BigUint) -> usize {
    modulus.bits().div_ceil(8) as usize
}

/// Big-endian encoding left-padded with zeros to exactly `length` bytes.
///
/// Fails when `value` needs more than `length` bytes.
pub fn int_to_bytes_be(value: &BigUint, length: usize) -> Result<Vec<u8>> {
    let raw = if value.is_zero() {
        Vec::new()
    } else {
        value.to_bytes_be()
    };
    validate::max_length("integer encoding", raw.len(), length)?;
    let mut out = vec![0u8; length - raw.len()];
    out.extend_from_slice(&raw);
    Ok(out)
}

/// Little-endian encoding right-padded with zeros to exactly `length` bytes
pub fn int_to_bytes_le(value: &BigUint, length: usize) -> Result<Vec<u8>> {
    let mut out = if value.is_zero() {
        Vec::new()
    } else {
        value.to_bytes_le()
    };
    validate::max_length("integer encoding", out.len(), length)?;
    out.resize(length, 0);
    Ok(out)
}

/// Big-endian bytes to integer
pub fn bytes_to_int_be(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Little-endian bytes to integer
pub fn bytes_to_int_le(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_le(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_width_padding() {
        let v = BigUint::from(0x0102u32);
        assert_eq!(int_to_bytes_be(&v, 4).unwrap(), vec![0, 0, 1, 2]);
        assert_eq!(int_to_bytes_le(&v, 4).unwrap(), vec![2, 1, 0, 0]);
        assert_eq!(int_to_bytes_be(&BigUint::zero(), 2).unwrap(), vec![0, 0]);
    }

    #[test]
    fn test_too_wide_rejected() {
        let v = BigUint::from(0x010000u32);
        assert!(int_to_bytes_be(&v, 2).is_err());
    }

    #[test]
    fn test_byte_length_rounds_up() {
        assert_eq!(byte_length(&BigUint::from(23u32)), 1);
        assert_eq!(byte_length(&BigUint::from(256u32)), 2);
        let p521 = (BigUint::from(1u32) << 521u32) - 1u32;
        assert_eq!(byte_length(&p521), 66);
    }
}
