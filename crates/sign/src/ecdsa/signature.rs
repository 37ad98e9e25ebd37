//! ECDSA signature values and their encodings

use std::fmt;

use ecclab_algorithms::encoding;
use ecclab_api::HashAlgorithm;
use num_bigint::BigUint;
use num_traits::Zero;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const DER_SEQUENCE: u8 = 0x30;
const DER_INTEGER: u8 = 0x02;

/// An ECDSA signature `(r, s)` and the hash algorithm of the signed digest.
///
/// Construction records whatever signing computed; range checks happen at
/// verification.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Signature {
    #[cfg_attr(feature = "serde", serde(with = "hex_integer"))]
    r: BigUint,
    #[cfg_attr(feature = "serde", serde(with = "hex_integer"))]
    s: BigUint,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    hash: Option<HashAlgorithm>,
}

impl Signature {
    /// Assemble a signature from its components
    pub fn new(r: BigUint, s: BigUint, hash: Option<HashAlgorithm>) -> Self {
        Self { r, s, hash }
    }

    /// The `r` component
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` component
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Hash algorithm of the signed digest, if recorded
    pub fn hash(&self) -> Option<HashAlgorithm> {
        self.hash
    }

    /// Same components, different recorded hash
    pub fn with_hash(mut self, hash: Option<HashAlgorithm>) -> Self {
        self.hash = hash;
        self
    }

    /// `r || s`, each big-endian on `width` bytes (the byte length of the
    /// curve order)
    pub fn to_bytes(&self, width: usize) -> Result<Vec<u8>> {
        let mut out = encoding::int_to_bytes_be(&self.r, width)?;
        out.extend(encoding::int_to_bytes_be(&self.s, width)?);
        Ok(out)
    }

    /// Parse the fixed-width `r || s` form
    pub fn from_bytes(bytes: &[u8], hash: Option<HashAlgorithm>) -> Result<Self> {
        if bytes.is_empty() || bytes.len() % 2 != 0 {
            return Err(Error::Encoding(format!(
                "fixed-width signature must have an even, non-zero length, got {}",
                bytes.len()
            )));
        }
        let (r, s) = bytes.split_at(bytes.len() / 2);
        Ok(Self::new(
            encoding::bytes_to_int_be(r),
            encoding::bytes_to_int_be(s),
            hash,
        ))
    }

    /// ASN.1 DER: `SEQUENCE { INTEGER r, INTEGER s }`
    pub fn to_der(&self) -> Vec<u8> {
        let mut body = Vec::new();
        der_integer(&self.r, &mut body);
        der_integer(&self.s, &mut body);

        let mut der = vec![DER_SEQUENCE];
        der_length(body.len(), &mut der);
        der.extend(body);
        der
    }

    /// Parse a strict DER encoding; trailing bytes are rejected
    pub fn from_der(der: &[u8], hash: Option<HashAlgorithm>) -> Result<Self> {
        let mut outer = DerReader::new(der);
        let body = outer.read_element(DER_SEQUENCE)?;
        outer.finish()?;

        let mut inner = DerReader::new(body);
        let r = read_der_integer(&mut inner)?;
        let s = read_der_integer(&mut inner)?;
        inner.finish()?;
        Ok(Self::new(r, s, hash))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(r=0x{:x}, s=0x{:x}", self.r, self.s)?;
        match self.hash {
            Some(hash) => write!(f, ", {hash})"),
            None => f.write_str(")"),
        }
    }
}

fn der_length(len: usize, out: &mut Vec<u8>) {
    if len < 0x80 {
        out.push(len as u8);
    } else {
        let bytes = len.to_be_bytes();
        let skip = bytes.iter().take_while(|b| **b == 0).count();
        out.push(0x80 | (bytes.len() - skip) as u8);
        out.extend_from_slice(&bytes[skip..]);
    }
}

fn der_integer(value: &BigUint, out: &mut Vec<u8>) {
    let mut bytes = if value.is_zero() {
        vec![0]
    } else {
        value.to_bytes_be()
    };
    if bytes[0] & 0x80 != 0 {
        bytes.insert(0, 0);
    }
    out.push(DER_INTEGER);
    der_length(bytes.len(), out);
    out.extend(bytes);
}

fn read_der_integer(reader: &mut DerReader<'_>) -> Result<BigUint> {
    let bytes = reader.read_element(DER_INTEGER)?;
    match bytes {
        [] => Err(Error::Encoding("empty INTEGER".into())),
        [first, ..] if first & 0x80 != 0 => {
            Err(Error::Encoding("negative INTEGER".into()))
        }
        [0, second, ..] if second & 0x80 == 0 => {
            Err(Error::Encoding("non-minimal INTEGER".into()))
        }
        _ => Ok(BigUint::from_bytes_be(bytes)),
    }
}

struct DerReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> DerReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn byte(&mut self) -> Result<u8> {
        let b = *self
            .data
            .get(self.pos)
            .ok_or_else(|| Error::Encoding("truncated DER".into()))?;
        self.pos += 1;
        Ok(b)
    }

    fn length(&mut self) -> Result<usize> {
        let first = self.byte()?;
        if first < 0x80 {
            return Ok(first as usize);
        }
        let count = (first & 0x7f) as usize;
        if count == 0 || count > 4 {
            return Err(Error::Encoding("unsupported DER length form".into()));
        }
        let mut len = 0usize;
        for _ in 0..count {
            len = (len << 8) | self.byte()? as usize;
        }
        if len < 0x80 || len >> (8 * (count - 1)) == 0 {
            return Err(Error::Encoding("non-minimal DER length".into()));
        }
        Ok(len)
    }

    fn read_element(&mut self, tag: u8) -> Result<&'a [u8]> {
        let found = self.byte()?;
        if found != tag {
            return Err(Error::Encoding(format!(
                "expected DER tag 0x{tag:02x}, found 0x{found:02x}"
            )));
        }
        let len = self.length()?;
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or_else(|| Error::Encoding("truncated DER".into()))?;
        let element = &self.data[self.pos..end];
        self.pos = end;
        Ok(element)
    }

    fn finish(&self) -> Result<()> {
        if self.pos != self.data.len() {
            return Err(Error::Encoding("trailing data after DER element".into()));
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod hex_integer {
    use num_bigint::BigUint;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_str_radix(16))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
        let text = String::deserialize(deserializer)?;
        BigUint::parse_bytes(text.as_bytes(), 16)
            .ok_or_else(|| D::Error::custom("invalid hexadecimal integer"))
    }
}
