//! ECIES ciphertext and its wire format

use ecclab_algorithms::ec::{Curve, Point};

use crate::error::{Error, Result};

/// The transmitted parts of an ECIES encryption: the ephemeral point `R`,
/// the symmetric ciphertext `C` and the MAC tag `T`.
///
/// On the wire: `R_len (1) || R || C_len (4, BE) || C || T_len (1) || T`
/// with `R` in uncompressed form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EciesCiphertext {
    ephemeral: Point,
    ciphertext: Vec<u8>,
    tag: Vec<u8>,
}

impl EciesCiphertext {
    /// Assemble a ciphertext from its parts
    pub fn new(ephemeral: Point, ciphertext: Vec<u8>, tag: Vec<u8>) -> Self {
        Self {
            ephemeral,
            ciphertext,
            tag,
        }
    }

    /// The ephemeral point `R`
    pub fn ephemeral(&self) -> &Point {
        &self.ephemeral
    }

    /// The symmetric ciphertext
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// The MAC tag over the ciphertext
    pub fn tag(&self) -> &[u8] {
        &self.tag
    }

    /// Encode to the wire format
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let r = self.ephemeral.to_uncompressed_bytes()?;
        let r_len = u8::try_from(r.len())
            .map_err(|_| Error::InvalidCiphertextFormat("ephemeral point too long"))?;
        let c_len = u32::try_from(self.ciphertext.len())
            .map_err(|_| Error::InvalidCiphertextFormat("ciphertext too long"))?;
        let t_len = u8::try_from(self.tag.len())
            .map_err(|_| Error::InvalidCiphertextFormat("tag too long"))?;

        let mut out = Vec::with_capacity(1 + r.len() + 4 + self.ciphertext.len() + 1 + self.tag.len());
        out.push(r_len);
        out.extend_from_slice(&r);
        out.extend_from_slice(&c_len.to_be_bytes());
        out.extend_from_slice(&self.ciphertext);
        out.push(t_len);
        out.extend_from_slice(&self.tag);
        Ok(out)
    }

    /// Decode the wire format, checking that `R` is a point of `curve`
    pub fn from_bytes(curve: &Curve, bytes: &[u8]) -> Result<Self> {
        let mut reader = Reader { bytes, pos: 0 };

        let r_len = reader.take(1, "R length truncated")?[0] as usize;
        let r = reader.take(r_len, "R data truncated")?;
        let ephemeral = Point::from_uncompressed_bytes(curve, r)?;

        let c_len = reader.take(4, "ciphertext length truncated")?;
        let c_len = u32::from_be_bytes([c_len[0], c_len[1], c_len[2], c_len[3]]) as usize;
        let ciphertext = reader.take(c_len, "ciphertext data truncated")?.to_vec();

        let t_len = reader.take(1, "tag length truncated")?[0] as usize;
        let tag = reader.take(t_len, "tag data truncated")?.to_vec();

        if reader.pos != bytes.len() {
            return Err(Error::InvalidCiphertextFormat("trailing data after tag"));
        }
        Ok(Self::new(ephemeral, ciphertext, tag))
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize, truncated: &'static str) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.bytes.len())
            .ok_or(Error::InvalidCiphertextFormat(truncated))?;
        let out = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(out)
    }
}
