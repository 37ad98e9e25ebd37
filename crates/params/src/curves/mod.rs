//! Domain parameter sets for short Weierstrass curves `y^2 = x^3 + ax + b`

pub mod presets;

/// Domain parameters of a short Weierstrass curve over a prime field.
///
/// All integers are big-endian hexadecimal strings without prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DomainParameters {
    /// The `a` coefficient
    pub a: &'static str,
    /// The `b` coefficient
    pub b: &'static str,
    /// The prime field modulus
    pub p: &'static str,
    /// Order of the generator
    pub n: &'static str,
    /// Cofactor, `#E(F_p) / n`
    pub h: u32,
    /// Generator X coordinate
    pub gx: &'static str,
    /// Generator Y coordinate
    pub gy: &'static str,
}

/// A named curve as stored in the registry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveEntry {
    /// Primary name
    pub name: &'static str,
    /// Alternative names that resolve to the same parameters
    pub aliases: &'static [&'static str],
    /// Object identifier of the primary name
    pub oid: Option<&'static str>,
    /// Object identifiers registered under an alias, as `(alias, oid)`
    pub alt_oids: &'static [(&'static str, &'static str)],
    /// Standard or publication the curve comes from
    pub origin: Option<&'static str>,
    /// `false` for curves kept only as illustrations of weak parameters
    pub secure: bool,
    /// The domain parameters
    pub params: DomainParameters,
}

impl CurveEntry {
    /// Primary name followed by all aliases
    pub fn all_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        core::iter::once(self.name).chain(self.aliases.iter().copied())
    }

    /// Primary OID followed by the alias OIDs
    pub fn all_oids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.oid
            .into_iter()
            .chain(self.alt_oids.iter().map(|(_, oid)| *oid))
    }
}
