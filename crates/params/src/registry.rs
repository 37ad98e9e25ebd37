//! Explicit, caller-owned registry of named curves
//!
//! There is no process-wide registry. Construct one (usually with
//! [`CurveRegistry::with_builtin`]) at start-up and pass it to whatever needs
//! to look curves up by name.

use std::collections::HashMap;

use crate::curves::{presets::PRESETS, CurveEntry};
use crate::error::{RegistryError, Result};

/// Lookup table from curve names, aliases and OIDs to parameter sets.
///
/// Name lookups are case-insensitive. An alias resolves to the same entry
/// as its primary name.
#[derive(Clone, Debug, Default)]
pub struct CurveRegistry {
    entries: Vec<CurveEntry>,
    by_name: HashMap<String, usize>,
    by_oid: HashMap<&'static str, usize>,
}

impl CurveRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in parameter set
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for entry in PRESETS {
            registry.insert(*entry);
        }
        registry
    }

    /// Add a curve. Fails without modifying the registry when the primary
    /// name or any alias is already taken.
    pub fn register(&mut self, entry: CurveEntry) -> Result<()> {
        let mut taken: Vec<String> = entry
            .all_names()
            .map(str::to_lowercase)
            .filter(|name| self.by_name.contains_key(name))
            .collect();
        if !taken.is_empty() {
            taken.sort();
            taken.dedup();
            return Err(RegistryError::DuplicateName {
                names: taken.join(", "),
            });
        }
        self.insert(entry);
        Ok(())
    }

    fn insert(&mut self, entry: CurveEntry) {
        let index = self.entries.len();
        for name in entry.all_names() {
            self.by_name.insert(name.to_lowercase(), index);
        }
        for oid in entry.all_oids() {
            self.by_oid.entry(oid).or_insert(index);
        }
        self.entries.push(entry);
    }

    /// Look a curve up by primary name or alias
    pub fn get(&self, name: &str) -> Result<&CurveEntry> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&index| &self.entries[index])
            .ok_or_else(|| RegistryError::UnknownCurve {
                name: name.to_string(),
            })
    }

    /// Look a curve up by object identifier
    pub fn by_oid(&self, oid: &str) -> Result<&CurveEntry> {
        self.by_oid
            .get(oid)
            .map(|&index| &self.entries[index])
            .ok_or_else(|| RegistryError::UnknownOid {
                oid: oid.to_string(),
            })
    }

    /// Whether `name` resolves to a curve
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_lowercase())
    }

    /// Primary names in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.name)
    }

    /// All entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = &CurveEntry> {
        self.entries.iter()
    }

    /// Number of distinct curves
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no curves
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves::presets::{PRIME256V1, SECP224R1, SECP256K1};

    #[test]
    fn test_builtin_names_are_unique() {
        let mut registry = CurveRegistry::new();
        for entry in PRESETS {
            registry.register(*entry).unwrap();
        }
        assert_eq!(registry.len(), PRESETS.len());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = CurveRegistry::with_builtin();
        assert_eq!(registry.get("SECP256K1").unwrap().name, "secp256k1");
        assert_eq!(registry.get("BrainpoolP256R1").unwrap().name, "brainpoolP256r1");
    }

    #[test]
    fn test_aliases_resolve_to_primary() {
        let registry = CurveRegistry::with_builtin();
        for alias in ["secp256r1", "NIST P-256", "nist p-256"] {
            assert_eq!(registry.get(alias).unwrap(), &PRIME256V1);
        }
        assert_eq!(registry.get("ansip256k1").unwrap(), &SECP256K1);
    }

    #[test]
    fn test_oid_lookup() {
        let registry = CurveRegistry::with_builtin();
        assert_eq!(registry.by_oid("1.2.840.10045.3.1.7").unwrap(), &PRIME256V1);
        // OID registered under the WTLS alias
        assert_eq!(registry.by_oid("2.23.43.1.4.12").unwrap(), &SECP224R1);
        assert!(matches!(
            registry.by_oid("1.2.3"),
            Err(RegistryError::UnknownOid { .. })
        ));
    }

    #[test]
    fn test_unknown_name() {
        let registry = CurveRegistry::with_builtin();
        assert_eq!(
            registry.get("secp999k1"),
            Err(RegistryError::UnknownCurve {
                name: "secp999k1".into()
            })
        );
        let err: ecclab_api::Error = registry.get("secp999k1").unwrap_err().into();
        assert_eq!(err.to_string(), "Unknown curve: secp999k1");
    }

    #[test]
    fn test_duplicate_alias_rejected() {
        let mut registry = CurveRegistry::with_builtin();
        let before = registry.len();
        let clash = CurveEntry {
            name: "my-curve",
            aliases: &["Secp256R1", "NIST P-256"],
            ..SECP256K1
        };
        let err = registry.register(clash).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateName {
                names: "nist p-256, secp256r1".into()
            }
        );
        assert_eq!(registry.len(), before);
        assert!(!registry.contains("my-curve"));
    }

    #[test]
    fn test_names_lists_primaries_only() {
        let registry = CurveRegistry::with_builtin();
        let names: Vec<_> = registry.names().collect();
        assert!(names.contains(&"prime256v1"));
        assert!(!names.contains(&"secp256r1"));
        assert!(registry.iter().any(|entry| !entry.secure));
    }
}
