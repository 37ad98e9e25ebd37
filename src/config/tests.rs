use super::*;
use ecclab_algorithms::block::CipherAlgorithm;
use ecclab_algorithms::kdf::KdfAlgorithm;
use ecclab_algorithms::mac::MacAlgorithm;
use std::io::Write;

const SAMPLE: &str = r#"
curve = "brainpoolP256r1"
hash = "sha3-256"

[ecies]
cipher = "aes256-cbc"
mac = "hmac-sha512"
kdf = { algorithm = "hkdf", hash = "sha384" }

[elgamal]
message_bits = 64
"#;

#[test]
fn test_defaults() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.curve, "secp256r1");
    assert_eq!(config.hash, HashAlgorithm::Sha256);
    assert_eq!(config.elgamal.max_attempts, 100);
}

#[test]
fn test_parse_sample() {
    let config = Config::from_toml_str(SAMPLE).unwrap();
    assert_eq!(config.curve, "brainpoolP256r1");
    assert_eq!(config.hash, HashAlgorithm::Sha3_256);
    assert_eq!(config.ecies.cipher, CipherAlgorithm::Aes256Cbc);
    assert_eq!(config.ecies.mac, MacAlgorithm::HmacSha512);
    assert_eq!(config.ecies.kdf, KdfAlgorithm::Hkdf(HashAlgorithm::Sha384));
    assert_eq!(config.ecies.iv, vec![0u8; 16]);
    assert_eq!(config.elgamal.message_bits, 64);
    assert_eq!(config.elgamal.max_attempts, 100);
}

#[test]
fn test_rejects_unknown_fields_and_hashes() {
    assert!(matches!(
        Config::from_toml_str("curves = \"secp256k1\""),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        Config::from_toml_str("hash = \"md5\""),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_toml_round_trip() {
    let config = Config::from_toml_str(SAMPLE).unwrap();
    let text = config.to_toml_string().unwrap();
    assert_eq!(Config::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_resolve() {
    let registry = CurveRegistry::with_builtin();
    let resolved = Config::from_toml_str(SAMPLE)
        .unwrap()
        .resolve(&registry)
        .unwrap();
    assert_eq!(resolved.curve.name(), Some("brainpoolP256r1"));
    assert_eq!(resolved.hash, HashAlgorithm::Sha3_256);
    assert_eq!(resolved.ecies.config().cipher, CipherAlgorithm::Aes256Cbc);
    assert_eq!(resolved.elgamal.config().message_bits, 64);

    let default = Config::default().curve(&registry).unwrap();
    assert_eq!(default.name(), Some("prime256v1"));
}

#[test]
fn test_resolve_by_oid() {
    let registry = CurveRegistry::with_builtin();
    let config = Config {
        curve: "1.2.840.10045.3.1.7".into(),
        ..Config::default()
    };
    assert_eq!(config.curve(&registry).unwrap().name(), Some("prime256v1"));
}

#[test]
fn test_resolve_failures() {
    let registry = CurveRegistry::with_builtin();
    let unknown = Config {
        curve: "secp999k1".into(),
        ..Config::default()
    };
    let err = unknown.resolve(&registry).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Registry(RegistryError::UnknownCurve { ref name }) if name == "secp999k1"
    ));
    assert!(matches!(
        CoreError::from(err),
        CoreError::UnknownCurve { .. }
    ));

    let empty = CurveRegistry::new();
    assert!(Config::default().curve(&empty).is_err());

    let mut short_iv = Config::default();
    short_iv.ecies.iv = vec![0; 4];
    assert!(matches!(
        short_iv.resolve(&registry),
        Err(ConfigError::Scheme(_))
    ));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.curve, "brainpoolP256r1");

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let err = Config::load(&missing).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
    assert!(matches!(
        CoreError::from(err),
        CoreError::SerializationError { .. }
    ));
}
