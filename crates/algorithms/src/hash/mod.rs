//! Message digests addressed by [`HashAlgorithm`]

use sha2::Digest;

pub use ecclab_api::HashAlgorithm;

fn run<D: Digest>(parts: &[&[u8]]) -> Vec<u8> {
    let mut hasher = D::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().to_vec()
}

/// Digest of `data`
pub fn digest(algorithm: HashAlgorithm, data: &[u8]) -> Vec<u8> {
    digest_parts(algorithm, &[data])
}

/// Digest of the concatenation of `parts`
pub fn digest_parts(algorithm: HashAlgorithm, parts: &[&[u8]]) -> Vec<u8> {
    match algorithm {
        HashAlgorithm::Sha224 => run::<sha2::Sha224>(parts),
        HashAlgorithm::Sha256 => run::<sha2::Sha256>(parts),
        HashAlgorithm::Sha384 => run::<sha2::Sha384>(parts),
        HashAlgorithm::Sha512 => run::<sha2::Sha512>(parts),
        HashAlgorithm::Sha3_256 => run::<sha3::Sha3_256>(parts),
        HashAlgorithm::Sha3_384 => run::<sha3::Sha3_384>(parts),
        HashAlgorithm::Sha3_512 => run::<sha3::Sha3_512>(parts),
    }
}
