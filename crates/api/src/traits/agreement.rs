//! Diffie-Hellman key agreement capability

use crate::Result;

/// Computes a shared secret with a peer's public key.
pub trait KeyAgreement {
    /// Public key type of the peer
    type PeerKey;

    /// Shared group element
    type SharedPoint;

    /// Compute the shared point `d * Q_peer`
    fn agree(&self, peer: &Self::PeerKey) -> Result<Self::SharedPoint>;

    /// Shared secret bytes: the X coordinate of the shared point, big-endian
    /// at the width of the field
    fn shared_secret(&self, peer: &Self::PeerKey) -> Result<Vec<u8>>;
}
