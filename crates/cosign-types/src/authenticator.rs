//! Authenticator validation and canonical re-encoding.

use crate::{CodecError, Result};
use borsh::{BorshDeserialize, BorshSerialize};
use ed25519_dalek::VerifyingKey;

/// Ed25519 public key length in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;
/// Ed25519 signature length in bytes.
pub const SIGNATURE_LEN: usize = 64;

/// A signer's proof over a transaction, attached so the receiving chain can
/// verify authorization. The borsh enum tag byte is part of the wire format;
/// an unknown tag fails decoding.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub enum Authenticator {
    Ed25519 {
        public_key: [u8; PUBLIC_KEY_LEN],
        signature: [u8; SIGNATURE_LEN],
    },
}

/// Decode a borsh-encoded authenticator.
/// Trailing bytes after the structure are a decode failure.
pub fn decode(bytes: &[u8]) -> Result<Authenticator> {
    borsh::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
}

/// Canonical borsh encoding of an authenticator.
pub fn encode(authenticator: &Authenticator) -> Result<Vec<u8>> {
    borsh::to_vec(authenticator).map_err(|e| CodecError::Encode(e.to_string()))
}

/// Decode an authenticator blob, check it is well-formed, and return the
/// canonical re-encoding.
///
/// Truncated input, an unknown tag byte, trailing bytes, and public keys
/// that are not a valid ed25519 curve point are all rejected. Verifying the
/// signature against a message is the receiving chain's job, not ours.
pub fn validate_and_normalize(bytes: &[u8]) -> Result<Vec<u8>> {
    let authenticator = decode(bytes)?;

    let Authenticator::Ed25519 { public_key, .. } = &authenticator;
    VerifyingKey::from_bytes(public_key)
        .map_err(|e| CodecError::Decode(format!("invalid ed25519 public key: {e}")))?;

    encode(&authenticator)
}
