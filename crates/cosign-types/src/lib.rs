//! Shared wire types and codecs for the cosign relay.
//! Zero service dependency — usable by the relay, test drivers, and tooling.

pub mod authenticator;
mod error;
pub mod transaction;

pub use authenticator::{validate_and_normalize, Authenticator};
pub use error::CodecError;

pub type Result<T> = std::result::Result<T, CodecError>;

/// Parse a hex string (with or without a `0x` prefix) into bytes.
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>> {
    let stripped = hex_str.strip_prefix("0x").unwrap_or(hex_str);
    hex::decode(stripped).map_err(|e| CodecError::InvalidHex(e.to_string()))
}

/// Convert bytes to a `0x`-prefixed hex string.
pub fn encode_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_accepts_prefixed_and_bare() {
        assert_eq!(decode_hex("0xdeadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(decode_hex("deadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_encode_normalizes_to_prefixed() {
        assert_eq!(encode_hex(&[0xde, 0xad, 0xbe, 0xef]), "0xdeadbeef");
        assert_eq!(encode_hex(&[]), "0x");
    }

    #[test]
    fn test_decode_rejects_bad_hex() {
        assert!(decode_hex("0xzz").is_err());
        assert!(decode_hex("abc").is_err());
    }

    #[test]
    fn test_roundtrip_normalization() {
        let bytes = decode_hex("AABB01").unwrap();
        assert_eq!(encode_hex(&bytes), "0xaabb01");
    }
}
