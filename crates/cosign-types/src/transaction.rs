//! Multi-agent transaction wire format.
//!
//! The borsh layout places the 32-byte sender address first and the
//! little-endian u64 sequence number at bytes 32..40, so the best-effort
//! offset read in [`peek_sequence_number`] agrees with a full decode.

use crate::{CodecError, Result};
use borsh::{BorshDeserialize, BorshSerialize};

/// Account address length in bytes.
pub const ADDRESS_LEN: usize = 32;

const SEQUENCE_OFFSET: usize = ADDRESS_LEN;
const SEQUENCE_END: usize = SEQUENCE_OFFSET + 8;

/// An entry-point call: target module, function, and raw argument blobs.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct EntryCall {
    pub module: String,
    pub function: String,
    pub args: Vec<Vec<u8>>,
}

/// The single-sender core of a transaction.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RawTransaction {
    pub sender: [u8; ADDRESS_LEN],
    pub sequence_number: u64,
    pub call: EntryCall,
    pub max_gas: u64,
    pub gas_unit_price: u64,
    pub expiration_secs: u64,
    pub chain_id: u8,
}

/// A transaction requiring authorization from the sender plus one or more
/// secondary signers before it is valid to submit.
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct MultiAgentTransaction {
    pub raw: RawTransaction,
    pub secondary_signers: Vec<[u8; ADDRESS_LEN]>,
}

/// Decode a borsh-encoded multi-agent transaction.
/// Trailing bytes after the structure are a decode failure.
pub fn decode(bytes: &[u8]) -> Result<MultiAgentTransaction> {
    borsh::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
}

/// Canonical borsh encoding of a multi-agent transaction.
pub fn encode(tx: &MultiAgentTransaction) -> Result<Vec<u8>> {
    borsh::to_vec(tx).map_err(|e| CodecError::Encode(e.to_string()))
}

/// Best-effort sequence number read at the fixed wire offset.
/// Diagnostic only; returns `None` when the input is too short.
pub fn peek_sequence_number(bytes: &[u8]) -> Option<u64> {
    let seq: [u8; 8] = bytes.get(SEQUENCE_OFFSET..SEQUENCE_END)?.try_into().ok()?;
    Some(u64::from_le_bytes(seq))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_transaction(sequence_number: u64) -> MultiAgentTransaction {
        MultiAgentTransaction {
            raw: RawTransaction {
                sender: [0x11; ADDRESS_LEN],
                sequence_number,
                call: EntryCall {
                    module: "0x1::coin".to_string(),
                    function: "transfer".to_string(),
                    args: vec![vec![0x22; ADDRESS_LEN], 100u64.to_le_bytes().to_vec()],
                },
                max_gas: 200_000,
                gas_unit_price: 100,
                expiration_secs: 1_700_000_600,
                chain_id: 2,
            },
            secondary_signers: vec![[0x33; ADDRESS_LEN]],
        }
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let tx = make_transaction(5);
        let bytes = encode(&tx).unwrap();
        assert_eq!(decode(&bytes).unwrap(), tx);
    }

    #[test]
    fn test_peek_agrees_with_decode() {
        let tx = make_transaction(987_654);
        let bytes = encode(&tx).unwrap();
        assert_eq!(peek_sequence_number(&bytes), Some(987_654));
    }

    #[test]
    fn test_peek_short_input() {
        assert_eq!(peek_sequence_number(&[0u8; 39]), None);
        assert_eq!(peek_sequence_number(&[]), None);
    }

    #[test]
    fn test_decode_rejects_truncated() {
        let bytes = encode(&make_transaction(1)).unwrap();
        assert!(decode(&bytes[..bytes.len() - 1]).is_err());
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let mut bytes = encode(&make_transaction(1)).unwrap();
        bytes.push(0);
        assert!(decode(&bytes).is_err());
    }
}
