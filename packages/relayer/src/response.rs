//! Response types for the relay API.

use crate::store::TransactionRecord;
use cosign_types::encode_hex;
use serde::Serialize;

/// Response from the health endpoint.
#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub mode: &'static str,
    pub uptime_secs: u64,
    pub requests: u64,
}

/// Response from the store-transaction endpoint.
#[derive(Serialize)]
pub struct StoreTransactionResponse {
    pub success: bool,
    pub transaction_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<u64>,
    pub message: String,
}

impl StoreTransactionResponse {
    pub fn ok(transaction_id: String, sequence_number: Option<u64>) -> Self {
        Self {
            success: true,
            transaction_id,
            sequence_number,
            message: "Transaction stored".to_string(),
        }
    }

    pub fn err(transaction_id: String, message: impl Into<String>) -> Self {
        Self {
            success: false,
            transaction_id,
            sequence_number: None,
            message: message.into(),
        }
    }
}

/// Response from the store-signature endpoint.
#[derive(Serialize)]
pub struct StoreSignatureResponse {
    pub success: bool,
    pub transaction_id: String,
    pub message: String,
}

impl StoreSignatureResponse {
    pub fn ok(transaction_id: String) -> Self {
        Self {
            success: true,
            transaction_id,
            message: "Signature stored".to_string(),
        }
    }

    pub fn err(transaction_id: String, message: impl Into<String>) -> Self {
        Self {
            success: false,
            transaction_id,
            message: message.into(),
        }
    }
}

/// Response from the fetch endpoint.
///
/// `secondary_signature_hex` is absent until a signature has been stored.
#[derive(Serialize)]
pub struct GetTransactionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcs_hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_signature_hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_at: Option<u64>,
    pub message: String,
}

impl GetTransactionResponse {
    pub fn ok(record: &TransactionRecord, elapsed_secs: u64) -> Self {
        Self {
            success: true,
            bcs_hex: Some(encode_hex(&record.payload)),
            secondary_signature_hex: record
                .secondary_signature
                .as_deref()
                .map(encode_hex),
            sequence_number: record.sequence_number,
            stored_at: Some(record.created_at),
            message: format!("Transaction retrieved (stored {elapsed_secs} seconds ago)"),
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            bcs_hex: None,
            secondary_signature_hex: None,
            sequence_number: None,
            stored_at: None,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(signed: bool) -> TransactionRecord {
        TransactionRecord {
            payload: vec![0xAA, 0xBB],
            secondary_signature: signed.then(|| vec![0xCC]),
            sequence_number: Some(5),
            created_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_unsigned_record_omits_signature_field() {
        let value =
            serde_json::to_value(GetTransactionResponse::ok(&make_record(false), 10)).unwrap();
        assert_eq!(value["bcs_hex"], "0xaabb");
        assert_eq!(value["sequence_number"], 5);
        assert_eq!(value["stored_at"], 1_700_000_000);
        assert!(value.get("secondary_signature_hex").is_none());
    }

    #[test]
    fn test_signed_record_includes_signature_field() {
        let value =
            serde_json::to_value(GetTransactionResponse::ok(&make_record(true), 0)).unwrap();
        assert_eq!(value["secondary_signature_hex"], "0xcc");
    }

    #[test]
    fn test_error_response_omits_payload_fields() {
        let value = serde_json::to_value(GetTransactionResponse::err("Transaction not found"))
            .unwrap();
        assert_eq!(value["success"], false);
        assert!(value.get("bcs_hex").is_none());
        assert!(value.get("stored_at").is_none());
    }

    #[test]
    fn test_store_response_omits_absent_sequence_number() {
        let value =
            serde_json::to_value(StoreTransactionResponse::ok("tx1".to_string(), None)).unwrap();
        assert!(value.get("sequence_number").is_none());
        assert_eq!(value["success"], true);
    }
}
