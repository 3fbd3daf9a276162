//! In-memory record store with per-key critical sections.

use crate::error::StoreError;
use cosign_types::{authenticator, transaction};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

/// One stored multi-party transaction.
#[derive(Clone, Debug)]
pub struct TransactionRecord {
    /// Serialized transaction bytes. Pass-through mode stores the caller's
    /// bytes verbatim; reserialize mode stores the canonical re-encoding.
    pub payload: Vec<u8>,
    /// Secondary signer's authenticator. Absent until signed, set at most once.
    pub secondary_signature: Option<Vec<u8>>,
    /// Best-effort diagnostic, never authoritative.
    pub sequence_number: Option<u64>,
    /// Unix seconds at first store. Unchanged by signature attachment.
    pub created_at: u64,
}

/// Keyed store of transaction records.
///
/// The outer map lock is held only for lookup and insert; each record has
/// its own mutex, so operations on distinct ids proceed independently.
pub struct RecordStore {
    records: RwLock<HashMap<String, Arc<Mutex<TransactionRecord>>>>,
    reserialize: bool,
}

impl RecordStore {
    pub fn new(reserialize: bool) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            reserialize,
        }
    }

    /// Whether payloads are decoded and re-encoded on store and fetch.
    pub fn reserialize(&self) -> bool {
        self.reserialize
    }

    fn read_records(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<Mutex<TransactionRecord>>>> {
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_records(
        &self,
    ) -> RwLockWriteGuard<'_, HashMap<String, Arc<Mutex<TransactionRecord>>>> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }

    fn slot(&self, id: &str) -> Option<Arc<Mutex<TransactionRecord>>> {
        self.read_records().get(id).cloned()
    }

    /// Store a serialized transaction under `id`.
    ///
    /// Pass-through mode never inspects the bytes beyond a best-effort
    /// sequence-number peek and cannot fail on content. Reserialize mode
    /// requires a full decode and stores the canonical re-encoding; a
    /// payload that fails to decode leaves no record behind.
    ///
    /// A second store for an existing `id` is rejected with
    /// [`StoreError::AlreadyExists`] and leaves the record untouched.
    pub fn put_transaction(&self, id: &str, payload: Vec<u8>) -> Result<Option<u64>, StoreError> {
        let (payload, sequence_number) = if self.reserialize {
            let tx = transaction::decode(&payload)
                .map_err(|e| StoreError::InvalidEncoding(e.to_string()))?;
            let canonical = transaction::encode(&tx)
                .map_err(|e| StoreError::InvalidEncoding(e.to_string()))?;
            if canonical != payload {
                warn!(
                    id,
                    original_len = payload.len(),
                    canonical_len = canonical.len(),
                    "payload changed under re-serialization"
                );
            }
            (canonical, Some(tx.raw.sequence_number))
        } else {
            let sequence_number = transaction::peek_sequence_number(&payload);
            (payload, sequence_number)
        };

        let record = TransactionRecord {
            payload,
            secondary_signature: None,
            sequence_number,
            created_at: now_secs(),
        };

        let mut records = self.write_records();
        if records.contains_key(id) {
            return Err(StoreError::AlreadyExists);
        }
        records.insert(id.to_string(), Arc::new(Mutex::new(record)));
        Ok(sequence_number)
    }

    /// Attach the secondary signer's authenticator to an existing record.
    ///
    /// The blob is validated and canonicalized before anything is mutated;
    /// a failed call leaves the record exactly as it was.
    pub fn put_signature(&self, id: &str, signature: &[u8]) -> Result<(), StoreError> {
        let slot = self.slot(id).ok_or(StoreError::NotFound)?;

        let normalized = authenticator::validate_and_normalize(signature)
            .map_err(|e| StoreError::MalformedSignature(e.to_string()))?;

        let mut record = lock(&slot);
        if record.secondary_signature.is_some() {
            return Err(StoreError::AlreadySigned);
        }
        record.secondary_signature = Some(normalized);
        Ok(())
    }

    /// Owned snapshot of the record for `id`, never a live reference.
    ///
    /// Reserialize mode decodes and re-encodes the stored payload on the way
    /// out; if the stored bytes no longer decode, the stored bytes are
    /// returned as-is. A read never fails on content.
    pub fn get(&self, id: &str) -> Result<TransactionRecord, StoreError> {
        let slot = self.slot(id).ok_or(StoreError::NotFound)?;
        let mut snapshot = lock(&slot).clone();

        if self.reserialize {
            match transaction::decode(&snapshot.payload).and_then(|tx| transaction::encode(&tx)) {
                Ok(bytes) => {
                    if bytes != snapshot.payload {
                        warn!(id, "stored payload re-encoded differently on fetch");
                    }
                    snapshot.payload = bytes;
                }
                Err(e) => {
                    warn!(id, error = %e, "stored payload no longer decodes, returning stored bytes");
                }
            }
        }

        Ok(snapshot)
    }
}

fn lock(slot: &Arc<Mutex<TransactionRecord>>) -> MutexGuard<'_, TransactionRecord> {
    slot.lock().unwrap_or_else(|e| e.into_inner())
}

pub(crate) fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
