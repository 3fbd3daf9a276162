//! HTTP request handlers.

use crate::response::{
    GetTransactionResponse, HealthResponse, StoreSignatureResponse, StoreTransactionResponse,
};
use crate::state::AppState;
use crate::store;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cosign_types::decode_hex;
use serde::Deserialize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Deserialize)]
pub struct StoreTransactionRequest {
    pub transaction_id: String,
    pub bcs_hex: String,
}

#[derive(Deserialize)]
pub struct StoreSignatureRequest {
    pub transaction_id: String,
    pub signature_hex: String,
}

/// Health check with basic metrics.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        mode: mode_name(&state),
        uptime_secs: state.start_time.elapsed().as_secs(),
        requests: state.request_count.load(Ordering::Relaxed),
    })
}

/// Store a serialized transaction from the first signer.
pub async fn store_transaction(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StoreTransactionRequest>,
) -> (StatusCode, Json<StoreTransactionResponse>) {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    info!(
        id = %req.transaction_id,
        hex_len = req.bcs_hex.len(),
        mode = mode_name(&state),
        "Storing transaction"
    );

    let payload = match decode_hex(&req.bcs_hex) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(id = %req.transaction_id, error = %e, "Rejecting transaction");
            return (
                StatusCode::BAD_REQUEST,
                Json(StoreTransactionResponse::err(
                    req.transaction_id,
                    e.to_string(),
                )),
            );
        }
    };

    match state.store.put_transaction(&req.transaction_id, payload) {
        Ok(sequence_number) => {
            info!(
                id = %req.transaction_id,
                sequence_number = ?sequence_number,
                "Transaction stored"
            );
            (
                StatusCode::OK,
                Json(StoreTransactionResponse::ok(
                    req.transaction_id,
                    sequence_number,
                )),
            )
        }
        Err(e) => {
            warn!(id = %req.transaction_id, error = %e, "Rejecting transaction");
            (
                e.status(),
                Json(StoreTransactionResponse::err(
                    req.transaction_id,
                    e.to_string(),
                )),
            )
        }
    }
}

/// Attach the secondary signer's authenticator to a stored transaction.
pub async fn store_signature(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StoreSignatureRequest>,
) -> (StatusCode, Json<StoreSignatureResponse>) {
    state.request_count.fetch_add(1, Ordering::Relaxed);
    info!(
        id = %req.transaction_id,
        hex_len = req.signature_hex.len(),
        "Storing signature"
    );

    let signature = match decode_hex(&req.signature_hex) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(id = %req.transaction_id, error = %e, "Rejecting signature");
            return (
                StatusCode::BAD_REQUEST,
                Json(StoreSignatureResponse::err(
                    req.transaction_id,
                    e.to_string(),
                )),
            );
        }
    };

    match state.store.put_signature(&req.transaction_id, &signature) {
        Ok(()) => {
            info!(id = %req.transaction_id, "Signature stored");
            (
                StatusCode::OK,
                Json(StoreSignatureResponse::ok(req.transaction_id)),
            )
        }
        Err(e) => {
            warn!(id = %req.transaction_id, error = %e, "Rejecting signature");
            (
                e.status(),
                Json(StoreSignatureResponse::err(
                    req.transaction_id,
                    e.to_string(),
                )),
            )
        }
    }
}

/// Retrieve a transaction and, once attached, its secondary signature.
pub async fn get_transaction(
    State(state): State<Arc<AppState>>,
    Path(transaction_id): Path<String>,
) -> (StatusCode, Json<GetTransactionResponse>) {
    state.request_count.fetch_add(1, Ordering::Relaxed);

    match state.store.get(&transaction_id) {
        Ok(record) => {
            let elapsed = store::now_secs().saturating_sub(record.created_at);
            info!(
                id = %transaction_id,
                elapsed_secs = elapsed,
                signed = record.secondary_signature.is_some(),
                sequence_number = ?record.sequence_number,
                "Transaction retrieved"
            );
            (
                StatusCode::OK,
                Json(GetTransactionResponse::ok(&record, elapsed)),
            )
        }
        Err(e) => {
            warn!(id = %transaction_id, error = %e, "Fetch failed");
            (e.status(), Json(GetTransactionResponse::err(e.to_string())))
        }
    }
}

fn mode_name(state: &AppState) -> &'static str {
    if state.store.reserialize() {
        "reserialize"
    } else {
        "pass-through"
    }
}
