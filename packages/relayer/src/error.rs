//! Error types for the relay.

use axum::http::StatusCode;
use std::fmt;

/// Record store error type.
#[derive(Debug)]
pub enum StoreError {
    /// No record exists for the requested id.
    NotFound,
    /// A record already exists for the id.
    AlreadyExists,
    /// The record already carries a secondary signature.
    AlreadySigned,
    /// The signature blob failed validation.
    MalformedSignature(String),
    /// The transaction payload failed decoding (reserialize mode only).
    InvalidEncoding(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "Transaction not found"),
            StoreError::AlreadyExists => write!(f, "Transaction already stored"),
            StoreError::AlreadySigned => write!(f, "Secondary signature already stored"),
            StoreError::MalformedSignature(msg) => write!(f, "Malformed signature: {msg}"),
            StoreError::InvalidEncoding(msg) => {
                write!(f, "Invalid transaction encoding: {msg}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl StoreError {
    /// HTTP status the error maps to at the API boundary.
    pub fn status(&self) -> StatusCode {
        match self {
            StoreError::NotFound => StatusCode::NOT_FOUND,
            StoreError::AlreadyExists | StoreError::AlreadySigned => StatusCode::CONFLICT,
            StoreError::MalformedSignature(_) | StoreError::InvalidEncoding(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}
