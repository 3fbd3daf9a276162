//! # Cosign Relayer
//!
//! A relay for cooperatively assembled multi-agent transactions. The first
//! signer parks a serialized transaction here, the second signer fetches it,
//! signs it externally, and posts the resulting authenticator back; the
//! first signer then fetches the completed record and submits it to the
//! chain. The two parties never need to be online at the same time.
//!
//! ## Quick Start
//! ```bash
//! cargo run --bin cosign-relayer
//! ```
//!
//! ## Endpoints
//! - `GET /health` - Health check with metrics
//! - `POST /transaction` - Store a serialized transaction
//! - `POST /signature` - Attach the secondary signer's authenticator
//! - `GET /transaction/{id}` - Fetch the transaction and any signature

pub mod config;
mod error;
mod handlers;
mod middleware;
mod response;
mod router;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::StoreError;
pub use router::create as create_router;
pub use state::AppState;
