//! # rlens-gateway - Remote Analysis Service Client
//!
//! Issues one POST per panel submission against the analysis service and
//! classifies what comes back.
//!
//! Depends on [`rlens_core`] for error handling.
//!
//! ## Public API
//!
//! - [`AnalysisGateway`] - The invocation seam used by the app layer
//! - [`HttpGateway`] - reqwest implementation with configurable timeouts
//! - [`GatewayError`] - `Network` / `Server` / `Unexpected` classification
//! - [`classify_response()`] - Status + body to payload or error
//!
//! With the `test-helpers` feature, `test_utils::ScriptedGateway` provides a
//! queue-driven double.

pub mod classify;
pub mod error;
pub mod gateway;
pub mod http;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

/// Decoded JSON reply, not yet normalized.
pub type RawPayload = serde_json::Value;

pub use classify::classify_response;
pub use error::{GatewayError, NETWORK_ERROR_MESSAGE, UNEXPECTED_ERROR_MESSAGE};
pub use gateway::{AnalysisGateway, LocalAnalysisGateway, RequestInputs};
pub use http::{HttpGateway, HttpGatewayConfig};
