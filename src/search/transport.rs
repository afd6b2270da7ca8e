//! The opaque transport boundary to the search backend.

use serde_json::Value;

use crate::error::Result;
use crate::request::assembler::SearchRequest;

/// A raw backend response payload.
///
/// The payload is opaque to this layer beyond key/count extraction;
/// highlighting and field rendering belong to downstream collaborators.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    payload: Value,
}

impl RawResponse {
    /// Wrap a backend response payload.
    pub fn new(payload: Value) -> Self {
        RawResponse { payload }
    }

    /// The opaque payload.
    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

impl From<Value> for RawResponse {
    fn from(payload: Value) -> Self {
        RawResponse::new(payload)
    }
}

/// Request/response executor for the search backend.
///
/// Implementations own connections, timeouts, and retries. Any failure is
/// reported as [`crate::error::MinaretError::Transport`]; the executor
/// recovers it into the outcome's error flag.
pub trait SearchTransport: Send + Sync {
    /// Send one assembled request and return the raw response.
    fn send(&self, request: &SearchRequest) -> Result<RawResponse>;
}
