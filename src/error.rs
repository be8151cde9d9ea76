//! Transport errors, mapped onto JSON-RPC error objects.
//!
//! The classification core never fails; everything here belongs to the
//! envelope handling in `core::api`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::types::{JsonRpcError, JsonRpcResponse};

#[derive(Debug, Error)]
pub enum MoodMirrorError {
    /// Body was not valid JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Envelope failed jsonrpc/id validation
    #[error("Invalid Request: jsonrpc must be '2.0' and id is required")]
    InvalidRequest,

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    /// Params did not match the method's shape
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MoodMirrorError {
    /// JSON-RPC 2.0 error code
    pub fn code(&self) -> i32 {
        match self {
            Self::Parse(_) => -32700,
            Self::InvalidRequest => -32600,
            Self::MethodNotFound(_) => -32601,
            Self::InvalidParams(_) => -32602,
            Self::Internal(_) => -32603,
        }
    }

    /// HTTP status for the error envelope
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn to_rpc_error(&self) -> JsonRpcError {
        let (message, data) = match self {
            Self::Parse(details) => ("Parse error".to_string(), Some(json!({ "details": details }))),
            Self::InvalidParams(details) => {
                ("Invalid params".to_string(), Some(json!({ "details": details })))
            }
            Self::Internal(details) => {
                ("Internal error".to_string(), Some(json!({ "details": details })))
            }
            other => (other.to_string(), None),
        };
        JsonRpcError {
            code: self.code(),
            message,
            data,
        }
    }

    /// Attach the request id the error should be reported under
    pub fn with_id(self, id: Value) -> RpcFailure {
        RpcFailure { id, error: self }
    }
}

impl From<serde_json::Error> for MoodMirrorError {
    fn from(err: serde_json::Error) -> Self {
        MoodMirrorError::InvalidParams(err.to_string())
    }
}

/// An error paired with the id of the request that caused it
#[derive(Debug)]
pub struct RpcFailure {
    pub id: Value,
    pub error: MoodMirrorError,
}

impl IntoResponse for RpcFailure {
    fn into_response(self) -> Response {
        let status = self.error.status();
        let body = JsonRpcResponse::failure(self.id, self.error.to_rpc_error());
        (status, Json(body)).into_response()
    }
}
