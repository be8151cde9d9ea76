//! HTTP API for Mood Mirror
//!
//! Endpoints:
//! - POST /a2a/moodmirror - JSON-RPC 2.0 (`message/send`, `execute`)
//! - GET / - Service banner
//! - GET /health - Health check
//! - GET /info - Agent manifest

use axum::{
    body::Bytes,
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::MoodMirrorAgent;
use crate::error::{MoodMirrorError, RpcFailure};
use crate::types::{
    A2AMessage, ExecuteParams, JsonRpcRequest, JsonRpcResponse, MessageSendParams,
    JSONRPC_VERSION,
};

pub const A2A_PATH: &str = "/a2a/moodmirror";

/// App state
pub struct AppState {
    pub agent: MoodMirrorAgent,
}

/// Banner response
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub version: String,
}

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub agent: String,
}

/// Manifest response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub capabilities: Vec<String>,
    pub endpoints: Value,
}

/// Create the API router around an agent
pub fn create_router(agent: MoodMirrorAgent) -> Router {
    let state = Arc::new(AppState { agent });

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/info", get(info))
        .route(A2A_PATH, post(a2a_endpoint))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Mood Mirror A2A Agent".to_string(),
        status: "running".to_string(),
        version: crate::VERSION.to_string(),
    })
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        agent: "mood_mirror".to_string(),
    })
}

async fn info(State(state): State<Arc<AppState>>) -> Json<InfoResponse> {
    Json(InfoResponse {
        name: state.agent.name.to_string(),
        version: state.agent.version.to_string(),
        capabilities: vec![
            "mood_analysis".to_string(),
            "empathetic_responses".to_string(),
            "emotional_mirroring".to_string(),
        ],
        endpoints: json!({
            "a2a": A2A_PATH,
            "health": "/health",
            "info": "/info",
        }),
    })
}

/// JSON-RPC entry point
async fn a2a_endpoint(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<JsonRpcResponse>, RpcFailure> {
    let body: Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(error = %e, "rejected non-JSON body");
        MoodMirrorError::Parse(e.to_string()).with_id(json!("unknown"))
    })?;

    let request = validate_envelope(body)?;
    let id = request.id.clone();

    let method = method_name(&request.method);

    let (message, context_id) = match request.method.as_str() {
        Some("message/send") => {
            let params: MessageSendParams = serde_json::from_value(request.params)
                .map_err(|e| MoodMirrorError::from(e).with_id(id.clone()))?;
            (params.message, None)
        }
        Some("execute") => {
            let params: ExecuteParams = serde_json::from_value(request.params)
                .map_err(|e| MoodMirrorError::from(e).with_id(id.clone()))?;
            let message = params.messages.into_iter().last().unwrap_or_else(A2AMessage::default);
            (message, params.context_id)
        }
        _ => {
            tracing::warn!(method = %method, "unknown JSON-RPC method");
            return Err(MoodMirrorError::MethodNotFound(method).with_id(id));
        }
    };

    tracing::info!(id = %id, method = %method, "processing mood request");

    let result = state.agent.process_message(&id, message, context_id);
    Ok(Json(JsonRpcResponse::success(id, result)))
}

/// `jsonrpc` must be "2.0" and `id` must be present
fn validate_envelope(body: Value) -> Result<JsonRpcRequest, RpcFailure> {
    let fallback_id = body.get("id").cloned().unwrap_or_else(|| json!("unknown"));

    let valid = body.get("jsonrpc").and_then(Value::as_str) == Some(JSONRPC_VERSION)
        && body.get("id").is_some();
    if !valid {
        tracing::warn!(id = %fallback_id, "invalid JSON-RPC envelope");
        return Err(MoodMirrorError::InvalidRequest.with_id(fallback_id));
    }

    // Every field is optional or already checked, so a failure here is a bug
    serde_json::from_value(body)
        .map_err(|e| MoodMirrorError::Internal(e.to_string()).with_id(fallback_id))
}

/// Method as it appears in error messages: strings bare, anything else as JSON
fn method_name(method: &Value) -> String {
    match method {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Run the API server
pub async fn run_server(addr: &str, agent: MoodMirrorAgent) -> Result<(), Box<dyn std::error::Error>> {
    let router = create_router(agent);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Mood Mirror A2A agent listening on {}", addr);
    tracing::info!("  POST {}  - JSON-RPC (message/send, execute)", A2A_PATH);
    tracing::info!("  GET  /                - Banner");
    tracing::info!("  GET  /health          - Health check");
    tracing::info!("  GET  /info            - Agent manifest");
    axum::serve(listener, router).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_requires_version() {
        let err = validate_envelope(json!({"jsonrpc": "1.0", "id": 5})).unwrap_err();
        assert_eq!(err.id, json!(5));
        assert_eq!(err.error.code(), -32600);
    }

    #[test]
    fn test_envelope_requires_id() {
        let err = validate_envelope(json!({"jsonrpc": "2.0", "method": "execute"})).unwrap_err();
        assert_eq!(err.id, json!("unknown"));
    }

    #[test]
    fn test_envelope_accepts_minimal() {
        let req = validate_envelope(json!({"jsonrpc": "2.0", "id": "a", "method": "execute"})).unwrap();
        assert_eq!(req.method, "execute");
        assert!(req.params.is_null());
    }

    #[test]
    fn test_envelope_keeps_non_string_method() {
        let req = validate_envelope(json!({"jsonrpc": "2.0", "id": "a", "method": 5})).unwrap();
        assert_eq!(req.method, json!(5));
        assert_eq!(method_name(&req.method), "5");
        assert_eq!(method_name(&json!("tasks/get")), "tasks/get");
        assert!(req.params.is_null());
    }
}
