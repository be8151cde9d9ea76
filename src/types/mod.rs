//! Core types for Mood Mirror

mod mood;
mod analysis;
mod a2a;

pub use mood::MoodLabel;
pub use analysis::{MoodResult, MoodSignals};
pub use a2a::{
    A2AMessage, MessagePart, MessageSendParams, ExecuteParams, JsonRpcRequest, JsonRpcResponse,
    JsonRpcError, TaskState, TaskStatus, Artifact, TaskResult, utc_timestamp, JSONRPC_VERSION,
};
