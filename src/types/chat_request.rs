use serde::{Deserialize, Serialize};

use crate::types::Message;

/// The request body sent to the chat completions endpoint.
///
/// Every turn carries the entire transcript; the server holds no
/// conversation state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    /// The model to generate a completion with.
    pub model: String,

    /// The full ordered conversation, system message first.
    pub messages: Vec<Message>,
}

impl ChatRequest {
    /// Create a new `ChatRequest` for the given model and messages.
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
        }
    }
}
