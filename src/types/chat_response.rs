use serde::{Deserialize, Serialize};

/// The response body returned by the chat completions endpoint.
///
/// Only the `choices` field matters to shai; identifiers, timestamps, and
/// usage accounting are ignored. A body without a `choices` field does not
/// deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    /// The completion choices. Normally exactly one.
    pub choices: Vec<Choice>,
}

/// A single completion choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Choice {
    /// The generated message.
    pub message: ChoiceMessage,
}

/// The message inside a completion choice.
///
/// The role stays an untyped string: servers vary in what they put here,
/// and the reply is re-tagged as an assistant message when it lands in the
/// transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChoiceMessage {
    /// The role of the message, usually `assistant`.
    pub role: String,

    /// The generated content.
    pub content: String,
}

impl ChatResponse {
    /// Returns the content of the first choice, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|choice| choice.message.content.as_str())
    }
}
