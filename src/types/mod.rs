//! Wire types for the chat completions API.
//!
//! These types mirror the subset of the OpenAI-compatible chat completion
//! protocol that shai speaks: a request carrying the model name and the full
//! message history, and a response carrying a list of choices.

mod chat_request;
mod chat_response;
mod message;

pub use chat_request::ChatRequest;
pub use chat_response::{ChatResponse, Choice, ChoiceMessage};
pub use message::{Message, Role};
