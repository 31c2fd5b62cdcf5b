//! Core chat session management.
//!
//! The session is the explicit object that replaces process-scoped globals:
//! it owns the client and the transcript and is passed into the loop by the
//! binary. All transcript mutations happen through the session, strictly
//! sequentially.

use crate::client::ChatClient;
use crate::error::Result;
use crate::transcript::Transcript;

/// A chat session owning the conversation state and the API client.
pub struct ChatSession {
    client: ChatClient,
    transcript: Transcript,
}

/// Aggregated stats for a chat session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStats {
    /// The model used for the session.
    pub model: String,

    /// The endpoint URL requests are sent to.
    pub api_url: String,

    /// The number of messages in the transcript, seed included.
    pub message_count: usize,

    /// The system prompt seeding the transcript.
    pub system_prompt: String,
}

impl ChatSession {
    /// Creates a new chat session with the given client and system prompt.
    pub fn new(client: ChatClient, system_prompt: impl Into<String>) -> Self {
        Self {
            client,
            transcript: Transcript::new(system_prompt),
        }
    }

    /// Sends one user message and returns the assistant's reply.
    ///
    /// On failure the user message remains in the transcript and no
    /// assistant message is appended; the error is recoverable and the
    /// caller keeps looping.
    pub async fn send(&mut self, user_input: &str) -> Result<String> {
        self.client.send(&mut self.transcript, user_input).await
    }

    /// Clears the conversation history back to the seed system message.
    pub fn clear(&mut self) {
        self.transcript.reset();
    }

    /// Returns the number of messages in the transcript, seed included.
    pub fn message_count(&self) -> usize {
        self.transcript.len()
    }

    /// Returns the model requests are made with.
    pub fn model(&self) -> &str {
        self.client.model()
    }

    /// Returns a read-only view of the transcript.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Returns the current session statistics snapshot.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            model: self.client.model().to_string(),
            api_url: self.client.api_url().to_string(),
            message_count: self.message_count(),
            system_prompt: self.transcript.system_prompt().to_string(),
        }
    }
}
