//! The in-memory conversation transcript.
//!
//! A transcript is an append-only ordered sequence of messages, seeded with
//! exactly one system message. It is the conversational context sent to the
//! API on every turn. It never shrinks during a turn, is never persisted,
//! and is owned exclusively by the running session.
//!
//! There is deliberately no size bound: request payloads grow every turn for
//! the lifetime of the session.

use crate::types::Message;

/// Append-only message history for one chat session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    system_prompt: String,
    messages: Vec<Message>,
}

impl Transcript {
    /// Creates a transcript seeded with a system message carrying the given
    /// prompt.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        let system_prompt = system_prompt.into();
        let messages = vec![Message::system(system_prompt.clone())];
        Self {
            system_prompt,
            messages,
        }
    }

    /// Appends a message. This is the only way the transcript grows.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Returns the full ordered sequence, system message first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the last message, if any beyond the seed exists.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Returns the number of messages, including the seed system message.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Discards the conversation and re-seeds with the system message.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.messages.push(Message::system(self.system_prompt.clone()));
    }

    /// Returns the system prompt the transcript was seeded with.
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn new_transcript_holds_one_system_message() {
        let transcript = Transcript::new("You are helpful.");
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].role, Role::System);
        assert_eq!(transcript.messages()[0].content, "You are helpful.");
    }

    #[test]
    fn length_is_one_plus_two_per_turn() {
        let mut transcript = Transcript::new("ctx");
        for n in 1..=5 {
            transcript.push(Message::user(format!("question {n}")));
            transcript.push(Message::assistant(format!("answer {n}")));
            assert_eq!(transcript.len(), 1 + 2 * n);
        }
    }

    #[test]
    fn messages_stay_in_chronological_order() {
        let mut transcript = Transcript::new("ctx");
        transcript.push(Message::user("first"));
        transcript.push(Message::assistant("second"));
        transcript.push(Message::user("third"));

        let roles: Vec<Role> = transcript.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![Role::System, Role::User, Role::Assistant, Role::User]
        );
        assert_eq!(transcript.last().unwrap().content, "third");
    }

    #[test]
    fn reset_reseeds_system_message() {
        let mut transcript = Transcript::new("ctx");
        transcript.push(Message::user("hello"));
        transcript.push(Message::assistant("hi"));
        transcript.reset();

        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0], Message::system("ctx"));
    }
}
