//! Transcript - append-only conversation state

use tracing::debug;

use crate::llm::Message;

/// Ordered, append-only log of conversation turns
///
/// The transcript is the single source of truth for what gets replayed to
/// the model each round. Turns are never reordered, rewritten, or
/// deduplicated; one agent run owns its transcript exclusively.
#[derive(Debug, Clone)]
pub struct Transcript {
    turns: Vec<Message>,
}

impl Transcript {
    /// Create a transcript seeded with the initial user prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        debug!("Transcript::new: called");
        Self {
            turns: vec![Message::user(prompt)],
        }
    }

    /// Append a turn
    pub fn push(&mut self, message: Message) {
        self.turns.push(message);
    }

    /// All turns, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.turns
    }

    /// Number of turns recorded so far
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True when no turns have been recorded (never the case after `new`)
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{MessageContent, Role};

    #[test]
    fn test_transcript_seeded_with_prompt() {
        let transcript = Transcript::new("fix the bug");

        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].role, Role::User);
        assert_eq!(transcript.messages()[0].content.as_text(), Some("fix the bug"));
    }

    #[test]
    fn test_transcript_preserves_append_order() {
        let mut transcript = Transcript::new("prompt");
        transcript.push(Message::assistant("first"));
        transcript.push(Message::user("second"));
        transcript.push(Message::assistant("third"));

        let texts: Vec<Option<&str>> = transcript.messages().iter().map(|m| m.content.as_text()).collect();

        assert_eq!(
            texts,
            vec![Some("prompt"), Some("first"), Some("second"), Some("third")]
        );
    }

    #[test]
    fn test_transcript_never_empty_after_seed() {
        let transcript = Transcript::new("");
        assert!(!transcript.is_empty());
        assert!(matches!(transcript.messages()[0].content, MessageContent::Text(_)));
    }
}
