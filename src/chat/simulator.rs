//! Chat Simulator
//!
//! Turn-taking state for one chat transcript. A send appends the user's
//! message and flips the simulator into the typing state; the canned reply is
//! appended later by `complete_reply`, which the session host calls once the
//! reply delay has elapsed. Sends are refused while typing, so at most one
//! reply is ever outstanding.

use rand::seq::SliceRandom;
use rand::Rng;

use super::error::{ChatError, ChatResult};
use super::message::{Message, MessageKind};

/// Opening message shown in every new transcript
pub const GREETING: &str = "Hello! I'm MindBridge AI, your mental health support companion. I'm here to provide a safe, confidential space for you to share your thoughts and feelings. How are you doing today?";

/// Replies the bot picks from, regardless of what the user wrote
pub const CANNED_REPLIES: [&str; 5] = [
    "I hear you, and what you're feeling is completely valid. It takes courage to reach out.",
    "Thank you for sharing that with me. You're not alone in this experience.",
    "It sounds like you're going through a challenging time. That's really tough.",
    "I appreciate you opening up. Your feelings matter and deserve to be heard.",
    "What you're experiencing is more common than you might think. Many students face similar challenges.",
];

/// Appended to every canned reply
pub const FOLLOW_UP: &str = "Can you tell me more about what's been on your mind lately?";

/// Ordered transcript plus the typing flag
#[derive(Debug, Clone)]
pub struct ChatSimulator {
    messages: Vec<Message>,
    typing: bool,
}

impl ChatSimulator {
    /// Start a transcript containing only the greeting
    pub fn new() -> Self {
        Self {
            messages: vec![Message::bot(GREETING, MessageKind::Supportive)],
            typing: false,
        }
    }

    /// Accept a user message.
    ///
    /// Whitespace-only input and input sent while a reply is pending are
    /// refused and leave the transcript untouched.
    pub fn submit(&mut self, text: &str) -> ChatResult<Message> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if self.typing {
            return Err(ChatError::ReplyPending);
        }

        let message = Message::user(text);
        self.messages.push(message.clone());
        self.typing = true;
        Ok(message)
    }

    /// Append the pending bot reply, if any.
    pub fn complete_reply<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Message> {
        if !self.typing {
            return None;
        }

        let reply = CANNED_REPLIES.choose(rng).copied().unwrap_or(CANNED_REPLIES[0]);
        let message = Message::bot(format!("{} {}", reply, FOLLOW_UP), MessageKind::Supportive);
        self.messages.push(message.clone());
        self.typing = false;
        Some(message)
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for ChatSimulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `text` is one of the canned replies followed by the follow-up question
pub fn is_canned_reply(text: &str) -> bool {
    CANNED_REPLIES
        .iter()
        .any(|reply| text == format!("{} {}", reply, FOLLOW_UP))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::Sender;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_starts_with_greeting() {
        let sim = ChatSimulator::new();
        assert_eq!(sim.len(), 1);
        assert_eq!(sim.messages()[0].sender, Sender::Bot);
        assert_eq!(sim.messages()[0].kind, Some(MessageKind::Supportive));
        assert!(!sim.is_typing());
    }

    #[test]
    fn test_empty_message_rejected() {
        let mut sim = ChatSimulator::new();
        assert_eq!(sim.submit(""), Err(ChatError::EmptyMessage));
        assert_eq!(sim.submit("   \n\t"), Err(ChatError::EmptyMessage));
        assert_eq!(sim.len(), 1);
        assert!(!sim.is_typing());
    }

    #[test]
    fn test_submit_then_reply() {
        let mut sim = ChatSimulator::new();
        let mut rng = StdRng::seed_from_u64(7);

        let sent = sim.submit("Hello").unwrap();
        assert_eq!(sent.text, "Hello");
        assert_eq!(sent.sender, Sender::User);
        assert_eq!(sim.len(), 2);
        assert!(sim.is_typing());

        let reply = sim.complete_reply(&mut rng).unwrap();
        assert_eq!(reply.sender, Sender::Bot);
        assert_eq!(reply.kind, Some(MessageKind::Supportive));
        assert!(is_canned_reply(&reply.text));
        assert!(reply.text.ends_with(FOLLOW_UP));
        assert_eq!(sim.len(), 3);
        assert!(!sim.is_typing());
    }

    #[test]
    fn test_send_while_typing_rejected() {
        let mut sim = ChatSimulator::new();
        sim.submit("first").unwrap();
        assert_eq!(sim.submit("second"), Err(ChatError::ReplyPending));
        assert_eq!(sim.len(), 2);
    }

    #[test]
    fn test_reply_without_pending_is_noop() {
        let mut sim = ChatSimulator::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sim.complete_reply(&mut rng).is_none());
        assert_eq!(sim.len(), 1);
    }

    #[test]
    fn test_text_kept_verbatim() {
        let mut sim = ChatSimulator::new();
        let sent = sim.submit("  spaced out  ").unwrap();
        assert_eq!(sent.text, "  spaced out  ");
    }

    #[test]
    fn test_every_reply_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            let mut sim = ChatSimulator::new();
            sim.submit("hi").unwrap();
            let reply = sim.complete_reply(&mut rng).unwrap();
            seen.insert(reply.text);
        }

        assert_eq!(seen.len(), CANNED_REPLIES.len());
    }
}
