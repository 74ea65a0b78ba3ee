//! Chat message types
//!
//! - `Message`: one entry in a chat transcript
//! - `Sender`: who authored it
//! - `MessageKind`: optional presentation hint for bot messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Presentation hint attached to bot messages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Normal,
    Warning,
    Supportive,
}

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Fresh UUID v4 per message
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MessageKind>,
}

impl Message {
    /// Create a user-authored message stamped with the current time
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            sender: Sender::User,
            timestamp: Utc::now(),
            kind: None,
        }
    }

    /// Create a bot-authored message stamped with the current time
    pub fn bot(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            sender: Sender::Bot,
            timestamp: Utc::now(),
            kind: Some(kind),
        }
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_has_no_kind() {
        let msg = Message::user("Hello");
        assert_eq!(msg.sender, Sender::User);
        assert!(msg.kind.is_none());
        assert!(msg.is_from_user());
    }

    #[test]
    fn test_ids_are_fresh() {
        let a = Message::user("a");
        let b = Message::user("a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serialized_shape() {
        let msg = Message::bot("hi", MessageKind::Supportive);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["sender"], "bot");
        assert_eq!(json["type"], "supportive");

        let user = serde_json::to_value(Message::user("x")).unwrap();
        assert!(user.get("type").is_none());
    }
}
