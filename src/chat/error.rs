//! Chat error types

use thiserror::Error;

/// Errors returned by the chat simulator and session host
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// Input was empty or only whitespace
    #[error("Message text cannot be empty")]
    EmptyMessage,

    /// A reply is still being typed; sends are disabled until it lands
    #[error("A reply is still pending")]
    ReplyPending,

    /// No session with this id
    #[error("Chat session not found: {0}")]
    SessionNotFound(String),

    /// Session limit reached
    #[error("Too many active chat sessions")]
    TooManySessions,
}

/// Result type alias for chat operations
pub type ChatResult<T> = Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ChatError::EmptyMessage.to_string(),
            "Message text cannot be empty"
        );
        assert_eq!(
            ChatError::SessionNotFound("abc".to_string()).to_string(),
            "Chat session not found: abc"
        );
    }
}
