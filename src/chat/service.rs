//! Chat Session Host
//!
//! Keeps one `ChatSimulator` per session and schedules the delayed bot reply
//! on the tokio runtime. A session plays the role of a browser tab: it lives
//! until it is ended or the process exits.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::error::{ChatError, ChatResult};
use super::message::Message;
use super::simulator::ChatSimulator;

/// Unique identifier for a chat session
pub type SessionId = String;

/// Default delay before the bot reply lands
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1500);

/// Configuration for the chat service
#[derive(Debug, Clone)]
pub struct ChatServiceConfig {
    /// How long the bot "types" before replying
    pub reply_delay: Duration,
    /// Maximum number of concurrent sessions
    pub max_sessions: usize,
}

impl Default for ChatServiceConfig {
    fn default() -> Self {
        Self {
            reply_delay: DEFAULT_REPLY_DELAY,
            max_sessions: 1000,
        }
    }
}

/// Point-in-time copy of a session's transcript
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub messages: Vec<Message>,
    pub typing: bool,
}

/// Hosts all live chat sessions
pub struct ChatService {
    /// Live sessions: SessionId → simulator
    sessions: Arc<RwLock<HashMap<SessionId, ChatSimulator>>>,
    config: ChatServiceConfig,
}

impl ChatService {
    pub fn new(config: ChatServiceConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    pub fn config(&self) -> &ChatServiceConfig {
        &self.config
    }

    /// Open a new session seeded with the greeting
    pub async fn create_session(&self) -> ChatResult<SessionSnapshot> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.config.max_sessions {
            return Err(ChatError::TooManySessions);
        }

        let id = Uuid::new_v4().to_string();
        let simulator = ChatSimulator::new();
        let snapshot = snapshot(&id, &simulator);
        sessions.insert(id.clone(), simulator);

        tracing::info!(session_id = %id, "Chat session created");
        Ok(snapshot)
    }

    /// Current transcript of a session
    pub async fn session(&self, id: &str) -> ChatResult<SessionSnapshot> {
        let sessions = self.sessions.read().await;
        sessions
            .get(id)
            .map(|sim| snapshot(id, sim))
            .ok_or_else(|| ChatError::SessionNotFound(id.to_string()))
    }

    /// Drop a session and its transcript
    pub async fn end_session(&self, id: &str) -> ChatResult<()> {
        match self.sessions.write().await.remove(id) {
            Some(_) => {
                tracing::info!(session_id = %id, "Chat session ended");
                Ok(())
            }
            None => Err(ChatError::SessionNotFound(id.to_string())),
        }
    }

    /// Send a user message and schedule the bot reply.
    ///
    /// Returns the accepted user message. The reply is appended by a
    /// background task once `reply_delay` has elapsed.
    pub async fn send(&self, id: &str, text: &str) -> ChatResult<Message> {
        let message = {
            let mut sessions = self.sessions.write().await;
            let simulator = sessions
                .get_mut(id)
                .ok_or_else(|| ChatError::SessionNotFound(id.to_string()))?;
            simulator.submit(text)?
        };

        tracing::debug!(session_id = %id, message_id = %message.id, "User message accepted");
        self.schedule_reply(id.to_string());

        Ok(message)
    }

    /// Number of live sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    fn schedule_reply(&self, id: SessionId) {
        let sessions = Arc::clone(&self.sessions);
        let delay = self.config.reply_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut sessions = sessions.write().await;
            let Some(simulator) = sessions.get_mut(&id) else {
                tracing::debug!(session_id = %id, "Session ended before reply, dropping it");
                return;
            };

            if let Some(reply) = simulator.complete_reply(&mut rand::thread_rng()) {
                tracing::debug!(session_id = %id, message_id = %reply.id, "Bot reply delivered");
            }
        });
    }
}

impl Default for ChatService {
    fn default() -> Self {
        Self::new(ChatServiceConfig::default())
    }
}

fn snapshot(id: &str, simulator: &ChatSimulator) -> SessionSnapshot {
    SessionSnapshot {
        session_id: id.to_string(),
        messages: simulator.messages().to_vec(),
        typing: simulator.is_typing(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::Sender;
    use crate::chat::simulator::is_canned_reply;

    #[tokio::test(start_paused = true)]
    async fn test_hello_gets_one_reply_after_delay() {
        let service = ChatService::default();
        let session = service.create_session().await.unwrap();
        let id = session.session_id;

        let sent = service.send(&id, "Hello").await.unwrap();
        assert_eq!(sent.text, "Hello");

        let before = service.session(&id).await.unwrap();
        assert_eq!(before.messages.len(), 2);
        assert!(before.typing);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        let midway = service.session(&id).await.unwrap();
        assert_eq!(midway.messages.len(), 2);
        assert!(midway.typing);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        let after = service.session(&id).await.unwrap();
        assert_eq!(after.messages.len(), 3);
        assert!(!after.typing);

        let reply = &after.messages[2];
        assert_eq!(reply.sender, Sender::Bot);
        assert!(is_canned_reply(&reply.text));
    }

    #[tokio::test(start_paused = true)]
    async fn test_whitespace_leaves_transcript_unchanged() {
        let service = ChatService::default();
        let id = service.create_session().await.unwrap().session_id;

        assert_eq!(service.send(&id, "  ").await, Err(ChatError::EmptyMessage));

        tokio::time::sleep(Duration::from_secs(5)).await;
        let snap = service.session(&id).await.unwrap();
        assert_eq!(snap.messages.len(), 1);
        assert!(!snap.typing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_while_typing_rejected() {
        let service = ChatService::default();
        let id = service.create_session().await.unwrap().session_id;

        service.send(&id, "one").await.unwrap();
        assert_eq!(service.send(&id, "two").await, Err(ChatError::ReplyPending));

        tokio::time::sleep(Duration::from_secs(2)).await;
        service.send(&id, "two").await.unwrap();

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(service.session(&id).await.unwrap().messages.len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_dropped_after_session_ends() {
        let service = ChatService::default();
        let id = service.create_session().await.unwrap().session_id;

        service.send(&id, "bye").await.unwrap();
        service.end_session(&id).await.unwrap();

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(service.session_count().await, 0);
        assert!(matches!(
            service.session(&id).await,
            Err(ChatError::SessionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let service = ChatService::default();
        assert!(matches!(
            service.send("nope", "hi").await,
            Err(ChatError::SessionNotFound(_))
        ));
        assert!(matches!(
            service.end_session("nope").await,
            Err(ChatError::SessionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_session_limit() {
        let service = ChatService::new(ChatServiceConfig {
            max_sessions: 2,
            ..Default::default()
        });

        service.create_session().await.unwrap();
        service.create_session().await.unwrap();
        assert!(matches!(
            service.create_session().await,
            Err(ChatError::TooManySessions)
        ));
        assert_eq!(service.session_count().await, 2);
    }
}
