//! MindBridge Chat
//!
//! Simulated support chat. Replies are canned and arrive after a fixed delay;
//! nothing here talks to a real model.
//!
//! - **message**: `Message`, `Sender`, `MessageKind`
//! - **simulator**: per-transcript turn-taking state
//! - **service**: session host that schedules delayed replies
//! - **error**: `ChatError`
//!
//! ```text
//! send(text) → submit → [typing] → sleep(reply_delay) → complete_reply → [idle]
//! ```

pub mod error;
pub mod message;
pub mod service;
pub mod simulator;

pub use error::{ChatError, ChatResult};
pub use message::{Message, MessageKind, Sender};
pub use service::{ChatService, ChatServiceConfig, SessionId, SessionSnapshot, DEFAULT_REPLY_DELAY};
pub use simulator::{is_canned_reply, ChatSimulator, CANNED_REPLIES, FOLLOW_UP, GREETING};
