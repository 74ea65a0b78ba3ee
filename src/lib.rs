//! # MindBridge
//!
//! Campus mental health support service. Serves the app's screens as JSON
//! view documents and hosts the simulated support chat.
//!
//! ## Features
//!
//! - **Support chat**: canned, delayed replies with one pending reply per session
//! - **Catalog search**: resource hub and peer forum filtering
//! - **Counseling booking**: calendar rules and the four-part booking form
//! - **Screens**: landing, wellness, VR relaxation and admin analytics views
//!
//! ## Modules
//!
//! - [`chat`]: chat simulator and session host
//! - [`catalog`]: resource and forum catalogs and the text filter
//! - [`booking`]: calendar and booking form state
//! - [`screens`]: view router and screen documents
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mindbridge::chat::{ChatService, ChatServiceConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let chat = ChatService::new(ChatServiceConfig::default());
//!
//!     let session = chat.create_session().await?;
//!     chat.send(&session.session_id, "Hello").await?;
//!
//!     // the reply lands after the configured delay
//!     tokio::time::sleep(std::time::Duration::from_millis(1600)).await;
//!     let session = chat.session(&session.session_id).await?;
//!     println!("{} messages", session.messages.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod booking;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod screens;

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use chat::{ChatError, ChatService, ChatServiceConfig, ChatSimulator, Message};

pub use catalog::{filter, Searchable};

pub use booking::{BookingError, BookingForm, SessionType};

pub use screens::{render, resolve, Screen, ScreenView, ViewQuery};

pub use config::{Config, ConfigError, LogFormat, LoggingConfig};
