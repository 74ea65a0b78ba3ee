//! API Routes
//!
//! Route handlers organized by functionality.

pub mod admin;
pub mod chat;
pub mod counseling;
pub mod forum;
pub mod health;
pub mod resources;
pub mod screens;
pub mod vr;
pub mod wellness;
