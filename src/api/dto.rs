//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::booking::{BookingField, BookingSummary, CalendarDay};
use crate::catalog::{ForumPost, Resource};
use crate::chat::Message;
use crate::screens::admin::AnalyticsPanel;
use crate::screens::wellness::{MoodEntry, MoodTone};
use crate::screens::{ScreenView, ViewRoute};

// ============================================
// CHAT DTOs
// ============================================

/// Send message request
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    /// Message text; empty or whitespace-only text is rejected
    pub text: String,
}

/// Send message response
#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    /// The accepted user message
    pub message: Message,
    /// Always true: the reply is now pending
    pub typing: bool,
    /// Milliseconds until the reply lands
    pub reply_in_ms: u64,
}

// ============================================
// CATALOG DTOs
// ============================================

/// Resource search parameters
#[derive(Debug, Default, Deserialize)]
pub struct ResourceQuery {
    /// Free-text search
    #[serde(default)]
    pub q: Option<String>,
    /// Type tab: all, articles, videos, audio, guides
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Resource search response
#[derive(Debug, Serialize)]
pub struct ResourceListResponse {
    pub query: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub total: usize,
    pub featured: Vec<Resource>,
    pub resources: Vec<Resource>,
}

/// Forum search parameters
#[derive(Debug, Default, Deserialize)]
pub struct ForumQuery {
    #[serde(default)]
    pub q: Option<String>,
    /// Category slug, or `all`
    #[serde(default)]
    pub category: Option<String>,
}

/// Forum search response
#[derive(Debug, Serialize)]
pub struct ForumListResponse {
    pub query: String,
    pub category: String,
    pub total: usize,
    pub posts: Vec<ForumPost>,
}

// ============================================
// COUNSELING DTOs
// ============================================

/// Calendar parameters
#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    /// First date (YYYY-MM-DD), defaults to today
    #[serde(default)]
    pub from: Option<String>,
    /// Number of days, defaults to 14
    #[serde(default)]
    pub days: Option<u32>,
}

/// Calendar response
#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub today: NaiveDate,
    pub from: NaiveDate,
    pub days: Vec<CalendarDay>,
}

/// Booking selections; any subset may be set
#[derive(Debug, Default, Deserialize)]
pub struct BookingRequest {
    /// YYYY-MM-DD
    #[serde(default)]
    pub date: Option<String>,
    /// One of the fixed time slots, e.g. "2:00 PM"
    #[serde(default)]
    pub time: Option<String>,
    /// in-person, video or phone
    #[serde(default)]
    pub session_type: Option<String>,
    #[serde(default)]
    pub counselor_id: Option<String>,
    /// Optional additional information for the counselor
    #[serde(default)]
    pub notes: Option<String>,
}

/// Booking check response
#[derive(Debug, Serialize)]
pub struct BookingCheckResponse {
    pub can_submit: bool,
    pub missing: Vec<BookingField>,
}

/// Booking submit response
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    /// Always "confirmed"; nothing is stored
    pub status: String,
    pub booking: BookingSummary,
}

// ============================================
// WELLNESS DTOs
// ============================================

/// Mood check-in request
#[derive(Debug, Deserialize)]
pub struct CheckInRequest {
    /// Mood on the 1-5 scale; wider so out-of-range numbers get the same error
    pub value: i64,
}

/// Mood check-in response
#[derive(Debug, Serialize)]
pub struct CheckInResponse {
    #[serde(flatten)]
    pub entry: MoodEntry,
    pub tone: MoodTone,
}

// ============================================
// ADMIN DTOs
// ============================================

#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsQuery {
    #[serde(default)]
    pub tab: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub panel: AnalyticsPanel,
}

// ============================================
// SCREEN DTOs
// ============================================

/// A rendered screen as served to clients
#[derive(Debug, Serialize)]
pub struct ViewDocument {
    /// Requested path, without query string
    pub path: String,
    /// Page title
    pub title: String,
    #[serde(flatten)]
    pub view: ScreenView,
}

#[derive(Debug, Serialize)]
pub struct RouteListResponse {
    pub total: usize,
    pub routes: Vec<ViewRoute>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Live chat sessions
    pub chat_sessions: usize,
    /// Application version
    pub version: String,
}
