//! Screens backed by the chat, catalog and booking modules
//!
//! These views only assemble what the domain modules already compute. The
//! chat view shows the shell and the opening greeting; live conversations go
//! through the chat session API.

use chrono::NaiveDate;
use serde::Serialize;

use crate::booking::{
    counselors, crisis_lines, month_view, upcoming_appointments, CalendarDay, Counselor,
    CrisisLine, SessionType, UpcomingAppointment, TIME_SLOTS,
};
use crate::catalog::{
    forum_categories, forum_posts, peer_ambassadors, resources, search_posts, search_resources,
    trending_topics, ForumCategory, ForumPost, PeerAmbassador, Resource, ResourceTab,
    ResourceType, TrendingTopic,
};
use crate::chat::{ChatSimulator, Message};

use super::router::ViewError;

/// Days of calendar shown on the counseling screen
pub const COUNSELING_CALENDAR_DAYS: u32 = 14;

// ============================================================================
// Chat
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct QuickAction {
    pub title: String,
    pub subtitle: String,
    pub route: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatView {
    pub title: String,
    pub description: String,
    pub safety_notice: String,
    pub placeholder: String,
    pub transcript: Vec<Message>,
    pub typing: bool,
    pub quick_actions: Vec<QuickAction>,
    /// Where a client opens a live session
    pub session_endpoint: String,
}

pub fn chat_view() -> ChatView {
    let simulator = ChatSimulator::new();

    ChatView {
        title: "MindBridge AI Chat".to_string(),
        description: "Your confidential mental health support companion. Available 24/7 to \
                      listen, provide coping strategies, and connect you with resources."
            .to_string(),
        safety_notice: "This conversation is confidential. If you're experiencing a mental \
                        health emergency, please contact your campus counseling center or call \
                        988 (Suicide & Crisis Lifeline)."
            .to_string(),
        placeholder: "Share what's on your mind...".to_string(),
        transcript: simulator.messages().to_vec(),
        typing: simulator.is_typing(),
        quick_actions: vec![
            QuickAction {
                title: "Crisis Support".to_string(),
                subtitle: "Call 988".to_string(),
                route: None,
            },
            QuickAction {
                title: "Coping Strategies".to_string(),
                subtitle: "Helpful techniques".to_string(),
                route: Some("/resources".to_string()),
            },
            QuickAction {
                title: "Get Professional Help".to_string(),
                subtitle: "Connect with counselors".to_string(),
                route: Some("/counseling".to_string()),
            },
        ],
        session_endpoint: "/api/v1/chat/sessions".to_string(),
    }
}

// ============================================================================
// Resources
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct TabOption {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourcesView {
    pub query: String,
    pub active_tab: String,
    pub tabs: Vec<TabOption>,
    pub featured: Vec<Resource>,
    pub resources: Vec<Resource>,
}

pub fn resources_view(query: &str, tab: Option<&str>) -> Result<ResourcesView, ViewError> {
    let tab: ResourceTab = tab
        .unwrap_or_default()
        .parse()
        .map_err(ViewError::InvalidParameter)?;
    let listing = search_resources(&resources(), query, tab);

    let mut tabs = vec![TabOption {
        id: "all".to_string(),
        label: "All".to_string(),
    }];
    tabs.extend(ResourceType::all().iter().map(|kind| TabOption {
        id: kind.to_string(),
        label: kind.label().to_string(),
    }));

    Ok(ResourcesView {
        query: query.to_string(),
        active_tab: tab.to_string(),
        tabs,
        featured: listing.featured,
        resources: listing.resources,
    })
}

// ============================================================================
// Forum
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PostCard {
    #[serde(flatten)]
    pub post: ForumPost,
    pub author_initials: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForumView {
    pub query: String,
    pub active_category: String,
    pub categories: Vec<ForumCategory>,
    pub posts: Vec<PostCard>,
    pub trending: Vec<TrendingTopic>,
    pub ambassadors: Vec<PeerAmbassador>,
    pub safe_space_notice: String,
    pub guidelines: Vec<String>,
}

pub fn forum_view(query: &str, category: Option<&str>) -> Result<ForumView, ViewError> {
    let categories = forum_categories();
    let slug = category.map(str::trim).filter(|s| !s.is_empty());
    let posts = search_posts(&forum_posts(), &categories, query, slug)
        .ok_or_else(|| ViewError::UnknownCategory(slug.unwrap_or_default().to_string()))?;

    Ok(ForumView {
        query: query.to_string(),
        active_category: slug.unwrap_or("all").to_string(),
        categories,
        posts: posts
            .into_iter()
            .map(|post| PostCard {
                author_initials: post.author_initials(),
                post,
            })
            .collect(),
        trending: trending_topics(),
        ambassadors: peer_ambassadors(),
        safe_space_notice: "This is an anonymous, moderated forum. Be respectful, supportive, \
                            and remember that peer ambassadors are here to help. For crisis \
                            support, please contact campus counseling services immediately."
            .to_string(),
        guidelines: [
            "Be kind and supportive",
            "Respect anonymity",
            "Report inappropriate content",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    })
}

// ============================================================================
// Counseling
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SessionTypeOption {
    pub id: SessionType,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CounselingView {
    pub today: NaiveDate,
    pub calendar: Vec<CalendarDay>,
    pub time_slots: Vec<String>,
    pub session_types: Vec<SessionTypeOption>,
    pub counselors: Vec<Counselor>,
    pub upcoming: Vec<UpcomingAppointment>,
    pub crisis_lines: Vec<CrisisLine>,
}

pub fn counseling_view(today: NaiveDate) -> CounselingView {
    CounselingView {
        today,
        calendar: month_view(today, COUNSELING_CALENDAR_DAYS, today),
        time_slots: TIME_SLOTS.iter().map(|s| s.to_string()).collect(),
        session_types: SessionType::all()
            .iter()
            .map(|t| SessionTypeOption {
                id: *t,
                label: t.label().to_string(),
                description: t.description().to_string(),
            })
            .collect(),
        counselors: counselors(),
        upcoming: upcoming_appointments(),
        crisis_lines: crisis_lines(),
    }
}

// ============================================================================
// Not found
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct NotFoundView {
    pub path: String,
    pub message: String,
    pub home: String,
}

pub fn not_found_view(path: &str) -> NotFoundView {
    NotFoundView {
        path: path.to_string(),
        message: "Oops! Page not found".to_string(),
        home: "/".to_string(),
    }
}
