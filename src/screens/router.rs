//! View Router
//!
//! Maps request paths onto screens and renders each screen as a view
//! document. Screens share no state with each other.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::booking;

use super::admin::{self, AdminView, AnalyticsTab};
use super::landing::{self, LandingView};
use super::pages::{
    chat_view, counseling_view, forum_view, not_found_view, resources_view, ChatView,
    CounselingView, ForumView, NotFoundView, ResourcesView,
};
use super::vr::{self, VrView};
use super::wellness::{self, WellnessView};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("{0}")]
    InvalidParameter(String),

    #[error("Unknown forum category: {0}")]
    UnknownCategory(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Landing,
    Chat,
    Resources,
    Wellness,
    Counseling,
    Forum,
    VrRelaxation,
    Admin,
    NotFound,
}

impl Screen {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Screen::NotFound)
    }
}

/// One row of the route table
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ViewRoute {
    pub path: &'static str,
    pub screen: Screen,
    pub title: &'static str,
}

const ROUTES: [ViewRoute; 8] = [
    ViewRoute { path: "/", screen: Screen::Landing, title: "MindBridge" },
    ViewRoute { path: "/chat", screen: Screen::Chat, title: "AI Chat" },
    ViewRoute { path: "/resources", screen: Screen::Resources, title: "Resource Hub" },
    ViewRoute { path: "/wellness", screen: Screen::Wellness, title: "Wellness Dashboard" },
    ViewRoute { path: "/counseling", screen: Screen::Counseling, title: "Counseling Booking" },
    ViewRoute { path: "/forum", screen: Screen::Forum, title: "Peer Support Forum" },
    ViewRoute { path: "/vr-relaxation", screen: Screen::VrRelaxation, title: "VR Relaxation" },
    ViewRoute { path: "/admin", screen: Screen::Admin, title: "Admin Dashboard" },
];

/// The route table, in navigation order
pub fn routes() -> &'static [ViewRoute] {
    &ROUTES
}

/// Resolve a request path to a screen.
///
/// Matching is exact after dropping a query string and one trailing slash.
pub fn resolve(path: &str) -> Screen {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = match path.strip_suffix('/') {
        Some("") | None => path,
        Some(trimmed) => trimmed,
    };

    ROUTES
        .iter()
        .find(|route| route.path == path)
        .map(|route| route.screen)
        .unwrap_or(Screen::NotFound)
}

pub fn title(screen: Screen) -> &'static str {
    ROUTES
        .iter()
        .find(|route| route.screen == screen)
        .map(|route| route.title)
        .unwrap_or("Page Not Found")
}

/// Optional screen parameters taken from the query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewQuery {
    /// Search text (Resources, Forum)
    #[serde(default)]
    pub q: Option<String>,
    /// Resource type tab or admin analytics tab
    #[serde(default, alias = "type")]
    pub tab: Option<String>,
    /// Forum category slug
    #[serde(default)]
    pub category: Option<String>,
}

impl ViewQuery {
    fn search(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }
}

/// A rendered screen
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "screen", content = "view", rename_all = "kebab-case")]
pub enum ScreenView {
    Landing(LandingView),
    Chat(ChatView),
    Resources(ResourcesView),
    Wellness(WellnessView),
    Counseling(CounselingView),
    Forum(ForumView),
    VrRelaxation(VrView),
    Admin(AdminView),
    NotFound(NotFoundView),
}

impl ScreenView {
    pub fn screen(&self) -> Screen {
        match self {
            ScreenView::Landing(_) => Screen::Landing,
            ScreenView::Chat(_) => Screen::Chat,
            ScreenView::Resources(_) => Screen::Resources,
            ScreenView::Wellness(_) => Screen::Wellness,
            ScreenView::Counseling(_) => Screen::Counseling,
            ScreenView::Forum(_) => Screen::Forum,
            ScreenView::VrRelaxation(_) => Screen::VrRelaxation,
            ScreenView::Admin(_) => Screen::Admin,
            ScreenView::NotFound(_) => Screen::NotFound,
        }
    }
}

/// Build the view document for a screen.
///
/// `NotFound` renders without a path; use [`render_path`] to carry the
/// requested path through.
pub fn render(screen: Screen, query: &ViewQuery) -> Result<ScreenView, ViewError> {
    let view = match screen {
        Screen::Landing => ScreenView::Landing(landing::view()),
        Screen::Chat => ScreenView::Chat(chat_view()),
        Screen::Resources => {
            ScreenView::Resources(resources_view(query.search(), query.tab.as_deref())?)
        }
        Screen::Wellness => ScreenView::Wellness(wellness::view()),
        Screen::Counseling => ScreenView::Counseling(counseling_view(booking::today())),
        Screen::Forum => ScreenView::Forum(forum_view(query.search(), query.category.as_deref())?),
        Screen::VrRelaxation => ScreenView::VrRelaxation(vr::view()),
        Screen::Admin => {
            let tab: AnalyticsTab = query
                .tab
                .as_deref()
                .unwrap_or_default()
                .parse()
                .map_err(ViewError::InvalidParameter)?;
            ScreenView::Admin(admin::view(tab))
        }
        Screen::NotFound => ScreenView::NotFound(not_found_view("")),
    };
    Ok(view)
}

/// Resolve and render in one step
pub fn render_path(path: &str, query: &ViewQuery) -> Result<ScreenView, ViewError> {
    match resolve(path) {
        Screen::NotFound => Ok(ScreenView::NotFound(not_found_view(path))),
        screen => render(screen, query),
    }
}
