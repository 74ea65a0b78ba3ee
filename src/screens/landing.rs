//! Landing page

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub route: String,
}

impl Link {
    fn new(label: &str, route: &str) -> Self {
        Self {
            label: label.to_string(),
            route: route.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Hero {
    pub badge: String,
    pub headline: String,
    pub tagline: String,
    pub subtitle: String,
    pub actions: Vec<Link>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub button_text: String,
    /// Screen the card's button opens
    pub route: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CallToAction {
    pub heading: String,
    pub text: String,
    pub actions: Vec<Link>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LandingView {
    pub hero: Hero,
    pub stats: Vec<Stat>,
    pub features: Vec<Feature>,
    pub benefits: Vec<String>,
    pub call_to_action: CallToAction,
    pub footer_links: Vec<String>,
}

pub fn hero() -> Hero {
    Hero {
        badge: "Comprehensive Mental Health Platform".to_string(),
        headline: "Your Campus Mental Health".to_string(),
        tagline: "Support Ecosystem".to_string(),
        subtitle: "Stigma-free, accessible, and comprehensive mental health support for college \
                   students. AI-powered assistance, peer community, and professional counseling \
                   in one platform."
            .to_string(),
        actions: vec![
            Link::new("Start AI Chat", "/chat"),
            Link::new("Book Counseling", "/counseling"),
        ],
    }
}

pub fn features() -> Vec<Feature> {
    [
        (
            "AI Mental Health Chat",
            "24/7 confidential support with AI trained on mental health best practices. Get immediate coping strategies and crisis intervention when you need it most.",
            "Start Chatting",
            "/chat",
            true,
        ),
        (
            "Anonymous Peer Support",
            "Connect with fellow students in a safe, moderated environment. Share experiences, offer support, and build community connections.",
            "Join Community",
            "/forum",
            false,
        ),
        (
            "Confidential Counseling",
            "Book anonymous appointments with licensed campus counselors. Secure, private, and integrated with your campus mental health services.",
            "Book Session",
            "/counseling",
            false,
        ),
        (
            "Wellness Gamification",
            "Track your mental health journey with daily check-ins, earn badges, and participate in wellness challenges with your peers.",
            "View Dashboard",
            "/wellness",
            false,
        ),
        (
            "Resource Hub",
            "Access curated mental health resources, guided meditations, coping strategies, and educational content tailored for students.",
            "Explore Resources",
            "/resources",
            false,
        ),
        (
            "VR Relaxation Spaces",
            "Immersive virtual environments for meditation, stress relief, and mindfulness practices. Experience calm anywhere, anytime.",
            "Enter VR Space",
            "/vr-relaxation",
            false,
        ),
    ]
    .into_iter()
    .map(|(title, description, button_text, route, highlighted)| Feature {
        title: title.to_string(),
        description: description.to_string(),
        button_text: button_text.to_string(),
        route: route.to_string(),
        highlighted,
    })
    .collect()
}

pub fn stats() -> Vec<Stat> {
    [
        ("Students Supported", "10K+"),
        ("Crisis Interventions", "500+"),
        ("Counseling Sessions", "2K+"),
        ("Resource Views", "50K+"),
    ]
    .into_iter()
    .map(|(label, value)| Stat {
        label: label.to_string(),
        value: value.to_string(),
    })
    .collect()
}

pub fn benefits() -> Vec<String> {
    [
        "Stigma-free mental health support",
        "24/7 availability and accessibility",
        "FERPA & GDPR compliant privacy",
        "Integration with campus services",
        "Evidence-based interventions",
        "Peer-to-peer community support",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

pub fn view() -> LandingView {
    LandingView {
        hero: hero(),
        stats: stats(),
        features: features(),
        benefits: benefits(),
        call_to_action: CallToAction {
            heading: "Ready to Start Your Mental Wellness Journey?".to_string(),
            text: "Join thousands of students who have found support, community, and \
                   professional help through MindBridge."
                .to_string(),
            actions: vec![Link::new("Start Free Chat", "/chat")],
        },
        footer_links: vec![
            "Privacy Policy".to_string(),
            "Terms of Service".to_string(),
            "Contact Support".to_string(),
        ],
    }
}
