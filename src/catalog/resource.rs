//! Resource Hub catalog
//!
//! Curated articles, videos, audio sessions and guides. The hub shows a
//! featured strip plus tabbed listings, both driven by the same search text.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{filter, Searchable};

/// Media type of a resource; doubles as the hub's tab id
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Articles,
    Videos,
    Audio,
    Guides,
}

impl ResourceType {
    pub fn all() -> &'static [ResourceType] {
        &[
            ResourceType::Articles,
            ResourceType::Videos,
            ResourceType::Audio,
            ResourceType::Guides,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResourceType::Articles => "Articles",
            ResourceType::Videos => "Videos",
            ResourceType::Audio => "Audio",
            ResourceType::Guides => "Guides",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceType::Articles => write!(f, "articles"),
            ResourceType::Videos => write!(f, "videos"),
            ResourceType::Audio => write!(f, "audio"),
            ResourceType::Guides => write!(f, "guides"),
        }
    }
}

/// Selected tab in the "All Resources" listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceTab {
    #[default]
    All,
    Only(ResourceType),
}

impl ResourceTab {
    pub fn admits(&self, resource: &Resource) -> bool {
        match self {
            ResourceTab::All => true,
            ResourceTab::Only(kind) => resource.kind == *kind,
        }
    }
}

impl FromStr for ResourceTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(ResourceTab::All),
            "articles" => Ok(ResourceTab::Only(ResourceType::Articles)),
            "videos" => Ok(ResourceTab::Only(ResourceType::Videos)),
            "audio" => Ok(ResourceTab::Only(ResourceType::Audio)),
            "guides" => Ok(ResourceTab::Only(ResourceType::Guides)),
            other => Err(format!(
                "Unknown resource type '{}'. Valid: all, articles, videos, audio, guides",
                other
            )),
        }
    }
}

impl std::fmt::Display for ResourceTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceTab::All => write!(f, "all"),
            ResourceTab::Only(kind) => write!(f, "{}", kind),
        }
    }
}

/// A single Resource Hub entry
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Resource {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub category: String,
    pub duration: String,
    pub rating: f32,
    pub tags: Vec<String>,
    pub featured: bool,
}

impl Resource {
    #[allow(clippy::too_many_arguments)]
    fn new(
        id: u32,
        title: &str,
        description: &str,
        kind: ResourceType,
        category: &str,
        duration: &str,
        rating: f32,
        tags: &[&str],
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            kind,
            category: category.to_string(),
            duration: duration.to_string(),
            rating,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            featured: false,
        }
    }

    fn featured(mut self) -> Self {
        self.featured = true;
        self
    }
}

impl Searchable for Resource {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Result of searching the hub: featured strip plus the tabbed listing
#[derive(Debug, Clone, Serialize)]
pub struct ResourceListing {
    pub featured: Vec<Resource>,
    pub resources: Vec<Resource>,
}

/// Apply the search text to the hub, then the tab to the listing.
///
/// The featured strip only follows the search text, matching the hub layout
/// where it sits above the tabs.
pub fn search_resources(catalog: &[Resource], query: &str, tab: ResourceTab) -> ResourceListing {
    let matched = filter(catalog, query);

    ResourceListing {
        featured: matched
            .iter()
            .filter(|r| r.featured)
            .map(|r| (*r).clone())
            .collect(),
        resources: matched
            .into_iter()
            .filter(|r| tab.admits(r))
            .cloned()
            .collect(),
    }
}

/// The hub's resource catalog
pub fn resources() -> Vec<Resource> {
    vec![
        Resource::new(
            1,
            "Understanding Anxiety: A Student's Guide",
            "Comprehensive guide to recognizing, understanding, and managing anxiety in college settings.",
            ResourceType::Articles,
            "Anxiety",
            "8 min read",
            4.8,
            &["anxiety", "coping", "students"],
        )
        .featured(),
        Resource::new(
            2,
            "Mindfulness Meditation for Beginners",
            "10-minute guided meditation perfect for students new to mindfulness practice.",
            ResourceType::Audio,
            "Mindfulness",
            "10 min",
            4.9,
            &["meditation", "mindfulness", "relaxation"],
        ),
        Resource::new(
            3,
            "Managing Academic Stress",
            "Evidence-based strategies for handling academic pressure and maintaining mental wellness.",
            ResourceType::Videos,
            "Stress Management",
            "15 min",
            4.7,
            &["stress", "academics", "time-management"],
        ),
        Resource::new(
            4,
            "Sleep Hygiene for Students",
            "Essential guide to improving sleep quality and establishing healthy sleep habits.",
            ResourceType::Guides,
            "Sleep Health",
            "12 min read",
            4.6,
            &["sleep", "health", "routine"],
        ),
        Resource::new(
            5,
            "Building Social Connections",
            "Practical tips for overcoming social anxiety and building meaningful relationships on campus.",
            ResourceType::Articles,
            "Social Wellness",
            "6 min read",
            4.5,
            &["social", "relationships", "community"],
        ),
        Resource::new(
            6,
            "Crisis Coping Strategies",
            "Immediate techniques for managing mental health crises and when to seek help.",
            ResourceType::Guides,
            "Crisis Support",
            "5 min read",
            4.9,
            &["crisis", "emergency", "support"],
        )
        .featured(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[Resource]) -> Vec<u32> {
        items.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_empty_query_returns_catalog_in_order() {
        let catalog = resources();
        let listing = search_resources(&catalog, "", ResourceTab::All);
        assert_eq!(ids(&listing.resources), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(ids(&listing.featured), vec![1, 6]);
    }

    #[test]
    fn test_no_match() {
        let catalog = resources();
        let listing = search_resources(&catalog, "quantum chromodynamics", ResourceTab::All);
        assert!(listing.resources.is_empty());
        assert!(listing.featured.is_empty());
    }

    #[test]
    fn test_anxiety_query() {
        let catalog = resources();
        // tag + title on 1, description ("social anxiety") on 5
        let listing = search_resources(&catalog, "ANXIETY", ResourceTab::All);
        assert_eq!(ids(&listing.resources), vec![1, 5]);
    }

    #[test]
    fn test_trailing_space_is_matched_literally() {
        let catalog = resources();
        assert_eq!(ids(&search_resources(&catalog, "stress", ResourceTab::All).resources), vec![3]);
        assert!(search_resources(&catalog, "stress ", ResourceTab::All).resources.is_empty());
    }

    #[test]
    fn test_tag_only_match() {
        let catalog = resources();
        let listing = search_resources(&catalog, "time-management", ResourceTab::All);
        assert_eq!(ids(&listing.resources), vec![3]);
    }

    #[test]
    fn test_tab_applies_after_search() {
        let catalog = resources();
        let listing = search_resources(&catalog, "", "guides".parse().unwrap());
        assert_eq!(ids(&listing.resources), vec![4, 6]);
        // featured strip ignores the tab
        assert_eq!(ids(&listing.featured), vec![1, 6]);

        let listing = search_resources(&catalog, "sleep", ResourceTab::Only(ResourceType::Audio));
        assert!(listing.resources.is_empty());
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!("all".parse::<ResourceTab>(), Ok(ResourceTab::All));
        assert_eq!("".parse::<ResourceTab>(), Ok(ResourceTab::All));
        assert_eq!(
            "Videos".parse::<ResourceTab>(),
            Ok(ResourceTab::Only(ResourceType::Videos))
        );
        assert!("podcasts".parse::<ResourceTab>().is_err());
    }

    #[test]
    fn test_serialized_type_field() {
        let json = serde_json::to_value(&resources()[1]).unwrap();
        assert_eq!(json["type"], "audio");
    }
}
