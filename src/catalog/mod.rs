//! Catalog Filter
//!
//! Free-text search over the static resource and forum catalogs.
//!
//! A query matches an item when its lower-cased form is a substring of the
//! item's title, its description, or any one of its tags. The query is not
//! trimmed, so surrounding spaces must match too. An empty query matches
//! everything. Results keep the catalog's own order; there is no
//! ranking and no pagination.
//!
//! - **resource**: Resource Hub entries and type tabs
//! - **forum**: peer-support posts, categories, trending topics, ambassadors

pub mod forum;
pub mod resource;

pub use forum::{
    find_category, forum_categories, forum_posts, initials, peer_ambassadors, search_posts,
    trending_topics, ForumCategory, ForumPost, PeerAmbassador, TrendingTopic,
};
pub use resource::{resources, search_resources, Resource, ResourceListing, ResourceTab, ResourceType};

/// Something the catalog filter can search
pub trait Searchable {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn tags(&self) -> &[String];

    /// Check whether an already lower-cased needle occurs in this item
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.title().to_lowercase().contains(needle)
            || self.description().to_lowercase().contains(needle)
            || self
                .tags()
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// Filter `items` by a free-text query, preserving order
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();

    items
        .iter()
        .filter(|item| item.matches_lowercase(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        title: String,
        description: String,
        tags: Vec<String>,
    }

    impl Searchable for Item {
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

    fn item(title: &str, description: &str, tags: &[&str]) -> Item {
        Item {
            title: title.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let items = vec![item("b", "", &[]), item("a", "", &[]), item("c", "", &[])];
        let titles: Vec<_> = filter(&items, "").iter().map(|i| i.title()).collect();
        assert_eq!(titles, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_whitespace_is_part_of_the_query() {
        let items = vec![
            item("Stress", "", &[]),
            item("Stress less", "", &[]),
            item("calm", "", &["stress"]),
        ];

        assert!(filter(&items, "   ").is_empty());
        let titles: Vec<_> = filter(&items, "stress ").iter().map(|i| i.title()).collect();
        assert_eq!(titles, vec!["Stress less"]);
        assert!(filter(&items, " stress").is_empty());
    }

    #[test]
    fn test_matches_each_field_case_insensitively() {
        let items = vec![
            item("Sleep Guide", "rest", &[]),
            item("Other", "Calm BREATHING", &[]),
            item("Third", "nothing", &["Focus"]),
        ];

        assert_eq!(filter(&items, "sleep").len(), 1);
        assert_eq!(filter(&items, "breathing")[0].title(), "Other");
        assert_eq!(filter(&items, "FOCUS")[0].title(), "Third");
    }

    #[test]
    fn test_no_match_is_empty() {
        let items = vec![item("a", "b", &["c"])];
        assert!(filter(&items, "zzz").is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let items: Vec<Item> = Vec::new();
        assert!(filter(&items, "").is_empty());
    }
}
