//! Peer Support Forum catalog
//!
//! Anonymous discussion posts with category chips, trending topics and the
//! peer ambassador roster. Posts are searched with the same catalog filter as
//! the Resource Hub, then narrowed to the selected category.

use serde::Serialize;

use super::{filter, Searchable};

/// Category chip shown above the post list
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ForumCategory {
    /// Slug used in links and query strings
    pub id: String,
    /// Display name; posts carry this as their category
    pub name: String,
    /// Post count shown on the chip
    pub count: u32,
}

/// A forum discussion post
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ForumPost {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub author: String,
    /// Relative posting time as displayed ("2 hours ago")
    pub timestamp: String,
    pub category: String,
    pub replies: u32,
    pub likes: u32,
    pub is_popular: bool,
    pub tags: Vec<String>,
}

impl ForumPost {
    /// Avatar initials for the post author
    pub fn author_initials(&self) -> String {
        initials(&self.author)
    }
}

impl Searchable for ForumPost {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.content
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TrendingTopic {
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PeerAmbassador {
    pub name: String,
    pub initials: String,
    pub posts: u32,
    pub helpful_answers: u32,
    pub badge: String,
}

/// First letter of each whitespace-separated word ("Anonymous Owl" → "AO")
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Look up a category by slug. `None` for unknown slugs.
pub fn find_category<'a>(categories: &'a [ForumCategory], id: &str) -> Option<&'a ForumCategory> {
    categories.iter().find(|c| c.id == id)
}

/// Search posts by text, then restrict to a category slug.
///
/// The `all` slug (or no slug) keeps every category. Returns `None` when the
/// slug is not a known category.
pub fn search_posts(
    posts: &[ForumPost],
    categories: &[ForumCategory],
    query: &str,
    category: Option<&str>,
) -> Option<Vec<ForumPost>> {
    let wanted = match category.map(str::trim) {
        None | Some("") | Some("all") => None,
        Some(slug) => Some(find_category(categories, slug)?.name.as_str()),
    };

    Some(
        filter(posts, query)
            .into_iter()
            .filter(|post| wanted.map_or(true, |name| post.category == name))
            .cloned()
            .collect(),
    )
}

pub fn forum_categories() -> Vec<ForumCategory> {
    [
        ("all", "All Topics", 234),
        ("academic-stress", "Academic Stress", 45),
        ("relationships", "Relationships", 38),
        ("anxiety-depression", "Anxiety & Depression", 52),
        ("self-care", "Self-Care Tips", 29),
        ("campus-life", "Campus Life", 41),
        ("success-stories", "Success Stories", 29),
    ]
    .into_iter()
    .map(|(id, name, count)| ForumCategory {
        id: id.to_string(),
        name: name.to_string(),
        count,
    })
    .collect()
}

pub fn forum_posts() -> Vec<ForumPost> {
    #[allow(clippy::too_many_arguments)]
    fn post(
        id: u32,
        title: &str,
        content: &str,
        author: &str,
        timestamp: &str,
        category: &str,
        (replies, likes, is_popular): (u32, u32, bool),
        tags: &[&str],
    ) -> ForumPost {
        ForumPost {
            id,
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
            timestamp: timestamp.to_string(),
            category: category.to_string(),
            replies,
            likes,
            is_popular,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    vec![
        post(
            1,
            "How do you deal with exam anxiety?",
            "Finals are coming up and I'm feeling overwhelmed. Any tips that have worked for you?",
            "Anonymous Owl",
            "2 hours ago",
            "Academic Stress",
            (12, 18, true),
            &["exams", "anxiety", "study-tips"],
        ),
        post(
            2,
            "Celebrating small wins - got out of bed today!",
            "After struggling for weeks, I managed to get up early and attend my morning class. It might seem small but it's huge for me right now.",
            "Sunrise Student",
            "4 hours ago",
            "Success Stories",
            (24, 47, true),
            &["motivation", "depression", "progress"],
        ),
        post(
            3,
            "Healthy study break activities?",
            "Looking for quick activities I can do between study sessions to recharge. What works for you?",
            "Study Buddy",
            "6 hours ago",
            "Self-Care Tips",
            (8, 12, false),
            &["study-breaks", "wellness", "productivity"],
        ),
        post(
            4,
            "Feeling isolated in dorms - how to connect?",
            "I'm a freshman and having trouble making friends. The social anxiety is real. Any advice?",
            "Quiet Freshman",
            "1 day ago",
            "Campus Life",
            (15, 22, false),
            &["friendship", "social-anxiety", "freshman"],
        ),
    ]
}

pub fn trending_topics() -> Vec<TrendingTopic> {
    [
        ("Midterm Stress", 23),
        ("Sleep Schedule", 18),
        ("Imposter Syndrome", 15),
        ("Homesickness", 12),
    ]
    .into_iter()
    .map(|(name, count)| TrendingTopic {
        name: name.to_string(),
        count,
    })
    .collect()
}

pub fn peer_ambassadors() -> Vec<PeerAmbassador> {
    [
        ("Alex M.", 45, 89, "Top Helper"),
        ("Sarah K.", 32, 76, "Peer Leader"),
        ("Jordan L.", 28, 54, "Active Member"),
    ]
    .into_iter()
    .map(|(name, posts, helpful_answers, badge)| PeerAmbassador {
        name: name.to_string(),
        initials: initials(name),
        posts,
        helpful_answers,
        badge: badge.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(posts: &[ForumPost]) -> Vec<u32> {
        posts.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Anonymous Owl"), "AO");
        assert_eq!(initials("Alex M."), "AM");
        assert_eq!(initials("  Quiet   Freshman "), "QF");
        assert_eq!(initials(""), "");
        assert_eq!(forum_posts()[1].author_initials(), "SS");
    }

    #[test]
    fn test_search_all() {
        let posts = forum_posts();
        let categories = forum_categories();
        let found = search_posts(&posts, &categories, "", None).unwrap();
        assert_eq!(ids(&found), vec![1, 2, 3, 4]);

        let found = search_posts(&posts, &categories, "", Some("all")).unwrap();
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn test_search_text_matches_content_and_tags() {
        let posts = forum_posts();
        let categories = forum_categories();

        // title on 1, content "social anxiety" on 4
        let found = search_posts(&posts, &categories, "Anxiety", None).unwrap();
        assert_eq!(ids(&found), vec![1, 4]);

        let found = search_posts(&posts, &categories, "productivity", None).unwrap();
        assert_eq!(ids(&found), vec![3]);
    }

    #[test]
    fn test_category_filter() {
        let posts = forum_posts();
        let categories = forum_categories();

        let found = search_posts(&posts, &categories, "", Some("campus-life")).unwrap();
        assert_eq!(ids(&found), vec![4]);

        let found = search_posts(&posts, &categories, "anxiety", Some("academic-stress")).unwrap();
        assert_eq!(ids(&found), vec![1]);

        // known category with no posts
        let found = search_posts(&posts, &categories, "", Some("relationships")).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_unknown_category() {
        let posts = forum_posts();
        let categories = forum_categories();
        assert!(search_posts(&posts, &categories, "", Some("gardening")).is_none());
    }

    #[test]
    fn test_ambassador_initials() {
        let roster = peer_ambassadors();
        assert_eq!(roster[2].initials, "JL");
    }
}
