/// Blog catalog shared by the sitemap generator and the blog listing pages.
///
/// Both consumers derive post URLs through [`blog_post_path`], so a title edit
/// changes the slug everywhere at once.
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("valid regex"));
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s-]+").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostMeta {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    /// Publication date, ISO-8601 (`2024-01-15` or a full RFC 3339 timestamp).
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl BlogPostMeta {
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }
}

/// Lowercases the title, drops everything except ASCII letters, digits,
/// whitespace and hyphens, then joins the remaining words with single hyphens.
pub fn slugify(title: &str) -> String {
    let lower = title.to_lowercase();
    let kept = DISALLOWED_RE.replace_all(&lower, "");
    let joined = SEPARATOR_RE.replace_all(kept.trim(), "-");
    joined.trim_matches('-').to_string()
}

/// Site-relative path of a post: `/blog/{id}/{slug}`.
pub fn blog_post_path(post: &BlogPostMeta) -> String {
    format!("/blog/{}/{}", post.id, post.slug())
}

fn post(id: u32, title: &str, excerpt: &str, date: &str) -> BlogPostMeta {
    BlogPostMeta {
        id,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        date: date.to_string(),
        image: None,
        category: None,
        author: None,
    }
}

/// The published posts, newest first.
pub fn blog_posts() -> Vec<BlogPostMeta> {
    vec![
        post(
            1,
            "Understanding Your Dosha: A Complete Guide to Ayurvedic Body Types",
            "Discover how knowing your dosha can transform your health and help you make better lifestyle choices aligned with your natural constitution.",
            "2024-01-15",
        ),
        post(
            2,
            "Seasonal Detox: Spring Cleanse with Ayurvedic Principles",
            "Learn how to cleanse your body naturally this spring using time-tested Ayurvedic detoxification methods and seasonal foods.",
            "2024-01-10",
        ),
        post(
            3,
            "10 Morning Rituals for Better Digestion According to Ayurveda",
            "Start your day right with these simple Ayurvedic practices that will improve your digestive fire and overall energy levels.",
            "2024-01-05",
        ),
        post(
            4,
            "Stress Management Through Meditation and Pranayama",
            "Explore ancient breathing techniques and meditation practices that can help you manage stress and anxiety naturally.",
            "2024-01-01",
        ),
        post(
            5,
            "Ayurvedic Nutrition: Eating for Your Body Type",
            "Discover how to choose the right foods for your dosha and create meal plans that support your unique constitution.",
            "2023-12-28",
        ),
        post(
            6,
            "The Power of Abhyanga: Self-Massage for Daily Wellness",
            "Learn the art of self-massage with herbal oils and its incredible benefits for skin, circulation, and mental wellbeing.",
            "2023-12-25",
        ),
    ]
}
