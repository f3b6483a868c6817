//! Post and preview models

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::helpers;

/// A fully-loaded blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Stable identifier derived from the source file name
    pub id: String,

    /// Post title
    pub title: String,

    /// Publication date
    pub date: NaiveDate,

    /// Reading-time label, e.g. "6 min read"
    pub read_time: String,

    /// Short summary shown in listings
    pub excerpt: String,

    /// Topical labels
    pub tags: Vec<String>,

    /// Citation number -> external URL, in author order
    pub references: IndexMap<String, String>,

    /// Rendered HTML body with citation links resolved
    pub content_html: String,

    /// Source file name
    pub source: String,
}

impl Post {
    /// Project this post into its listing form
    pub fn preview(&self) -> PostPreview {
        PostPreview {
            id: self.id.clone(),
            title: self.title.clone(),
            date: self.date,
            read_time: self.read_time.clone(),
            excerpt: self.excerpt.clone(),
            tags: self.tags.clone(),
            has_citations: !self.references.is_empty(),
        }
    }
}

/// Lightweight projection of a post for list views
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPreview {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub excerpt: String,
    pub tags: Vec<String>,
    pub has_citations: bool,
}

/// A tag with its canonical casing and URL identity
#[derive(Debug, Clone, Serialize)]
pub struct Tag {
    pub name: String,
    pub slug: String,
    pub path: String,
    pub permalink: String,
    pub count: usize,
}

impl Tag {
    pub fn new(name: &str, base_url: &str, tag_dir: &str) -> Self {
        let slug = helpers::tag_slug(name);
        let path = format!("{}/{}", tag_dir, slug);
        let permalink = format!("{}/{}", base_url.trim_end_matches('/'), path);
        Self {
            name: name.to_string(),
            slug,
            path,
            permalink,
            count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            id: "hello-world".to_string(),
            title: "Hello World".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            read_time: "6 min read".to_string(),
            excerpt: "A first post".to_string(),
            tags: vec!["Rust".to_string()],
            references: IndexMap::new(),
            content_html: "<p>Hi</p>".to_string(),
            source: "hello-world.md".to_string(),
        }
    }

    #[test]
    fn test_preview_projection() {
        let post = sample_post();
        let preview = post.preview();
        assert_eq!(preview.id, "hello-world");
        assert_eq!(preview.tags, vec!["Rust"]);
        assert!(!preview.has_citations);
    }

    #[test]
    fn test_preview_has_citations() {
        let mut post = sample_post();
        post.references
            .insert("1".to_string(), "https://example.com/a".to_string());
        assert!(post.preview().has_citations);
    }

    #[test]
    fn test_tag_identity() {
        let tag = Tag::new("Machine Learning", "https://example.com/", "tags");
        assert_eq!(tag.slug, "machine-learning");
        assert_eq!(tag.path, "tags/machine-learning");
        assert_eq!(tag.permalink, "https://example.com/tags/machine-learning");
    }

    #[test]
    fn test_camel_case_serialization() {
        let post = sample_post();
        let json = serde_json::to_value(&post).unwrap();
        assert!(json.get("readTime").is_some());
        assert!(json.get("contentHtml").is_some());
        let preview = serde_json::to_value(post.preview()).unwrap();
        assert!(preview.get("hasCitations").is_some());
    }
}
