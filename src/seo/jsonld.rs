//! schema.org structured data builders
//!
//! The objects produced here are embedded as `application/ld+json`
//! blocks by the presentation layer.

use serde_json::{json, Value};

use crate::config::SiteConfig;
use crate::content::{Post, PostPreview, Tag};
use crate::helpers::full_url_for;

/// BlogPosting object for a single post page
pub fn blog_posting(config: &SiteConfig, post: &Post) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": post.title,
        "description": post.excerpt,
        "author": {
            "@type": "Person",
            "name": config.author,
        },
        "datePublished": post.date.format("%Y-%m-%d").to_string(),
        "publisher": {
            "@type": "Organization",
            "name": config.title,
        },
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": full_url_for(config, &format!("{}/{}", config.blog_dir, post.id)),
        },
        "keywords": post.tags.join(","),
    })
}

/// WebSite object for the site root
pub fn web_site(config: &SiteConfig) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": config.title,
        "description": config.description,
        "url": full_url_for(config, "/"),
    })
}

/// CollectionPage object for a tag page, listing its posts in order
pub fn collection_page(config: &SiteConfig, tag: &Tag, posts: &[PostPreview]) -> Value {
    let items: Vec<Value> = posts
        .iter()
        .enumerate()
        .map(|(i, post)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "url": full_url_for(config, &format!("{}/{}", config.blog_dir, post.id)),
                "name": post.title,
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "CollectionPage",
        "headline": format!("Posts tagged with {}", tag.name),
        "url": tag.permalink,
        "mainEntity": {
            "@type": "ItemList",
            "itemListElement": items,
        },
    })
}
