//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters that cannot appear raw in a URL path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/blog/my-post") // -> "/blog/my-post"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/blog/my-post") // -> "https://example.com/blog/my-post"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Canonical identity of a tag: case-insensitive and whitespace-run
/// insensitive, but otherwise an exact match
pub fn tag_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// URL path segment for a tag: lower-cased, whitespace runs joined by a
/// single hyphen, percent-encoded
pub fn tag_slug(name: &str) -> String {
    let lowered = name.to_lowercase();
    let hyphenated = lowered.split_whitespace().collect::<Vec<_>>().join("-");
    utf8_percent_encode(&hyphenated, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.url = "https://example.com".to_string();
        config.root = "/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/blog/my-post"), "/blog/my-post");
        assert_eq!(url_for(&config, "tags/rust"), "/tags/rust");
        assert_eq!(url_for(&config, "/"), "/");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "/blog/my-post"),
            "https://example.com/blog/my-post"
        );
        assert_eq!(full_url_for(&config, "/"), "https://example.com/");
    }

    #[test]
    fn test_tag_key() {
        assert_eq!(tag_key("AI"), "ai");
        assert_eq!(tag_key("Machine  Learning"), "machine learning");
        assert_eq!(tag_key("  spaced out  "), "spaced out");
    }

    #[test]
    fn test_tag_key_is_idempotent() {
        let once = tag_key("Machine  Learning");
        assert_eq!(tag_key(&once), once);
    }

    #[test]
    fn test_tag_slug() {
        assert_eq!(tag_slug("Machine Learning"), "machine-learning");
        assert_eq!(tag_slug("AI"), "ai");
        assert_eq!(tag_slug("spaced   out"), "spaced-out");
    }

    #[test]
    fn test_tag_slug_percent_encodes() {
        assert_eq!(tag_slug("AI/ML"), "ai%2Fml");
        assert_eq!(tag_slug("C#"), "c%23");
    }
}
