//! Front-matter parsing

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Custom deserializer for the references mapping. Authors write citation
/// numbers both quoted and bare, so integer and string keys are accepted.
fn citation_map<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, MapAccess, Visitor};
    use std::fmt;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Key {
        Number(u64),
        Text(String),
    }

    struct CitationMap;

    impl<'de> Visitor<'de> for CitationMap {
        type Value = IndexMap<String, String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a mapping from citation number to URL")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(IndexMap::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(IndexMap::new())
        }

        fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            let mut out = IndexMap::new();
            while let Some((key, value)) = map.next_entry::<Key, String>()? {
                let key = match key {
                    Key::Number(n) => n.to_string(),
                    Key::Text(s) => s,
                };
                out.insert(key, value);
            }
            Ok(out)
        }
    }

    deserializer.deserialize_any(CitationMap)
}

/// Front-matter data from a post document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "readTime")]
    pub read_time: Option<String>,
    pub excerpt: Option<String>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
    /// Citation number -> external URL, in author order
    #[serde(deserialize_with = "citation_map", default)]
    pub references: IndexMap<String, String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Split a document into front-matter and body.
    ///
    /// Returns (front_matter, body). A document without a front-matter
    /// block yields defaults with the whole content as body. A block that
    /// fails to parse as YAML is an error, so the offending document can
    /// be excluded on its own.
    pub fn parse(content: &str) -> Result<(Self, &str), serde_yaml::Error> {
        let trimmed = content.trim_start();

        let Some(rest) = trimmed.strip_prefix("---") else {
            return Ok((FrontMatter::default(), content));
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        // Find the closing ---
        let Some(end) = rest.find("\n---") else {
            return Ok((FrontMatter::default(), content));
        };

        let yaml = &rest[..end];
        let body = rest[end + 4..].trim_start_matches(['\n', '\r']);

        if yaml.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fm: FrontMatter = serde_yaml::from_str(yaml)?;
        Ok((fm, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
date: 2024-01-15
readTime: 6 min read
excerpt: A first post
tags:
  - rust
  - blogging
---

This is the content.
"#;

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, Some("Hello World".to_string()));
        assert_eq!(fm.date, Some("2024-01-15".to_string()));
        assert_eq!(fm.read_time, Some("6 min read".to_string()));
        assert_eq!(fm.tags, vec!["rust", "blogging"]);
        assert!(body.contains("This is the content."));
    }

    #[test]
    fn test_parse_single_string_tags() {
        let content = r#"---
title: Single Tag Post
date: 2024-01-15
tags: Notes
---

Content here.
"#;

        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.tags, vec!["Notes"]);
    }

    #[test]
    fn test_parse_references() {
        let content = r#"---
title: Cited Post
date: 2024-01-15
references:
  "1": https://example.com/a
  2: https://example.com/b
---

Body [1] and [2].
"#;

        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.references.len(), 2);
        assert_eq!(
            fm.references.get("1"),
            Some(&"https://example.com/a".to_string())
        );
        assert_eq!(
            fm.references.get("2"),
            Some(&"https://example.com/b".to_string())
        );
        // Author order is preserved
        let keys: Vec<_> = fm.references.keys().cloned().collect();
        assert_eq!(keys, vec!["1", "2"]);
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "Just some markdown.\n";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert!(fm.tags.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_unterminated_frontmatter() {
        let content = "---\ntitle: Oops\n\nNo closing fence.";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title, None);
        assert_eq!(body, content);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let content = "---\ntitle: [unclosed\n---\n\nBody.\n";
        assert!(FrontMatter::parse(content).is_err());
    }
}
