//! Content store - a load-once snapshot over the posts directory
//!
//! The snapshot is built wholesale from disk; queries never touch the
//! filesystem. Rebuild with [`ContentStore::reload`] when sources change.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;
use walkdir::WalkDir;

use super::{rewrite_citations, FrontMatter, MarkdownRenderer, Post, PostPreview, Tag};
use crate::config::SiteConfig;
use crate::helpers;

/// Errors from the content layer
#[derive(Debug, Error)]
pub enum ContentError {
    /// Requested post id has no corresponding source document
    #[error("no post with id `{id}`")]
    PostNotFound { id: String },
}

/// A source document excluded from the snapshot, with what was wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDefect {
    /// Source file name the defect belongs to
    pub source: String,
    pub problems: Vec<Problem>,
}

impl DocumentDefect {
    fn single(source: String, problem: Problem) -> Self {
        Self {
            source,
            problems: vec![problem],
        }
    }
}

impl fmt::Display for DocumentDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, problem) in self.problems.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", problem)?;
        }
        Ok(())
    }
}

/// A field-level problem found while normalizing a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// File could not be read
    Unreadable(String),
    /// Front-matter block failed to parse as YAML
    BadFrontMatter(String),
    /// `date` is absent
    MissingDate,
    /// `date` does not parse as a calendar date
    BadDate(String),
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::Unreadable(e) => write!(f, "unreadable: {}", e),
            Problem::BadFrontMatter(e) => write!(f, "front-matter: {}", e),
            Problem::MissingDate => f.write_str("missing date"),
            Problem::BadDate(s) => write!(f, "unparsable date `{}`", s),
        }
    }
}

/// Immutable snapshot of the parsed corpus
pub struct ContentStore {
    posts_dir: PathBuf,
    config: SiteConfig,
    /// Sorted date-descending, ties in enumeration order
    posts: Vec<Post>,
    /// Canonical casing, ascending lexicographic order
    tags: Vec<Tag>,
    defects: Vec<DocumentDefect>,
}

impl ContentStore {
    /// Build a snapshot from every Markdown document under `posts_dir`.
    ///
    /// A document that fails normalization is excluded and recorded as a
    /// defect; the rest of the corpus still loads. A missing directory
    /// yields an empty snapshot.
    pub fn load(posts_dir: impl AsRef<Path>, config: &SiteConfig) -> Self {
        let posts_dir = posts_dir.as_ref().to_path_buf();
        let renderer = MarkdownRenderer::new();
        let mut posts = Vec::new();
        let mut defects = Vec::new();

        if posts_dir.exists() {
            // Directory iteration order is platform-dependent; fix the
            // enumeration order so tie-breaking is reproducible.
            for entry in WalkDir::new(&posts_dir)
                .follow_links(true)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let path = entry.path();
                if path.is_file() && is_markdown_file(path) {
                    match load_post(path, &renderer) {
                        Ok(post) => posts.push(post),
                        Err(defect) => {
                            tracing::warn!("Skipping {}: {}", defect.source, defect);
                            defects.push(defect);
                        }
                    }
                }
            }
        }

        // Newest first; the sort is stable so equal dates keep scan order
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        let tags = collect_tags(&posts, config);

        Self {
            posts_dir,
            config: config.clone(),
            posts,
            tags,
            defects,
        }
    }

    /// All previews, newest first
    pub fn previews(&self) -> Vec<PostPreview> {
        self.posts.iter().map(Post::preview).collect()
    }

    /// Fetch one full post by its id
    pub fn post(&self, id: &str) -> Result<&Post, ContentError> {
        self.posts
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ContentError::PostNotFound { id: id.to_string() })
    }

    /// All known tags, canonically cased, ascending
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Previews of posts carrying `tag`, matched case-insensitively.
    /// An empty result is a valid outcome, not an error.
    pub fn posts_by_tag(&self, tag: &str) -> Vec<PostPreview> {
        let key = helpers::tag_key(tag);
        self.posts
            .iter()
            .filter(|p| p.tags.iter().any(|t| helpers::tag_key(t) == key))
            .map(Post::preview)
            .collect()
    }

    /// Map a tag URL segment (or any casing of a tag name) back to its
    /// canonical entry
    pub fn resolve_tag(&self, raw: &str) -> Option<&Tag> {
        let key = helpers::tag_key(&raw.replace('-', " "));
        self.tags.iter().find(|t| helpers::tag_key(&t.name) == key)
    }

    /// All full posts, newest first
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Documents excluded from the snapshot
    pub fn defects(&self) -> &[DocumentDefect] {
        &self.defects
    }

    /// Rebuild the snapshot wholesale from disk
    pub fn reload(&mut self) {
        *self = Self::load(&self.posts_dir, &self.config);
    }
}

/// Load and normalize a single document
fn load_post(path: &Path, renderer: &MarkdownRenderer) -> Result<Post, DocumentDefect> {
    let source = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();
    let id = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            return Err(DocumentDefect::single(
                source,
                Problem::Unreadable(e.to_string()),
            ))
        }
    };

    let (fm, body) = match FrontMatter::parse(&raw) {
        Ok(parsed) => parsed,
        Err(e) => {
            return Err(DocumentDefect::single(
                source,
                Problem::BadFrontMatter(e.to_string()),
            ))
        }
    };

    let date = match &fm.date {
        None => return Err(DocumentDefect::single(source, Problem::MissingDate)),
        Some(s) => match parse_date(s) {
            Some(date) => date,
            None => {
                return Err(DocumentDefect::single(source, Problem::BadDate(s.clone())))
            }
        },
    };

    // Title falls back to the file stem
    let title = fm.title.unwrap_or_else(|| id.clone());

    // Drop structural duplicates within one post; cross-post duplicates
    // are what makes a tag aggregate
    let mut tags: Vec<String> = Vec::new();
    for tag in fm.tags {
        if !tags.iter().any(|t| helpers::tag_key(t) == helpers::tag_key(&tag)) {
            tags.push(tag);
        }
    }

    let html = renderer.render(body);
    let content_html = if fm.references.is_empty() {
        html
    } else {
        rewrite_citations(&html, &fm.references)
    };

    Ok(Post {
        id,
        title,
        date,
        read_time: fm.read_time.unwrap_or_default(),
        excerpt: fm.excerpt.unwrap_or_default(),
        tags,
        references: fm.references,
        content_html,
        source,
    })
}

/// Aggregate tags across the corpus. The first-seen casing of a tag is
/// canonical; later occurrences in any casing fold onto it.
fn collect_tags(posts: &[Post], config: &SiteConfig) -> Vec<Tag> {
    let mut tags: Vec<Tag> = Vec::new();

    for post in posts {
        for name in &post.tags {
            let key = helpers::tag_key(name);
            match tags.iter_mut().find(|t| helpers::tag_key(&t.name) == key) {
                Some(tag) => tag.count += 1,
                None => {
                    let mut tag = Tag::new(name, &config.url, &config.tag_dir);
                    tag.count = 1;
                    tags.push(tag);
                }
            }
        }
    }

    tags.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    tags
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

/// Parse a front-matter date into a calendar date. Datetime forms are
/// accepted with the time-of-day discarded.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }

    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y/%m/%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}
