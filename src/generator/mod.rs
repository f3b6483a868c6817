//! Generator module - writes the derived artifacts the presentation
//! layer consumes: content JSON documents with embedded structured data,
//! sitemap.xml, and robots.txt

use anyhow::Result;
use serde_json::json;
use std::fs;

use crate::content::ContentStore;
use crate::seo::{jsonld, SitemapBuilder};
use crate::Quill;

/// Artifact generator over a loaded content snapshot
pub struct Generator {
    quill: Quill,
}

impl Generator {
    /// Create a new generator
    pub fn new(quill: &Quill) -> Self {
        Self {
            quill: quill.clone(),
        }
    }

    /// Write every artifact into the public directory
    pub fn generate(&self, store: &ContentStore) -> Result<()> {
        fs::create_dir_all(&self.quill.public_dir)?;

        self.generate_post_index(store)?;
        self.generate_post_documents(store)?;
        self.generate_tag_indexes(store)?;
        self.generate_sitemap(store)?;

        Ok(())
    }

    /// index.json: sorted previews plus the WebSite structured data
    fn generate_post_index(&self, store: &ContentStore) -> Result<()> {
        let payload = json!({
            "posts": store.previews(),
            "jsonLd": jsonld::web_site(&self.quill.config),
        });
        fs::write(
            self.quill.public_dir.join("index.json"),
            serde_json::to_string_pretty(&payload)?,
        )?;
        Ok(())
    }

    /// blog/<id>.json: one document per post with its BlogPosting data
    fn generate_post_documents(&self, store: &ContentStore) -> Result<()> {
        let blog_dir = self.quill.public_dir.join(&self.quill.config.blog_dir);
        fs::create_dir_all(&blog_dir)?;

        for post in store.posts() {
            let payload = json!({
                "post": post,
                "jsonLd": jsonld::blog_posting(&self.quill.config, post),
            });
            fs::write(
                blog_dir.join(format!("{}.json", post.id)),
                serde_json::to_string_pretty(&payload)?,
            )?;
        }
        Ok(())
    }

    /// tags/index.json and tags/<slug>.json: the tag taxonomy and one
    /// collection document per tag
    fn generate_tag_indexes(&self, store: &ContentStore) -> Result<()> {
        let tags_dir = self.quill.public_dir.join(&self.quill.config.tag_dir);
        fs::create_dir_all(&tags_dir)?;

        let names: Vec<&str> = store.tags().iter().map(|t| t.name.as_str()).collect();
        fs::write(
            tags_dir.join("index.json"),
            serde_json::to_string_pretty(&names)?,
        )?;

        for tag in store.tags() {
            let posts = store.posts_by_tag(&tag.name);
            let payload = json!({
                "tag": tag,
                "posts": posts,
                "jsonLd": jsonld::collection_page(&self.quill.config, tag, &posts),
            });
            fs::write(
                tags_dir.join(format!("{}.json", tag.slug)),
                serde_json::to_string_pretty(&payload)?,
            )?;
        }
        Ok(())
    }

    fn generate_sitemap(&self, store: &ContentStore) -> Result<()> {
        let builder = SitemapBuilder::new(&self.quill.config);
        let previews = store.previews();
        fs::write(
            self.quill.public_dir.join("sitemap.xml"),
            builder.sitemap_xml(&previews, store.tags()),
        )?;
        fs::write(
            self.quill.public_dir.join("robots.txt"),
            builder.robots_txt(),
        )?;
        Ok(())
    }
}
