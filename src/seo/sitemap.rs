//! sitemap.xml and robots.txt generation

use chrono::NaiveDate;

use crate::config::SiteConfig;
use crate::content::{PostPreview, Tag};
use crate::helpers::full_url_for;

/// How often a page is expected to change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

/// One `<url>` entry in the urlset
#[derive(Debug, Clone)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: Option<NaiveDate>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Builds the sitemaps.org urlset for the whole site
pub struct SitemapBuilder<'a> {
    config: &'a SiteConfig,
}

impl<'a> SitemapBuilder<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Collect entries for the fixed routes, every post, and every tag
    pub fn entries(&self, posts: &[PostPreview], tags: &[Tag]) -> Vec<SitemapEntry> {
        let mut entries = vec![
            SitemapEntry {
                loc: full_url_for(self.config, "/"),
                lastmod: None,
                change_frequency: ChangeFrequency::Weekly,
                priority: 1.0,
            },
            SitemapEntry {
                loc: full_url_for(self.config, &self.config.tag_dir),
                lastmod: None,
                change_frequency: ChangeFrequency::Weekly,
                priority: 0.7,
            },
        ];

        for post in posts {
            entries.push(SitemapEntry {
                loc: full_url_for(
                    self.config,
                    &format!("{}/{}", self.config.blog_dir, post.id),
                ),
                lastmod: Some(post.date),
                change_frequency: ChangeFrequency::Monthly,
                priority: 0.8,
            });
        }

        for tag in tags {
            entries.push(SitemapEntry {
                loc: full_url_for(self.config, &tag.path),
                lastmod: None,
                change_frequency: ChangeFrequency::Weekly,
                priority: 0.6,
            });
        }

        entries
    }

    /// Render the urlset XML
    pub fn sitemap_xml(&self, posts: &[PostPreview], tags: &[Tag]) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
        );

        for entry in self.entries(posts, tags) {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", entry.loc));
            if let Some(lastmod) = entry.lastmod {
                xml.push_str(&format!(
                    "    <lastmod>{}</lastmod>\n",
                    lastmod.format("%Y-%m-%d")
                ));
            }
            xml.push_str(&format!(
                "    <changefreq>{}</changefreq>\n",
                entry.change_frequency.as_str()
            ));
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Render robots.txt pointing at the sitemap
    pub fn robots_txt(&self) -> String {
        let sitemap_url = full_url_for(self.config, "/sitemap.xml");
        format!("User-agent: *\nAllow: /\nSitemap: {}\n", sitemap_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preview(id: &str, date: NaiveDate) -> PostPreview {
        PostPreview {
            id: id.to_string(),
            title: id.to_string(),
            date,
            read_time: String::new(),
            excerpt: String::new(),
            tags: Vec::new(),
            has_citations: false,
        }
    }

    #[test]
    fn test_entries_cover_routes_posts_and_tags() {
        let config = SiteConfig::default();
        let posts = vec![preview(
            "my-post",
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )];
        let tags = vec![Tag::new("Rust", &config.url, &config.tag_dir)];

        let builder = SitemapBuilder::new(&config);
        let entries = builder.entries(&posts, &tags);
        assert_eq!(entries.len(), 4);

        let locs: Vec<&str> = entries.iter().map(|e| e.loc.as_str()).collect();
        assert!(locs.contains(&"https://example.com/"));
        assert!(locs.contains(&"https://example.com/tags"));
        assert!(locs.contains(&"https://example.com/blog/my-post"));
        assert!(locs.contains(&"https://example.com/tags/rust"));
    }

    #[test]
    fn test_post_entries_carry_priority_and_lastmod() {
        let config = SiteConfig::default();
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let posts = vec![preview("my-post", date)];

        let builder = SitemapBuilder::new(&config);
        let entries = builder.entries(&posts, &[]);
        let post_entry = entries
            .iter()
            .find(|e| e.loc.ends_with("/blog/my-post"))
            .unwrap();
        assert_eq!(post_entry.priority, 0.8);
        assert_eq!(post_entry.change_frequency, ChangeFrequency::Monthly);
        assert_eq!(post_entry.lastmod, Some(date));
    }

    #[test]
    fn test_sitemap_xml_shape() {
        let config = SiteConfig::default();
        let posts = vec![preview(
            "my-post",
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )];
        let tags = vec![Tag::new("Machine Learning", &config.url, &config.tag_dir)];

        let builder = SitemapBuilder::new(&config);
        let xml = builder.sitemap_xml(&posts, &tags);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<loc>https://example.com/blog/my-post</loc>"));
        assert!(xml.contains("<lastmod>2024-01-15</lastmod>"));
        assert!(xml.contains("<changefreq>monthly</changefreq>"));
        assert!(xml.contains("<priority>0.8</priority>"));
        assert!(xml.contains("<loc>https://example.com/tags/machine-learning</loc>"));
        assert!(xml.contains("<priority>0.6</priority>"));
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn test_robots_txt() {
        let config = SiteConfig::default();
        let builder = SitemapBuilder::new(&config);
        let robots = builder.robots_txt();
        assert!(robots.contains("User-agent: *"));
        assert!(robots.contains("Sitemap: https://example.com/sitemap.xml"));
    }
}
