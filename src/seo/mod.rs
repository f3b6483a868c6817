//! SEO artifacts: sitemap, robots.txt, and schema.org structured data

pub mod jsonld;
mod sitemap;

pub use sitemap::{ChangeFrequency, SitemapBuilder, SitemapEntry};
