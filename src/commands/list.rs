//! List site content

use anyhow::Result;

use crate::content::ContentStore;
use crate::Quill;

/// List site content by type
pub fn run(quill: &Quill, content_type: &str) -> Result<()> {
    let store = ContentStore::load(&quill.posts_dir, &quill.config);

    match content_type {
        "post" | "posts" => {
            let posts = store.posts();
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} [{}]",
                    post.date.format("%Y-%m-%d"),
                    post.title,
                    post.source
                );
            }
        }
        "tag" | "tags" => {
            let tags = store.tags();
            println!("Tags ({}):", tags.len());
            for tag in tags {
                println!("  {} ({})", tag.name, tag.count);
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    }

    Ok(())
}
