//! Create a new post

use anyhow::Result;
use std::fs;

use crate::Quill;

const DEFAULT_SCAFFOLD: &str = r#"---
title: {{ title }}
date: {{ date }}
readTime: ""
excerpt: ""
tags: []
---
"#;

/// Create a new post file with front-matter filled in
pub fn run(quill: &Quill, title: &str) -> Result<()> {
    let now = chrono::Local::now();

    fs::create_dir_all(&quill.posts_dir)?;

    // Generate filename from the configured pattern
    let slug = slug::slugify(title);
    let filename = quill
        .config
        .new_post_name
        .replace(":title", &slug)
        .replace(":year", &now.format("%Y").to_string())
        .replace(":month", &now.format("%m").to_string())
        .replace(":day", &now.format("%d").to_string());

    let file_path = quill.posts_dir.join(&filename);
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    // Load scaffold template
    let scaffold_path = quill.base_dir.join("scaffolds").join("post.md");
    let scaffold = if scaffold_path.exists() {
        fs::read_to_string(&scaffold_path)?
    } else {
        DEFAULT_SCAFFOLD.to_string()
    };

    let content = scaffold
        .replace("{{ title }}", title)
        .replace("{{ date }}", &now.format("%Y-%m-%d").to_string());

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}
