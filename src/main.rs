//! CLI entry point for quill

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "quill")]
#[command(version)]
#[command(about = "A static blog content pipeline with citation-aware Markdown rendering", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new post
    New {
        /// Title of the new post
        title: String,
    },

    /// Generate derived artifacts (content JSON, sitemap, robots.txt)
    #[command(alias = "g")]
    Generate,

    /// Clean the public folder
    Clean,

    /// List site content
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "quill=debug,info"
    } else {
        "quill=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::New { title } => {
            let quill = quill::Quill::new(&base_dir)?;
            tracing::info!("Creating new post: {}", title);
            quill.new_post(&title)?;
        }

        Commands::Generate => {
            let quill = quill::Quill::new(&base_dir)?;
            tracing::info!("Generating artifacts...");
            quill.generate()?;
            println!("Generated successfully!");
        }

        Commands::Clean => {
            let quill = quill::Quill::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            quill.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let quill = quill::Quill::new(&base_dir)?;
            quill::commands::list::run(&quill, &r#type)?;
        }

        Commands::Version => {
            println!("quill version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
