//! Generate derived artifacts

use anyhow::Result;

use crate::content::ContentStore;
use crate::generator::Generator;
use crate::Quill;

/// Load the content snapshot and write all artifacts
pub fn run(quill: &Quill) -> Result<()> {
    let start = std::time::Instant::now();

    let store = ContentStore::load(&quill.posts_dir, &quill.config);
    tracing::info!(
        "Loaded {} posts and {} tags",
        store.posts().len(),
        store.tags().len()
    );
    if !store.defects().is_empty() {
        tracing::warn!("{} document(s) excluded from the snapshot", store.defects().len());
    }

    let generator = Generator::new(quill);
    generator.generate(&store)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}
