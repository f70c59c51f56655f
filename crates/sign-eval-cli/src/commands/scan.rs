//! Dataset scan command.

use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use sign_eval::dataset::{self, FsListing};

pub fn run(path: &Path) -> Result<()> {
    info!("Scanning dataset in: {}", path.display());

    let collection = dataset::build_collection(&FsListing, path)
        .with_context(|| format!("Failed to scan dataset in {}", path.display()))?;

    for record in &collection {
        println!("{}\t{}", record.filename(), record.types().join(","));
    }

    println!("{} images", collection.len());
    Ok(())
}
