//! Accuracy evaluation command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use sign_eval::dataset::{self, FsListing};
use sign_eval::import::{self, PredictionImporter, PredictionSchema};
use sign_eval::{AccuracyReport, RecordCollection};

pub struct Options {
    pub path: PathBuf,
    pub predictions: Option<PathBuf>,
    pub filename_col: Option<String>,
    pub label_col: Option<String>,
    pub sign_type: Option<String>,
    pub json: bool,
}

pub fn run(opts: &Options) -> Result<()> {
    info!("Loading dataset from: {}", opts.path.display());

    let mut collection = dataset::build_collection(&FsListing, &opts.path)
        .with_context(|| format!("Failed to scan dataset in {}", opts.path.display()))?;
    info!("Loaded {} images", collection.len());

    if let Some(predictions_path) = &opts.predictions {
        load_predictions(&mut collection, predictions_path, opts)?;
    }

    if let Some(label) = &opts.sign_type {
        println!("{:.1}", collection.evaluate_classification_accuracy(label));
        return Ok(());
    }

    let name = opts
        .path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset");
    let report = collection.accuracy_report(name);

    if opts.json {
        println!("{}", report.to_json()?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn load_predictions(collection: &mut RecordCollection, path: &Path, opts: &Options) -> Result<()> {
    let mut schema = PredictionSchema::builder();
    if let Some(col) = &opts.filename_col {
        schema = schema.filename_column(col.as_str());
    }
    if let Some(col) = &opts.label_col {
        schema = schema.label_column(col.as_str());
    }

    let predictions = PredictionImporter::new(schema.build())
        .import(path)
        .with_context(|| format!("Failed to import predictions from {}", path.display()))?;

    let summary = import::apply_predictions(collection, &predictions);
    info!("Applied {} predictions", summary.applied);
    if summary.unmatched > 0 {
        warn!(
            "{} predictions did not match any image in the dataset",
            summary.unmatched
        );
    }

    Ok(())
}

fn print_report(report: &AccuracyReport) {
    println!("Dataset: {} ({} images)", report.dataset, report.records);
    println!("{:-<50}", "");
    println!("{:<15} {:>8} {:>8} {:>12}", "Type", "Images", "Correct", "Accuracy");
    println!("{:-<50}", "");

    for entry in &report.per_type {
        println!(
            "{:<15} {:>8} {:>8} {:>11.2}%",
            entry.sign_type.as_str(),
            entry.total,
            entry.correct,
            entry.accuracy
        );
    }

    if let Some(mean) = report.mean_accuracy() {
        println!("{:-<50}", "");
        println!("{:<33} {:>11.2}%", "Mean", mean);
    }
}
