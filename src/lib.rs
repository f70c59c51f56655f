//! # sign-eval
//!
//! Accuracy evaluation for traffic-sign image classification.
//!
//! Each image is tracked as an [`ImageRecord`] holding the sign types that
//! are actually present (ground truth) and the types a classifier predicted.
//! A [`RecordCollection`] answers the question "of the images containing a
//! given sign type, what percentage were classified as that type?".
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sign_eval::dataset::{self, FsListing};
//! use sign_eval::import::{self, PredictionImporter};
//! use sign_eval::SignType;
//!
//! let mut collection = dataset::build_collection(&FsListing, "./Dataset")?;
//! let predictions = PredictionImporter::auto_detect().import("predictions.csv")?;
//! import::apply_predictions(&mut collection, &predictions);
//!
//! println!("{}", collection.evaluate(SignType::StopSign));
//! ```
//!
//! ## Modules
//!
//! - [`error`]: Error types for the library
//! - [`record`]: Per-image ground truth and predictions
//! - [`collection`]: Record collection and accuracy queries
//! - [`sign_type`]: Recognized sign types
//! - [`dataset`]: Building a collection from a directory tree
//! - [`import`]: CSV import for classifier predictions
//! - [`report`]: Per-type accuracy reports

pub mod collection;
pub mod dataset;
pub mod error;
pub mod import;
pub mod record;
pub mod report;
pub mod sign_type;

// Re-export commonly used types
pub use collection::RecordCollection;
pub use dataset::{DatasetEntry, DirectoryListing, FsListing};
pub use error::{Error, Result};
pub use import::{ApplySummary, Prediction, PredictionImporter, PredictionSchema};
pub use record::ImageRecord;
pub use report::{AccuracyReport, TypeAccuracy};
pub use sign_type::SignType;
