//! Ordered collection of image records with accuracy queries.
//!
//! ## Example
//!
//! ```
//! use sign_eval::{ImageRecord, RecordCollection, SignType};
//!
//! let mut collection = RecordCollection::new();
//!
//! let mut hit = ImageRecord::new("2123", "red_circle");
//! hit.add_classification("blue_square");
//! hit.add_classification("red_circle");
//! collection.add(hit);
//!
//! let mut miss = ImageRecord::new("2124", "red_circle");
//! miss.add_classification("blue_square");
//! collection.add(miss);
//!
//! assert_eq!(collection.evaluate(SignType::RedCircle), 50.0);
//! assert_eq!(collection.evaluate(SignType::StopSign), 100.0);
//! ```

use log::warn;
use serde::{Deserialize, Serialize};

use crate::record::ImageRecord;
use crate::report::{AccuracyReport, TypeAccuracy};
use crate::sign_type::SignType;

/// Records in insertion order.
///
/// The collection only grows. It does not enforce unique filenames; callers
/// look up before inserting (see [`crate::dataset::ingest`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCollection {
    records: Vec<ImageRecord>,
}

impl RecordCollection {
    /// Create a new empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn add(&mut self, record: ImageRecord) {
        self.records.push(record);
    }

    /// 0-based position of the first record with the given filename.
    #[must_use]
    pub fn find_index_by_filename(&self, filename: &str) -> Option<usize> {
        self.records.iter().position(|r| r.filename() == filename)
    }

    /// Mutable access to the first record with the given filename.
    pub fn find_by_filename_mut(&mut self, filename: &str) -> Option<&mut ImageRecord> {
        self.records.iter_mut().find(|r| r.filename() == filename)
    }

    /// Get the record at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Use [`Self::try_get`] to check.
    #[must_use]
    pub fn get(&self, index: usize) -> &ImageRecord {
        &self.records[index]
    }

    /// Get the record at `index`, or `None` if out of range.
    #[must_use]
    pub fn try_get(&self, index: usize) -> Option<&ImageRecord> {
        self.records.get(index)
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRecord> {
        self.records.iter()
    }

    /// Count records containing `sign` in their ground truth and how many
    /// of those were classified as `sign`.
    #[must_use]
    pub fn type_accuracy(&self, sign: SignType) -> TypeAccuracy {
        let total = self.records.iter().filter(|r| r.has_type(sign)).count();
        let correct = self.records.iter().filter(|r| r.is_correct_for(sign)).count();

        TypeAccuracy::new(sign, total, correct)
    }

    /// Percentage of images containing `sign` that were classified as `sign`.
    ///
    /// Returns `100.0` when no record contains `sign`.
    #[must_use]
    pub fn evaluate(&self, sign: SignType) -> f64 {
        self.type_accuracy(sign).accuracy
    }

    /// Accuracy for a sign type given by label.
    ///
    /// Only the canonical labels (`red_circle`, `blue_square`, `stop_sign`)
    /// are recognized. Anything else logs a warning and scores `0.0`.
    #[must_use]
    pub fn evaluate_classification_accuracy(&self, label: &str) -> f64 {
        match SignType::all().iter().find(|sign| sign.matches(label)) {
            Some(&sign) => self.evaluate(sign),
            None => {
                warn!(
                    "Unrecognized sign type '{}', expected one of: red_circle, blue_square, stop_sign",
                    label
                );
                0.0
            }
        }
    }

    /// Accuracy for every recognized sign type.
    #[must_use]
    pub fn accuracy_report(&self, name: impl Into<String>) -> AccuracyReport {
        let mut report = AccuracyReport::new(name.into(), self.len());
        report.per_type = SignType::all().iter().map(|&s| self.type_accuracy(s)).collect();
        report
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a ImageRecord;
    type IntoIter = std::slice::Iter<'a, ImageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<ImageRecord> for RecordCollection {
    fn from_iter<I: IntoIterator<Item = ImageRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
