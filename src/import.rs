//! CSV import for classifier predictions.
//!
//! An external classifier produces `(filename, predicted type)` pairs. This
//! module reads them from CSV and attaches them to the matching records as
//! classifications.
//!
//! The importer auto-detects common column names, or takes explicit ones:
//!
//! ```rust,ignore
//! use sign_eval::import::{PredictionImporter, PredictionSchema};
//!
//! let schema = PredictionSchema::builder()
//!     .filename_column("image")
//!     .label_column("predicted")
//!     .build();
//!
//! let predictions = PredictionImporter::new(schema).import("predictions.csv")?;
//! let summary = sign_eval::import::apply_predictions(&mut collection, &predictions);
//! ```

use std::io::Read;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::collection::RecordCollection;
use crate::error::{Error, Result};

/// Column aliases tried when no filename column is configured.
const FILENAME_ALIASES: &[&str] = &["filename", "file", "image", "name", "path"];

/// Column aliases tried when no label column is configured.
const LABEL_ALIASES: &[&str] = &[
    "classification",
    "prediction",
    "predicted",
    "label",
    "type",
    "class",
];

/// One prediction from an external classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Image file name the prediction belongs to.
    pub filename: String,

    /// Predicted sign type label.
    pub label: String,
}

impl Prediction {
    #[must_use]
    pub fn new(filename: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            label: label.into(),
        }
    }
}

/// Column names used when reading predictions.
#[derive(Debug, Clone, Default)]
pub struct PredictionSchema {
    /// Column name for the image file name.
    pub filename_column: Option<String>,
    /// Column name for the predicted label.
    pub label_column: Option<String>,
}

impl PredictionSchema {
    /// Create a schema builder.
    #[must_use]
    pub fn builder() -> PredictionSchemaBuilder {
        PredictionSchemaBuilder::default()
    }

    /// Create a schema that auto-detects columns from common names.
    #[must_use]
    pub fn auto_detect() -> Self {
        Self::default()
    }

    fn find_column(headers: &[&str], primary: Option<&str>, aliases: &[&str]) -> Option<usize> {
        // An explicitly configured column must exist; aliases are not tried
        if let Some(name) = primary {
            return find_header_index(headers, name);
        }

        aliases
            .iter()
            .find_map(|alias| find_header_index(headers, alias))
    }
}

/// Builder for [`PredictionSchema`].
#[derive(Debug, Default)]
pub struct PredictionSchemaBuilder {
    schema: PredictionSchema,
}

impl PredictionSchemaBuilder {
    /// Set the filename column name.
    #[must_use]
    pub fn filename_column(mut self, name: impl Into<String>) -> Self {
        self.schema.filename_column = Some(name.into());
        self
    }

    /// Set the predicted label column name.
    #[must_use]
    pub fn label_column(mut self, name: impl Into<String>) -> Self {
        self.schema.label_column = Some(name.into());
        self
    }

    /// Build the schema.
    #[must_use]
    pub fn build(self) -> PredictionSchema {
        self.schema
    }
}

/// CSV importer for predictions.
pub struct PredictionImporter {
    schema: PredictionSchema,
}

impl PredictionImporter {
    /// Create a new importer with the given schema.
    #[must_use]
    pub fn new(schema: PredictionSchema) -> Self {
        Self { schema }
    }

    /// Create an importer that auto-detects columns.
    #[must_use]
    pub fn auto_detect() -> Self {
        Self::new(PredictionSchema::auto_detect())
    }

    /// Import predictions from a CSV file.
    pub fn import(&self, path: impl AsRef<Path>) -> Result<Vec<Prediction>> {
        let reader = csv::Reader::from_path(path.as_ref())?;
        self.read(reader)
    }

    /// Import predictions from any CSV source.
    pub fn import_reader<R: Read>(&self, source: R) -> Result<Vec<Prediction>> {
        self.read(csv::Reader::from_reader(source))
    }

    fn read<R: Read>(&self, mut reader: csv::Reader<R>) -> Result<Vec<Prediction>> {
        let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
        let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();

        let filename_idx = PredictionSchema::find_column(
            &header_refs,
            self.schema.filename_column.as_deref(),
            FILENAME_ALIASES,
        )
        .ok_or_else(|| Error::CsvImport {
            line: 1,
            reason: "Could not find filename column".to_string(),
        })?;

        let label_idx = PredictionSchema::find_column(
            &header_refs,
            self.schema.label_column.as_deref(),
            LABEL_ALIASES,
        )
        .ok_or_else(|| Error::CsvImport {
            line: 1,
            reason: "Could not find classification column".to_string(),
        })?;

        let mut predictions = Vec::new();

        for (line_num, record) in reader.records().enumerate() {
            let record = record.map_err(|e| Error::CsvImport {
                line: line_num + 2, // +2 for 1-based and header
                reason: e.to_string(),
            })?;

            let filename = record.get(filename_idx).unwrap_or("").trim();
            let label = record.get(label_idx).unwrap_or("").trim();

            if filename.is_empty() || label.is_empty() {
                continue;
            }

            predictions.push(Prediction::new(filename, label));
        }

        Ok(predictions)
    }
}

/// Find a header index by name (case-insensitive).
fn find_header_index(headers: &[&str], name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name))
}

/// Outcome of attaching predictions to a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplySummary {
    /// Predictions attached to a record.
    pub applied: usize,
    /// Predictions whose filename matched no record.
    pub unmatched: usize,
}

/// Attach each prediction as a classification on the record with the same
/// filename. Predictions for unknown filenames are counted, not errors.
pub fn apply_predictions(
    collection: &mut RecordCollection,
    predictions: &[Prediction],
) -> ApplySummary {
    let mut summary = ApplySummary::default();

    for prediction in predictions {
        match collection.find_by_filename_mut(&prediction.filename) {
            Some(record) => {
                record.add_classification(prediction.label.as_str());
                summary.applied += 1;
            }
            None => {
                debug!("No record for prediction on {}", prediction.filename);
                summary.unmatched += 1;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::ImageRecord;
    use crate::sign_type::SignType;

    #[test]
    fn test_schema_builder() {
        let schema = PredictionSchema::builder()
            .filename_column("img")
            .label_column("pred")
            .build();

        assert_eq!(schema.filename_column, Some("img".to_string()));
        assert_eq!(schema.label_column, Some("pred".to_string()));
    }

    #[test]
    fn test_find_header_index() {
        let headers = ["Filename", " Prediction ", "Score"];
        assert_eq!(find_header_index(&headers, "filename"), Some(0));
        assert_eq!(find_header_index(&headers, "PREDICTION"), Some(1));
        assert_eq!(find_header_index(&headers, "unknown"), None);
    }

    #[test]
    fn test_auto_detect_columns() {
        let csv = "score,image,predicted\n0.9,1.png,stop_sign\n0.4,2.png,\n0.7,3.png,red_circle\n";
        let predictions = PredictionImporter::auto_detect()
            .import_reader(csv.as_bytes())
            .unwrap();

        assert_eq!(
            predictions,
            vec![
                Prediction::new("1.png", "stop_sign"),
                Prediction::new("3.png", "red_circle"),
            ]
        );
    }

    #[test]
    fn test_explicit_column_must_exist() {
        let schema = PredictionSchema::builder().label_column("guess").build();
        let err = PredictionImporter::new(schema)
            .import_reader("filename,label\na.png,stop_sign\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, Error::CsvImport { line: 1, .. }));
    }

    #[test]
    fn test_import_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("predictions.csv");
        std::fs::write(&path, "filename,classification\n2123,blue_square\n2123,red_circle\n")
            .unwrap();

        let predictions = PredictionImporter::auto_detect().import(&path).unwrap();
        assert_eq!(predictions.len(), 2);
        assert_eq!(predictions[1].label, "red_circle");
    }

    #[test]
    fn test_apply_predictions() {
        let mut collection = RecordCollection::new();
        collection.add(ImageRecord::new("a.png", "red_circle"));
        collection.add(ImageRecord::new("b.png", "red_circle"));

        let predictions = [
            Prediction::new("a.png", "blue_square"),
            Prediction::new("a.png", "red_circle"),
            Prediction::new("b.png", "blue_square"),
            Prediction::new("zzz.png", "stop_sign"),
        ];

        let summary = apply_predictions(&mut collection, &predictions);
        assert_eq!(summary, ApplySummary { applied: 3, unmatched: 1 });
        assert_eq!(collection.get(0).classifications(), ["blue_square", "red_circle"]);
        assert_eq!(collection.evaluate(SignType::RedCircle), 50.0);
    }
}
