//! Per-image ground truth and predictions.

use serde::{Deserialize, Serialize};

use crate::sign_type::SignType;

/// One image with its ground-truth sign types and model classifications.
///
/// Labels are kept as free-form strings so that any directory name or
/// predictor output can be recorded; evaluation only looks for the
/// canonical label of a [`SignType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord")]
pub struct ImageRecord {
    /// Image file name (without directories).
    filename: String,

    /// Sign types present in the image. Never empty.
    types: Vec<String>,

    /// Sign types predicted for the image.
    classifications: Vec<String>,
}

/// Unchecked wire form of [`ImageRecord`].
#[derive(Deserialize)]
struct RawRecord {
    filename: String,
    types: Vec<String>,
    #[serde(default)]
    classifications: Vec<String>,
}

impl TryFrom<RawRecord> for ImageRecord {
    type Error = String;

    fn try_from(raw: RawRecord) -> std::result::Result<Self, Self::Error> {
        if raw.types.is_empty() {
            return Err(format!("Record {} has no types", raw.filename));
        }
        Ok(Self {
            filename: raw.filename,
            types: raw.types,
            classifications: raw.classifications,
        })
    }
}

impl ImageRecord {
    /// Create a record seeded with one ground-truth type and no classifications.
    #[must_use]
    pub fn new(filename: impl Into<String>, sign_type: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            types: vec![sign_type.into()],
            classifications: Vec::new(),
        }
    }

    /// Append another ground-truth type. Duplicates are kept.
    pub fn add_type(&mut self, sign_type: impl Into<String>) {
        self.types.push(sign_type.into());
    }

    /// Append a predicted type. Duplicates are kept.
    pub fn add_classification(&mut self, classification: impl Into<String>) {
        self.classifications.push(classification.into());
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[must_use]
    pub fn types(&self) -> &[String] {
        &self.types
    }

    #[must_use]
    pub fn classifications(&self) -> &[String] {
        &self.classifications
    }

    /// Whether the ground truth contains `sign`.
    #[must_use]
    pub fn has_type(&self, sign: SignType) -> bool {
        self.types.iter().any(|t| sign.matches(t))
    }

    /// Whether any classification names `sign`.
    #[must_use]
    pub fn is_classified_as(&self, sign: SignType) -> bool {
        self.classifications.iter().any(|c| sign.matches(c))
    }

    /// Whether `sign` is present in the ground truth and was also predicted.
    #[must_use]
    pub fn is_correct_for(&self, sign: SignType) -> bool {
        self.has_type(sign) && self.is_classified_as(sign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let record = ImageRecord::new("2123", "red_circle");
        assert_eq!(record.filename(), "2123");
        assert_eq!(record.types(), ["red_circle"]);
        assert!(record.classifications().is_empty());
    }

    #[test]
    fn test_empty_strings_accepted() {
        let record = ImageRecord::new("", "");
        assert_eq!(record.filename(), "");
        assert_eq!(record.types().len(), 1);
    }

    #[test]
    fn test_append_counts() {
        let mut record = ImageRecord::new("00042.ppm", "stop_sign");
        for _ in 0..3 {
            record.add_type("blue_square");
        }
        record.add_classification("stop_sign");
        record.add_classification("stop_sign");

        assert_eq!(record.types().len(), 4);
        assert_eq!(record.classifications().len(), 2);
        assert_eq!(record.classifications(), ["stop_sign", "stop_sign"]);
    }

    #[test]
    fn test_is_correct_for() {
        let mut record = ImageRecord::new("a.png", "red_circle");
        record.add_classification("blue_square");
        assert!(record.has_type(SignType::RedCircle));
        assert!(!record.is_correct_for(SignType::RedCircle));
        // Predicted but not in ground truth does not count
        assert!(!record.is_correct_for(SignType::BlueSquare));

        record.add_classification("red_circle");
        assert!(record.is_correct_for(SignType::RedCircle));
    }

    #[test]
    fn test_deserialize_rejects_empty_types() {
        let err = serde_json::from_str::<ImageRecord>(r#"{"filename":"a","types":[]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("has no types"), "{err}");
    }

    #[test]
    fn test_deserialize_valid_record() {
        let record: ImageRecord =
            serde_json::from_str(r#"{"filename":"a.png","types":["stop_sign"]}"#).unwrap();
        assert_eq!(record, ImageRecord::new("a.png", "stop_sign"));

        let mut predicted = ImageRecord::new("b.png", "red_circle");
        predicted.add_classification("blue_square");
        let json = serde_json::to_string(&predicted).unwrap();
        assert_eq!(serde_json::from_str::<ImageRecord>(&json).unwrap(), predicted);
    }
}
