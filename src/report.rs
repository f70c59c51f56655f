//! Report types for accuracy results.
//!
//! This module defines the data structures for evaluation reports that can be
//! serialized to JSON.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sign_type::SignType;

/// Accuracy for a single sign type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAccuracy {
    /// Sign type evaluated.
    pub sign_type: SignType,

    /// Number of images whose ground truth contains the sign type.
    pub total: usize,

    /// Number of those images that were also classified as the sign type.
    pub correct: usize,

    /// `100 * correct / total`, or `100.0` when `total` is zero.
    pub accuracy: f64,
}

impl TypeAccuracy {
    /// Build from counts, applying the empty-denominator convention.
    #[must_use]
    pub fn new(sign_type: SignType, total: usize, correct: usize) -> Self {
        let accuracy = if total == 0 {
            100.0
        } else {
            correct as f64 * 100.0 / total as f64
        };
        Self {
            sign_type,
            total,
            correct,
            accuracy,
        }
    }

    /// Images containing the sign type that were not classified as it.
    #[must_use]
    pub fn missed(&self) -> usize {
        self.total.saturating_sub(self.correct)
    }
}

/// Per-type accuracy for a whole dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccuracyReport {
    /// Dataset name or identifier.
    pub dataset: String,

    /// Number of records evaluated.
    pub records: usize,

    /// Accuracy for each sign type, in [`SignType::all`] order.
    pub per_type: Vec<TypeAccuracy>,

    /// When this report was generated.
    #[serde(with = "chrono_serde")]
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl AccuracyReport {
    /// Create a new report with no per-type entries.
    #[must_use]
    pub fn new(dataset: String, records: usize) -> Self {
        Self {
            dataset,
            records,
            per_type: Vec::new(),
            timestamp: chrono::Utc::now(),
        }
    }

    /// Accuracy entry for a sign type.
    #[must_use]
    pub fn get(&self, sign: SignType) -> Option<&TypeAccuracy> {
        self.per_type.iter().find(|t| t.sign_type == sign)
    }

    /// Unweighted mean of per-type accuracies. `None` for an empty report.
    #[must_use]
    pub fn mean_accuracy(&self) -> Option<f64> {
        if self.per_type.is_empty() {
            return None;
        }
        let sum: f64 = self.per_type.iter().map(|t| t.accuracy).sum();
        Some(sum / self.per_type.len() as f64)
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

mod chrono_serde {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        dt.to_rfc3339().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_accuracy_zero_total() {
        let acc = TypeAccuracy::new(SignType::StopSign, 0, 0);
        assert_eq!(acc.accuracy, 100.0);
        assert_eq!(acc.missed(), 0);
    }

    #[test]
    fn test_type_accuracy_fraction() {
        let acc = TypeAccuracy::new(SignType::BlueSquare, 4, 1);
        assert_eq!(acc.accuracy, 25.0);
        assert_eq!(acc.missed(), 3);
    }

    #[test]
    fn test_missed_with_inconsistent_counts() {
        let acc = TypeAccuracy {
            sign_type: SignType::RedCircle,
            total: 1,
            correct: 3,
            accuracy: 300.0,
        };
        assert_eq!(acc.missed(), 0);
    }

    #[test]
    fn test_mean_accuracy() {
        let mut report = AccuracyReport::new("test".to_string(), 3);
        assert_eq!(report.mean_accuracy(), None);

        report.per_type.push(TypeAccuracy::new(SignType::RedCircle, 2, 1));
        report.per_type.push(TypeAccuracy::new(SignType::StopSign, 0, 0));
        assert_eq!(report.mean_accuracy(), Some(75.0));
    }

    #[test]
    fn test_report_json_timestamp() {
        let report = AccuracyReport::new("test".to_string(), 0);
        let json = report.to_json().unwrap();
        let parsed: AccuracyReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.timestamp, report.timestamp);
        assert_eq!(parsed.dataset, "test");
    }
}
