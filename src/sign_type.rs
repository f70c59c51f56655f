//! Recognized traffic-sign types.

use serde::{Deserialize, Serialize};

/// Traffic-sign category that accuracy can be evaluated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignType {
    /// Round sign with a red border (prohibitions, speed limits).
    RedCircle,
    /// Square blue sign (information, mandatory directions).
    BlueSquare,
    /// Octagonal stop sign.
    StopSign,
}

impl SignType {
    /// Get all sign type variants.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::RedCircle, Self::BlueSquare, Self::StopSign]
    }

    /// Canonical label, as stored in record types and classifications.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::RedCircle => "red_circle",
            Self::BlueSquare => "blue_square",
            Self::StopSign => "stop_sign",
        }
    }

    /// Parse from string (case-insensitive).
    ///
    /// Also accepts the plural directory form (`stop_signs`) and a few
    /// spelling variants.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "red_circle" | "red_circles" | "redcircle" => Some(Self::RedCircle),
            "blue_square" | "blue_squares" | "bluesquare" => Some(Self::BlueSquare),
            "stop_sign" | "stop_signs" | "stopsign" | "stop" => Some(Self::StopSign),
            _ => None,
        }
    }

    /// Check whether a free-form label names this sign type exactly.
    #[must_use]
    pub fn matches(self, label: &str) -> bool {
        label == self.as_str()
    }
}

impl std::fmt::Display for SignType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SignType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_str_loose(s).ok_or_else(|| format!("Unknown sign type: {s}"))
    }
}
