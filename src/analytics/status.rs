//! PM10 status classification.

use serde::{Deserialize, Serialize};

/// Status tier for a PM10 reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PmStatus {
    Good,
    Moderate,
    Poor,
    Critical,
}

impl PmStatus {
    /// Classifies a PM10 reading (µg/m³) into a status tier.
    ///
    /// | Range       | Status   |
    /// |-------------|----------|
    /// | > 250       | critical |
    /// | > 150       | poor     |
    /// | > 100       | moderate |
    /// | otherwise   | good     |
    ///
    /// Strict comparisons evaluated highest-to-lowest, so a reading on a
    /// threshold stays in the lower tier. Total over all reals; negative
    /// readings classify as good.
    pub fn classify(pm: f64) -> Self {
        match pm {
            pm if pm > 250.0 => Self::Critical,
            pm if pm > 150.0 => Self::Poor,
            pm if pm > 100.0 => Self::Moderate,
            _ => Self::Good,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::Poor => "poor",
            Self::Critical => "critical",
        }
    }

    /// True for the tiers that warrant immediate attention.
    pub fn is_priority(self) -> bool {
        matches!(self, Self::Poor | Self::Critical)
    }
}
