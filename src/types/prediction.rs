//! Derived health assessment types

use serde::{Deserialize, Serialize};

use super::{Alert, MachineReading};

/// Coarse health status bucket, always recomputed from the current score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    Good,
    Warning,
    Poor,
    Critical,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Good => write!(f, "GOOD"),
            Self::Warning => write!(f, "WARNING"),
            Self::Poor => write!(f, "POOR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Full realtime prediction for one ad-hoc, not-yet-persisted reading.
///
/// Bundles the health score, status, and alerts with the derived power,
/// remaining-useful-life estimate, temperature differential, and a one-line
/// failure diagnosis, plus the normalized input echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Synthetic fitness metric, 100 = nominal, 0 = failed
    pub health_score: u8,
    pub status: HealthStatus,
    /// Failure flag derived from score floor and critical alerts
    pub failure_status: bool,
    /// One-sentence diagnosis (primary alert message, or "No Failure Predicted")
    pub predicted_failure: String,
    pub alerts: Vec<Alert>,
    /// Estimated mechanical power output (W, rounded)
    pub power: i64,
    /// Remaining-useful-life estimate for the tool
    pub rul_estimate: String,
    /// Process-minus-air differential, formatted to two decimals
    pub temp_differential: String,
    /// The validated input this prediction was computed from
    pub inputs: MachineReading,
}
