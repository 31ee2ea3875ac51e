//! Anomaly alert types
//!
//! Alert type codes follow the AI4I failure taxonomy: TWF (tool wear),
//! HDF (heat dissipation), PWF (power), OSF (overstrain), plus TEMP for
//! plain temperature-range excursions.

use serde::{Deserialize, Serialize};

/// Anomaly alert type code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertType {
    /// Tool Wear Failure
    Twf,
    /// Heat Dissipation Failure
    Hdf,
    /// Power Failure
    Pwf,
    /// Overstrain Failure
    Osf,
    /// Temperature range excursion
    Temp,
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Twf => write!(f, "TWF"),
            Self::Hdf => write!(f, "HDF"),
            Self::Pwf => write!(f, "PWF"),
            Self::Osf => write!(f, "OSF"),
            Self::Temp => write!(f, "TEMP"),
        }
    }
}

/// Alert severity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Critical,
}

impl std::fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// A typed anomaly signal derived from a single reading.
///
/// Produced fresh per call, never stored or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub severity: AlertSeverity,
    pub message: String,
}

impl Alert {
    pub fn new(alert_type: AlertType, severity: AlertSeverity, message: impl Into<String>) -> Self {
        Self {
            alert_type,
            severity,
            message: message.into(),
        }
    }
}
