//! Machine reading types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::thresholds::RPM_TO_RAD_PER_SEC;

/// Machine build quality class (L/M/H = Low/Medium/High).
///
/// Unknown or absent classes fall back to `M` rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MachineType {
    L,
    #[default]
    M,
    H,
}

impl MachineType {
    /// Parse a quality-class label, defaulting to `M` for anything unknown.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("L") => Self::L,
            Some("H") => Self::H,
            _ => Self::M,
        }
    }
}

impl std::fmt::Display for MachineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::L => write!(f, "L"),
            Self::M => write!(f, "M"),
            Self::H => write!(f, "H"),
        }
    }
}

/// One sensor snapshot of a milling machine at a point in time.
///
/// This is the sole input to the scoring engine. It carries no identity and
/// no history; every engine call consumes exactly one immutable snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineReading {
    /// Build quality class
    #[serde(default)]
    pub machine_type: MachineType,
    /// Ambient air temperature (K)
    pub air_temperature: f64,
    /// Process temperature (K)
    pub process_temperature: f64,
    /// Spindle rotational speed (RPM)
    pub rotational_speed: f64,
    /// Spindle torque (Nm)
    pub torque: f64,
    /// Accumulated tool wear (minutes)
    pub tool_wear: f64,
    /// True when the reading is already known to correspond to a failure event
    #[serde(default)]
    pub failure_status: bool,
}

impl MachineReading {
    /// Process-minus-air temperature differential (K). Nominal is ~10 K.
    pub fn temp_differential(&self) -> f64 {
        self.process_temperature - self.air_temperature
    }

    /// Mechanical power output (W) from torque x angular velocity.
    pub fn power_watts(&self) -> f64 {
        self.torque * self.rotational_speed * RPM_TO_RAD_PER_SEC
    }
}

/// A persisted reading as handed over by the query/aggregation layer.
///
/// Storage and retrieval live outside this crate; this type only fixes the
/// shape the enrichment functions consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredReading {
    pub machine_id: String,
    #[serde(default)]
    pub machine_type: MachineType,
    pub air_temperature: f64,
    pub process_temperature: f64,
    pub rotational_speed: f64,
    pub torque: f64,
    pub tool_wear: f64,
    #[serde(default)]
    pub failure_status: bool,
    /// When the reading was recorded
    pub timestamp: DateTime<Utc>,
}

impl StoredReading {
    /// The sensor snapshot carried by this record.
    pub fn reading(&self) -> MachineReading {
        MachineReading {
            machine_type: self.machine_type,
            air_temperature: self.air_temperature,
            process_temperature: self.process_temperature,
            rotational_speed: self.rotational_speed,
            torque: self.torque,
            tool_wear: self.tool_wear,
            failure_status: self.failure_status,
        }
    }
}
