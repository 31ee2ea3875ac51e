//! Anomaly Detection Module
//!
//! Independent, threshold-based anomaly rules evaluated against a single
//! sensor snapshot. Detection is deliberately a strictly ordered sequence of
//! checks, not a map iterated in arbitrary order: callers take "the first
//! alert" or "the first critical alert" as the primary anomaly, so the
//! emission order TWF, HDF, PWF, OSF, TEMP is part of the contract.
//!
//! Rules are not mutually exclusive - one reading can emit all five alerts.
//! Nothing is deduplicated or merged, and detection runs independently of
//! the health score.

use crate::types::thresholds::alert_triggers;
use crate::types::{Alert, AlertSeverity, AlertType, MachineReading};

/// Detect anomalies in a single reading, in the fixed emission order.
///
/// Returns an empty list for a nominal reading. Total function: out-of-range
/// values trigger alerts, they never error.
pub fn detect_anomalies(reading: &MachineReading) -> Vec<Alert> {
    let mut alerts = Vec::new();

    // 1. Tool Wear Failure (TWF)
    if reading.tool_wear > alert_triggers::TOOL_WEAR_WARNING {
        let severity = if reading.tool_wear > alert_triggers::TOOL_WEAR_CRITICAL {
            AlertSeverity::Critical
        } else {
            AlertSeverity::Warning
        };
        alerts.push(Alert::new(
            AlertType::Twf,
            severity,
            format!(
                "Tool wear at {} min - replacement recommended",
                reading.tool_wear
            ),
        ));
    }

    // 2. Heat Dissipation Failure (HDF): low differential at low speed
    if reading.temp_differential() < alert_triggers::HDF_TEMP_DELTA_MAX
        && reading.rotational_speed < alert_triggers::HDF_SPEED_MAX
    {
        alerts.push(Alert::new(
            AlertType::Hdf,
            AlertSeverity::Warning,
            "Heat dissipation anomaly detected",
        ));
    }

    // 3. Power Failure (PWF): mechanical power outside the working window
    let power = reading.power_watts();
    if power < alert_triggers::POWER_LOW_WARNING || power > alert_triggers::POWER_HIGH_WARNING {
        let severity = if power < alert_triggers::POWER_LOW_CRITICAL
            || power > alert_triggers::POWER_HIGH_CRITICAL
        {
            AlertSeverity::Critical
        } else {
            AlertSeverity::Warning
        };
        alerts.push(Alert::new(
            AlertType::Pwf,
            severity,
            format!("Power output anomaly: {}W", power.round() as i64),
        ));
    }

    // 4. Overstrain Failure (OSF): no warning tier, always critical
    if reading.tool_wear * reading.torque > alert_triggers::OVERSTRAIN_PRODUCT_MAX {
        alerts.push(Alert::new(
            AlertType::Osf,
            AlertSeverity::Critical,
            "Overstrain risk - high torque with worn tool",
        ));
    }

    // 5. Temperature range excursion (TEMP)
    if reading.air_temperature > alert_triggers::AIR_TEMP_ELEVATED {
        alerts.push(Alert::new(
            AlertType::Temp,
            AlertSeverity::Warning,
            format!("Air temperature elevated: {}K", reading.air_temperature),
        ));
    }

    alerts
}
