//! Realtime Prediction Module
//!
//! Composition root for ad-hoc, not-yet-persisted readings: validates the
//! raw request, forces the failure flag to false (a live reading is by
//! definition not yet classified), runs the scorer / detector / classifier,
//! and derives the power estimate, remaining-useful-life string, temperature
//! differential, and a one-line failure diagnosis.
//!
//! Validation happens before any scoring runs and names every missing or
//! non-numeric field, not just the first. A bad reading never affects any
//! other call - there is no shared state anywhere in the pipeline.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::anomaly::detect_anomalies;
use crate::scoring::{calculate_health_score, status_from_score};
use crate::types::thresholds::normal_ranges;
use crate::types::{AlertSeverity, MachineReading, MachineType, Prediction};

/// Health score below which a live reading is treated as a predicted failure.
pub const FAILURE_SCORE_FLOOR: u8 = 20;

/// One or more required numeric fields were missing or non-numeric.
///
/// `fields` lists every offending field name in request order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing or non-numeric required fields: {}", .fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<String>,
}

/// Raw realtime prediction request, as deserialized from a JSON body.
///
/// Numeric fields accept either JSON numbers or numeric strings (the upstream
/// clients send both); `machineType` is optional and defaults to `M`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PredictRequest {
    pub machine_type: Option<Value>,
    pub air_temperature: Option<Value>,
    pub process_temperature: Option<Value>,
    pub rotational_speed: Option<Value>,
    pub torque: Option<Value>,
    pub tool_wear: Option<Value>,
}

impl PredictRequest {
    /// Validate the request into a normalized reading.
    ///
    /// Collects all missing/non-numeric required fields before failing, so
    /// the caller sees the complete list in one round trip. The failure flag
    /// of the resulting reading is always false on this path.
    pub fn validate(&self) -> Result<MachineReading, ValidationError> {
        let mut fields = Vec::new();
        let air_temperature = numeric_field(&self.air_temperature, "airTemperature", &mut fields);
        let process_temperature =
            numeric_field(&self.process_temperature, "processTemperature", &mut fields);
        let rotational_speed =
            numeric_field(&self.rotational_speed, "rotationalSpeed", &mut fields);
        let torque = numeric_field(&self.torque, "torque", &mut fields);
        let tool_wear = numeric_field(&self.tool_wear, "toolWear", &mut fields);

        if !fields.is_empty() {
            return Err(ValidationError { fields });
        }

        Ok(MachineReading {
            machine_type: machine_type_or_default(self.machine_type.as_ref()),
            air_temperature: air_temperature.unwrap_or_default(),
            process_temperature: process_temperature.unwrap_or_default(),
            rotational_speed: rotational_speed.unwrap_or_default(),
            torque: torque.unwrap_or_default(),
            tool_wear: tool_wear.unwrap_or_default(),
            failure_status: false,
        })
    }
}

/// Coerce a JSON value to f64, recording the field name on failure.
fn numeric_field(value: &Option<Value>, name: &str, missing: &mut Vec<String>) -> Option<f64> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    if parsed.is_none() {
        missing.push(name.to_string());
    }
    parsed
}

/// Absent or unrecognized machine types fall back to `M`.
fn machine_type_or_default(value: Option<&Value>) -> MachineType {
    match value {
        Some(Value::String(s)) => MachineType::from_label(Some(s.as_str())),
        _ => MachineType::M,
    }
}

/// Run the full realtime prediction pipeline over one request.
///
/// Fails only on validation; every downstream component is a total function.
pub fn predict(request: &PredictRequest) -> Result<Prediction, ValidationError> {
    let reading = request.validate()?;

    let health_score = calculate_health_score(&reading);
    let alerts = detect_anomalies(&reading);

    // A live reading is treated as a predicted failure when the score drops
    // below the floor or any rule fires at critical severity.
    let failure_status = health_score < FAILURE_SCORE_FLOOR
        || alerts.iter().any(|a| a.severity == AlertSeverity::Critical);
    let status = status_from_score(health_score, failure_status);

    // Primary diagnosis: first critical alert, else first alert, else none.
    let predicted_failure = alerts
        .iter()
        .find(|a| a.severity == AlertSeverity::Critical)
        .or_else(|| alerts.first())
        .map_or_else(|| "No Failure Predicted".to_string(), |a| a.message.clone());

    let power = reading.power_watts().round() as i64;

    let tool_wear_remaining = (normal_ranges::TOOL_WEAR_MAX - reading.tool_wear).max(0.0);
    let rul_estimate = if tool_wear_remaining > 0.0 {
        format!("~{tool_wear_remaining} min of tool life remaining")
    } else {
        "Tool replacement required immediately".to_string()
    };

    let temp_differential = format!("{:.2}", reading.temp_differential());

    tracing::debug!(
        health_score,
        %status,
        failure_status,
        alert_count = alerts.len(),
        power,
        "realtime prediction"
    );

    Ok(Prediction {
        health_score,
        status,
        failure_status,
        predicted_failure,
        alerts,
        power,
        rul_estimate,
        temp_differential,
        inputs: reading,
    })
}
