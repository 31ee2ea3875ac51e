//! Health Scoring Module
//!
//! Deterministic, rule-based health score calculation for milling equipment.
//! The score is a fixed, auditable rule set calibrated against the AI4I 2020
//! dataset - no learned model, no adaptive thresholds, no persisted state.
//!
//! Scoring is deductive: every reading starts at 100 and loses points for
//! each degradation signal. Deduction terms are additive and individually
//! unbounded (apart from the temperature-differential cap), so two or three
//! simultaneous anomalies can legitimately drive the score to 0 without the
//! explicit failure override.

use crate::types::thresholds::{critical_limits, deductions, normal_ranges, status_bands};
use crate::types::{HealthStatus, MachineReading};

/// Calculate health score (0-100) for a single reading.
///
/// # Scoring Algorithm
///
/// 1. A known failure overrides everything: score is 0.
/// 2. Tool-wear deduction: wear ratio against the 253 min reference, x40.
///    This is the single strongest signal and is deliberately uncapped -
///    wear past the reference keeps deducting.
/// 3. Temperature-differential deduction: 2 points per kelvin away from the
///    nominal 10 K differential once outside the 8-12 K band, capped at 20.
/// 4. Speed deviation from the 2027 RPM band midpoint, relative, x15.
/// 5. Torque deviation from the 40.2 Nm band midpoint, relative, x10.
/// 6. Flat 15-point penalty per temperature sensor outside its critical
///    limits. Independent and additive with the deductions above.
///
/// The final score is clamped to [0, 100] and rounded to the nearest whole
/// number. Total function: any structurally complete reading scores.
pub fn calculate_health_score(reading: &MachineReading) -> u8 {
    if reading.failure_status {
        return 0;
    }

    let wear = tool_wear_deduction(reading.tool_wear);
    let temp_delta = temp_delta_deduction(reading.temp_differential());
    let speed = speed_deviation_deduction(reading.rotational_speed);
    let torque = torque_deviation_deduction(reading.torque);
    let range = range_penalties(reading.air_temperature, reading.process_temperature);

    let total = wear + temp_delta + speed + torque + range;
    tracing::debug!(
        wear,
        temp_delta,
        speed,
        torque,
        range,
        total,
        "health score deductions"
    );

    (100.0 - total).clamp(0.0, 100.0).round() as u8
}

/// Tool wear is the strongest indicator: 40 points at the reference maximum,
/// uncapped beyond it.
fn tool_wear_deduction(tool_wear: f64) -> f64 {
    (tool_wear / normal_ranges::TOOL_WEAR_MAX) * deductions::TOOL_WEAR_WEIGHT
}

/// Process-minus-air differential should sit near 10 K; outside the 8-12 K
/// band, deduct 2 points per kelvin of deviation, capped at 20.
fn temp_delta_deduction(delta: f64) -> f64 {
    if delta < deductions::TEMP_DELTA_MIN || delta > deductions::TEMP_DELTA_MAX {
        ((delta - deductions::TEMP_DELTA_NOMINAL).abs() * deductions::TEMP_DELTA_SLOPE)
            .min(deductions::TEMP_DELTA_CAP)
    } else {
        0.0
    }
}

/// Relative deviation from the midpoint of the normal speed band, x15.
fn speed_deviation_deduction(rotational_speed: f64) -> f64 {
    ((rotational_speed - deductions::SPEED_MIDPOINT).abs() / deductions::SPEED_MIDPOINT)
        * deductions::SPEED_WEIGHT
}

/// Relative deviation from the midpoint of the normal torque band, x10.
fn torque_deviation_deduction(torque: f64) -> f64 {
    ((torque - deductions::TORQUE_MIDPOINT).abs() / deductions::TORQUE_MIDPOINT)
        * deductions::TORQUE_WEIGHT
}

/// Flat penalty per temperature sensor outside its critical limits.
fn range_penalties(air_temperature: f64, process_temperature: f64) -> f64 {
    let mut penalty = 0.0;
    if air_temperature < critical_limits::AIR_TEMP_MIN
        || air_temperature > critical_limits::AIR_TEMP_MAX
    {
        penalty += deductions::RANGE_PENALTY;
    }
    if process_temperature < critical_limits::PROCESS_TEMP_MIN
        || process_temperature > critical_limits::PROCESS_TEMP_MAX
    {
        penalty += deductions::RANGE_PENALTY;
    }
    penalty
}

/// Classify a health score into a coarse status bucket.
///
/// Total function of (score, failure flag): a known failure is CRITICAL
/// regardless of score; otherwise the bands are closed on their lower bound
/// (exactly 80 is GOOD, exactly 60 is WARNING, exactly 40 is POOR).
pub fn status_from_score(score: u8, failure_status: bool) -> HealthStatus {
    if failure_status {
        return HealthStatus::Critical;
    }
    if score >= status_bands::GOOD_MIN {
        HealthStatus::Good
    } else if score >= status_bands::WARNING_MIN {
        HealthStatus::Warning
    } else if score >= status_bands::POOR_MIN {
        HealthStatus::Poor
    } else {
        HealthStatus::Critical
    }
}
