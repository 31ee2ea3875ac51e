//! Fleet Enrichment & Summary Module
//!
//! Pure computation backing the query/aggregation layer: persisted readings
//! come in with their real failure flags and historical timestamps, and leave
//! enriched with a freshly computed score, status, and alert list. Status is
//! never stored upstream - it is always recomputed from the current score so
//! a rule change propagates to historical data on the next read.

use serde::{Deserialize, Serialize};

use crate::anomaly::detect_anomalies;
use crate::scoring::{calculate_health_score, status_from_score};
use crate::types::{Alert, HealthStatus, StoredReading};

/// A persisted reading enriched with derived health fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedReading {
    #[serde(flatten)]
    pub record: StoredReading,
    pub health_score: u8,
    pub status: HealthStatus,
    pub alerts: Vec<Alert>,
}

/// Enrich one stored reading with score, status, and alerts.
pub fn enrich_reading(record: &StoredReading) -> EnrichedReading {
    let reading = record.reading();
    let health_score = calculate_health_score(&reading);
    EnrichedReading {
        record: record.clone(),
        health_score,
        status: status_from_score(health_score, record.failure_status),
        alerts: detect_anomalies(&reading),
    }
}

/// Per-status record counts for a fleet summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    #[serde(rename = "GOOD")]
    pub good: usize,
    #[serde(rename = "WARNING")]
    pub warning: usize,
    #[serde(rename = "POOR")]
    pub poor: usize,
    #[serde(rename = "CRITICAL")]
    pub critical: usize,
}

/// Aggregate statistics over a batch of enriched records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSummary {
    pub total: usize,
    pub failed: usize,
    pub operational: usize,
    /// Mean health score, rounded to the nearest whole number
    pub average_health_score: u8,
    pub status_breakdown: StatusBreakdown,
    /// Failure percentage formatted to two decimals
    pub failure_rate: String,
}

/// Compute summary statistics over a batch of enriched records.
///
/// An empty batch yields an all-zero summary with a "0.00" rate.
pub fn summarize_fleet(records: &[EnrichedReading]) -> FleetSummary {
    let total = records.len();
    if total == 0 {
        return FleetSummary {
            failure_rate: "0.00".to_string(),
            ..FleetSummary::default()
        };
    }

    let failed = records.iter().filter(|r| r.record.failure_status).count();
    let score_sum: u64 = records.iter().map(|r| u64::from(r.health_score)).sum();

    let mut breakdown = StatusBreakdown::default();
    for record in records {
        match record.status {
            HealthStatus::Good => breakdown.good += 1,
            HealthStatus::Warning => breakdown.warning += 1,
            HealthStatus::Poor => breakdown.poor += 1,
            HealthStatus::Critical => breakdown.critical += 1,
        }
    }

    FleetSummary {
        total,
        failed,
        operational: total - failed,
        average_health_score: (score_sum as f64 / total as f64).round() as u8,
        status_breakdown: breakdown,
        failure_rate: format!("{:.2}", failed as f64 / total as f64 * 100.0),
    }
}
