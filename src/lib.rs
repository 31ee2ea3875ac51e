//! Millguard: machine health scoring and anomaly detection
//!
//! Deterministic rule engine that turns a single milling-machine sensor
//! reading into a normalized health assessment: a 0-100 health score, a
//! coarse status classification, and an ordered list of typed anomaly alerts.
//!
//! ## Architecture
//!
//! Three stateless components composed in strict dependency order, plus a
//! composition root for live readings:
//!
//! - **Health scorer**: deductive 0-100 score from a baseline of 100
//! - **Anomaly detector**: fixed-order TWF/HDF/PWF/OSF/TEMP rule checks,
//!   independent of the score
//! - **Status classifier**: GOOD/WARNING/POOR/CRITICAL bands over the score
//! - **Realtime predictor**: validation + composition for ad-hoc readings
//!
//! Data flows one way: reading -> {score, alerts} -> status -> prediction.
//! Everything is a pure function over immutable inputs; any call may run on
//! any thread concurrently with any other, no synchronization required.
//! Transport, persistence, and presentation live in external collaborators.

pub mod anomaly;
pub mod predictor;
pub mod scoring;
pub mod summary;
pub mod types;

// Re-export the engine entry points
pub use anomaly::detect_anomalies;
pub use predictor::{predict, PredictRequest, ValidationError, FAILURE_SCORE_FLOOR};
pub use scoring::{calculate_health_score, status_from_score};
pub use summary::{enrich_reading, summarize_fleet, EnrichedReading, FleetSummary, StatusBreakdown};

// Re-export commonly used types
pub use types::{
    Alert, AlertSeverity, AlertType, HealthStatus, MachineReading, MachineType, Prediction,
    StoredReading,
};
