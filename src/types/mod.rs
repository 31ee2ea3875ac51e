//! Shared data structures for the machine health engine
//!
//! This module defines the value types flowing through the scoring pipeline:
//! - `MachineReading`: one sensor snapshot (engine input)
//! - `Alert`: typed, severity-tagged anomaly signal
//! - `HealthStatus` / `Prediction`: derived assessment (engine output)
//! - `StoredReading`: a persisted snapshot as supplied by the query layer
//!
//! All of these are value objects. Nothing here has identity or lifecycle
//! beyond a single call; outputs are produced fresh per call and never mutated.

mod alert;
mod prediction;
mod reading;
// Public because it contains the empirical constants sub-modules
// which must remain accessible as `types::thresholds`.
pub mod thresholds;

pub use alert::*;
pub use prediction::*;
pub use reading::*;
