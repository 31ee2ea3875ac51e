//! Empirical operating ranges, scoring weights, and alert trigger thresholds
//!
//! All constants here are tied to the AI4I 2020 milling dataset the engine was
//! calibrated against. They are preserved exactly as observed; deriving "more
//! principled" values would change every downstream score.

/// RPM to rad/s conversion factor (used for mechanical power in watts).
pub const RPM_TO_RAD_PER_SEC: f64 = std::f64::consts::PI / 30.0;

/// Normal operating ranges observed across the calibration dataset
pub mod normal_ranges {
    /// Minimum normal air temperature (K)
    pub const AIR_TEMP_MIN: f64 = 295.0;
    /// Maximum normal air temperature (K)
    pub const AIR_TEMP_MAX: f64 = 304.0;
    /// Minimum normal process temperature (K)
    pub const PROCESS_TEMP_MIN: f64 = 305.0;
    /// Maximum normal process temperature (K)
    pub const PROCESS_TEMP_MAX: f64 = 314.0;
    /// Minimum normal rotational speed (RPM)
    pub const SPEED_MIN: f64 = 1168.0;
    /// Maximum normal rotational speed (RPM)
    pub const SPEED_MAX: f64 = 2886.0;
    /// Minimum normal torque (Nm)
    pub const TORQUE_MIN: f64 = 3.8;
    /// Maximum normal torque (Nm)
    pub const TORQUE_MAX: f64 = 76.6;
    /// Maximum observed tool wear (minutes) - reference for wear ratio and RUL
    pub const TOOL_WEAR_MAX: f64 = 253.0;
}

/// Hard limits beyond which a sensor is considered out of range
pub mod critical_limits {
    /// Air temperature lower limit (K)
    pub const AIR_TEMP_MIN: f64 = 293.0;
    /// Air temperature upper limit (K)
    pub const AIR_TEMP_MAX: f64 = 306.0;
    /// Process temperature lower limit (K)
    pub const PROCESS_TEMP_MIN: f64 = 303.0;
    /// Process temperature upper limit (K)
    pub const PROCESS_TEMP_MAX: f64 = 316.0;
}

/// Deduction weights and bands for the deductive health score
pub mod deductions {
    /// Maximum tool-wear deduction at the reference wear (strongest signal)
    pub const TOOL_WEAR_WEIGHT: f64 = 40.0;

    /// Nominal process-minus-air temperature differential (K)
    pub const TEMP_DELTA_NOMINAL: f64 = 10.0;
    /// Differential below this deducts points (K)
    pub const TEMP_DELTA_MIN: f64 = 8.0;
    /// Differential above this deducts points (K)
    pub const TEMP_DELTA_MAX: f64 = 12.0;
    /// Points deducted per kelvin of differential deviation
    pub const TEMP_DELTA_SLOPE: f64 = 2.0;
    /// Cap on the temperature-differential deduction
    pub const TEMP_DELTA_CAP: f64 = 20.0;

    /// Midpoint of the normal speed band (RPM)
    pub const SPEED_MIDPOINT: f64 = 2027.0;
    /// Maximum-weight multiplier for relative speed deviation
    pub const SPEED_WEIGHT: f64 = 15.0;

    /// Midpoint of the normal torque band (Nm)
    pub const TORQUE_MIDPOINT: f64 = 40.2;
    /// Maximum-weight multiplier for relative torque deviation
    pub const TORQUE_WEIGHT: f64 = 10.0;

    /// Flat penalty per temperature sensor outside its critical limits
    pub const RANGE_PENALTY: f64 = 15.0;
}

/// Health score bands for status classification (closed on the lower bound)
pub mod status_bands {
    /// Score at or above this is GOOD
    pub const GOOD_MIN: u8 = 80;
    /// Score at or above this (and below GOOD) is WARNING
    pub const WARNING_MIN: u8 = 60;
    /// Score at or above this (and below WARNING) is POOR; below is CRITICAL
    pub const POOR_MIN: u8 = 40;
}

/// Trigger points for the anomaly detection rules
pub mod alert_triggers {
    /// Tool wear above this emits a TWF warning (minutes)
    pub const TOOL_WEAR_WARNING: f64 = 200.0;
    /// Tool wear above this upgrades TWF to critical (minutes)
    pub const TOOL_WEAR_CRITICAL: f64 = 240.0;

    /// HDF fires when the temperature differential is below this (K)...
    pub const HDF_TEMP_DELTA_MAX: f64 = 8.6;
    /// ...AND rotational speed is below this (RPM)
    pub const HDF_SPEED_MAX: f64 = 1380.0;

    /// Mechanical power below this emits a PWF warning (W)
    pub const POWER_LOW_WARNING: f64 = 3500.0;
    /// Mechanical power above this emits a PWF warning (W)
    pub const POWER_HIGH_WARNING: f64 = 9000.0;
    /// Power below this upgrades PWF to critical (W)
    pub const POWER_LOW_CRITICAL: f64 = 2000.0;
    /// Power above this upgrades PWF to critical (W)
    pub const POWER_HIGH_CRITICAL: f64 = 10000.0;

    /// Tool wear x torque above this emits a critical OSF (min*Nm)
    pub const OVERSTRAIN_PRODUCT_MAX: f64 = 11000.0;

    /// Air temperature above this emits a TEMP warning (K)
    pub const AIR_TEMP_ELEVATED: f64 = 306.0;
}
