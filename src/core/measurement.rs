// Measurement record produced by uplink decoding

use super::constants::{
    HIGH_CURRENT_THRESHOLD_A, LOW_CURRENT_THRESHOLD_A, MA_PER_A, MEASUREMENT_TYPE, SENSOR_TYPE,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating status derived from the measured current.
///
/// Classification order matters: the low-current check runs first, then the
/// high-current check, then everything else is normal. The comparisons are
/// strict, so 0.1 A and 20.0 A exactly both classify as `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingStatus {
    LowOrNoLoad,
    HighCurrent,
    Normal,
}

impl OperatingStatus {
    /// Classify a current reading (in amps)
    pub fn classify(current_a: f64) -> Self {
        if current_a.abs() < LOW_CURRENT_THRESHOLD_A {
            OperatingStatus::LowOrNoLoad
        } else if current_a > HIGH_CURRENT_THRESHOLD_A {
            OperatingStatus::HighCurrent
        } else {
            OperatingStatus::Normal
        }
    }

    /// Human-readable status label
    pub fn label(&self) -> &'static str {
        match self {
            OperatingStatus::LowOrNoLoad => "Low current or no load detected",
            OperatingStatus::HighCurrent => "High current detected",
            OperatingStatus::Normal => "Normal operation",
        }
    }
}

impl fmt::Display for OperatingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for OperatingStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for OperatingStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        match label.as_str() {
            "Low current or no load detected" => Ok(OperatingStatus::LowOrNoLoad),
            "High current detected" => Ok(OperatingStatus::HighCurrent),
            "Normal operation" => Ok(OperatingStatus::Normal),
            other => Err(serde::de::Error::custom(format!(
                "unknown operating status: {}",
                other
            ))),
        }
    }
}

/// A decoded current measurement.
///
/// Created fresh per decode and never mutated afterwards. Serializes to the
/// wire field names expected by the application layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Measurement {
    /// Current in milliamps, as carried on the wire
    pub current_ma: i16,

    /// Current in amps (milliamps / 1000, exact floating-point division)
    pub current_a: f64,

    /// Current rendered with three decimals and an " A" suffix
    pub current_formatted: String,

    /// Sensor model label
    pub sensor_type: String,

    /// Measurement type label
    pub measurement_type: String,

    /// Status derived from the current value
    pub status: OperatingStatus,

    /// Capture time (decode time, not transmission time)
    pub timestamp: DateTime<Utc>,
}

impl Measurement {
    /// Build a measurement from a raw milliamp reading and a capture time
    pub fn from_current_ma(current_ma: i16, captured_at: DateTime<Utc>) -> Self {
        let current_a = current_ma as f64 / MA_PER_A;

        Self {
            current_ma,
            current_a,
            current_formatted: format!("{:.3} A", current_a),
            sensor_type: SENSOR_TYPE.to_string(),
            measurement_type: MEASUREMENT_TYPE.to_string(),
            status: OperatingStatus::classify(current_a),
            timestamp: captured_at,
        }
    }
}
