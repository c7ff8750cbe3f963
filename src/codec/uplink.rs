// Uplink decoding: binary payload -> structured measurement

use super::{errors_only, warnings_only, Diagnostic};
use crate::core::clock::{Clock, SystemClock};
use crate::core::constants::RATED_RANGE_A;
use crate::core::measurement::{Measurement, OperatingStatus};
use crate::payload::decode_current_ma;
use serde::{Deserialize, Serialize};

/// Raw uplink handed over by the network host.
///
/// The port number is part of the host's contract and is carried through,
/// but decoding never branches on it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DecodeUplinkRequest {
    pub bytes: Vec<u8>,

    #[serde(rename = "fPort", default)]
    pub f_port: u8,
}

impl DecodeUplinkRequest {
    pub fn new(bytes: Vec<u8>, f_port: u8) -> Self {
        Self { bytes, f_port }
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Result envelope for uplink decoding.
///
/// Always returned, even on failure; `data` is absent whenever `errors` is
/// non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DecodeUplinkResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Measurement>,

    pub warnings: Vec<String>,

    pub errors: Vec<String>,
}

impl DecodeUplinkResponse {
    fn from_diagnostics(data: Option<Measurement>, diagnostics: &[Diagnostic]) -> Self {
        Self {
            data,
            warnings: warnings_only(diagnostics),
            errors: errors_only(diagnostics),
        }
    }
}

/// Decode an uplink payload, stamping the measurement with the system clock
pub fn decode_uplink(request: &DecodeUplinkRequest) -> DecodeUplinkResponse {
    decode_uplink_at(request, &SystemClock)
}

/// Decode an uplink payload with an injected capture-time source.
///
/// Given the same request and clock reading, the result is fully
/// deterministic.
pub fn decode_uplink_at(request: &DecodeUplinkRequest, clock: &dyn Clock) -> DecodeUplinkResponse {
    let mut diagnostics = Vec::new();

    let current_ma = match decode_current_ma(&request.bytes) {
        Ok(value) => value,
        Err(e) => {
            diagnostics.push(Diagnostic::Error(e.to_string()));
            return DecodeUplinkResponse::from_diagnostics(None, &diagnostics);
        }
    };

    let measurement = Measurement::from_current_ma(current_ma, clock.now());
    tracing::debug!(
        "Decoded uplink on fPort {}: {}",
        request.f_port,
        measurement.current_formatted
    );

    if measurement.current_a.abs() > RATED_RANGE_A {
        diagnostics.push(Diagnostic::Warning(
            "Current value exceeds typical WCS6800 range (±30A)".to_string(),
        ));
    }

    if measurement.status == OperatingStatus::HighCurrent {
        diagnostics.push(Diagnostic::Warning(
            "High current detected - check load".to_string(),
        ));
    }

    DecodeUplinkResponse::from_diagnostics(Some(measurement), &diagnostics)
}
