// WCS6800-CODEC: LoRaWAN payload codec for the WCS6800 current sensor

pub mod codec;
pub mod core;
pub mod formats;
pub mod payload;

// Re-export commonly used types
pub use codec::{
    decode_uplink, decode_uplink_at, encode_downlink, DecodeUplinkRequest, DecodeUplinkResponse,
    Diagnostic, DownlinkData, EncodeDownlinkRequest, EncodeDownlinkResponse,
};
pub use crate::core::{
    clock::{Clock, FixedClock, SystemClock},
    command::{CommandError, DownlinkCommand, LedCommand},
    measurement::{Measurement, OperatingStatus},
};
pub use formats::{parse_payload, payload_to_base64, payload_to_hex};
pub use payload::{amps_to_payload, decode_current_ma, encode_current_ma, PayloadError};

/// Codec version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
