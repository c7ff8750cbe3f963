// Downlink encoding: LED command -> single-byte payload

use super::{errors_only, warnings_only, Diagnostic};
use crate::core::command::{CommandError, DownlinkCommand};
use serde::{Deserialize, Serialize};

/// Loosely-typed command fields as received from the application layer.
///
/// Exactly one of the two fields is expected; when both are present the
/// symbolic form wins.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DownlinkData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub led_command: Option<String>,

    /// Kept as a raw JSON value so that non-numeric input can be reported
    /// distinctly from out-of-range numbers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_command: Option<serde_json::Value>,
}

impl DownlinkData {
    /// A symbolic LED directive, e.g. "on" or "blink"
    pub fn led(command: impl Into<String>) -> Self {
        Self {
            led_command: Some(command.into()),
            raw_command: None,
        }
    }

    /// A raw opcode byte for advanced use
    pub fn raw(value: u8) -> Self {
        Self {
            led_command: None,
            raw_command: Some(serde_json::Value::from(value)),
        }
    }
}

impl TryFrom<&DownlinkData> for DownlinkCommand {
    type Error = CommandError;

    fn try_from(data: &DownlinkData) -> Result<Self, CommandError> {
        if let Some(command) = &data.led_command {
            return Ok(DownlinkCommand::Led(command.parse()?));
        }

        if let Some(raw) = &data.raw_command {
            let number = match raw {
                serde_json::Value::Number(n) => n,
                _ => return Err(CommandError::RawNotANumber),
            };
            return match number.as_u64() {
                Some(value) if value <= u8::MAX as u64 => Ok(DownlinkCommand::Raw(value as u8)),
                _ => Err(CommandError::RawOutOfRange(number.clone())),
            };
        }

        Err(CommandError::Missing)
    }
}

/// Downlink request handed over by the application layer
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EncodeDownlinkRequest {
    pub data: DownlinkData,
}

impl EncodeDownlinkRequest {
    pub fn new(data: DownlinkData) -> Self {
        Self { data }
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

/// Result envelope for downlink encoding.
///
/// `bytes` holds exactly one byte on success and is empty whenever `errors`
/// is non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EncodeDownlinkResponse {
    pub bytes: Vec<u8>,

    pub warnings: Vec<String>,

    pub errors: Vec<String>,
}

impl EncodeDownlinkResponse {
    fn from_diagnostics(bytes: Vec<u8>, diagnostics: &[Diagnostic]) -> Self {
        Self {
            bytes,
            warnings: warnings_only(diagnostics),
            errors: errors_only(diagnostics),
        }
    }
}

/// Encode a downlink command into its single-byte payload
pub fn encode_downlink(request: &EncodeDownlinkRequest) -> EncodeDownlinkResponse {
    let mut diagnostics = Vec::new();

    match DownlinkCommand::try_from(&request.data) {
        Ok(command) => {
            EncodeDownlinkResponse::from_diagnostics(vec![command.payload_byte()], &diagnostics)
        }
        Err(e) => {
            diagnostics.push(Diagnostic::Error(e.to_string()));
            EncodeDownlinkResponse::from_diagnostics(Vec::new(), &diagnostics)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::command::LedCommand;

    #[test]
    fn test_encode_led_on_case_insensitive() {
        let response = encode_downlink(&EncodeDownlinkRequest::new(DownlinkData::led("ON")));
        assert_eq!(response.bytes, vec![0x01]);
        assert!(response.errors.is_empty());
        assert!(response.warnings.is_empty());
    }

    #[test]
    fn test_encode_led_aliases() {
        for (alias, byte) in [("turn_off", 0x02u8), ("flash", 0x04), ("1", 0x01), ("0", 0x02)] {
            let response = encode_downlink(&EncodeDownlinkRequest::new(DownlinkData::led(alias)));
            assert_eq!(response.bytes, vec![byte], "alias {:?}", alias);
        }
    }

    #[test]
    fn test_encode_invalid_led_command() {
        let response = encode_downlink(&EncodeDownlinkRequest::new(DownlinkData::led("dance")));
        assert!(response.bytes.is_empty());
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].contains("Invalid LED command"));
    }

    #[test]
    fn test_encode_raw_passthrough() {
        let response = encode_downlink(&EncodeDownlinkRequest::new(DownlinkData::raw(4)));
        assert_eq!(response.bytes, vec![4]);
        assert!(response.errors.is_empty());
    }

    #[test]
    fn test_encode_raw_bounds() {
        for value in [0u8, 255] {
            let response = encode_downlink(&EncodeDownlinkRequest::new(DownlinkData::raw(value)));
            assert_eq!(response.bytes, vec![value]);
        }
    }

    #[test]
    fn test_encode_raw_out_of_range() {
        for raw in [serde_json::json!(300), serde_json::json!(-1), serde_json::json!(4.5)] {
            let request = EncodeDownlinkRequest::new(DownlinkData {
                led_command: None,
                raw_command: Some(raw),
            });
            let response = encode_downlink(&request);
            assert!(response.bytes.is_empty());
            assert_eq!(response.errors.len(), 1);
            assert!(response.errors[0].contains("between 0 and 255"));
        }
    }

    #[test]
    fn test_encode_raw_not_a_number() {
        let request = EncodeDownlinkRequest::new(DownlinkData {
            led_command: None,
            raw_command: Some(serde_json::json!("4")),
        });
        let response = encode_downlink(&request);
        assert!(response.bytes.is_empty());
        assert_eq!(response.errors, vec!["Raw command must be a number"]);
    }

    #[test]
    fn test_encode_missing_command() {
        let response = encode_downlink(&EncodeDownlinkRequest::default());
        assert!(response.bytes.is_empty());
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].contains("No command provided"));
    }

    #[test]
    fn test_symbolic_takes_precedence_over_raw() {
        let request = EncodeDownlinkRequest::new(DownlinkData {
            led_command: Some("blink".to_string()),
            raw_command: Some(serde_json::json!(0x7F)),
        });
        let response = encode_downlink(&request);
        assert_eq!(response.bytes, vec![0x04]);
    }

    #[test]
    fn test_command_conversion() {
        let cmd = DownlinkCommand::try_from(&DownlinkData::led("toggle")).unwrap();
        assert_eq!(cmd, DownlinkCommand::Led(LedCommand::Blink));

        let cmd = DownlinkCommand::try_from(&DownlinkData::raw(0xAB)).unwrap();
        assert_eq!(cmd, DownlinkCommand::Raw(0xAB));

        assert_eq!(
            DownlinkCommand::try_from(&DownlinkData::default()),
            Err(CommandError::Missing)
        );
    }

    #[test]
    fn test_request_from_json() {
        let request =
            EncodeDownlinkRequest::from_json(r#"{"data":{"led_command":"on"}}"#).unwrap();
        assert_eq!(request.data.led_command.as_deref(), Some("on"));
        assert!(request.data.raw_command.is_none());

        let response = encode_downlink(&request);
        assert_eq!(response.bytes, vec![0x01]);
    }

    #[test]
    fn test_response_serialization() {
        let response = encode_downlink(&EncodeDownlinkRequest::new(DownlinkData::led("on")));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["bytes"], serde_json::json!([1]));
        assert_eq!(json["warnings"], serde_json::json!([]));
        assert_eq!(json["errors"], serde_json::json!([]));
    }
}
