// Textual payload representations - hex (AT command style) and base64

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadTextError {
    #[error("Invalid hex payload: {0}")]
    InvalidHex(String),

    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(String),

    #[error("Payload is neither hex nor base64: {0}")]
    Unrecognized(String),
}

pub type Result<T> = std::result::Result<T, PayloadTextError>;

lazy_static! {
    /// Whole byte pairs, optional 0x prefix, optional whitespace between pairs
    static ref HEX_PAYLOAD_RE: Regex =
        Regex::new(r"^(?:0[xX])?\s*[0-9A-Fa-f]{2}(?:\s*[0-9A-Fa-f]{2})*$").unwrap();
}

/// Render a payload as upper-case hex, the form the sensor firmware puts in
/// its AT+SEND commands
pub fn payload_to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Parse a hex payload string.
///
/// Accepts an optional `0x` prefix and whitespace between byte pairs, so
/// "157C", "0x157C", and "15 7C" all decode to the same two bytes.
pub fn payload_from_hex(text: &str) -> Result<Vec<u8>> {
    let trimmed = text.trim();
    if !HEX_PAYLOAD_RE.is_match(trimmed) {
        return Err(PayloadTextError::InvalidHex(text.to_string()));
    }

    let digits: String = trimmed
        .trim_start_matches("0x")
        .trim_start_matches("0X")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    hex::decode(&digits).map_err(|_| PayloadTextError::InvalidHex(text.to_string()))
}

/// Render a payload as standard base64, the form network servers carry in
/// their JSON integrations
pub fn payload_to_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Parse a base64 payload string
pub fn payload_from_base64(text: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(text.trim())
        .map_err(|_| PayloadTextError::InvalidBase64(text.to_string()))
}

/// Parse a payload in either text form. Hex is tried first, so a string
/// valid in both forms is read as hex.
pub fn parse_payload(text: &str) -> Result<Vec<u8>> {
    if let Ok(bytes) = payload_from_hex(text) {
        return Ok(bytes);
    }
    payload_from_base64(text).map_err(|_| PayloadTextError::Unrecognized(text.to_string()))
}
