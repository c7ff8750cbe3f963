// Binary payload primitives for the 2-byte current field

use crate::core::constants::{MA_PER_A, UPLINK_PAYLOAD_LEN};
use nom::number::complete::be_i16;
use nom::IResult;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("Payload too short: expected at least {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, PayloadError>;

/// Parse the current field: a big-endian signed 16-bit milliamp value
pub fn parse_current_ma(input: &[u8]) -> IResult<&[u8], i16> {
    be_i16(input)
}

/// Decode the milliamp reading from an uplink payload.
///
/// Only the first two bytes are read; trailing bytes are ignored.
pub fn decode_current_ma(payload: &[u8]) -> Result<i16> {
    let (_rest, current_ma) = parse_current_ma(payload).map_err(|_| PayloadError::TooShort {
        expected: UPLINK_PAYLOAD_LEN,
        actual: payload.len(),
    })?;
    Ok(current_ma)
}

/// Encode a milliamp reading as a 2-byte big-endian payload
pub fn encode_current_ma(current_ma: i16) -> [u8; 2] {
    current_ma.to_be_bytes()
}

/// Build an uplink payload from a current reading in amps, the way the
/// sensor firmware does: truncate to milliamps and clamp to the i16 range.
pub fn amps_to_payload(current_a: f64) -> [u8; 2] {
    let current_ma = (current_a * MA_PER_A) as i64;
    let clamped = current_ma.clamp(i16::MIN as i64, i16::MAX as i64);

    if clamped != current_ma {
        tracing::warn!("Current value {}mA clamped to {}mA", current_ma, clamped);
    }

    encode_current_ma(clamped as i16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_positive() {
        assert_eq!(decode_current_ma(&[0x15, 0x7C]).unwrap(), 5500);
        assert_eq!(decode_current_ma(&[0x00, 0x64]).unwrap(), 100);
        assert_eq!(decode_current_ma(&[0x00, 0x00]).unwrap(), 0);
    }

    #[test]
    fn test_decode_negative_twos_complement() {
        assert_eq!(decode_current_ma(&[0xF6, 0x3C]).unwrap(), -2500);
        assert_eq!(decode_current_ma(&[0xFF, 0xFF]).unwrap(), -1);
        assert_eq!(decode_current_ma(&[0x80, 0x00]).unwrap(), -32768);
    }

    #[test]
    fn test_decode_sign_boundary() {
        assert_eq!(decode_current_ma(&[0x7F, 0xFF]).unwrap(), 32767);
        assert_eq!(decode_current_ma(&[0x80, 0x01]).unwrap(), -32767);
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        assert_eq!(decode_current_ma(&[0x15, 0x7C, 0xAA, 0xBB]).unwrap(), 5500);
    }

    #[test]
    fn test_decode_too_short() {
        assert_eq!(
            decode_current_ma(&[]),
            Err(PayloadError::TooShort {
                expected: 2,
                actual: 0
            })
        );
        assert_eq!(
            decode_current_ma(&[0x15]),
            Err(PayloadError::TooShort {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_encode_decode_agree() {
        for current_ma in [-32768, -2500, -1, 0, 100, 5500, 32767] {
            let bytes = encode_current_ma(current_ma);
            assert_eq!(decode_current_ma(&bytes).unwrap(), current_ma);
        }
    }

    #[test]
    fn test_amps_to_payload() {
        assert_eq!(amps_to_payload(5.5), [0x15, 0x7C]);
        assert_eq!(amps_to_payload(-2.5), [0xF6, 0x3C]);
        assert_eq!(amps_to_payload(0.1), [0x00, 0x64]);
    }

    #[test]
    fn test_amps_to_payload_truncates() {
        // 5.5009 A -> 5500.9 mA -> 5500 mA, truncated toward zero
        assert_eq!(amps_to_payload(5.5009), [0x15, 0x7C]);
        assert_eq!(amps_to_payload(-2.5009), [0xF6, 0x3C]);
    }

    #[test]
    fn test_amps_to_payload_clamps() {
        assert_eq!(amps_to_payload(40.0), encode_current_ma(32767));
        assert_eq!(amps_to_payload(-40.0), encode_current_ma(-32768));
    }
}
