// Downlink command model - LED directives and raw opcodes

use super::constants::{OPCODE_LED_BLINK, OPCODE_LED_OFF, OPCODE_LED_ON};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("Invalid LED command '{0}': use 'on', 'off', or 'blink'")]
    UnknownLedCommand(String),

    #[error("Raw command must be a number")]
    RawNotANumber,

    #[error("Raw command must be an integer between 0 and 255, got {0}")]
    RawOutOfRange(serde_json::Number),

    #[error("No command provided: use 'led_command' or 'raw_command'")]
    Missing,
}

pub type Result<T> = std::result::Result<T, CommandError>;

/// Symbolic LED directive carried in a downlink.
///
/// Each directive accepts a small family of case-insensitive aliases, so
/// "ON", "turn_on", and "1" all map to [`LedCommand::On`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedCommand {
    On,
    Off,
    Blink,
}

impl LedCommand {
    /// The single-byte opcode the device firmware dispatches on
    pub fn opcode(&self) -> u8 {
        match self {
            LedCommand::On => OPCODE_LED_ON,
            LedCommand::Off => OPCODE_LED_OFF,
            LedCommand::Blink => OPCODE_LED_BLINK,
        }
    }

    /// Reverse lookup from an opcode byte.
    /// Returns None for opcodes the device does not recognize.
    pub fn from_opcode(opcode: u8) -> Option<Self> {
        match opcode {
            OPCODE_LED_ON => Some(LedCommand::On),
            OPCODE_LED_OFF => Some(LedCommand::Off),
            OPCODE_LED_BLINK => Some(LedCommand::Blink),
            _ => None,
        }
    }
}

impl FromStr for LedCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "on" | "turn_on" | "1" => Ok(LedCommand::On),
            "off" | "turn_off" | "0" => Ok(LedCommand::Off),
            "blink" | "flash" | "toggle" => Ok(LedCommand::Blink),
            _ => Err(CommandError::UnknownLedCommand(s.to_string())),
        }
    }
}

impl fmt::Display for LedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LedCommand::On => "on",
            LedCommand::Off => "off",
            LedCommand::Blink => "blink",
        };
        write!(f, "{}", name)
    }
}

/// A validated downlink command, ready to encode.
///
/// Exactly one variant per command form: a symbolic LED directive or a raw
/// opcode byte passed through unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownlinkCommand {
    Led(LedCommand),
    Raw(u8),
}

impl DownlinkCommand {
    /// The byte this command encodes to
    pub fn payload_byte(&self) -> u8 {
        match self {
            DownlinkCommand::Led(cmd) => cmd.opcode(),
            DownlinkCommand::Raw(byte) => *byte,
        }
    }
}
