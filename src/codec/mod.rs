// Codec operations and their result envelopes

pub mod downlink;
pub mod uplink;

pub use downlink::{encode_downlink, DownlinkData, EncodeDownlinkRequest, EncodeDownlinkResponse};
pub use uplink::{
    decode_uplink, decode_uplink_at, DecodeUplinkRequest, DecodeUplinkResponse,
};

/// A warning or error produced while running a codec operation.
///
/// Diagnostics are advisory: they are collected into the result envelope and
/// never propagated as Rust errors past the operation boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    Warning(String),
    Error(String),
}

impl Diagnostic {
    pub fn is_error(&self) -> bool {
        matches!(self, Diagnostic::Error(_))
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Diagnostic::Warning(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Diagnostic::Warning(msg) | Diagnostic::Error(msg) => msg,
        }
    }
}

/// Collect only the warning messages
pub fn warnings_only(diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics
        .iter()
        .filter(|d| d.is_warning())
        .map(|d| d.message().to_string())
        .collect()
}

/// Collect only the error messages
pub fn errors_only(diagnostics: &[Diagnostic]) -> Vec<String> {
    diagnostics
        .iter()
        .filter(|d| d.is_error())
        .map(|d| d.message().to_string())
        .collect()
}
