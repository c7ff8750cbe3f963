// Payload text format handlers

pub mod payload_text;

pub use payload_text::{
    parse_payload, payload_from_base64, payload_from_hex, payload_to_base64, payload_to_hex,
    PayloadTextError,
};
