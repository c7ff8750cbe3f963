// Low-level binary payload handling

pub mod parser;

pub use parser::{
    amps_to_payload, decode_current_ma, encode_current_ma, parse_current_ma, PayloadError,
};
