//! Uplink payload decode utility
//! Decodes a hex or base64 payload and prints the result envelope as JSON

use std::env;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};
use wcs6800_codec::formats::parse_payload;
use wcs6800_codec::{decode_uplink, DecodeUplinkRequest};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    let format_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <payload> [fPort]", args[0]);
        eprintln!("\nThe payload may be hex or base64:");
        eprintln!("  {} 157C          # 5500 mA = 5.5 A", args[0]);
        eprintln!("  {} \"15 7C\" 2", args[0]);
        eprintln!("  {} FXw=", args[0]);
        std::process::exit(1);
    }

    let bytes = parse_payload(&args[1])?;
    let f_port: u8 = match args.get(2) {
        Some(port) => port.parse()?,
        None => 2,
    };

    tracing::debug!("Decoding {} byte(s) on fPort {}", bytes.len(), f_port);

    let response = decode_uplink(&DecodeUplinkRequest::new(bytes, f_port));
    println!("{}", serde_json::to_string_pretty(&response)?);

    if !response.errors.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
