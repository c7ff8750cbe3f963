//! Downlink command encode utility
//! Builds an encode request and prints the result envelope plus the payload

use std::env;
use wcs6800_codec::formats::payload_to_hex;
use wcs6800_codec::{encode_downlink, DownlinkData, EncodeDownlinkRequest};

fn usage(program: &str) -> ! {
    eprintln!("Usage: {} led <on|off|blink>", program);
    eprintln!("       {} raw <0-255>", program);
    eprintln!("       {} json '<request>'", program);
    eprintln!("\nExamples:");
    eprintln!("  {} led on", program);
    eprintln!("  {} raw 4", program);
    eprintln!("  {} json '{{\"data\":{{\"led_command\":\"blink\"}}}}'", program);
    std::process::exit(1);
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        usage(&args[0]);
    }

    let request = match args[1].as_str() {
        "led" => EncodeDownlinkRequest::new(DownlinkData::led(args[2].as_str())),
        "raw" => {
            // Hand the value over loosely so the codec reports bad input
            // itself, the same way it would for a network request
            let value = serde_json::from_str(&args[2])
                .unwrap_or_else(|_| serde_json::Value::String(args[2].clone()));
            EncodeDownlinkRequest::new(DownlinkData {
                led_command: None,
                raw_command: Some(value),
            })
        }
        "json" => EncodeDownlinkRequest::from_json(&args[2])?,
        _ => usage(&args[0]),
    };

    let response = encode_downlink(&request);
    println!("{}", serde_json::to_string_pretty(&response)?);

    if !response.bytes.is_empty() {
        println!("Payload: {}", payload_to_hex(&response.bytes));
    }

    if !response.errors.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
