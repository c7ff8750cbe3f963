// Constants for the WCS6800 current sensor - labels, thresholds, opcodes

/// Sensor model label reported in every measurement
pub const SENSOR_TYPE: &str = "WCS6800";

/// Measurement type label reported in every measurement
pub const MEASUREMENT_TYPE: &str = "AC Current";

/// Minimum uplink payload length: 2 bytes of big-endian signed milliamps
pub const UPLINK_PAYLOAD_LEN: usize = 2;

/// Below this magnitude (in amps) the sensor is considered unloaded
pub const LOW_CURRENT_THRESHOLD_A: f64 = 0.1;

/// Above this value (in amps) the load is flagged as high current
pub const HIGH_CURRENT_THRESHOLD_A: f64 = 20.0;

/// Typical rated measurement range of the WCS6800 (symmetric, in amps)
pub const RATED_RANGE_A: f64 = 30.0;

/// Milliamps per amp, the payload's native unit
pub const MA_PER_A: f64 = 1000.0;

/// Downlink opcode: turn the LED on
pub const OPCODE_LED_ON: u8 = 0x01;

/// Downlink opcode: turn the LED off
pub const OPCODE_LED_OFF: u8 = 0x02;

/// Downlink opcode: blink the LED
pub const OPCODE_LED_BLINK: u8 = 0x04;
