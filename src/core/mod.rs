// Core module containing the sensor domain model

pub mod clock;
pub mod command;
pub mod constants;
pub mod measurement;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use command::{CommandError, DownlinkCommand, LedCommand};
pub use constants::*;
pub use measurement::{Measurement, OperatingStatus};
