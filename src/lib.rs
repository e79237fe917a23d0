//! Payload translation engine for Stationcore
//!
//! Turns the flat key/value telemetry a weather-station-class device
//! emits into a normalized, semantically-typed payload ready for
//! downstream publication. Designed for edge gateways with limited
//! resources.
//!
//! Key constraints:
//! - No heap allocation; all collections are bounded
//! - Best-effort translation: malformed input degrades to pass-through,
//!   never to failure
//! - One processor instance per payload; trivially parallel across
//!   payloads
//!
//! ```
//! use stationcore::{DataProcessor, ProcessorConfig, RawPayload, Value};
//!
//! let payload = RawPayload::from_pairs([
//!     ("PASSKEY", "abc123"),
//!     ("tempf", "77.4"),
//!     ("humidity", "54"),
//! ]).unwrap();
//!
//! let mut processor = DataProcessor::new(&payload, ProcessorConfig::default());
//! let output = processor.generate();
//!
//! assert_eq!(output.get("temp"), Some(&Value::Numeric(77.4)));
//! assert!(output.contains_key("dewpoint"));
//! assert!(!output.contains_key("PASSKEY"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod calculator;
pub mod calculators;
pub mod constants;
pub mod datatype;
pub mod device;
pub mod errors;
pub mod payload;
pub mod processor;
pub mod units;

// Public API
pub use calculator::{BoundCalculator, BoundUnits, Capability, CalculatorCache};
pub use datatype::{de_unit_key, DataType};
pub use device::DeviceInfo;
pub use errors::{ProcessError, ProcessResult};
pub use payload::{RawPayload, TranslatedPayload, Value};
pub use processor::{DataProcessor, ProcessorConfig, DEFAULT_UNIQUE_ID, KEYS_TO_IGNORE};
pub use units::UnitSystem;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
