//! Constants for Stationcore
//!
//! This module centralizes the numeric values used throughout the payload
//! translation engine. All values are defined here with their purpose,
//! source, and rationale.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Conversion**: Unit-system conversion factors
//! - **Meteo**: Coefficients for derived meteorological formulas
//! - **Buffers**: Capacity limits for heapless collections
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, include documentation and a source
//! 3. Use descriptive names that include units

/// Unit-system conversion factors between imperial and metric.
pub mod conversion;

/// Coefficients for the Magnus dew point and NWS heat index / wind chill
/// formulas.
pub mod meteo;

/// Capacity limits for payload maps and the calculator cache.
pub mod buffers;

// Re-export commonly used constants for convenience
pub use buffers::{
    CALCULATOR_CACHE_CAPACITY, DERIVED_CAPACITY, MAX_KEY_LEN, MAX_VALUE_LEN,
    PAYLOAD_CAPACITY, TRANSLATED_CAPACITY,
};

pub use conversion::{HPA_PER_INHG, KMH_PER_MPH, MM_PER_INCH};
