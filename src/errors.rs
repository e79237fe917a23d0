//! Error Types for Payload Processing
//!
//! The translation engine is best-effort by contract: malformed input
//! never fails a session. Non-numeric values, unmatched keys, and
//! missing derived-metric inputs all degrade to pass-through or
//! omission. The only hard errors are bounded-capacity violations
//! raised while *constructing* a payload, before translation begins.
//!
//! Errors follow the same constraints as the rest of the crate:
//!
//! 1. **Small Size**: variants carry a few machine words at most.
//! 2. **No Heap Allocation**: all error data is inline.
//! 3. **Copy Semantics**: errors are `Copy` for cheap returns.

use thiserror_no_std::Error;

/// Result type for payload construction and configuration.
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Processing errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessError {
    /// A key exceeds the fixed key-length bound
    #[error("Key length {len} exceeds maximum {max}")]
    KeyTooLong {
        /// Byte length of the offending key
        len: usize,
        /// Maximum key length the payload accepts
        max: usize,
    },

    /// A value exceeds the fixed value-length bound
    #[error("Value length {len} exceeds maximum {max}")]
    ValueTooLong {
        /// Byte length of the offending value
        len: usize,
        /// Maximum value length the payload accepts
        max: usize,
    },

    /// The payload map is full
    #[error("Payload full: capacity {capacity} reached")]
    PayloadFull {
        /// Fixed entry capacity of the payload
        capacity: usize,
    },

    /// A unit-system name is not part of the closed enumeration
    #[error("Unknown unit system")]
    UnknownUnitSystem,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ProcessError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::KeyTooLong { len, max } => {
                defmt::write!(fmt, "Key length {} exceeds {}", len, max)
            }
            Self::ValueTooLong { len, max } => {
                defmt::write!(fmt, "Value length {} exceeds {}", len, max)
            }
            Self::PayloadFull { capacity } => {
                defmt::write!(fmt, "Payload full at {}", capacity)
            }
            Self::UnknownUnitSystem => defmt::write!(fmt, "Unknown unit system"),
        }
    }
}
