//! Unit-System Enumeration
//!
//! A closed enumeration of the measurement conventions a payload can be
//! expressed in. Weather-station hardware of this class reports
//! imperial natively; metric output is produced by the calculators.
//!
//! Unit systems are fixed per processing session: a processor is
//! constructed with one (input, output) pair and every unit-aware
//! calculator is bound to that pair exactly once.

use core::str::FromStr;

use crate::errors::ProcessError;

/// Measurement convention governing calculator input/output
/// interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum UnitSystem {
    /// °F, inHg, in, mph. The device-native convention.
    Imperial = 0,
    /// °C, hPa, mm, km/h.
    Metric = 1,
}

impl UnitSystem {
    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "imperial",
            UnitSystem::Metric => "metric",
        }
    }
}

impl Default for UnitSystem {
    fn default() -> Self {
        UnitSystem::Imperial
    }
}

impl FromStr for UnitSystem {
    type Err = ProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "imperial" => Ok(UnitSystem::Imperial),
            "metric" => Ok(UnitSystem::Metric),
            _ => Err(ProcessError::UnknownUnitSystem),
        }
    }
}
