//! Rain Volume Calculator
//!
//! Converts accumulated rain readings between inches (device native)
//! and millimeters. Applies to the whole rain family: rates, hourly,
//! daily, weekly, monthly, and total accumulations.

use crate::calculator::BoundUnits;
use crate::calculators::round_to;
use crate::constants::conversion::MM_PER_INCH;
use crate::units::UnitSystem;

/// Translate a single rain-volume reading.
///
/// Accepts both unit parameters; result rounded to 2 decimals, which
/// preserves the 0.01 in resolution of tipping-bucket gauges.
pub fn calculate_rain_volume(inputs: &[f32], units: &BoundUnits) -> Option<f32> {
    let &[value] = inputs else {
        return None;
    };
    let inches = match units.input {
        Some(UnitSystem::Metric) => value / MM_PER_INCH,
        _ => value,
    };
    let converted = match units.output {
        Some(UnitSystem::Metric) => inches * MM_PER_INCH,
        _ => inches,
    };
    Some(round_to(converted, 2))
}
