//! Barometric Pressure Calculator
//!
//! Converts barometric readings between inches of mercury (device
//! native) and hectopascals.

use crate::calculator::BoundUnits;
use crate::calculators::round_to;
use crate::constants::conversion::HPA_PER_INHG;
use crate::units::UnitSystem;

/// Translate a single barometric pressure reading.
///
/// Accepts both unit parameters; result rounded to 2 decimals.
pub fn calculate_pressure(inputs: &[f32], units: &BoundUnits) -> Option<f32> {
    let &[value] = inputs else {
        return None;
    };
    let inhg = match units.input {
        Some(UnitSystem::Metric) => value / HPA_PER_INHG,
        _ => value,
    };
    let converted = match units.output {
        Some(UnitSystem::Metric) => inhg * HPA_PER_INHG,
        _ => inhg,
    };
    Some(round_to(converted, 2))
}
