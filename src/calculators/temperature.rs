//! Temperature Calculator
//!
//! Converts temperature readings between the device-native °F and °C.
//! The °F ↔ °C helpers live here and are shared with the derived-metric
//! calculators, which all work internally in Fahrenheit.

use crate::calculator::BoundUnits;
use crate::calculators::round_to;
use crate::constants::conversion::{FAHRENHEIT_OFFSET, FAHRENHEIT_SCALE};
use crate::units::UnitSystem;

pub(crate) fn fahrenheit_to_celsius(fahrenheit: f32) -> f32 {
    (fahrenheit - FAHRENHEIT_OFFSET) / FAHRENHEIT_SCALE
}

pub(crate) fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * FAHRENHEIT_SCALE + FAHRENHEIT_OFFSET
}

/// Interpret a raw temperature in the bound input system as °F.
///
/// An unbound input system means the calculator did not ask for one;
/// device-native imperial applies.
pub(crate) fn to_fahrenheit(value: f32, input: Option<UnitSystem>) -> f32 {
    match input {
        Some(UnitSystem::Metric) => celsius_to_fahrenheit(value),
        _ => value,
    }
}

/// Express a °F quantity in the bound output system.
pub(crate) fn from_fahrenheit(fahrenheit: f32, output: Option<UnitSystem>) -> f32 {
    match output {
        Some(UnitSystem::Metric) => fahrenheit_to_celsius(fahrenheit),
        _ => fahrenheit,
    }
}

/// Translate a single temperature reading.
///
/// Accepts both unit parameters; result rounded to 0.1°.
pub fn calculate_temperature(inputs: &[f32], units: &BoundUnits) -> Option<f32> {
    let &[value] = inputs else {
        return None;
    };
    let fahrenheit = to_fahrenheit(value, units.input);
    Some(round_to(from_fahrenheit(fahrenheit, units.output), 1))
}
