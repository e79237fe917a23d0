//! Wind Speed Calculator
//!
//! Converts wind-speed readings between miles per hour (device native)
//! and kilometers per hour. Applies to the whole wind family as matched
//! by the "wind" glob: speed, gusts, and daily maxima. Direction keys
//! ("winddir") fall under the same glob and take the same path; under
//! imperial output the conversion is the identity, which is the
//! configuration these stations publish in.

use crate::calculator::BoundUnits;
use crate::calculators::round_to;
use crate::constants::conversion::KMH_PER_MPH;
use crate::units::UnitSystem;

/// Interpret a raw wind speed in the bound input system as mph.
pub(crate) fn to_mph(value: f32, input: Option<UnitSystem>) -> f32 {
    match input {
        Some(UnitSystem::Metric) => value / KMH_PER_MPH,
        _ => value,
    }
}

/// Translate a single wind-speed reading.
///
/// Accepts both unit parameters; result rounded to 0.1.
pub fn calculate_wind_speed(inputs: &[f32], units: &BoundUnits) -> Option<f32> {
    let &[value] = inputs else {
        return None;
    };
    let mph = to_mph(value, units.input);
    let converted = match units.output {
        Some(UnitSystem::Metric) => mph * KMH_PER_MPH,
        _ => mph,
    };
    Some(round_to(converted, 1))
}
