//! Binary Battery Calculator
//!
//! Battery keys on this device class ("batt1", "wh65batt") report a
//! binary state, not a voltage: 0 means OK, anything else means low.
//! The calculator clamps whatever the station sends onto that binary
//! domain. It accepts no unit parameters - battery state has no unit
//! system - which also makes it the one registry entry whose binding
//! captures nothing from the session configuration.

use crate::calculator::BoundUnits;

/// Map a raw battery reading onto the binary 0.0 / 1.0 domain.
pub fn calculate_binary_battery(inputs: &[f32], _units: &BoundUnits) -> Option<f32> {
    let &[value] = inputs else {
        return None;
    };
    Some(if value == 0.0 { 0.0 } else { 1.0 })
}
