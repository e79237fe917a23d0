//! Calculator Capabilities
//!
//! ## Overview
//!
//! One pure function per data type, implementing the physical or unit
//! transformation for that type. The engine never hardcodes which
//! calculator needs which unit parameters; each function's
//! [`Capability`](crate::calculator::Capability) descriptor declares
//! what it accepts, and the session cache binds only those.
//!
//! ## Contract
//!
//! Every calculator has the shape
//! `fn(&[f32], &BoundUnits) -> Option<f32>`:
//!
//! - inputs arrive positionally, in device-native units when the bound
//!   input system is imperial (or absent);
//! - `None` means the calculator declines the invocation (wrong arity,
//!   physically meaningless input) and the engine degrades to
//!   pass-through or omission; calculators never panic;
//! - results are expressed in the bound output system and rounded to
//!   the precision conventional for the quantity.
//!
//! ## Math
//!
//! All transcendental math goes through `libm` so the same code runs
//! with and without `std`.

pub mod battery;
pub mod meteo;
pub mod pressure;
pub mod rain;
pub mod temperature;
pub mod wind;

/// Round to a fixed number of decimal places.
pub(crate) fn round_to(value: f32, decimals: u32) -> f32 {
    let scale = libm::powf(10.0, decimals as f32);
    libm::roundf(value * scale) / scale
}
