//! Unit Conversion Factors
//!
//! Exact factors for converting between the imperial units emitted by
//! weather-station hardware and the metric units expected by most
//! downstream consumers. Weather stations of this class report in
//! imperial natively (°F, inHg, in, mph); metric is derived.

/// Hectopascals per inch of mercury (hPa/inHg).
///
/// Used to convert barometric pressure readings.
///
/// Source: NIST Special Publication 811, conventional inch of mercury
/// at 0°C.
pub const HPA_PER_INHG: f32 = 33.8639;

/// Millimeters per inch (mm/in).
///
/// Used to convert rain-volume readings. Exact by definition of the
/// international inch.
pub const MM_PER_INCH: f32 = 25.4;

/// Kilometers per hour per mile per hour (km·h⁻¹ / mph).
///
/// Used to convert wind-speed readings. Derived from the international
/// mile (1609.344 m).
pub const KMH_PER_MPH: f32 = 1.60934;

/// Fahrenheit offset relative to Celsius (°F at 0°C).
pub const FAHRENHEIT_OFFSET: f32 = 32.0;

/// Fahrenheit degrees per Celsius degree.
pub const FAHRENHEIT_SCALE: f32 = 1.8;
