//! Meteorological Formula Coefficients
//!
//! Coefficients for the derived metrics computed from multiple base
//! quantities: dew point, heat index, wind chill, and the feels-like
//! composite.
//!
//! ## Dew Point (Magnus-Tetens)
//!
//! ```text
//! γ(T,RH) = ln(RH/100) + (a × T)/(b + T)
//! Td = (b × γ)/(a − γ)
//! ```
//!
//! with T in °C and RH in percent. The (a, b) pair below is the
//! Alduchov-Eskridge refit of the Magnus constants, accurate to within
//! 0.1°C over −40..50°C.
//!
//! ## Heat Index (NWS Rothfusz)
//!
//! The National Weather Service regression over temperature (°F) and
//! relative humidity (%), with the simple-formula shortcut used when
//! conditions are mild.
//!
//! ## Wind Chill (NWS 2001)
//!
//! ```text
//! WC = 35.74 + 0.6215·T − 35.75·V^0.16 + 0.4275·T·V^0.16
//! ```
//!
//! with T in °F and V in mph, valid for T ≤ 50°F and V > 3 mph.

// ===== MAGNUS DEW POINT =====

/// Magnus coefficient a (dimensionless).
///
/// Source: Alduchov & Eskridge (1996), Journal of Applied Meteorology.
pub const MAGNUS_A: f32 = 17.625;

/// Magnus coefficient b (°C).
///
/// Source: Alduchov & Eskridge (1996), Journal of Applied Meteorology.
pub const MAGNUS_B_CELSIUS: f32 = 243.04;

// ===== HEAT INDEX =====

/// Temperature (°F) above which the full Rothfusz regression applies.
pub const HEAT_INDEX_THRESHOLD_F: f32 = 80.0;

/// Rothfusz regression coefficients c1..c9.
///
/// Source: NWS Technical Attachment SR 90-23.
pub const HEAT_INDEX_COEFFS: [f32; 9] = [
    -42.379,
    2.049_015_23,
    10.143_331_27,
    -0.224_755_41,
    -6.837_83e-3,
    -5.481_717e-2,
    1.228_74e-3,
    8.528_2e-4,
    -1.99e-6,
];

/// Relative humidity (%) below which the dry-air adjustment is
/// subtracted from the regression.
pub const HEAT_INDEX_DRY_RH_PCT: f32 = 13.0;

/// Relative humidity (%) above which the humid-air adjustment is added
/// to the regression.
pub const HEAT_INDEX_HUMID_RH_PCT: f32 = 85.0;

// ===== WIND CHILL =====

/// Temperature (°F) above which wind chill is undefined.
pub const WIND_CHILL_MAX_TEMP_F: f32 = 50.0;

/// Wind speed (mph) at or below which wind chill is undefined.
pub const WIND_CHILL_MIN_WIND_MPH: f32 = 3.0;

/// NWS 2001 wind chill coefficients.
pub const WIND_CHILL_COEFFS: [f32; 4] = [35.74, 0.6215, -35.75, 0.4275];

/// Wind speed exponent in the NWS 2001 formula.
pub const WIND_CHILL_EXPONENT: f32 = 0.16;
