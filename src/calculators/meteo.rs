//! Derived Meteorological Calculators
//!
//! ## Overview
//!
//! The four derived metrics are computed from multiple base quantities
//! rather than a single raw key:
//!
//! - **Dew point**: Magnus-Tetens over temperature and humidity
//! - **Heat index**: NWS Rothfusz regression over temperature and
//!   humidity
//! - **Wind chill**: NWS 2001 formula over temperature and wind speed
//! - **Feels-like**: composite of the two, keyed on temperature
//!
//! All four work internally in Fahrenheit/mph (the device-native
//! convention) and express the result in the bound output system.
//! Inputs arrive positionally in the order fixed by the processor's
//! derived-metric specifications.
//!
//! ## Validity Envelopes
//!
//! The NWS formulas are regressions with defined envelopes:
//!
//! - Heat index: the full regression applies from 80°F up; below that
//!   the simple Steadman average is already accurate.
//! - Wind chill: defined for T ≤ 50°F and wind > 3 mph; outside the
//!   envelope the air temperature itself is the answer.
//! - Feels-like: heat index at ≥ 80°F, wind chill at ≤ 50°F, air
//!   temperature between.
//!
//! Humidity outside (0, 100] makes a dew point mathematically
//! meaningless (the Magnus formula takes ln(RH/100)), so the dew point
//! calculator declines rather than emit a garbage number.

use crate::calculator::BoundUnits;
use crate::calculators::round_to;
use crate::calculators::temperature::{
    celsius_to_fahrenheit, fahrenheit_to_celsius, from_fahrenheit, to_fahrenheit,
};
use crate::calculators::wind::to_mph;
use crate::constants::meteo::{
    HEAT_INDEX_COEFFS, HEAT_INDEX_DRY_RH_PCT, HEAT_INDEX_HUMID_RH_PCT, HEAT_INDEX_THRESHOLD_F,
    MAGNUS_A, MAGNUS_B_CELSIUS, WIND_CHILL_COEFFS, WIND_CHILL_EXPONENT, WIND_CHILL_MAX_TEMP_F,
    WIND_CHILL_MIN_WIND_MPH,
};

fn dew_point_celsius(temp_celsius: f32, humidity_pct: f32) -> f32 {
    let gamma = libm::logf(humidity_pct / 100.0)
        + MAGNUS_A * temp_celsius / (MAGNUS_B_CELSIUS + temp_celsius);
    MAGNUS_B_CELSIUS * gamma / (MAGNUS_A - gamma)
}

fn heat_index_fahrenheit(temp_f: f32, humidity_pct: f32) -> f32 {
    // Steadman's simple formula; NWS averages it with the air
    // temperature to decide whether the full regression is needed.
    let simple = 0.5 * (temp_f + 61.0 + (temp_f - 68.0) * 1.2 + humidity_pct * 0.094);
    if (simple + temp_f) / 2.0 < HEAT_INDEX_THRESHOLD_F {
        return simple;
    }

    let [c1, c2, c3, c4, c5, c6, c7, c8, c9] = HEAT_INDEX_COEFFS;
    let t = temp_f;
    let rh = humidity_pct;
    let mut heat_index = c1
        + c2 * t
        + c3 * rh
        + c4 * t * rh
        + c5 * t * t
        + c6 * rh * rh
        + c7 * t * t * rh
        + c8 * t * rh * rh
        + c9 * t * t * rh * rh;

    if rh < HEAT_INDEX_DRY_RH_PCT && (80.0..=112.0).contains(&t) {
        heat_index -=
            (13.0 - rh) / 4.0 * libm::sqrtf((17.0 - libm::fabsf(t - 95.0)) / 17.0);
    } else if rh > HEAT_INDEX_HUMID_RH_PCT && (80.0..=87.0).contains(&t) {
        heat_index += (rh - 85.0) / 10.0 * ((87.0 - t) / 5.0);
    }

    heat_index
}

fn wind_chill_fahrenheit(temp_f: f32, wind_mph: f32) -> f32 {
    if temp_f > WIND_CHILL_MAX_TEMP_F || wind_mph <= WIND_CHILL_MIN_WIND_MPH {
        return temp_f;
    }
    let [c1, c2, c3, c4] = WIND_CHILL_COEFFS;
    let wind_term = libm::powf(wind_mph, WIND_CHILL_EXPONENT);
    c1 + c2 * temp_f + c3 * wind_term + c4 * temp_f * wind_term
}

/// Dew point from (temperature, humidity %).
///
/// Declines when humidity is outside (0, 100].
pub fn calculate_dew_point(inputs: &[f32], units: &BoundUnits) -> Option<f32> {
    let &[temperature, humidity] = inputs else {
        return None;
    };
    if humidity <= 0.0 || humidity > 100.0 {
        return None;
    }
    let temp_c = fahrenheit_to_celsius(to_fahrenheit(temperature, units.input));
    let dew_f = celsius_to_fahrenheit(dew_point_celsius(temp_c, humidity));
    Some(round_to(from_fahrenheit(dew_f, units.output), 1))
}

/// Heat index from (temperature, humidity %).
pub fn calculate_heat_index(inputs: &[f32], units: &BoundUnits) -> Option<f32> {
    let &[temperature, humidity] = inputs else {
        return None;
    };
    let temp_f = to_fahrenheit(temperature, units.input);
    let heat_index = heat_index_fahrenheit(temp_f, humidity);
    Some(round_to(from_fahrenheit(heat_index, units.output), 1))
}

/// Wind chill from (temperature, wind speed).
///
/// Outside the NWS envelope the air temperature passes through.
pub fn calculate_wind_chill(inputs: &[f32], units: &BoundUnits) -> Option<f32> {
    let &[temperature, wind_speed] = inputs else {
        return None;
    };
    let temp_f = to_fahrenheit(temperature, units.input);
    let wind_mph = to_mph(wind_speed, units.input);
    let chill = wind_chill_fahrenheit(temp_f, wind_mph);
    Some(round_to(from_fahrenheit(chill, units.output), 1))
}

/// Feels-like temperature from (temperature, humidity %, wind speed).
pub fn calculate_feels_like(inputs: &[f32], units: &BoundUnits) -> Option<f32> {
    let &[temperature, humidity, wind_speed] = inputs else {
        return None;
    };
    let temp_f = to_fahrenheit(temperature, units.input);
    let apparent = if temp_f >= HEAT_INDEX_THRESHOLD_F {
        heat_index_fahrenheit(temp_f, humidity)
    } else if temp_f <= WIND_CHILL_MAX_TEMP_F {
        wind_chill_fahrenheit(temp_f, to_mph(wind_speed, units.input))
    } else {
        temp_f
    };
    Some(round_to(from_fahrenheit(apparent, units.output), 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::UnitSystem;

    const IMPERIAL: BoundUnits = BoundUnits {
        input: Some(UnitSystem::Imperial),
        output: Some(UnitSystem::Imperial),
    };

    const TO_METRIC: BoundUnits = BoundUnits {
        input: Some(UnitSystem::Imperial),
        output: Some(UnitSystem::Metric),
    };

    #[test]
    fn dew_point_reference_value() {
        // 77°F (25°C) at 54% RH gives a dew point near 59.1°F (15.0°C).
        let dew = calculate_dew_point(&[77.0, 54.0], &IMPERIAL).unwrap();
        assert!((dew - 59.1).abs() < 0.5, "dew point {dew}");

        let dew_c = calculate_dew_point(&[77.0, 54.0], &TO_METRIC).unwrap();
        assert!((dew_c - 15.0).abs() < 0.3, "dew point {dew_c}");
    }

    #[test]
    fn dew_point_never_exceeds_temperature() {
        for humidity in [10.0, 40.0, 70.0, 100.0] {
            let dew = calculate_dew_point(&[68.0, humidity], &IMPERIAL).unwrap();
            assert!(dew <= 68.0 + 0.1, "dew {dew} at rh {humidity}");
        }
    }

    #[test]
    fn dew_point_declines_meaningless_humidity() {
        assert_eq!(calculate_dew_point(&[68.0, 0.0], &IMPERIAL), None);
        assert_eq!(calculate_dew_point(&[68.0, -5.0], &IMPERIAL), None);
        assert_eq!(calculate_dew_point(&[68.0, 120.0], &IMPERIAL), None);
    }

    #[test]
    fn heat_index_reference_value() {
        // NWS chart: 90°F at 70% RH reads 105°F.
        let hi = calculate_heat_index(&[90.0, 70.0], &IMPERIAL).unwrap();
        assert!((hi - 105.0).abs() < 1.5, "heat index {hi}");
    }

    #[test]
    fn heat_index_mild_conditions_stay_near_air_temp() {
        let hi = calculate_heat_index(&[70.0, 50.0], &IMPERIAL).unwrap();
        assert!((hi - 70.0).abs() < 2.0, "heat index {hi}");
    }

    #[test]
    fn wind_chill_reference_value() {
        // NWS chart: 30°F with a 20 mph wind reads ~17°F.
        let chill = calculate_wind_chill(&[30.0, 20.0], &IMPERIAL).unwrap();
        assert!((chill - 17.0).abs() < 1.0, "wind chill {chill}");
    }

    #[test]
    fn wind_chill_outside_envelope_passes_temperature() {
        assert_eq!(calculate_wind_chill(&[60.0, 20.0], &IMPERIAL), Some(60.0));
        assert_eq!(calculate_wind_chill(&[30.0, 2.0], &IMPERIAL), Some(30.0));
    }

    #[test]
    fn feels_like_declines_wrong_arity() {
        assert_eq!(calculate_feels_like(&[90.0, 70.0], &IMPERIAL), None);
        assert_eq!(calculate_feels_like(&[90.0], &IMPERIAL), None);
    }

    #[test]
    fn feels_like_regimes() {
        // Hot and humid: heat index applies and exceeds air temp.
        // Cold and windy: wind chill applies and undercuts air temp.
        let hot = calculate_feels_like(&[90.0, 70.0, 5.0], &IMPERIAL).unwrap();
        assert!(hot > 100.0, "feels like {hot}");

        let cold = calculate_feels_like(&[30.0, 50.0, 20.0], &IMPERIAL).unwrap();
        assert!(cold < 20.0, "feels like {cold}");

        let mild = calculate_feels_like(&[65.0, 50.0, 5.0], &IMPERIAL);
        assert_eq!(mild, Some(65.0));
    }
}
