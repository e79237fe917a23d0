//! Buffer and Capacity Constants
//!
//! Stationcore runs without heap allocation, so every collection is a
//! bounded `heapless` structure sized here. Index-map capacities must be
//! powers of two (a `heapless::FnvIndexMap` requirement).
//!
//! The values below comfortably cover the largest payloads produced by
//! multi-channel stations (8 temperature/humidity channels, leaf/soil
//! arrays, per-channel batteries) while staying small enough for
//! microcontroller RAM budgets.

/// Maximum length of a payload key in bytes.
///
/// The longest keys produced in practice ("soilmoisture10",
/// "monthlyrainin") top out well under 20 bytes.
pub const MAX_KEY_LEN: usize = 24;

/// Maximum length of a payload text value in bytes.
///
/// Sized for 32-character passkeys and firmware identifiers such as
/// "EasyWeatherV1.5.9", with headroom.
pub const MAX_VALUE_LEN: usize = 64;

/// Maximum number of entries in a raw payload.
pub const PAYLOAD_CAPACITY: usize = 64;

/// Maximum number of entries in a translated payload.
///
/// Larger than [`PAYLOAD_CAPACITY`] because the derived-metric pass can
/// add entries beyond the raw key count.
pub const TRANSLATED_CAPACITY: usize = 128;

/// Maximum number of derived-metric results per payload.
pub const DERIVED_CAPACITY: usize = 4;

/// Maximum number of bound calculators in a session cache.
///
/// One slot per data type; the registry defines nine.
pub const CALCULATOR_CACHE_CAPACITY: usize = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_map_capacities_are_powers_of_two() {
        assert!(PAYLOAD_CAPACITY.is_power_of_two());
        assert!(TRANSLATED_CAPACITY.is_power_of_two());
        assert!(DERIVED_CAPACITY.is_power_of_two());
        assert!(CALCULATOR_CACHE_CAPACITY.is_power_of_two());
    }

    #[test]
    fn translated_holds_payload_plus_derived() {
        assert!(TRANSLATED_CAPACITY >= PAYLOAD_CAPACITY + DERIVED_CAPACITY);
    }
}
