//! Data-Type Classification
//!
//! ## Overview
//!
//! Every raw key is classified into a semantic data type before
//! translation: "temp1f" is a temperature, "batt3" a battery state,
//! "hourlyrainin" a rain volume. Classification drives calculator
//! selection and key normalization; keys that classify as nothing pass
//! through untouched.
//!
//! ## Matching Rules
//!
//! Two matching modes run in strict sequence:
//!
//! 1. **Exact**: the key *is* a registered identifier ("windchill",
//!    "temp").
//! 2. **Substring**: a registered identifier occurs inside the key
//!    ("temp" inside "temp2f"). The first entry of [`REGISTRY`], in
//!    declaration order, wins.
//!
//! Exact always beats substring, and registry order is part of the
//! public contract: some identifiers are substrings of others ("wind"
//! inside "windchill"), so reordering the registry changes
//! classification results. The order is pinned by tests.
//!
//! ## Key Normalization
//!
//! Matched keys have their unit suffix stripped before emission:
//! "tempf" becomes "temp", "hourlyrainin" becomes "hourlyrain",
//! "windgustmph" becomes "windgust". [`de_unit_key`] is only ever
//! applied to keys that already matched a data type, which is what
//! keeps suffix stripping from mangling arbitrary names.

/// Semantic category a raw key is classified into.
///
/// Maps 1:1 to a calculator capability in the
/// [`calculator`](crate::calculator) registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DataType {
    /// Derived: condensation temperature from temp + humidity
    DewPoint = 0,
    /// Derived: apparent temperature from temp + humidity + wind
    FeelsLike = 1,
    /// Barometric pressure family ("barom*")
    Barometric = 2,
    /// Binary battery state family ("*batt*")
    Battery = 3,
    /// Rain volume family ("*rain*")
    Rain = 4,
    /// Temperature family ("temp*")
    Temperature = 5,
    /// Wind speed family ("wind*")
    Wind = 6,
    /// Derived: NWS heat index from temp + humidity
    HeatIndex = 7,
    /// Derived: NWS wind chill from temp + wind
    WindChill = 8,
}

/// Classification registry, scanned in declaration order.
///
/// Load-bearing invariant: "wind" precedes "windchill" and the other
/// derived identifiers that embed a family identifier, so family globs
/// claim composite keys unless the key is an exact identifier match.
pub const REGISTRY: [DataType; 9] = [
    DataType::DewPoint,
    DataType::FeelsLike,
    DataType::Barometric,
    DataType::Battery,
    DataType::Rain,
    DataType::Temperature,
    DataType::Wind,
    DataType::HeatIndex,
    DataType::WindChill,
];

impl DataType {
    /// Registered identifier for this data type.
    pub const fn name(&self) -> &'static str {
        match self {
            DataType::DewPoint => "dewpoint",
            DataType::FeelsLike => "feelslike",
            DataType::Barometric => "barom",
            DataType::Battery => "batt",
            DataType::Rain => "rain",
            DataType::Temperature => "temp",
            DataType::Wind => "wind",
            DataType::HeatIndex => "heatindex",
            DataType::WindChill => "windchill",
        }
    }

    /// Classify a raw key.
    ///
    /// Exact identifier match first; otherwise the first registry entry
    /// whose identifier occurs as a substring of the key. `None` means
    /// the key passes through untranslated.
    pub fn for_key(key: &str) -> Option<DataType> {
        REGISTRY
            .iter()
            .copied()
            .find(|data_type| data_type.name() == key)
            .or_else(|| {
                REGISTRY
                    .iter()
                    .copied()
                    .find(|data_type| key.contains(data_type.name()))
            })
    }
}

/// Strip one recognized unit suffix from a key, longest suffix first.
///
/// Recognized suffixes: "mph" (wind speed), "in" (inches), "f"
/// (Fahrenheit). Keys without a recognized suffix are returned
/// unchanged.
pub fn de_unit_key(key: &str) -> &str {
    if let Some(base) = key.strip_suffix("mph") {
        return base;
    }
    if let Some(base) = key.strip_suffix("in") {
        return base;
    }
    if let Some(base) = key.strip_suffix('f') {
        return base;
    }
    key
}
