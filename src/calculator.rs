//! Calculator Registry and Session Cache
//!
//! ## Overview
//!
//! The registry is a fixed, total mapping from [`DataType`] to a
//! [`Capability`]: the calculator function for that type plus a
//! descriptor of which unit-system parameters it accepts. There is no
//! dynamic registration; the mapping is a static match.
//!
//! ## Parameter Binding
//!
//! A processing session runs under one fixed (input, output)
//! unit-system pair. The first time a session needs a calculator for a
//! data type, the cache consults the capability descriptor and captures
//! exactly the unit systems the calculator declares it accepts - the
//! engine never hardcodes which calculator needs which parameters. The
//! resulting [`BoundCalculator`] is stored and reused for every later
//! key of the same type.
//!
//! Invariants:
//!
//! - at most one binding per data type per session;
//! - a binding is never replaced mid-session, even when requested from
//!   multiple call sites (single-value pass and derived-metric pass).

use heapless::FnvIndexMap;

use crate::calculators::{battery, meteo, pressure, rain, temperature, wind};
use crate::constants::buffers::CALCULATOR_CACHE_CAPACITY;
use crate::datatype::DataType;
use crate::units::UnitSystem;

/// Calculator capability function.
///
/// Inputs are positional; `None` declines the invocation and the engine
/// degrades to pass-through or omission.
pub type CalculatorFn = fn(&[f32], &BoundUnits) -> Option<f32>;

/// Unit-system parameters captured at binding time.
///
/// `None` in a slot means the calculator's capability does not accept
/// that parameter, not that the session lacks a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundUnits {
    /// Input unit system, if the capability accepts one
    pub input: Option<UnitSystem>,
    /// Output unit system, if the capability accepts one
    pub output: Option<UnitSystem>,
}

/// A calculator capability: the function plus its declared parameters.
///
/// Replaces runtime signature inspection with an explicit descriptor -
/// binding is a static lookup.
#[derive(Debug, Clone, Copy)]
pub struct Capability {
    /// Whether the calculator accepts an input unit system
    pub accepts_input_units: bool,
    /// Whether the calculator accepts an output unit system
    pub accepts_output_units: bool,
    /// The calculator function itself
    pub apply: CalculatorFn,
}

impl Capability {
    /// Capability that accepts both unit-system parameters.
    pub const fn unit_aware(apply: CalculatorFn) -> Self {
        Self {
            accepts_input_units: true,
            accepts_output_units: true,
            apply,
        }
    }

    /// Capability that accepts no unit-system parameters.
    pub const fn fixed(apply: CalculatorFn) -> Self {
        Self {
            accepts_input_units: false,
            accepts_output_units: false,
            apply,
        }
    }
}

/// Look up the capability registered for a data type.
///
/// Total: every data type in the registry has exactly one capability.
pub fn capability(data_type: DataType) -> Capability {
    match data_type {
        DataType::DewPoint => Capability::unit_aware(meteo::calculate_dew_point),
        DataType::FeelsLike => Capability::unit_aware(meteo::calculate_feels_like),
        DataType::Barometric => Capability::unit_aware(pressure::calculate_pressure),
        DataType::Battery => Capability::fixed(battery::calculate_binary_battery),
        DataType::Rain => Capability::unit_aware(rain::calculate_rain_volume),
        DataType::Temperature => Capability::unit_aware(temperature::calculate_temperature),
        DataType::Wind => Capability::unit_aware(wind::calculate_wind_speed),
        DataType::HeatIndex => Capability::unit_aware(meteo::calculate_heat_index),
        DataType::WindChill => Capability::unit_aware(meteo::calculate_wind_chill),
    }
}

/// A calculator specialized to one session's unit-system configuration.
#[derive(Debug, Clone, Copy)]
pub struct BoundCalculator {
    apply: CalculatorFn,
    units: BoundUnits,
}

impl BoundCalculator {
    /// Invoke with positional inputs and the captured unit systems.
    pub fn invoke(&self, inputs: &[f32]) -> Option<f32> {
        (self.apply)(inputs, &self.units)
    }

    /// The unit systems captured at binding time.
    pub fn units(&self) -> &BoundUnits {
        &self.units
    }
}

/// Per-session memoization of parameter-bound calculators.
///
/// Owned by one processor instance; lives exactly as long as it does.
#[derive(Debug, Default)]
pub struct CalculatorCache {
    bound: FnvIndexMap<DataType, BoundCalculator, CALCULATOR_CACHE_CAPACITY>,
}

impl CalculatorCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            bound: FnvIndexMap::new(),
        }
    }

    /// Resolve the bound calculator for a data type, binding on first
    /// use.
    ///
    /// `None` only when the cache cannot hold another binding, which
    /// the capacity constants rule out for the fixed registry.
    pub fn bind(
        &mut self,
        data_type: DataType,
        input: UnitSystem,
        output: UnitSystem,
    ) -> Option<&BoundCalculator> {
        if !self.bound.contains_key(&data_type) {
            let capability = capability(data_type);
            let bound = BoundCalculator {
                apply: capability.apply,
                units: BoundUnits {
                    input: capability.accepts_input_units.then_some(input),
                    output: capability.accepts_output_units.then_some(output),
                },
            };
            if self.bound.insert(data_type, bound).is_err() {
                return None;
            }
        }
        self.bound.get(&data_type)
    }

    /// Number of data types bound so far this session.
    pub fn bindings(&self) -> usize {
        self.bound.len()
    }
}
