//! Data Processor
//!
//! ## Overview
//!
//! Orchestrates one translation session over one raw payload:
//!
//! 1. **Single-value pass**: iterate raw entries in payload order,
//!    apply the ignore rules, coerce numeric strings, dispatch each
//!    matched key to its bound calculator, and emit the result under
//!    the unit-stripped key. Unmatched or non-coercible entries pass
//!    through unchanged.
//! 2. **Derived-metric pass**: evaluate the four derived-metric
//!    specifications in fixed declaration order, computing each metric
//!    only when every required input is available.
//!
//! ## Session Model
//!
//! A processor is constructed with one payload and one fixed
//! (input, output) unit-system pair, used once, then discarded. The
//! calculator cache lives exactly as long as the processor: every data
//! type is bound to its unit parameters at most once per session, no
//! matter how many keys or passes request it.
//!
//! ## Derived Inputs
//!
//! Availability of a derived metric is checked against the translated
//! mapping under *normalized* keys ("temp", "humidity", "windspeed"),
//! but the calculator consumes the *raw, pre-conversion* payload values
//! for those inputs. Session input units are bound into the derived
//! calculators, so raw values are interpreted correctly; the behavior
//! is deliberate and pinned by a regression test.
//!
//! ## Failure Model
//!
//! Translation is best-effort and infallible: malformed values pass
//! through, unmatched keys pass through, underspecified derived
//! metrics are omitted. See [`errors`](crate::errors) for the few
//! construction-time capacity errors.

use heapless::FnvIndexMap;

use crate::calculator::CalculatorCache;
use crate::constants::buffers::DERIVED_CAPACITY;
use crate::datatype::{de_unit_key, DataType};
use crate::device::DeviceInfo;
use crate::payload::{bounded, RawPayload, RawValue, TranslatedPayload, Value};
use crate::units::UnitSystem;

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Metadata keys excluded from translation and derived-metric output.
///
/// Still readable as raw lookups for device identification and the
/// session id.
pub const KEYS_TO_IGNORE: [&str; 5] = ["PASSKEY", "dateutc", "freq", "model", "stationtype"];

/// Session identifier used when a payload carries no passkey.
pub const DEFAULT_UNIQUE_ID: &str = "default";

/// Derived-metric specifications, evaluated in this exact order.
///
/// Both orders are significant: the outer order fixes evaluation
/// order across runs, and each inner list fixes the positional
/// argument order of the derived calculator.
const DERIVED_METRICS: [(DataType, &[&str]); 4] = [
    (DataType::DewPoint, &["tempf", "humidity"]),
    (DataType::FeelsLike, &["tempf", "humidity", "windspeedmph"]),
    (DataType::HeatIndex, &["tempf", "humidity"]),
    (DataType::WindChill, &["tempf", "windspeedmph"]),
];

/// Longest derived-metric input list.
const MAX_DERIVED_INPUTS: usize = 3;

/// Fixed unit-system configuration for one processing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessorConfig {
    /// Unit system the device reports in
    pub input_units: UnitSystem,
    /// Unit system the translated payload is expressed in
    pub output_units: UnitSystem,
}

/// Single-use translation session over one raw payload.
#[derive(Debug)]
pub struct DataProcessor<'p> {
    payload: &'p RawPayload,
    config: ProcessorConfig,
    cache: CalculatorCache,
    device: DeviceInfo,
    unique_id: RawValue,
}

impl<'p> DataProcessor<'p> {
    /// Create a session for one payload under one unit-system pair.
    ///
    /// Device identity and the session id are extracted here, once.
    pub fn new(payload: &'p RawPayload, config: ProcessorConfig) -> Self {
        let device = DeviceInfo::from_payload(payload);
        let unique_id = payload
            .get("PASSKEY")
            .and_then(bounded)
            .unwrap_or_else(|| bounded(DEFAULT_UNIQUE_ID).unwrap_or_default());

        Self {
            payload,
            config,
            cache: CalculatorCache::new(),
            device,
            unique_id,
        }
    }

    /// Identity of the emitting station.
    pub fn device(&self) -> &DeviceInfo {
        &self.device
    }

    /// Session identifier for downstream publication.
    ///
    /// The payload's `PASSKEY` if present, else [`DEFAULT_UNIQUE_ID`].
    pub fn unique_id(&self) -> &str {
        self.unique_id.as_str()
    }

    /// Number of calculator bindings made so far this session.
    pub fn cached_bindings(&self) -> usize {
        self.cache.bindings()
    }

    /// Run the translation and derived-metric passes, producing the
    /// output mapping.
    pub fn generate(&mut self) -> TranslatedPayload {
        let mut translated = TranslatedPayload::new();

        // Single-value pass, in payload order.
        for (key, raw) in self.payload.iter() {
            if KEYS_TO_IGNORE.contains(&key) {
                continue;
            }

            let numeric = raw.parse::<f32>().ok();
            let data_type = DataType::for_key(key);

            if let (Some(data_type), Some(value)) = (data_type, numeric) {
                let output = self
                    .cache
                    .bind(data_type, self.config.input_units, self.config.output_units)
                    .and_then(|calculator| calculator.invoke(&[value]));
                if let Some(output) = output {
                    if !translated.insert(de_unit_key(key), Value::Numeric(output)) {
                        log_warn!("output map full, dropping translated key {}", key);
                    }
                    continue;
                }
                // No usable calculator: fall through to pass-through.
            } else if data_type.is_none() {
                log_debug!("no data type for key {}, passing through", key);
            }

            let value = match numeric {
                Some(number) => Value::Numeric(number),
                None => Value::Text(bounded(raw).unwrap_or_default()),
            };
            if !translated.insert(key, value) {
                log_warn!("output map full, dropping key {}", key);
            }
        }

        // Derived-metric pass, in fixed declaration order.
        let mut derived: FnvIndexMap<&'static str, Value, DERIVED_CAPACITY> = FnvIndexMap::new();
        for (target, input_keys) in DERIVED_METRICS {
            // Availability is checked against normalized keys in the
            // translated mapping; the inputs themselves come from the
            // raw payload, pre-conversion.
            if !input_keys
                .iter()
                .all(|key| translated.contains_key(de_unit_key(key)))
            {
                continue;
            }

            let mut inputs: heapless::Vec<f32, MAX_DERIVED_INPUTS> = heapless::Vec::new();
            let mut complete = true;
            for input_key in input_keys {
                let raw_value = self
                    .payload
                    .get(input_key)
                    .and_then(|raw| raw.parse::<f32>().ok());
                match raw_value {
                    Some(value) => {
                        if inputs.push(value).is_err() {
                            complete = false;
                            break;
                        }
                    }
                    None => {
                        complete = false;
                        break;
                    }
                }
            }
            if !complete {
                continue;
            }

            let output = self
                .cache
                .bind(target, self.config.input_units, self.config.output_units)
                .and_then(|calculator| calculator.invoke(&inputs));
            if let Some(output) = output {
                if derived.insert(target.name(), Value::Numeric(output)).is_err() {
                    log_warn!("derived map full, dropping {}", target.name());
                }
            }
        }

        // Merge, derived results taking precedence.
        for (key, value) in derived.iter() {
            if !translated.insert(key, value.clone()) {
                log_warn!("output map full, dropping derived key {}", key);
            }
        }

        translated
    }
}
