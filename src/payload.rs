//! Payload Containers
//!
//! ## Overview
//!
//! Two bounded, insertion-ordered maps carry data through the engine:
//!
//! - [`RawPayload`]: the flat key/value mapping exactly as received from
//!   the device. Every value is a string; numeric coercion happens
//!   during translation, not here.
//! - [`TranslatedPayload`]: the normalized output mapping produced by a
//!   processing session, holding [`Value`]s (numeric where coercible,
//!   text otherwise).
//!
//! ## Ordering
//!
//! Both maps preserve insertion order. Raw-payload order determines the
//! order of the single-value pass and therefore the order of the output
//! mapping; it never affects *which* entries are produced.
//!
//! ## Memory Model
//!
//! All storage is inline (`heapless::FnvIndexMap` over
//! `heapless::String`), bounded by the capacities in
//! [`constants::buffers`](crate::constants::buffers). Exceeding a bound
//! is a construction-time [`ProcessError`]; translation itself never
//! allocates and never fails.

use heapless::FnvIndexMap;

use crate::constants::buffers::{
    MAX_KEY_LEN, MAX_VALUE_LEN, PAYLOAD_CAPACITY, TRANSLATED_CAPACITY,
};
use crate::errors::{ProcessError, ProcessResult};

/// Payload key, bounded to [`MAX_KEY_LEN`] bytes.
pub type Key = heapless::String<MAX_KEY_LEN>;

/// Raw payload value, bounded to [`MAX_VALUE_LEN`] bytes.
pub type RawValue = heapless::String<MAX_VALUE_LEN>;

/// Copy a string slice into a bounded heapless string.
pub(crate) fn bounded<const N: usize>(s: &str) -> Option<heapless::String<N>> {
    let mut out = heapless::String::new();
    out.push_str(s).ok()?;
    Some(out)
}

/// A translated output value.
///
/// Values that coerce to a number travel as [`Value::Numeric`];
/// everything else (firmware strings, identifiers) passes through as
/// [`Value::Text`] unchanged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Numeric reading or calculator output
    Numeric(f32),
    /// Pass-through text value
    Text(RawValue),
}

impl Value {
    /// Build a text value from a string slice, if it fits the bound.
    pub fn text(s: &str) -> Option<Self> {
        bounded(s).map(Value::Text)
    }

    /// Numeric content, if this is a numeric value.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Numeric(v) => Some(*v),
            Value::Text(_) => None,
        }
    }

    /// Text content, if this is a pass-through string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Numeric(_) => None,
            Value::Text(s) => Some(s.as_str()),
        }
    }
}

/// Flat key/value telemetry payload as received from the device.
#[derive(Debug, Clone, Default)]
pub struct RawPayload {
    entries: FnvIndexMap<Key, RawValue, PAYLOAD_CAPACITY>,
}

impl RawPayload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self {
            entries: FnvIndexMap::new(),
        }
    }

    /// Build a payload from (key, value) pairs, preserving order.
    pub fn from_pairs<'a, I>(pairs: I) -> ProcessResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut payload = Self::new();
        for (key, value) in pairs {
            payload.insert(key, value)?;
        }
        Ok(payload)
    }

    /// Insert an entry, appending to the payload order.
    ///
    /// Re-inserting an existing key replaces its value in place.
    pub fn insert(&mut self, key: &str, value: &str) -> ProcessResult<()> {
        let key: Key = bounded(key).ok_or(ProcessError::KeyTooLong {
            len: key.len(),
            max: MAX_KEY_LEN,
        })?;
        let value: RawValue = bounded(value).ok_or(ProcessError::ValueTooLong {
            len: value.len(),
            max: MAX_VALUE_LEN,
        })?;
        self.entries
            .insert(key, value)
            .map_err(|_| ProcessError::PayloadFull {
                capacity: PAYLOAD_CAPACITY,
            })?;
        Ok(())
    }

    /// Look up a raw value by key.
    ///
    /// Keys that exceed the key-length bound cannot be present and
    /// yield `None`.
    pub fn get(&self, key: &str) -> Option<&str> {
        let key: Key = bounded(key)?;
        self.entries.get(&key).map(|v| v.as_str())
    }

    /// Iterate entries in payload order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the payload holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Normalized, semantically-typed output payload.
///
/// Produced fresh by each processing session; the raw payload is never
/// mutated.
#[derive(Debug, Clone, Default)]
pub struct TranslatedPayload {
    entries: FnvIndexMap<Key, Value, TRANSLATED_CAPACITY>,
}

impl TranslatedPayload {
    /// Create an empty translated payload.
    pub fn new() -> Self {
        Self {
            entries: FnvIndexMap::new(),
        }
    }

    /// Insert or replace an entry.
    ///
    /// Returns `false` when the key does not fit or the map is full;
    /// callers degrade by dropping the entry rather than failing the
    /// session.
    pub(crate) fn insert(&mut self, key: &str, value: Value) -> bool {
        let Some(key) = bounded::<MAX_KEY_LEN>(key) else {
            return false;
        };
        self.entries.insert(key, value).is_ok()
    }

    /// Look up a translated value by key.
    ///
    /// Keys that exceed the key-length bound cannot be present and
    /// yield `None`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let key: Key = bounded(key)?;
        self.entries.get(&key)
    }

    /// Whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate entries in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the payload holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
