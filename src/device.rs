//! Device Identity Extraction
//!
//! A narrow collaborator consumed once at processor construction: given
//! the raw payload, produce a descriptor of the emitting station for
//! downstream publication metadata. Identification reads only the
//! reserved metadata keys ("model", "stationtype"), which the ignore
//! set keeps out of translation but leaves readable here.

use crate::payload::{bounded, RawPayload, RawValue};

/// Fallback label when a payload carries no model information.
pub const UNKNOWN_DEVICE: &str = "Unknown";

/// Model prefixes of known station families.
///
/// GW gateways, WH/WN sensor hubs, WS consoles, HP displays.
const KNOWN_MODEL_PREFIXES: [&str; 5] = ["GW", "WH", "WN", "WS", "HP"];

const KNOWN_MANUFACTURER: &str = "Ecowitt";

/// Identity descriptor of the emitting station.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeviceInfo {
    model: RawValue,
    station_type: RawValue,
    manufacturer: &'static str,
}

impl DeviceInfo {
    /// Extract device identity from a raw payload.
    pub fn from_payload(payload: &RawPayload) -> Self {
        let model = payload
            .get("model")
            .and_then(bounded)
            .unwrap_or_else(|| bounded(UNKNOWN_DEVICE).unwrap_or_default());
        let station_type = payload
            .get("stationtype")
            .and_then(bounded)
            .unwrap_or_else(|| bounded(UNKNOWN_DEVICE).unwrap_or_default());

        let manufacturer = if KNOWN_MODEL_PREFIXES
            .iter()
            .any(|prefix| model.as_str().starts_with(prefix))
        {
            KNOWN_MANUFACTURER
        } else {
            UNKNOWN_DEVICE
        };

        Self {
            model,
            station_type,
            manufacturer,
        }
    }

    /// Hardware model string ("GW1000").
    pub fn model(&self) -> &str {
        self.model.as_str()
    }

    /// Firmware/station type string ("EasyWeatherV1.5.9").
    pub fn station_type(&self) -> &str {
        self.station_type.as_str()
    }

    /// Manufacturer label derived from the model family.
    pub fn manufacturer(&self) -> &str {
        self.manufacturer
    }
}
