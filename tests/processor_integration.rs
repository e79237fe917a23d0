//! Integration tests for the payload translation engine
//!
//! Exercises the complete flow from raw device payload through
//! classification, unit translation, key normalization, and the
//! derived-metric pass.

use proptest::prelude::*;

use stationcore::{
    datatype::REGISTRY, DataProcessor, ProcessorConfig, RawPayload, UnitSystem, Value,
    DEFAULT_UNIQUE_ID, KEYS_TO_IGNORE,
};

fn imperial() -> ProcessorConfig {
    ProcessorConfig::default()
}

fn metric_output() -> ProcessorConfig {
    ProcessorConfig {
        input_units: UnitSystem::Imperial,
        output_units: UnitSystem::Metric,
    }
}

fn numeric(output: &stationcore::TranslatedPayload, key: &str) -> f32 {
    output
        .get(key)
        .and_then(Value::as_f32)
        .unwrap_or_else(|| panic!("missing numeric key {key}"))
}

#[test]
fn station_payload_imperial_to_imperial() {
    let payload = RawPayload::from_pairs([
        ("PASSKEY", "AB"),
        ("tempf", "77.4"),
        ("humidity", "54"),
        ("windspeedmph", "4.0"),
    ])
    .unwrap();

    let mut processor = DataProcessor::new(&payload, imperial());
    let output = processor.generate();

    assert_eq!(processor.unique_id(), "AB");
    assert!(!output.contains_key("PASSKEY"));
    assert!(!output.contains_key("tempf"), "unit suffix must be stripped");

    assert_eq!(numeric(&output, "temp"), 77.4);
    assert_eq!(numeric(&output, "humidity"), 54.0);
    assert_eq!(numeric(&output, "windspeed"), 4.0);

    // All four derived metrics have their inputs available.
    let dew = numeric(&output, "dewpoint");
    assert!((dew - 59.5).abs() < 0.5, "dew point {dew}");

    // 77.4°F sits between the wind chill and heat index envelopes, so
    // feels-like and wind chill collapse to the air temperature and
    // the heat index stays within a degree of it.
    assert_eq!(numeric(&output, "feelslike"), 77.4);
    assert_eq!(numeric(&output, "windchill"), 77.4);
    let hi = numeric(&output, "heatindex");
    assert!((hi - 77.4).abs() < 0.1, "heat index {hi}");
}

#[test]
fn station_payload_imperial_to_metric() {
    let payload = RawPayload::from_pairs([
        ("tempf", "77.0"),
        ("humidity", "54"),
        ("windspeedmph", "10.0"),
        ("baromabsin", "29.92"),
        ("hourlyrainin", "1.0"),
    ])
    .unwrap();

    let output = DataProcessor::new(&payload, metric_output()).generate();

    assert_eq!(numeric(&output, "temp"), 25.0);
    assert_eq!(numeric(&output, "windspeed"), 16.1);
    assert_eq!(numeric(&output, "hourlyrain"), 25.4);
    let barom = numeric(&output, "baromabs");
    assert!((barom - 1013.21).abs() < 0.05, "pressure {barom}");

    // Derived metrics consume raw imperial inputs but answer in the
    // output units.
    let dew = numeric(&output, "dewpoint");
    assert!((dew - 15.0).abs() < 0.3, "dew point {dew}");
}

#[test]
fn battery_payload_excludes_model() {
    let payload = RawPayload::from_pairs([("model", "GW1000"), ("battery1", "1")]).unwrap();

    let mut processor = DataProcessor::new(&payload, imperial());
    let output = processor.generate();

    assert!(!output.contains_key("model"));
    assert_eq!(numeric(&output, "battery1"), 1.0);
    assert_eq!(processor.unique_id(), DEFAULT_UNIQUE_ID);
    assert_eq!(processor.device().model(), "GW1000");
    assert_eq!(processor.device().manufacturer(), "Ecowitt");
}

#[test]
fn multi_channel_station_payload() {
    // A fuller GW1000 frame with numbered channels and per-channel
    // batteries.
    let payload = RawPayload::from_pairs([
        ("PASSKEY", "DEADBEEF"),
        ("stationtype", "EasyWeatherV1.5.9"),
        ("dateutc", "2021-06-01 12:00:00"),
        ("tempf", "90.0"),
        ("humidity", "70"),
        ("windspeedmph", "5.0"),
        ("windgustmph", "9.2"),
        ("winddir", "271"),
        ("temp1f", "68.9"),
        ("temp2f", "71.1"),
        ("batt1", "0"),
        ("batt2", "1"),
        ("dailyrainin", "0.02"),
        ("totalrainin", "12.89"),
        ("baromrelin", "29.85"),
        ("uv", "6"),
        ("solarradiation", "601.3"),
        ("model", "GW1000"),
    ])
    .unwrap();

    let mut processor = DataProcessor::new(&payload, imperial());
    let output = processor.generate();

    // Normalized family keys.
    for key in [
        "temp",
        "temp1",
        "temp2",
        "windspeed",
        "windgust",
        "winddir",
        "dailyrain",
        "totalrain",
        "baromrel",
        "batt1",
        "batt2",
    ] {
        assert!(output.contains_key(key), "missing {key}");
    }

    // Unclassified keys pass through numerically.
    assert_eq!(numeric(&output, "uv"), 6.0);
    assert_eq!(numeric(&output, "solarradiation"), 601.3);

    // Batteries are binary.
    assert_eq!(numeric(&output, "batt1"), 0.0);
    assert_eq!(numeric(&output, "batt2"), 1.0);

    // Hot and humid: heat index regime.
    let feels = numeric(&output, "feelslike");
    assert!(feels > 100.0, "feels like {feels}");

    // One binding per data type despite many keys per family:
    // temp ×3, wind ×3, rain ×2, batt ×2, barom ×1, plus the four
    // derived calculators.
    assert_eq!(processor.cached_bindings(), 9);
}

#[test]
fn derived_metrics_evaluate_in_fixed_order() {
    // Raw-payload key order must not affect which metrics appear or
    // their values.
    let forward = RawPayload::from_pairs([
        ("tempf", "30.0"),
        ("humidity", "50"),
        ("windspeedmph", "20.0"),
    ])
    .unwrap();
    let reversed = RawPayload::from_pairs([
        ("windspeedmph", "20.0"),
        ("humidity", "50"),
        ("tempf", "30.0"),
    ])
    .unwrap();

    let a = DataProcessor::new(&forward, imperial()).generate();
    let b = DataProcessor::new(&reversed, imperial()).generate();

    for key in ["dewpoint", "feelslike", "heatindex", "windchill"] {
        assert_eq!(a.get(key), b.get(key), "mismatch for {key}");
    }

    // Cold and windy: wind chill, and therefore feels-like, undercut
    // the air temperature.
    let chill = numeric(&a, "windchill");
    assert!((chill - 17.0).abs() < 1.0, "wind chill {chill}");
    assert_eq!(a.get("windchill"), a.get("feelslike"));
}

#[test]
fn dew_point_gating_is_all_or_nothing() {
    let without_humidity = RawPayload::from_pairs([("tempf", "77.4")]).unwrap();
    let output = DataProcessor::new(&without_humidity, imperial()).generate();
    assert!(!output.contains_key("dewpoint"));

    let with_humidity =
        RawPayload::from_pairs([("tempf", "77.4"), ("humidity", "54")]).unwrap();
    let output = DataProcessor::new(&with_humidity, imperial()).generate();
    assert!(output.contains_key("dewpoint"));
    assert!(output.contains_key("heatindex"));
    // Wind-dependent metrics stay gated off.
    assert!(!output.contains_key("windchill"));
    assert!(!output.contains_key("feelslike"));
}

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    // The text class avoids the letters of "nan"/"inf", which would
    // coerce to non-finite floats and defeat value comparison.
    prop_oneof![
        "-?[0-9]{1,3}(\\.[0-9]{1,2})?",
        "[b-eg-hj-mo-zB-EG-HJ-MO-Z_.]{1,10}",
    ]
}

proptest! {
    #[test]
    fn full_pipeline_is_deterministic(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..12)
    ) {
        let payload = RawPayload::from_pairs(
            entries.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        ).unwrap();

        let first = DataProcessor::new(&payload, imperial()).generate();
        let second = DataProcessor::new(&payload, imperial()).generate();
        prop_assert!(first.iter().eq(second.iter()));
    }

    #[test]
    fn unmatched_keys_pass_through_exactly(
        entries in prop::collection::vec((key_strategy(), value_strategy()), 1..12)
    ) {
        let payload = RawPayload::from_pairs(
            entries.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        ).unwrap();

        let output = DataProcessor::new(&payload, imperial()).generate();

        for (key, raw) in payload.iter() {
            if KEYS_TO_IGNORE.contains(&key)
                || REGISTRY.iter().any(|data_type| key.contains(data_type.name()))
            {
                continue;
            }
            let expected = match raw.parse::<f32>() {
                Ok(number) => Value::Numeric(number),
                Err(_) => Value::text(raw).unwrap(),
            };
            prop_assert_eq!(output.get(key), Some(&expected));
        }
    }
}
