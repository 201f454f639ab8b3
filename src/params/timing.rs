//! Timing parameter types: timestamps, timecode and synchronization.

use super::{decode, encode, wrong_kind};
use crate::core::{ParameterType, Value, ValueKind};
use crate::types::{Synchronization, SynchronizationSource, Timecode, TimecodeFormat, Timestamp};
use crate::util::{Result, UINT48_MAX, UINT_MAX};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value as JsonValue};

/// MAC address with `:` or `-` separators, or 12 bare hex digits.
pub const MAC_ADDRESS_PATTERN: &str = "^(?:[0-9a-fA-F]{2}:){5}[0-9a-fA-F]{2}$\
|^(?:[0-9a-fA-F]{2}-){5}[0-9a-fA-F]{2}$\
|^[0-9a-fA-F]{12}$";

static MAC_ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(MAC_ADDRESS_PATTERN).expect("valid MAC address pattern"));

fn real_schema() -> JsonValue {
    json!({ "type": "number" })
}

/// PTP-style timestamp: 48-bit seconds, 32-bit nano- and attoseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimestampType;

impl ParameterType for TimestampType {
    fn kind(&self) -> ValueKind {
        ValueKind::Timestamp
    }

    fn validate(&self, value: &Value) -> bool {
        let Value::Timestamp(ts) = value else {
            return false;
        };
        (0..=UINT48_MAX).contains(&ts.seconds)
            && (0..=UINT_MAX).contains(&ts.nanoseconds)
            && ts.attoseconds.map_or(true, |a| (0..=UINT_MAX).contains(&a))
    }

    fn to_json(&self, value: &Value) -> Result<JsonValue> {
        match value {
            Value::Timestamp(ts) => encode(ts),
            other => Err(wrong_kind(ValueKind::Timestamp, other)),
        }
    }

    fn from_json(&self, json: &JsonValue) -> Result<Value> {
        decode::<Timestamp>(json).map(Value::Timestamp)
    }

    fn make_json_schema(&self) -> JsonValue {
        json!({
            "type": "object",
            "additionalProperties": false,
            "required": ["seconds", "nanoseconds"],
            "properties": {
                "seconds": { "type": "integer", "minimum": 0, "maximum": UINT48_MAX },
                "nanoseconds": { "type": "integer", "minimum": 0, "maximum": UINT_MAX },
                "attoseconds": { "type": "integer", "minimum": 0, "maximum": UINT_MAX },
            },
        })
    }
}

/// SMPTE timecode; the frame number must be below the format's frame count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimecodeType;

impl TimecodeType {
    fn check(tc: &Timecode) -> bool {
        (0..24).contains(&tc.hours)
            && (0..60).contains(&tc.minutes)
            && (0..60).contains(&tc.seconds)
            && (0..tc.format.frame_count()).contains(&tc.frames)
    }
}

impl ParameterType for TimecodeType {
    fn kind(&self) -> ValueKind {
        ValueKind::Timecode
    }

    fn validate(&self, value: &Value) -> bool {
        matches!(value, Value::Timecode(tc) if Self::check(tc))
    }

    fn to_json(&self, value: &Value) -> Result<JsonValue> {
        match value {
            Value::Timecode(tc) => encode(tc),
            other => Err(wrong_kind(ValueKind::Timecode, other)),
        }
    }

    fn from_json(&self, json: &JsonValue) -> Result<Value> {
        decode::<Timecode>(json).map(Value::Timecode)
    }

    fn make_json_schema(&self) -> JsonValue {
        let formats: Vec<&str> = TimecodeFormat::ALL.iter().map(|f| f.as_str()).collect();
        let max_frame = TimecodeFormat::ALL
            .iter()
            .map(|f| f.frame_count() - 1)
            .max()
            .unwrap_or(0);
        json!({
            "type": "object",
            "additionalProperties": false,
            "required": ["hours", "minutes", "seconds", "frames", "format"],
            "properties": {
                "hours": { "type": "integer", "minimum": 0, "maximum": 23 },
                "minutes": { "type": "integer", "minimum": 0, "maximum": 59 },
                "seconds": { "type": "integer", "minimum": 0, "maximum": 59 },
                "frames": { "type": "integer", "minimum": 0, "maximum": max_frame },
                "format": { "type": "string", "enum": formats },
            },
        })
    }
}

/// Synchronization state: positive frequency, known source, and optional
/// PTP details and latency offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SynchronizationType;

impl SynchronizationType {
    fn check(sync: &Synchronization) -> bool {
        let finite = |v: Option<f64>| v.map_or(true, f64::is_finite);
        let offsets_ok = sync
            .offsets
            .map_or(true, |o| finite(o.translation) && finite(o.rotation) && finite(o.encoders));

        sync.frequency.is_finite()
            && sync.frequency > 0.0
            && sync
                .ptp_master
                .as_deref()
                .map_or(true, |m| MAC_ADDRESS_RE.is_match(m))
            && finite(sync.ptp_offset)
            && sync.ptp_domain.map_or(true, |d| d >= 0)
            && offsets_ok
    }
}

impl ParameterType for SynchronizationType {
    fn kind(&self) -> ValueKind {
        ValueKind::Synchronization
    }

    fn validate(&self, value: &Value) -> bool {
        matches!(value, Value::Synchronization(s) if Self::check(s))
    }

    fn to_json(&self, value: &Value) -> Result<JsonValue> {
        match value {
            Value::Synchronization(s) => encode(s),
            other => Err(wrong_kind(ValueKind::Synchronization, other)),
        }
    }

    fn from_json(&self, json: &JsonValue) -> Result<Value> {
        decode::<Synchronization>(json).map(Value::Synchronization)
    }

    fn make_json_schema(&self) -> JsonValue {
        let sources: Vec<&str> = SynchronizationSource::ALL.iter().map(|s| s.as_str()).collect();
        json!({
            "type": "object",
            "additionalProperties": false,
            "required": ["frequency", "locked", "source"],
            "properties": {
                "frequency": { "type": "number", "exclusiveMinimum": 0 },
                "locked": { "type": "boolean" },
                "source": { "type": "string", "enum": sources },
                "ptp_master": { "type": "string", "pattern": MAC_ADDRESS_PATTERN },
                "ptp_offset": real_schema(),
                "ptp_domain": { "type": "integer", "minimum": 0 },
                "offsets": {
                    "type": "object",
                    "additionalProperties": false,
                    "properties": {
                        "translation": real_schema(),
                        "rotation": real_schema(),
                        "encoders": real_schema(),
                    },
                },
                "enabled": { "type": "boolean" },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::test_util::{assert_round_trip, conforms};
    use crate::types::SynchronizationOffsets;
    use crate::util::Error;

    #[test]
    fn test_timestamp() {
        let ty = TimestampType;
        assert_round_trip(&ty, Value::Timestamp(Timestamp::new(1_718_806_554, 500_000_000)));
        assert_round_trip(
            &ty,
            Value::Timestamp(Timestamp::new(UINT48_MAX, UINT_MAX).with_attoseconds(0)),
        );
        assert!(!ty.validate(&Value::Timestamp(Timestamp::new(UINT48_MAX + 1, 0))));
        assert!(!ty.validate(&Value::Timestamp(Timestamp::new(0, -1))));
        assert!(!ty.validate(&Value::Timestamp(Timestamp::new(0, 0).with_attoseconds(UINT_MAX + 1))));
        assert!(matches!(ty.from_json(&json!({ "seconds": 1 })), Err(Error::Decode { .. })));
    }

    #[test]
    fn test_timecode_bounds() {
        let ty = TimecodeType;
        let tc = |h, m, s, f, format| Value::Timecode(Timecode::new(h, m, s, f, format));

        assert_round_trip(&ty, tc(23, 59, 59, 29, TimecodeFormat::Fps30Drop));
        assert_round_trip(&ty, tc(0, 0, 0, 0, TimecodeFormat::Fps24));
        assert!(!ty.validate(&tc(24, 0, 0, 0, TimecodeFormat::Fps30)));
        assert!(!ty.validate(&tc(0, 60, 0, 0, TimecodeFormat::Fps30)));
        assert!(!ty.validate(&tc(0, 0, 0, 30, TimecodeFormat::Fps30)));
        assert!(!ty.validate(&tc(0, 0, 0, 24, TimecodeFormat::Fps24)));
        assert!(ty.validate(&tc(0, 0, 0, 24, TimecodeFormat::Fps25)));
    }

    #[test]
    fn test_timecode_wire() {
        let json = json!({ "hours": 1, "minutes": 2, "seconds": 3, "frames": 4, "format": "24D" });
        let value = TimecodeType.from_json(&json).expect("decode");
        assert_eq!(value, Value::Timecode(Timecode::new(1, 2, 3, 4, TimecodeFormat::Fps24Drop)));

        let bad_format = json!({ "hours": 1, "minutes": 2, "seconds": 3, "frames": 4, "format": "29.97" });
        assert!(matches!(TimecodeType.from_json(&bad_format), Err(Error::Decode { .. })));
        assert!(!conforms(&TimecodeType.make_json_schema(), &bad_format));
    }

    #[test]
    fn test_synchronization_minimal() {
        let sync = Synchronization::new(24.0, true, SynchronizationSource::Ptp);
        assert_round_trip(&SynchronizationType, Value::Synchronization(sync.clone()));

        let json = SynchronizationType
            .to_json(&Value::Synchronization(sync))
            .expect("encode");
        assert_eq!(json, json!({ "frequency": 24.0, "locked": true, "source": "ptp" }));
    }

    #[test]
    fn test_synchronization_full() {
        let mut sync = Synchronization::new(23.976, false, SynchronizationSource::VideoIn);
        sync.ptp_master = Some("00:11:22:33:44:55".to_string());
        sync.ptp_offset = Some(0.0);
        sync.ptp_domain = Some(1);
        sync.enabled = Some(true);
        sync.offsets = Some(SynchronizationOffsets {
            translation: Some(1.0),
            rotation: Some(2.0),
            encoders: Some(3.0),
        });
        assert_round_trip(&SynchronizationType, Value::Synchronization(sync.clone()));

        for mac in ["00-11-22-33-44-55", "a0b1c2d3e4f5"] {
            sync.ptp_master = Some(mac.to_string());
            assert_round_trip(&SynchronizationType, Value::Synchronization(sync.clone()));
        }
    }

    #[test]
    fn test_synchronization_invalid() {
        let ty = SynchronizationType;
        let mut sync = Synchronization::new(24.0, true, SynchronizationSource::Ptp);
        sync.ptp_master = Some("not-a-mac".to_string());
        assert!(!ty.validate(&Value::Synchronization(sync.clone())));

        sync.ptp_master = Some("00:11-22:33:44:55".to_string());
        assert!(!ty.validate(&Value::Synchronization(sync.clone())));

        let zero = Synchronization::new(0.0, true, SynchronizationSource::Genlock);
        assert!(!ty.validate(&Value::Synchronization(zero)));
        assert!(!conforms(
            &ty.make_json_schema(),
            &json!({ "frequency": 0, "locked": true, "source": "genlock" })
        ));

        let unknown_source = json!({ "frequency": 24.0, "locked": true, "source": "gps" });
        assert!(matches!(ty.from_json(&unknown_source), Err(Error::Decode { .. })));
    }
}
