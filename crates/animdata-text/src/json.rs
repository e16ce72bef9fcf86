//! JSON mirror: an array of `{cof_name, frames_per_direction, animation_speed,
//! triggers}` objects. Trigger frame indices are written as string keys.

use std::collections::BTreeMap;
use std::fmt;

use animdata_types::{validate_cof_name, Record, RecordError, RecordFields, RecordResult};
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::error::{TextError, TextResult};

/// One array entry before validation.
#[derive(Deserialize)]
struct JsonEntry {
    cof_name: String,
    frames_per_direction: JsonInt,
    animation_speed: JsonInt,
    triggers: BTreeMap<String, JsonInt>,
}

/// A JSON scalar that should hold an integer.
///
/// Anything else is kept as text so validation can name the field.
enum JsonInt {
    Int(i128),
    Other(String),
}

impl JsonInt {
    fn get(self, field: &'static str) -> RecordResult<i128> {
        match self {
            Self::Int(value) => Ok(value),
            Self::Other(value) => Err(RecordError::NotAnInteger { field, value }),
        }
    }
}

// serde_json passes integers outside the 64-bit range to `visit_f64`.
const LARGE_WHOLE_FLOAT: f64 = 9_223_372_036_854_775_808.0;

struct JsonIntVisitor;

impl<'de> Visitor<'de> for JsonIntVisitor {
    type Value = JsonInt;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<JsonInt, E> {
        Ok(JsonInt::Int(i128::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<JsonInt, E> {
        Ok(JsonInt::Int(i128::from(v)))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<JsonInt, E> {
        Ok(JsonInt::Int(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<JsonInt, E> {
        if v.is_finite() && v.fract() == 0.0 && v.abs() >= LARGE_WHOLE_FLOAT {
            Ok(JsonInt::Int(v as i128))
        } else {
            Ok(JsonInt::Other(v.to_string()))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<JsonInt, E> {
        Ok(JsonInt::Other(format!("{v:?}")))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<JsonInt, E> {
        Ok(JsonInt::Other(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<JsonInt, E> {
        Ok(JsonInt::Other("null".into()))
    }
}

impl<'de> Deserialize<'de> for JsonInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(JsonIntVisitor)
    }
}

/// Trigger keys are frame numbers written as strings. Surrounding whitespace,
/// a sign and leading zeros are accepted.
fn parse_frame_key(key: &str) -> RecordResult<i128> {
    key.trim().parse().map_err(|_| RecordError::NotAnInteger {
        field: "triggers",
        value: format!("{key:?}"),
    })
}

impl JsonEntry {
    fn into_record(self) -> RecordResult<Record> {
        validate_cof_name(&self.cof_name)?;
        let frames_per_direction = self.frames_per_direction.get("frames_per_direction")?;
        let animation_speed = self.animation_speed.get("animation_speed")?;
        let triggers = self
            .triggers
            .into_iter()
            .map(|(key, code)| Ok((parse_frame_key(&key)?, code.get("triggers")?)))
            .collect::<RecordResult<BTreeMap<_, _>>>()?;
        Record::try_from(RecordFields {
            cof_name: self.cof_name,
            frames_per_direction,
            animation_speed,
            triggers,
        })
    }
}

/// Parse a JSON array of records.
///
/// Each entry is validated on its own, so an error names the offending entry.
pub fn from_str(s: &str) -> TextResult<Vec<Record>> {
    let entries: Vec<JsonEntry> = serde_json::from_str(s)?;
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            entry
                .into_record()
                .map_err(|source| TextError::InvalidEntry { index, source })
        })
        .collect()
}

/// Write records as a pretty-printed JSON array (2-space indent).
pub fn to_string(records: &[Record]) -> TextResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use animdata_types::{ActionTriggers, RecordError};

    const VALID_JSON: &str = r#"[
  {
    "cof_name": "AWS1HTH",
    "frames_per_direction": 9,
    "animation_speed": 7,
    "triggers": {
      "0": 3,
      "1": 2,
      "2": 1
    }
  },
  {
    "cof_name": "AXS1HTH",
    "frames_per_direction": 256,
    "animation_speed": 256,
    "triggers": {
      "141": 1,
      "142": 2,
      "143": 3
    }
  }
]"#;

    fn record(name: &str, frames: u32, speed: u32, pairs: &[(usize, u8)]) -> Record {
        let mut t = ActionTriggers::new();
        for &(frame, code) in pairs {
            t.insert(frame, code).unwrap();
        }
        Record::new(name, frames, speed, t).unwrap()
    }

    fn valid_records() -> Vec<Record> {
        vec![
            record("AWS1HTH", 9, 7, &[(0, 3), (1, 2), (2, 1)]),
            record("AXS1HTH", 256, 256, &[(141, 1), (142, 2), (143, 3)]),
        ]
    }

    #[test]
    fn parse_valid() {
        assert_eq!(from_str(VALID_JSON).unwrap(), valid_records());
    }

    #[test]
    fn write_valid() {
        assert_eq!(to_string(&valid_records()).unwrap(), VALID_JSON);
    }

    #[test]
    fn empty_triggers_written_as_empty_object() {
        let json = to_string(&[record("BVS1HTH", 17, 32, &[])]).unwrap();
        assert!(json.contains(r#""triggers": {}"#));
    }

    #[test]
    fn empty_array() {
        assert!(from_str("[]").unwrap().is_empty());
        assert_eq!(to_string(&[]).unwrap(), "[]");
    }

    #[test]
    fn invalid_entry_is_located() {
        let json = r#"[
            {"cof_name": "AWS1HTH", "frames_per_direction": 9, "animation_speed": 7, "triggers": {}},
            {"cof_name": "AWS1HTH", "frames_per_direction": 9, "animation_speed": 7, "triggers": {"3": 4}}
        ]"#;
        let err = from_str(json).unwrap_err();
        assert!(matches!(
            err,
            TextError::InvalidEntry {
                index: 1,
                source: RecordError::TriggerCodeOutOfRange { frame: 3, code: 4 }
            }
        ));
    }

    #[test]
    fn frames_past_u32_rejected() {
        let json = r#"[{"cof_name": "AWS1HTH", "frames_per_direction": 4294967296, "animation_speed": 7, "triggers": {}}]"#;
        assert!(matches!(
            from_str(json),
            Err(TextError::InvalidEntry {
                source: RecordError::FramesPerDirectionOutOfRange { value: 4294967296 },
                ..
            })
        ));
    }

    fn entry(frames: &str, speed: &str, triggers: &str) -> String {
        format!(
            r#"[{{"cof_name": "AWS1HTH", "frames_per_direction": {frames}, "animation_speed": {speed}, "triggers": {triggers}}}]"#
        )
    }

    fn entry_error(json: &str) -> RecordError {
        match from_str(json) {
            Err(TextError::InvalidEntry { index: 0, source }) => source,
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn negative_frames_named() {
        assert_eq!(
            entry_error(&entry("-1", "7", "{}")),
            RecordError::FramesPerDirectionOutOfRange { value: -1 }
        );
    }

    #[test]
    fn negative_trigger_code_named() {
        assert_eq!(
            entry_error(&entry("9", "7", r#"{"5": -2}"#)),
            RecordError::TriggerCodeOutOfRange { frame: 5, code: -2 }
        );
    }

    #[test]
    fn speed_past_u64_named() {
        assert!(matches!(
            entry_error(&entry("9", "18446744073709551616", "{}")),
            RecordError::AnimationSpeedOutOfRange { value } if value > i128::from(u64::MAX)
        ));
    }

    #[test]
    fn non_integer_values_named() {
        assert_eq!(
            entry_error(&entry("1.5", "7", "{}")),
            RecordError::NotAnInteger { field: "frames_per_direction", value: "1.5".into() }
        );
        assert_eq!(
            entry_error(&entry("9", r#""7""#, "{}")),
            RecordError::NotAnInteger { field: "animation_speed", value: r#""7""#.into() }
        );
        assert_eq!(
            entry_error(&entry("9", "7", r#"{"x": 1}"#)),
            RecordError::NotAnInteger { field: "triggers", value: r#""x""#.into() }
        );
        assert_eq!(
            entry_error(&entry("9", "7", r#"{"1": 2.0}"#)),
            RecordError::NotAnInteger { field: "triggers", value: "2".into() }
        );
    }

    #[test]
    fn name_checked_before_numbers() {
        let json = r#"[{"cof_name": "BAD", "frames_per_direction": -1, "animation_speed": 0.5, "triggers": {}}]"#;
        assert!(matches!(entry_error(json), RecordError::NameLength { len: 3, .. }));
    }

    #[test]
    fn leading_zero_trigger_key() {
        let records = from_str(&entry("9", "7", r#"{"01": 3, " 2 ": 1}"#)).unwrap();
        assert_eq!(records, vec![record("AWS1HTH", 9, 7, &[(1, 3), (2, 1)])]);
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(from_str("[{"), Err(TextError::Json(_))));
        assert!(matches!(
            from_str(r#"[{"cof_name": "AWS1HTH"}]"#),
            Err(TextError::Json(_))
        ));
    }
}
