use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RecordError, RecordResult};
use crate::hash::hash_cof_name;
use crate::triggers::ActionTriggers;

/// Length of a COF name in characters.
pub const COF_NAME_LEN: usize = 7;

/// One AnimData entry: the animation metadata for a single COF.
///
/// Fields are private and every constructor and mutator goes through
/// [`Record::validate`], so a `Record` is always valid and safe to pack.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RecordFields", into = "RecordFields")]
pub struct Record {
    cof_name: String,
    frames_per_direction: u32,
    animation_speed: u32,
    triggers: ActionTriggers,
}

/// Unvalidated field values, as read from a text format.
///
/// Integers are signed and 128 bits wide so that negative or oversized input
/// reaches validation instead of failing inside the parser. This is also the
/// serde shape of a [`Record`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFields {
    pub cof_name: String,
    pub frames_per_direction: i128,
    pub animation_speed: i128,
    pub triggers: BTreeMap<i128, i128>,
}

impl Record {
    /// Create a validated record.
    pub fn new(
        cof_name: impl Into<String>,
        frames_per_direction: u32,
        animation_speed: u32,
        triggers: ActionTriggers,
    ) -> RecordResult<Self> {
        let record = Self {
            cof_name: cof_name.into(),
            frames_per_direction,
            animation_speed,
            triggers,
        };
        record.validate()?;
        Ok(record)
    }

    /// Check every field, stopping at the first failure.
    pub fn validate(&self) -> RecordResult<()> {
        validate_cof_name(&self.cof_name)?;
        self.triggers.validate()
    }

    pub fn cof_name(&self) -> &str {
        &self.cof_name
    }

    pub fn frames_per_direction(&self) -> u32 {
        self.frames_per_direction
    }

    pub fn animation_speed(&self) -> u32 {
        self.animation_speed
    }

    pub fn triggers(&self) -> &ActionTriggers {
        &self.triggers
    }

    /// Bucket this record belongs to in an AnimData.D2 file.
    pub fn bucket(&self) -> u8 {
        hash_cof_name(&self.cof_name)
    }

    pub fn set_cof_name(&mut self, cof_name: impl Into<String>) -> RecordResult<()> {
        let cof_name = cof_name.into();
        self.update(|r| r.cof_name = cof_name)
    }

    pub fn set_frames_per_direction(&mut self, frames: u32) -> RecordResult<()> {
        self.update(|r| r.frames_per_direction = frames)
    }

    pub fn set_animation_speed(&mut self, speed: u32) -> RecordResult<()> {
        self.update(|r| r.animation_speed = speed)
    }

    pub fn set_triggers(&mut self, triggers: ActionTriggers) -> RecordResult<()> {
        self.update(|r| r.triggers = triggers)
    }

    /// Apply a change and re-validate. On failure the record is left as it was.
    pub fn update<F>(&mut self, change: F) -> RecordResult<()>
    where
        F: FnOnce(&mut Self),
    {
        let mut candidate = self.clone();
        change(&mut candidate);
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    /// Trigger frames at or past `frames_per_direction`.
    ///
    /// The game never reaches these frames, so the triggers have no effect.
    pub fn unreachable_trigger_frames(&self) -> Vec<usize> {
        let limit = self.frames_per_direction as usize;
        self.triggers
            .iter()
            .map(|(frame, _)| frame)
            .filter(|&frame| frame >= limit)
            .collect()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} frames, speed {}, {} triggers)",
            self.cof_name,
            self.frames_per_direction,
            self.animation_speed,
            self.triggers.len()
        )
    }
}

/// Validate a COF name: 7 characters, no NUL, printable ASCII only.
pub fn validate_cof_name(name: &str) -> RecordResult<()> {
    let len = name.chars().count();
    if len != COF_NAME_LEN {
        return Err(RecordError::NameLength {
            name: name.to_string(),
            len,
        });
    }
    if name.contains('\0') {
        return Err(RecordError::NameContainsNull {
            name: name.to_string(),
        });
    }
    if !name.bytes().all(|b| b == b' ' || b.is_ascii_graphic()) {
        return Err(RecordError::NameNotPrintable {
            name: name.to_string(),
        });
    }
    Ok(())
}

impl TryFrom<RecordFields> for Record {
    type Error = RecordError;

    fn try_from(fields: RecordFields) -> RecordResult<Self> {
        validate_cof_name(&fields.cof_name)?;
        let frames_per_direction = u32::try_from(fields.frames_per_direction).map_err(|_| {
            RecordError::FramesPerDirectionOutOfRange {
                value: fields.frames_per_direction,
            }
        })?;
        let animation_speed = u32::try_from(fields.animation_speed).map_err(|_| {
            RecordError::AnimationSpeedOutOfRange {
                value: fields.animation_speed,
            }
        })?;
        let triggers = ActionTriggers::from_pairs(fields.triggers)?;
        Self::new(
            fields.cof_name,
            frames_per_direction,
            animation_speed,
            triggers,
        )
    }
}

impl From<Record> for RecordFields {
    fn from(record: Record) -> Self {
        let triggers = record
            .triggers
            .iter()
            .map(|(frame, code)| (frame as i128, i128::from(code)))
            .collect();
        Self {
            cof_name: record.cof_name,
            frames_per_direction: i128::from(record.frames_per_direction),
            animation_speed: i128::from(record.animation_speed),
            triggers,
        }
    }
}
