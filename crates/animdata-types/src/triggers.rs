use std::collections::BTreeMap;

use crate::error::{RecordError, RecordResult};

/// Number of per-frame trigger slots stored for each record.
pub const FRAME_MAX: usize = 144;

/// Smallest valid trigger code.
pub const TRIGGER_CODE_MIN: u8 = 1;

/// Largest valid trigger code.
pub const TRIGGER_CODE_MAX: u8 = 3;

/// Sparse map from frame index to trigger code.
///
/// Frame indices are in `0..144` and codes in `1..=3`. Every insertion is
/// validated, so an `ActionTriggers` can never hold an out-of-range entry.
/// Iteration is always in ascending frame order.
///
/// ```
/// use animdata_types::ActionTriggers;
///
/// let mut triggers = ActionTriggers::new();
/// triggers.insert(10, 2).unwrap();
/// triggers.insert(7, 1).unwrap();
/// assert!(triggers.insert(255, 1).is_err());
/// assert!(triggers.insert(3, 4).is_err());
///
/// let frames: Vec<_> = triggers.iter().map(|(frame, _)| frame).collect();
/// assert_eq!(frames, vec![7, 10]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ActionTriggers(BTreeMap<u8, u8>);

impl ActionTriggers {
    /// An empty trigger map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the trigger code for a frame, replacing any existing code.
    pub fn insert(&mut self, frame: usize, code: u8) -> RecordResult<Option<u8>> {
        let frame = check_frame(frame as i128)?;
        let code = check_code(frame, i128::from(code))?;
        Ok(self.0.insert(frame, code))
    }

    /// Remove the trigger at a frame, returning its code.
    pub fn remove(&mut self, frame: usize) -> Option<u8> {
        u8::try_from(frame).ok().and_then(|f| self.0.remove(&f))
    }

    /// Trigger code at a frame, if any.
    pub fn get(&self, frame: usize) -> Option<u8> {
        u8::try_from(frame).ok().and_then(|f| self.0.get(&f).copied())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(frame, code)` pairs in ascending frame order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.0.iter().map(|(&frame, &code)| (usize::from(frame), code))
    }

    /// Highest frame index carrying a trigger.
    pub fn last_frame(&self) -> Option<usize> {
        self.0.keys().next_back().map(|&f| usize::from(f))
    }

    /// Expand into one code per frame slot, with 0 meaning "no trigger".
    pub fn to_codes(&self) -> [u8; FRAME_MAX] {
        let mut codes = [0u8; FRAME_MAX];
        for (&frame, &code) in &self.0 {
            codes[usize::from(frame)] = code;
        }
        codes
    }

    /// Build from per-frame codes. Zero entries are skipped; slots past
    /// `FRAME_MAX` are ignored.
    pub fn from_codes<I>(codes: I) -> RecordResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<i128>,
    {
        let mut triggers = Self::new();
        for (frame, code) in codes.into_iter().take(FRAME_MAX).enumerate() {
            let code = code.into();
            if code != 0 {
                let frame = frame as u8;
                triggers.0.insert(frame, check_code(frame, code)?);
            }
        }
        Ok(triggers)
    }

    /// Build from arbitrary-width `(frame, code)` pairs, as read from text.
    pub fn from_pairs<I>(pairs: I) -> RecordResult<Self>
    where
        I: IntoIterator<Item = (i128, i128)>,
    {
        let mut triggers = Self::new();
        for (frame, code) in pairs {
            let frame = check_frame(frame)?;
            triggers.0.insert(frame, check_code(frame, code)?);
        }
        Ok(triggers)
    }

    pub(crate) fn validate(&self) -> RecordResult<()> {
        for (&frame, &code) in &self.0 {
            check_frame(i128::from(frame))?;
            check_code(frame, i128::from(code))?;
        }
        Ok(())
    }
}

fn check_frame(frame: i128) -> RecordResult<u8> {
    if (0..FRAME_MAX as i128).contains(&frame) {
        Ok(frame as u8)
    } else {
        Err(RecordError::TriggerFrameOutOfRange { frame })
    }
}

fn check_code(frame: u8, code: i128) -> RecordResult<u8> {
    if (i128::from(TRIGGER_CODE_MIN)..=i128::from(TRIGGER_CODE_MAX)).contains(&code) {
        Ok(code as u8)
    } else {
        Err(RecordError::TriggerCodeOutOfRange {
            frame: i128::from(frame),
            code,
        })
    }
}
