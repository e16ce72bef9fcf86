use thiserror::Error;

/// Errors produced when a record field fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("COF name must have exactly 7 characters ({name:?} has {len})")]
    NameLength { name: String, len: usize },

    #[error("COF name must not contain a null character (found in {name:?})")]
    NameContainsNull { name: String },

    #[error("COF name must be printable ASCII (got {name:?})")]
    NameNotPrintable { name: String },

    #[error("{field} must be an integer (got {value})")]
    NotAnInteger { field: &'static str, value: String },

    #[error("frames_per_direction must be between 0 and {max} (got {value})", max = u32::MAX)]
    FramesPerDirectionOutOfRange { value: i128 },

    #[error("animation_speed must be between 0 and {max} (got {value})", max = u32::MAX)]
    AnimationSpeedOutOfRange { value: i128 },

    #[error("trigger frame must be between 0 and 143 (got {frame})")]
    TriggerFrameOutOfRange { frame: i128 },

    #[error("trigger code must be between 1 and 3 (got {code} at frame {frame})")]
    TriggerCodeOutOfRange { frame: i128, code: i128 },
}

impl RecordError {
    /// Name of the record field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::NameLength { .. } | Self::NameContainsNull { .. } | Self::NameNotPrintable { .. } => {
                "cof_name"
            }
            Self::NotAnInteger { field, .. } => *field,
            Self::FramesPerDirectionOutOfRange { .. } => "frames_per_direction",
            Self::AnimationSpeedOutOfRange { .. } => "animation_speed",
            Self::TriggerFrameOutOfRange { .. } | Self::TriggerCodeOutOfRange { .. } => "triggers",
        }
    }
}

pub type RecordResult<T> = Result<T, RecordError>;
