//! Record model for AnimData.D2.
//!
//! This crate holds the in-memory form of an AnimData entry and the rules it
//! must satisfy. The binary codec (`animdata-pack`) and the text mirrors
//! (`animdata-text`) both build on it.
//!
//! # Key Types
//!
//! - [`Record`]: One validated animation entry (COF name, frames, speed, triggers)
//! - [`RecordFields`]: Unvalidated field values, as read from text
//! - [`ActionTriggers`]: Sparse frame → trigger code map, iterated in frame order
//! - [`RecordError`]: Field validation failure
//!
//! The bucket checksum lives in [`hash`], orderings in [`ordering`], and
//! non-fatal data checks in [`advisory`].

pub mod advisory;
pub mod error;
pub mod hash;
pub mod ordering;
pub mod record;
pub mod triggers;

pub use advisory::{check_records, AdvisoryReport};
pub use error::{RecordError, RecordResult};
pub use hash::{hash_cof_name, hash_name_field, BUCKET_COUNT};
pub use ordering::{dedupe, duplicate_indices, sort_by_name};
pub use record::{validate_cof_name, Record, RecordFields, COF_NAME_LEN};
pub use triggers::{ActionTriggers, FRAME_MAX, TRIGGER_CODE_MAX, TRIGGER_CODE_MIN};
