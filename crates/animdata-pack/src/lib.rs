//! Binary codec for AnimData.D2.
//!
//! An AnimData.D2 file is a 256-bucket hash table of fixed-size animation
//! records, keyed by a checksum of each record's COF name.
//!
//! # Layout
//!
//! ```text
//! repeat 256 times (bucket 0..=255):
//!   u32 LE     record_count
//!   repeat record_count times:
//!     [u8; 8]   COF name, NUL-padded (7 chars + NUL)
//!     u32 LE    frames_per_direction
//!     u32 LE    animation_speed
//!     [u8; 144] trigger code per frame (0 = none)
//! ```
//!
//! # Architecture
//!
//! - **record**: one 160-byte record, [`decode_record`] / [`encode_record`]
//! - **BucketTable**: the 256 buckets in memory
//! - **reader**: [`decode`] a whole file, checking hashes and size
//! - **AnimDataWriter**: builds a file from records

pub mod error;
pub mod reader;
pub mod record;
pub mod table;
pub mod writer;

pub use error::{PackError, PackResult};
pub use reader::{decode, decode_table, read_file};
pub use record::{decode_record, encode_record, COUNT_SIZE, NAME_FIELD_LEN, RECORD_SIZE};
pub use table::BucketTable;
pub use writer::{encode, encode_table, write_file, AnimDataWriter};
