use animdata_types::{ActionTriggers, Record, FRAME_MAX};

use crate::error::{PackError, PackResult};

/// Size of the NUL-padded COF name field.
pub const NAME_FIELD_LEN: usize = 8;

/// Size of a bucket's record count.
pub const COUNT_SIZE: usize = 4;

/// Size of one packed record: name, frames, speed, per-frame trigger codes.
pub const RECORD_SIZE: usize = NAME_FIELD_LEN + 4 + 4 + FRAME_MAX;

const FRAMES_OFFSET: usize = NAME_FIELD_LEN;
const SPEED_OFFSET: usize = FRAMES_OFFSET + 4;
const TRIGGERS_OFFSET: usize = SPEED_OFFSET + 4;

/// Read a little-endian `u32` at `offset`.
pub(crate) fn read_u32(data: &[u8], offset: usize) -> PackResult<u32> {
    let bytes = slice_at(data, offset, 4)?;
    let mut word = [0u8; 4];
    word.copy_from_slice(bytes);
    Ok(u32::from_le_bytes(word))
}

fn slice_at(data: &[u8], offset: usize, len: usize) -> PackResult<&[u8]> {
    offset
        .checked_add(len)
        .and_then(|end| data.get(offset..end))
        .ok_or(PackError::Truncated {
            offset,
            needed: len,
            available: data.len().saturating_sub(offset),
        })
}

/// Decode the COF name from a NUL-padded name field.
///
/// Everything after the first NUL must also be NUL, and the name itself must
/// be ASCII. Length is left to record validation.
fn decode_name_field(field: &[u8], offset: usize) -> PackResult<String> {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    if field[end..].iter().any(|&b| b != 0) {
        return Err(PackError::MalformedName {
            offset,
            reason: "non-null bytes after the first null".into(),
        });
    }
    let name = &field[..end];
    if !name.is_ascii() {
        return Err(PackError::MalformedName {
            offset,
            reason: format!("non-ASCII bytes in {:?}", String::from_utf8_lossy(name)),
        });
    }
    Ok(name.iter().map(|&b| char::from(b)).collect())
}

/// Decode one record starting at `offset`. Returns `(record, bytes_consumed)`.
pub fn decode_record(data: &[u8], offset: usize) -> PackResult<(Record, usize)> {
    let bytes = slice_at(data, offset, RECORD_SIZE)?;

    let cof_name = decode_name_field(&bytes[..NAME_FIELD_LEN], offset)?;
    let frames_per_direction = read_u32(bytes, FRAMES_OFFSET)?;
    let animation_speed = read_u32(bytes, SPEED_OFFSET)?;
    let invalid = |source| PackError::InvalidRecord { offset, source };
    let triggers =
        ActionTriggers::from_codes(bytes[TRIGGERS_OFFSET..].iter().copied()).map_err(invalid)?;

    let record =
        Record::new(cof_name, frames_per_direction, animation_speed, triggers).map_err(invalid)?;
    Ok((record, RECORD_SIZE))
}

/// Encode one record into its fixed-size layout.
pub fn encode_record(record: &Record) -> [u8; RECORD_SIZE] {
    let mut buf = [0u8; RECORD_SIZE];
    let name = record.cof_name().as_bytes();
    buf[..name.len()].copy_from_slice(name);
    buf[FRAMES_OFFSET..SPEED_OFFSET].copy_from_slice(&record.frames_per_direction().to_le_bytes());
    buf[SPEED_OFFSET..TRIGGERS_OFFSET].copy_from_slice(&record.animation_speed().to_le_bytes());
    buf[TRIGGERS_OFFSET..].copy_from_slice(&record.triggers().to_codes());
    buf
}
