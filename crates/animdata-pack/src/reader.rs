use std::path::Path;

use animdata_types::{Record, BUCKET_COUNT};
use tracing::debug;

use crate::error::{PackError, PackResult};
use crate::record::{decode_record, read_u32, COUNT_SIZE};
use crate::table::BucketTable;

/// Decode a complete AnimData.D2 image into its bucket table.
///
/// Every record must sit in the bucket its COF name hashes to, and the 256
/// buckets must account for every byte of `data`.
pub fn decode_table(data: &[u8]) -> PackResult<BucketTable> {
    let mut table = BucketTable::new();
    let mut offset = 0;

    for bucket in 0..BUCKET_COUNT {
        let count = read_u32(data, offset)
            .map_err(|_| PackError::RecordCountTruncated { bucket, offset })?;
        offset += COUNT_SIZE;

        for _ in 0..count {
            let (record, consumed) = decode_record(data, offset)?;
            let actual = record.bucket();
            if usize::from(actual) != bucket {
                return Err(PackError::HashMismatch {
                    offset,
                    name: record.cof_name().to_string(),
                    expected: bucket,
                    actual,
                });
            }
            table.push_checked(bucket, record);
            offset += consumed;
        }

        if count > 0 {
            debug!(bucket, count, "decoded bucket");
        }
    }

    if offset != data.len() {
        return Err(PackError::TrailingData {
            consumed: offset,
            len: data.len(),
        });
    }

    Ok(table)
}

/// Decode a complete AnimData.D2 image into records, in file order.
pub fn decode(data: &[u8]) -> PackResult<Vec<Record>> {
    decode_table(data).map(BucketTable::into_records)
}

/// Read and decode an AnimData.D2 file.
pub fn read_file(path: &Path) -> PackResult<Vec<Record>> {
    let data = std::fs::read(path)?;
    let records = decode(&data)?;
    debug!(path = %path.display(), records = records.len(), "loaded AnimData");
    Ok(records)
}
