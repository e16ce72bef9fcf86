use std::path::Path;

use animdata_types::Record;
use tracing::debug;

use crate::error::{PackError, PackResult};
use crate::record::encode_record;
use crate::table::BucketTable;

/// Builds an AnimData.D2 image from a collection of records.
#[derive(Debug, Default)]
pub struct AnimDataWriter {
    table: BucketTable,
}

impl AnimDataWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a record. Returns the bucket it was placed in.
    pub fn add_record(&mut self, record: Record) -> u8 {
        self.table.insert(record)
    }

    /// Number of records queued.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Build the packed bytes in memory (no disk I/O).
    pub fn finish_to_bytes(self) -> PackResult<Vec<u8>> {
        encode_table(&self.table)
    }

    /// Write the packed file to disk.
    pub fn finish(self, path: &Path) -> PackResult<usize> {
        let data = self.finish_to_bytes()?;
        std::fs::write(path, &data)?;
        debug!(path = %path.display(), bytes = data.len(), "wrote AnimData");
        Ok(data.len())
    }
}

/// Pack a bucket table: for each bucket, a `u32` LE count followed by its
/// records.
pub fn encode_table(table: &BucketTable) -> PackResult<Vec<u8>> {
    let mut out = Vec::with_capacity(table.encoded_len());
    for (bucket, records) in table.buckets().enumerate() {
        let count = u32::try_from(records.len()).map_err(|_| PackError::BucketOverflow {
            bucket,
            count: records.len(),
        })?;
        out.extend_from_slice(&count.to_le_bytes());
        for record in records {
            out.extend_from_slice(&encode_record(record));
        }
        if count > 0 {
            debug!(bucket, count, "encoded bucket");
        }
    }
    Ok(out)
}

/// Pack records into AnimData.D2 format.
///
/// Records are grouped by bucket; within a bucket they keep input order.
pub fn encode<I>(records: I) -> PackResult<Vec<u8>>
where
    I: IntoIterator<Item = Record>,
{
    encode_table(&BucketTable::from_records(records))
}

/// Pack records and write them to a file.
pub fn write_file<I>(path: &Path, records: I) -> PackResult<usize>
where
    I: IntoIterator<Item = Record>,
{
    let mut writer = AnimDataWriter::new();
    for record in records {
        writer.add_record(record);
    }
    writer.finish(path)
}
