use animdata_types::{Record, BUCKET_COUNT};

use crate::record::{COUNT_SIZE, RECORD_SIZE};

/// The 256-bucket hash table stored in an AnimData.D2 file.
///
/// Each record lives in the bucket selected by the hash of its COF name.
/// Within a bucket, records keep the order in which they were added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BucketTable {
    buckets: Vec<Vec<Record>>,
}

impl Default for BucketTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BucketTable {
    /// An empty table with all 256 buckets present.
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); BUCKET_COUNT],
        }
    }

    /// Distribute records into their buckets, preserving input order within
    /// each bucket.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut table = Self::new();
        for record in records {
            table.insert(record);
        }
        table
    }

    /// Append a record to its bucket. Returns the bucket index.
    pub fn insert(&mut self, record: Record) -> u8 {
        let bucket = record.bucket();
        self.buckets[usize::from(bucket)].push(record);
        bucket
    }

    /// Append a record whose bucket has already been checked.
    pub(crate) fn push_checked(&mut self, bucket: usize, record: Record) {
        self.buckets[bucket].push(record);
    }

    /// Records in one bucket.
    pub fn bucket(&self, index: u8) -> &[Record] {
        &self.buckets[usize::from(index)]
    }

    /// All 256 buckets, in index order.
    pub fn buckets(&self) -> impl Iterator<Item = &[Record]> + '_ {
        self.buckets.iter().map(Vec::as_slice)
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Records in file order: bucket 0 first, insertion order within buckets.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.buckets.iter().flatten()
    }

    /// Flatten into file order.
    pub fn into_records(self) -> Vec<Record> {
        self.buckets.into_iter().flatten().collect()
    }

    /// Size of the packed table in bytes.
    pub fn encoded_len(&self) -> usize {
        BUCKET_COUNT * COUNT_SIZE + self.len() * RECORD_SIZE
    }
}
