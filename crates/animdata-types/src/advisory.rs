//! Non-fatal data checks.
//!
//! These conditions are almost always authoring mistakes but do not make a
//! file invalid, so they are reported through `tracing` warnings and never as
//! errors.

use tracing::warn;

use crate::ordering::duplicate_indices;
use crate::record::Record;

/// Findings from [`check_records`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdvisoryReport {
    /// Indices of records repeating an earlier COF name.
    pub duplicates: Vec<usize>,
    /// `(record index, frame)` for triggers at or past `frames_per_direction`.
    pub unreachable_triggers: Vec<(usize, usize)>,
}

impl AdvisoryReport {
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.unreachable_triggers.is_empty()
    }
}

/// Warn about repeated COF names. Returns the flagged indices.
pub fn warn_duplicates(records: &[Record]) -> Vec<usize> {
    let duplicates = duplicate_indices(records);
    for &i in &duplicates {
        warn!(index = i, "duplicate entry found: {}", records[i].cof_name());
    }
    duplicates
}

/// Warn about triggers the game will never reach. Returns the flagged frames.
pub fn warn_unreachable_triggers(record: &Record) -> Vec<usize> {
    let frames = record.unreachable_trigger_frames();
    for &frame in &frames {
        warn!(
            "record {}: trigger frame {} may have no effect because it is same or greater than frames_per_direction ({})",
            record.cof_name(),
            frame,
            record.frames_per_direction()
        );
    }
    frames
}

/// Run every advisory check over a record list.
pub fn check_records(records: &[Record], check_triggers: bool) -> AdvisoryReport {
    let duplicates = warn_duplicates(records);
    let mut unreachable_triggers = Vec::new();
    if check_triggers {
        for (i, record) in records.iter().enumerate() {
            for frame in warn_unreachable_triggers(record) {
                unreachable_triggers.push((i, frame));
            }
        }
    }
    AdvisoryReport {
        duplicates,
        unreachable_triggers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triggers::ActionTriggers;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    fn rec(name: &str, frames: u32, trigger_frames: &[usize]) -> Record {
        let mut t = ActionTriggers::new();
        for &f in trigger_frames {
            t.insert(f, 1).unwrap();
        }
        Record::new(name, frames, 0, t).unwrap()
    }

    #[test]
    fn clean_records() {
        let records = vec![rec("AWS1HTH", 9, &[0, 1, 2]), rec("AXS1HTH", 256, &[143])];
        let report = check_records(&records, true);
        assert!(report.is_clean());
    }

    #[test]
    fn reports_duplicates_and_triggers() {
        let records = vec![
            rec("BVS1HTH", 9, &[1]),
            rec("BVS1HTH", 2, &[1, 5]),
        ];
        let report = check_records(&records, true);
        assert_eq!(report.duplicates, vec![1]);
        assert_eq!(report.unreachable_triggers, vec![(1, 5)]);
        assert!(!report.is_clean());
    }

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn captured_warnings(f: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn warnings_reach_the_log() {
        let records = vec![rec("BVS1HTH", 9, &[]), rec("BVS1HTH", 2, &[5])];
        let logs = captured_warnings(|| {
            check_records(&records, true);
        });
        assert!(logs.contains("WARN"));
        assert!(logs.contains("duplicate entry found: BVS1HTH"));
        assert!(logs.contains("trigger frame 5 may have no effect"));
    }

    #[test]
    fn clean_records_log_nothing() {
        let records = vec![rec("AWS1HTH", 9, &[0])];
        let logs = captured_warnings(|| {
            check_records(&records, true);
        });
        assert!(logs.is_empty());
    }

    #[test]
    fn trigger_check_can_be_disabled() {
        let records = vec![rec("AWS1HTH", 0, &[0])];
        let report = check_records(&records, false);
        assert!(report.unreachable_triggers.is_empty());
        assert_eq!(warn_unreachable_triggers(&records[0]), vec![0]);
    }
}
