//! Text mirrors of AnimData.D2 records.
//!
//! Both formats are field-by-field transcriptions of [`animdata_types::Record`]:
//!
//! | Record field           | JSON key               | TXT column(s)                     |
//! |------------------------|------------------------|-----------------------------------|
//! | `cof_name`             | `cof_name`             | `CofName`                         |
//! | `frames_per_direction` | `frames_per_direction` | `FramesPerDirection`              |
//! | `animation_speed`      | `animation_speed`      | `AnimationSpeed`                  |
//! | `triggers`             | `triggers` (`{"frame": code}`) | `FrameData000`..`FrameData143` (0 = none) |

pub mod error;
pub mod json;
pub mod txt;

pub use error::{TextError, TextResult};

#[cfg(test)]
mod tests {
    use animdata_types::{ActionTriggers, Record};

    fn records() -> Vec<Record> {
        let mut t = ActionTriggers::new();
        t.insert(1, 3).unwrap();
        t.insert(2, 2).unwrap();
        t.insert(3, 1).unwrap();
        vec![
            Record::new("BVS1HTH", 9, 7, t).unwrap(),
            Record::new("BVS1HTH", 17, 32, ActionTriggers::new()).unwrap(),
            Record::new("ZZS2HTH", 150, 192, ActionTriggers::new()).unwrap(),
        ]
    }

    #[test]
    fn json_and_txt_agree() {
        let from_json = crate::json::from_str(&crate::json::to_string(&records()).unwrap()).unwrap();
        let from_txt = crate::txt::from_str(&crate::txt::to_string(&records())).unwrap();
        assert_eq!(from_json, from_txt);
        assert_eq!(from_json, records());
    }

    #[test]
    fn txt_to_binary_and_back() {
        let txt = crate::txt::to_string(&records());
        let parsed = crate::txt::from_str(&txt).unwrap();
        let packed = animdata_pack::encode(parsed).unwrap();
        let unpacked = animdata_pack::decode(&packed).unwrap();
        let mut expected = records();
        // ZZS2HTH hashes to a later bucket than BVS1HTH (bucket 0)
        expected.sort_by_key(Record::bucket);
        assert_eq!(unpacked, expected);
        assert_eq!(crate::txt::to_string(&unpacked), crate::txt::to_string(&expected));
    }
}
