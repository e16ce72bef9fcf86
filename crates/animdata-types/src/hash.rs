//! Bucket checksum used by the game to place records in the AnimData table.
//!
//! The checksum is the sum of the uppercased character codes of the COF name,
//! stopping at the first NUL, reduced modulo 256.

/// Number of hash buckets in an AnimData.D2 file.
pub const BUCKET_COUNT: usize = 256;

/// Compute the bucket index for a COF name.
///
/// # Examples
///
/// ```
/// use animdata_types::hash_cof_name;
///
/// assert_eq!(hash_cof_name("AWS1HTH"), 0);
/// assert_eq!(hash_cof_name("axs1hth"), 1);
/// ```
pub fn hash_cof_name(name: &str) -> u8 {
    checksum(name.as_bytes())
}

/// Compute the bucket index for a raw, NUL-padded name field.
pub fn hash_name_field(field: &[u8]) -> u8 {
    checksum(field)
}

fn checksum(bytes: &[u8]) -> u8 {
    bytes
        .iter()
        .take_while(|&&b| b != 0)
        .fold(0u8, |acc, &b| acc.wrapping_add(b.to_ascii_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_buckets() {
        assert_eq!(hash_cof_name("AWS1HTH"), 0);
        assert_eq!(hash_cof_name("AXS1HTH"), 1);
        assert_eq!(hash_cof_name("BVS1HTH"), 0);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(hash_cof_name("aws1hth"), hash_cof_name("AWS1HTH"));
        assert_eq!(hash_cof_name("AwS1hTh"), 0);
    }

    #[test]
    fn stops_at_null() {
        assert_eq!(hash_name_field(b"AWS1HTH\0"), 0);
        assert_eq!(hash_name_field(b"AWS1HTH\0ZZZZ"), 0);
        assert_eq!(hash_name_field(b"\0AWS1HTH"), 0);
    }

    #[test]
    fn empty_name_is_bucket_zero() {
        assert_eq!(hash_cof_name(""), 0);
    }

    proptest! {
        #[test]
        fn matches_sum_of_uppercased_codes(name in "[ -~]{0,16}") {
            let expected = name
                .to_ascii_uppercase()
                .bytes()
                .map(u32::from)
                .sum::<u32>()
                % BUCKET_COUNT as u32;
            prop_assert_eq!(u32::from(hash_cof_name(&name)), expected);
        }

        #[test]
        fn padding_does_not_change_hash(name in "[!-~]{7}") {
            let mut field = [0u8; 8];
            field[..7].copy_from_slice(name.as_bytes());
            prop_assert_eq!(hash_name_field(&field), hash_cof_name(&name));
        }
    }
}
