//! Path-keyed derivation tree.
//!
//! Each `/`-separated path segment is folded into the key with
//! [`derive_hash_blake3`], so the holder of the key for `a/b` can derive
//! `a/b/c` but learns nothing about `a` or `a/x`. Path keys handed out to
//! callers get one extra [`derive_hash_blake3_int`] round with tweak `1`,
//! which keeps them apart from the intermediate segment-chain keys.

use std::borrow::Cow;

use crate::derive_hash::{derive_hash_blake3, derive_hash_blake3_int};
use crate::endian::decode_endian;
use crate::error::Result;

const PATH_KEY_DERIVATION_TWEAK: u64 = 1;

/// Tweak bytes for one segment.
///
/// The segment's UTF-8 bytes are read as a big-endian unsigned integer and
/// that number is emitted as a one-element byte array, so only its low eight
/// bits reach the hash. Existing path keys depend on this exact encoding;
/// changing it needs a new protocol version.
pub fn segment_tweak(segment: &str) -> [u8; 1] {
    [decode_endian(segment.as_bytes()) as u8]
}

/// Fold `segments` into `root`, first segment first.
///
/// An empty list hands back `root` itself.
pub fn derive_key_for_path_segments<'a, S>(
    root: &'a [u8],
    segments: &[S],
) -> Result<Cow<'a, [u8]>>
where
    S: AsRef<str>,
{
    let mut key: Cow<'a, [u8]> = Cow::Borrowed(root);
    for segment in segments {
        let next = derive_hash_blake3(&key, &segment_tweak(segment.as_ref()))?;
        key = Cow::Owned(next.to_vec());
    }
    Ok(key)
}

/// Split `path` into trimmed, non-empty segments.
pub fn path_segments(path: &str) -> Vec<&str> {
    path.split('/')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Key for `path` under `root`.
pub fn derive_path_key_for_path(root: &[u8], path: &str) -> Result<[u8; 32]> {
    let segments = path_segments(path);
    tracing::trace!(depth = segments.len(), "deriving path key");
    let key = derive_key_for_path_segments(root, segments.as_slice())?;
    derive_hash_blake3_int(&key, PATH_KEY_DERIVATION_TWEAK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::S5Error;

    const ROOT: [u8; 32] = [0x11; 32];

    #[test]
    fn empty_segments_return_root() {
        let key = derive_key_for_path_segments::<&str>(&ROOT, &[]).expect("derive");
        assert!(matches!(key, Cow::Borrowed(_)));
        assert_eq!(&*key, &ROOT[..]);
    }

    #[test]
    fn order_and_depth_matter() {
        let ab = derive_key_for_path_segments(&ROOT, &["a", "b"]).expect("ab");
        let again = derive_key_for_path_segments(&ROOT, &["a", "b"]).expect("ab");
        let ba = derive_key_for_path_segments(&ROOT, &["b", "a"]).expect("ba");
        let a = derive_key_for_path_segments(&ROOT, &["a"]).expect("a");
        assert_eq!(ab, again);
        assert_ne!(ab, ba);
        assert_ne!(ab, a);
    }

    #[test]
    fn child_keys_extend_parent_keys() {
        let parent = derive_key_for_path_segments(&ROOT, &["photos"]).expect("parent");
        let child = derive_key_for_path_segments(&ROOT, &["photos", "2024"]).expect("child");
        let from_parent = derive_key_for_path_segments(&parent, &["2024"]).expect("from parent");
        assert_eq!(child, from_parent);
    }

    #[test]
    fn segment_is_folded_as_numeric_low_byte() {
        let expected = derive_hash_blake3(&ROOT, &[b'a']).expect("manual");
        let key = derive_key_for_path_segments(&ROOT, &["a"]).expect("derive");
        assert_eq!(&*key, &expected[..]);

        // Big-endian value of "ab" is 0x6162; only 0x62 survives.
        assert_eq!(segment_tweak("ab"), [0x62]);
        assert_eq!(segment_tweak(""), [0]);
    }

    #[test]
    fn long_segments_keep_only_their_last_byte() {
        // Eleven bytes, wider than any integer the fold could hold exactly.
        let long = "attachments";
        assert_eq!(segment_tweak(long), [b's']);
        assert_eq!(
            derive_key_for_path_segments(&ROOT, &[long]).expect("long"),
            derive_key_for_path_segments(&ROOT, &["s"]).expect("short")
        );
        assert_eq!(segment_tweak("abcdefg"), [b'g']);
    }

    #[test]
    fn path_key_trims_and_skips_empty_segments() {
        let tidy = derive_path_key_for_path(&ROOT, "a/b").expect("tidy");
        let messy = derive_path_key_for_path(&ROOT, "/ a //b /").expect("messy");
        assert_eq!(tidy, messy);

        let chain = derive_key_for_path_segments(&ROOT, &["a", "b"]).expect("chain");
        assert_eq!(tidy, derive_hash_blake3_int(&chain, 1).expect("final"));
        assert_ne!(&tidy[..], &*chain);
    }

    #[test]
    fn root_path_key_is_tweaked_root() {
        assert_eq!(
            derive_path_key_for_path(&ROOT, "/").expect("root"),
            derive_hash_blake3_int(&ROOT, 1).expect("tweak")
        );
    }

    #[test]
    fn rejects_short_root() {
        assert!(matches!(
            derive_path_key_for_path(&[0u8; 16], "a"),
            Err(S5Error::InvalidBaseLength(16))
        ));
    }
}
