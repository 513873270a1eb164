//! Fixed-width big-endian integer fields.

/// Write `value` as a big-endian field of `width` bytes.
///
/// Widths above eight bytes are left-padded with zeros; narrower widths keep
/// only the low-order bytes.
pub fn encode_endian(value: u64, width: usize) -> Vec<u8> {
    let mut out = vec![0u8; width];
    let be = value.to_be_bytes();
    let take = width.min(be.len());
    out[width - take..].copy_from_slice(&be[be.len() - take..]);
    out
}

/// Read a big-endian unsigned integer from `bytes`.
///
/// Inputs longer than eight bytes wrap: only the trailing eight bytes
/// survive in the result.
pub fn decode_endian(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0u64, |acc, &b| acc.wrapping_shl(8) | u64::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_into_wide_fields() {
        let field = encode_endian(1, 32);
        assert_eq!(field.len(), 32);
        assert_eq!(field[31], 1);
        assert!(field[..31].iter().all(|&b| b == 0));
    }

    #[test]
    fn encodes_length_prefix() {
        assert_eq!(encode_endian(0x0102_0304, 4), vec![1, 2, 3, 4]);
        assert_eq!(decode_endian(&[1, 2, 3, 4]), 0x0102_0304);
    }

    #[test]
    fn decode_wraps_past_eight_bytes() {
        let nine = [0xff, 0, 0, 0, 0, 0, 0, 0, 0x2a];
        assert_eq!(decode_endian(&nine), 0x2a);
        assert_eq!(decode_endian(&[]), 0);
    }
}
