//! Blake3 hash chaining, the building block of every derivation in the crate.

use crate::crypto::{hash_all, hash_blake3, HASH_LENGTH};
use crate::endian::encode_endian;
use crate::error::{Result, S5Error};

/// Width of the big-endian field an integer tweak is written into.
const INT_TWEAK_WIDTH: usize = 32;

fn check_base(base: &[u8]) -> Result<()> {
    if base.len() != HASH_LENGTH {
        return Err(S5Error::InvalidBaseLength(base.len()));
    }
    Ok(())
}

/// `Blake3(base ‖ Blake3(tweak))`.
pub fn derive_hash_blake3(base: &[u8], tweak: &[u8]) -> Result<[u8; HASH_LENGTH]> {
    check_base(base)?;
    Ok(hash_all(&[base, &hash_blake3(tweak)]))
}

/// `Blake3(base ‖ be32(tweak))` where `be32` is a 32-byte big-endian field.
pub fn derive_hash_blake3_int(base: &[u8], tweak: u64) -> Result<[u8; HASH_LENGTH]> {
    check_base(base)?;
    Ok(hash_all(&[base, &encode_endian(tweak, INT_TWEAK_WIDTH)]))
}
