//! Size bucketing that hides exact plaintext lengths.
//!
//! Bucket `k` (for `k` in `0..=52`) covers sizes up to `2^k · 80 KiB` and
//! rounds up to a multiple of `2^k · 4 KiB`. A size always lands in the first
//! bucket whose ceiling it does not exceed.

use crate::error::{Result, S5Error};

const KIB: u128 = 1024;
const BUCKETS: u32 = 53;

/// `(ceiling, block_size)` of the bucket that `size` falls in.
fn bucket_for(size: u128) -> Result<(u128, u128)> {
    (0..BUCKETS)
        .map(|k| (80 * KIB << k, 4 * KIB << k))
        .find(|&(ceiling, _)| size <= ceiling)
        .ok_or(S5Error::PaddingOverflow(size))
}

/// Largest size any bucket accepts.
pub fn max_padded_size() -> u128 {
    80 * KIB << (BUCKETS - 1)
}

/// Round `initial_size` up to its bucket's block size.
pub fn pad_file_size_default(initial_size: u128) -> Result<u128> {
    let (_, block) = bucket_for(initial_size)?;
    let rem = initial_size % block;
    let padded = if rem == 0 {
        initial_size
    } else {
        initial_size - rem + block
    };
    tracing::trace!(initial_size, block, padded, "padded size");
    Ok(padded)
}

/// Whether `size` is exactly a multiple of its bucket's block size.
pub fn check_padded_block(size: u128) -> Result<bool> {
    let (_, block) = bucket_for(size)?;
    Ok(size % block == 0)
}
