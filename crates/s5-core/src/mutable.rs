//! Padded, versioned XChaCha20-Poly1305 containers for mutable blobs.
//!
//! Layout:
//!
//! ```text
//! 0x8D | 0x01 | nonce (24) | ciphertext
//! ```
//!
//! The ciphertext seals `be32(len) ‖ payload ‖ zeros`, with the zero run sized
//! so that the whole container lands exactly on a padding bucket boundary.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::crypto::{Nonce, SymmetricKey};
use crate::endian::{decode_endian, encode_endian};
use crate::error::{Result, S5Error};
use crate::padding::{check_padded_block, pad_file_size_default};

/// Symmetric key length.
pub const ENCRYPTION_KEY_LENGTH: usize = 32;
/// XChaCha20 nonce length.
pub const ENCRYPTION_NONCE_LENGTH: usize = 24;
/// Poly1305 tag length.
pub const ENCRYPTION_OVERHEAD_LENGTH: usize = 16;

/// Format marker in byte 0.
pub const CONTAINER_TYPE: u8 = 0x8d;
/// Current format version in byte 1.
pub const CONTAINER_VERSION: u8 = 0x01;

const HEADER_LENGTH: usize = 2;
const LENGTH_PREFIX: usize = 4;
const TOTAL_OVERHEAD: usize =
    ENCRYPTION_OVERHEAD_LENGTH + LENGTH_PREFIX + ENCRYPTION_NONCE_LENGTH + HEADER_LENGTH;

fn check_key(key: &[u8]) -> Result<SymmetricKey> {
    if key.len() != ENCRYPTION_KEY_LENGTH {
        return Err(S5Error::WrongKeyLength {
            expected: ENCRYPTION_KEY_LENGTH,
            actual: key.len(),
        });
    }
    SymmetricKey::from_slice(key)
}

/// Encrypt `data` into a padded container under `key`, drawing the nonce
/// from `rng`.
pub fn encrypt_mutable_bytes<R>(data: &[u8], key: &[u8], rng: &mut R) -> Result<Vec<u8>>
where
    R: RngCore + CryptoRng,
{
    let key = check_key(key)?;
    let len = u32::try_from(data.len()).map_err(|_| S5Error::PayloadTooLarge(data.len()))?;

    let container_len = pad_file_size_default((data.len() + TOTAL_OVERHEAD) as u128)?;
    // Everything but header, nonce and tag is sealed plaintext.
    let sealed_len = container_len as usize
        - HEADER_LENGTH
        - ENCRYPTION_NONCE_LENGTH
        - ENCRYPTION_OVERHEAD_LENGTH;

    let mut padded = Zeroizing::new(Vec::with_capacity(sealed_len));
    padded.extend_from_slice(&encode_endian(u64::from(len), LENGTH_PREFIX));
    padded.extend_from_slice(data);
    padded.resize(sealed_len, 0);

    let nonce = Nonce::random(rng)?;
    let ciphertext = key.seal(&nonce, &padded, &[])?;

    let mut out = Vec::with_capacity(container_len as usize);
    out.push(CONTAINER_TYPE);
    out.push(CONTAINER_VERSION);
    out.extend_from_slice(nonce.as_bytes());
    out.extend_from_slice(&ciphertext);
    debug_assert_eq!(out.len() as u128, container_len);

    tracing::debug!(payload = data.len(), container = out.len(), "sealed mutable container");
    Ok(out)
}

/// Open a container produced by [`encrypt_mutable_bytes`].
///
/// Nothing is returned unless the whole container authenticates.
pub fn decrypt_mutable_bytes(data: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    let key = check_key(key)?;

    if !check_padded_block(data.len() as u128)? {
        return Err(S5Error::NotPadded {
            len: data.len(),
            nearest: pad_file_size_default(data.len() as u128)?,
        });
    }

    match data.get(1) {
        Some(&CONTAINER_VERSION) => {}
        other => return Err(S5Error::UnsupportedVersion(other.copied())),
    }
    if data[0] != CONTAINER_TYPE {
        return Err(S5Error::UnsupportedContainerType(data[0]));
    }

    let body = HEADER_LENGTH + ENCRYPTION_NONCE_LENGTH;
    if data.len() < body {
        return Err(S5Error::InvalidNonce);
    }
    let nonce = Nonce::from_slice(&data[HEADER_LENGTH..body])?;

    let plaintext = Zeroizing::new(key.open(&nonce, &data[body..], &[]).map_err(|err| {
        tracing::debug!(container = data.len(), "mutable container failed to authenticate");
        err
    })?);

    if plaintext.len() < LENGTH_PREFIX {
        return Err(S5Error::InvalidLengthPrefix {
            claimed: LENGTH_PREFIX,
            available: plaintext.len(),
        });
    }
    let claimed = decode_endian(&plaintext[..LENGTH_PREFIX]) as usize;
    let available = plaintext.len() - LENGTH_PREFIX;
    if claimed > available {
        return Err(S5Error::InvalidLengthPrefix { claimed, available });
    }
    Ok(plaintext[LENGTH_PREFIX..LENGTH_PREFIX + claimed].to_vec())
}
