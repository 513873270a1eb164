//! Cryptographic capabilities consumed by the codecs.
//!
//! Randomness is never pulled from a global: every function that needs it
//! takes an `R: RngCore + CryptoRng` supplied by the caller (normally
//! [`rand::rngs::OsRng`]). Hashing is Blake3, symmetric encryption is
//! XChaCha20-Poly1305.

use std::fmt;
use std::io::Read;

use crate::error::{Result, S5Error};
use chacha20poly1305::aead::{Aead, Payload};
use chacha20poly1305::{Key, KeyInit, XChaCha20Poly1305, XNonce};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Length of a Blake3 digest in bytes.
pub const HASH_LENGTH: usize = 32;

pub(crate) const KEY_SIZE: usize = 32;
pub(crate) const NONCE_SIZE: usize = 24;

/// Fill a fresh buffer of `length` bytes from `rng`.
pub fn generate_random_bytes<R>(rng: &mut R, length: usize) -> Result<Vec<u8>>
where
    R: RngCore + CryptoRng,
{
    let mut out = vec![0u8; length];
    rng.try_fill_bytes(&mut out)?;
    Ok(out)
}

/// Uniform integer in `0..upper` drawn from `rng` by rejection sampling.
pub(crate) fn random_below<R>(rng: &mut R, upper: u32) -> Result<u32>
where
    R: RngCore + CryptoRng,
{
    debug_assert!(upper > 0);
    // Largest multiple of `upper` that fits in u32, so the modulo is unbiased.
    let zone = u32::MAX - (u32::MAX % upper);
    loop {
        let mut buf = [0u8; 4];
        rng.try_fill_bytes(&mut buf)?;
        let v = u32::from_le_bytes(buf);
        if v < zone {
            return Ok(v % upper);
        }
    }
}

/// One-shot Blake3 digest.
pub fn hash_blake3(input: &[u8]) -> [u8; HASH_LENGTH] {
    *blake3::hash(input).as_bytes()
}

/// Blake3 in extendable-output mode, producing `length` bytes.
pub fn hash_blake3_xof(input: &[u8], length: usize) -> Vec<u8> {
    let mut hasher = blake3::Hasher::new();
    hasher.update(input);
    let mut out = vec![0u8; length];
    hasher.finalize_xof().fill(&mut out);
    out
}

/// Blake3 digest of everything readable from `reader`.
pub fn hash_blake3_reader<R: Read>(mut reader: R) -> Result<[u8; HASH_LENGTH]> {
    let mut hasher = blake3::Hasher::new();
    let mut buf = [0u8; 64 * 1024];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(*hasher.finalize().as_bytes())
}

/// Blake3 digest of the concatenation of `parts`, fed incrementally.
pub fn hash_all(parts: &[&[u8]]) -> [u8; HASH_LENGTH] {
    let mut hasher = blake3::Hasher::new();
    for part in parts {
        hasher.update(part);
    }
    *hasher.finalize().as_bytes()
}

/// Wrapper around an XChaCha20-Poly1305 key that zeroises memory on drop.
#[derive(Clone)]
pub struct SymmetricKey {
    inner: Zeroizing<[u8; KEY_SIZE]>,
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey(<redacted>)")
    }
}

impl SymmetricKey {
    /// Generate a fresh random key.
    pub fn generate<R>(rng: &mut R) -> Result<Self>
    where
        R: RngCore + CryptoRng,
    {
        let mut bytes = Zeroizing::new([0u8; KEY_SIZE]);
        rng.try_fill_bytes(&mut *bytes)?;
        Ok(Self { inner: bytes })
    }

    /// Construct a key from raw bytes.
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self {
            inner: Zeroizing::new(bytes),
        }
    }

    /// Construct a key from a slice, rejecting anything but 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != KEY_SIZE {
            return Err(S5Error::WrongKeyLength {
                expected: KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut inner = Zeroizing::new([0u8; KEY_SIZE]);
        inner.copy_from_slice(bytes);
        Ok(Self { inner })
    }

    /// Borrow the raw key material.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.inner
    }

    fn cipher(&self) -> XChaCha20Poly1305 {
        XChaCha20Poly1305::new(Key::from_slice(&self.inner[..]))
    }

    /// Encrypt `plaintext` under `nonce` with optional `aad`.
    pub fn seal(&self, nonce: &Nonce, plaintext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        self.cipher()
            .encrypt(
                XNonce::from_slice(&nonce.inner),
                Payload {
                    msg: plaintext,
                    aad,
                },
            )
            .map_err(|_| S5Error::Encryption("unable to seal payload"))
    }

    /// Decrypt `ciphertext` produced by [`SymmetricKey::seal`].
    pub fn open(&self, nonce: &Nonce, ciphertext: &[u8], aad: &[u8]) -> Result<Vec<u8>> {
        self.cipher()
            .decrypt(
                XNonce::from_slice(&nonce.inner),
                Payload {
                    msg: ciphertext,
                    aad,
                },
            )
            .map_err(|_| S5Error::AuthenticationFailed)
    }
}

/// 192-bit nonce used for XChaCha20.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Nonce {
    inner: [u8; NONCE_SIZE],
}

impl Nonce {
    /// Draw a nonce suitable for a single use with XChaCha20.
    pub fn random<R>(rng: &mut R) -> Result<Self>
    where
        R: RngCore + CryptoRng,
    {
        let mut inner = [0u8; NONCE_SIZE];
        rng.try_fill_bytes(&mut inner)?;
        Ok(Self { inner })
    }

    /// Construct a nonce from raw bytes. Returns an error if the size is
    /// incorrect.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != NONCE_SIZE {
            return Err(S5Error::InvalidNonce);
        }
        let mut inner = [0u8; NONCE_SIZE];
        inner.copy_from_slice(bytes);
        Ok(Self { inner })
    }

    /// Borrow the inner bytes.
    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.inner
    }
}
