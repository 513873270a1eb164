//! Ed25519 key pairs derived from phrases, random seeds and hash chains.
//!
//! Public keys are exposed in multikey form: a one-byte `0xED` prefix
//! followed by the 32 raw key bytes.

use std::fmt;

use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::crypto::{hash_all, hash_blake3};
use crate::error::{Result, S5Error};
use crate::seed::generate_seed_from_phrase;

/// Multikey prefix for Ed25519 public keys.
pub const MKEY_ED25519: u8 = 0xed;

const SEED_BYTES: usize = 32;
const KEYPAIR_BYTES: usize = 64;

/// Secret or seed input that callers may hold as raw bytes or as text.
///
/// Text is taken as its UTF-8 bytes. The choice is made once, where the
/// value enters the API.
#[derive(Clone, PartialEq, Eq)]
pub enum KeyMaterial {
    Bytes(Vec<u8>),
    Text(String),
}

impl KeyMaterial {
    /// Byte view used by the derivations.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            KeyMaterial::Bytes(bytes) => bytes,
            KeyMaterial::Text(text) => text.as_bytes(),
        }
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyMaterial::Bytes(b) => write!(f, "KeyMaterial::Bytes(<{} bytes>)", b.len()),
            KeyMaterial::Text(t) => write!(f, "KeyMaterial::Text(<{} chars>)", t.chars().count()),
        }
    }
}

impl From<&str> for KeyMaterial {
    fn from(value: &str) -> Self {
        KeyMaterial::Text(value.to_owned())
    }
}

impl From<String> for KeyMaterial {
    fn from(value: String) -> Self {
        KeyMaterial::Text(value)
    }
}

impl From<&[u8]> for KeyMaterial {
    fn from(value: &[u8]) -> Self {
        KeyMaterial::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for KeyMaterial {
    fn from(value: Vec<u8>) -> Self {
        KeyMaterial::Bytes(value)
    }
}

/// Ed25519 secret material: either a 32-byte seed or the 64-byte
/// `seed ‖ public key` form.
#[derive(Clone)]
pub struct KeyPairEd25519 {
    bytes: Zeroizing<Vec<u8>>,
}

impl KeyPairEd25519 {
    /// Wrap existing secret bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SEED_BYTES && bytes.len() != KEYPAIR_BYTES {
            return Err(S5Error::InvalidKeyPairLength(bytes.len()));
        }
        Ok(Self {
            bytes: Zeroizing::new(bytes.to_vec()),
        })
    }

    fn signing_key(&self) -> SigningKey {
        let mut seed = Zeroizing::new([0u8; SEED_BYTES]);
        seed.copy_from_slice(&self.bytes[..SEED_BYTES]);
        SigningKey::from_bytes(&seed)
    }

    /// Raw 32-byte public key.
    pub fn public_key_raw(&self) -> [u8; 32] {
        self.signing_key().verifying_key().to_bytes()
    }

    /// Public key with the [`MKEY_ED25519`] prefix.
    pub fn public_key(&self) -> [u8; 33] {
        let mut out = [0u8; 33];
        out[0] = MKEY_ED25519;
        out[1..].copy_from_slice(&self.public_key_raw());
        out
    }

    /// The secret bytes as stored.
    pub fn extract_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for KeyPairEd25519 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPairEd25519")
            .field("public_key", &hex::encode(self.public_key()))
            .finish_non_exhaustive()
    }
}

/// Key pair for a 32-byte seed, stored in 64-byte form.
pub fn new_key_pair_ed25519(seed: &[u8; 32]) -> KeyPairEd25519 {
    let signing = SigningKey::from_bytes(seed);
    KeyPairEd25519 {
        bytes: Zeroizing::new(signing.to_keypair_bytes().to_vec()),
    }
}

/// A freshly generated key pair together with the seed it came from.
pub struct KeyPairAndSeed {
    pub key_pair: KeyPairEd25519,
    pub seed: Zeroizing<[u8; 32]>,
}

/// Random seed from `rng` and its key pair.
pub fn gen_key_pair_and_seed<R>(rng: &mut R) -> Result<KeyPairAndSeed>
where
    R: RngCore + CryptoRng,
{
    let mut seed = Zeroizing::new([0u8; SEED_BYTES]);
    rng.try_fill_bytes(&mut *seed)?;
    let key_pair = new_key_pair_ed25519(&seed);
    Ok(KeyPairAndSeed { key_pair, seed })
}

/// Deterministic key pair for a mnemonic phrase.
pub fn gen_key_pair_from_phrase(phrase: &str) -> Result<KeyPairEd25519> {
    let seed = Zeroizing::new(generate_seed_from_phrase(phrase)?);
    Ok(new_key_pair_ed25519(&seed))
}

/// `Blake3(master ‖ Blake3(tweak))`.
pub fn derive_child_seed(master_seed: &[u8], tweak: &str) -> [u8; 32] {
    hash_all(&[master_seed, &hash_blake3(tweak.as_bytes())])
}

/// Key pair seeded by `Blake3(master ‖ data_seed)`.
pub fn derive_ed25519(
    master_key: impl Into<KeyMaterial>,
    data_seed: impl Into<KeyMaterial>,
) -> KeyPairEd25519 {
    let master_key = master_key.into();
    let data_seed = data_seed.into();
    let seed = Zeroizing::new(hash_all(&[master_key.as_bytes(), data_seed.as_bytes()]));
    new_key_pair_ed25519(&seed)
}

/// Public key of the pair [`derive_ed25519`] produces.
pub fn get_data_key(
    master_key: impl Into<KeyMaterial>,
    data_seed: impl Into<KeyMaterial>,
) -> [u8; 33] {
    derive_ed25519(master_key, data_seed).public_key()
}

/// Detached signature over `message`.
pub fn sign_ed25519(key_pair: &KeyPairEd25519, message: &[u8]) -> [u8; 64] {
    key_pair.signing_key().sign(message).to_bytes()
}

/// Check a detached signature against a prefixed public key.
///
/// Returns `Ok(false)` for a well-formed signature that does not verify.
pub fn verify_ed25519(public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
    let raw: [u8; 32] = public_key
        .get(1..)
        .and_then(|raw| raw.try_into().ok())
        .ok_or(S5Error::MalformedEd25519("public key"))?;
    let verifying =
        VerifyingKey::from_bytes(&raw).map_err(|_| S5Error::MalformedEd25519("public key"))?;
    let signature =
        Signature::from_slice(signature).map_err(|_| S5Error::MalformedEd25519("signature"))?;
    Ok(verifying.verify(message, &signature).is_ok())
}
