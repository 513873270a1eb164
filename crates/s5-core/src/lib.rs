//! Core primitives for S5 identities.
//!
//! This crate exposes the building blocks that higher layers (transport,
//! storage, the `s5` CLI) combine:
//!
//! * [`seed`]: 15-word mnemonic phrases with an embedded checksum, backed by
//!   the fixed vocabulary in [`wordlist`].
//! * [`derive_hash`] and [`path`]: Blake3 hash chaining and the
//!   path-keyed derivation tree built on it.
//! * [`padding`] and [`mutable`]: size bucketing and the padded,
//!   versioned XChaCha20-Poly1305 container for mutable blobs.
//! * [`keys`]: Ed25519 key pairs from phrases and derived seeds.
//! * [`crypto`]: the hashing, AEAD and randomness capabilities the rest of
//!   the crate is written against.
//!
//! Every function is a pure computation over in-memory buffers. Functions
//! that need randomness take the RNG as an argument; nothing here keeps
//! global state.

pub mod crypto;
pub mod derive_hash;
pub mod endian;
pub mod keys;
pub mod mutable;
pub mod padding;
pub mod path;
pub mod seed;
pub mod wordlist;

mod error;

pub use error::{ErrorKind, Result, S5Error};
