use thiserror::Error;

/// Broad classes of failure, used by callers to decide between re-prompting
/// and aborting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input shape or length. Safe to reject and ask again.
    Validation,
    /// Checksum, authentication or padding failure. Fatal for the operation.
    Cryptographic,
    /// An underlying capability (randomness, input stream) failed.
    Capability,
}

/// Canonical error type exposed by the core primitives.
#[derive(Debug, Error)]
pub enum S5Error {
    /// A seed word vector did not hold exactly 13 entries.
    #[error("input seed was not of length {expected} (got {actual})")]
    InvalidSeedWordsLength { expected: usize, actual: usize },

    /// A checksum digest was too short to slice two 10-bit words from.
    #[error("checksum digest must be at least {expected} bytes (got {actual})")]
    InvalidHashLength { expected: usize, actual: usize },

    /// The phrase did not split into exactly 15 words.
    #[error("phrase must be {expected} words long (got {actual})")]
    InvalidPhraseLength { expected: usize, actual: usize },

    /// A phrase word (1-based position) was shorter than three characters.
    #[error("word {position} is not at least 3 letters long")]
    WordTooShort { position: usize },

    /// No vocabulary entry starts with the given prefix.
    #[error("unrecognized prefix {prefix:?} at word {position}")]
    UnknownWordPrefix { position: usize, prefix: String },

    /// A checksum word (1-based position in the phrase) does not match.
    #[error("word {position} is not a valid checksum for the seed")]
    InvalidChecksum { position: usize },

    /// Hash chain base key was not 32 bytes.
    #[error("invalid base length {0}, expected 32")]
    InvalidBaseLength(usize),

    /// Size falls beyond the largest padding bucket.
    #[error("could not pad size {0}, overflow detected")]
    PaddingOverflow(u128),

    /// Symmetric key was not 32 bytes.
    #[error("wrong encryption key length ({actual} != {expected})")]
    WrongKeyLength { expected: usize, actual: usize },

    /// Payload does not fit the 4-byte length prefix of a container.
    #[error("payload of {0} bytes does not fit a 4-byte length prefix")]
    PayloadTooLarge(usize),

    /// Container length is not a padded block size.
    #[error("expected padded encrypted data, length was {len}, nearest padded block is {nearest}")]
    NotPadded { len: usize, nearest: u128 },

    /// Container version byte is not supported.
    #[error("unsupported container version {0:?}")]
    UnsupportedVersion(Option<u8>),

    /// Container type marker is not the mutable-bytes marker.
    #[error("unsupported container type 0x{0:02x}")]
    UnsupportedContainerType(u8),

    /// The authenticated plaintext claims more bytes than it holds.
    #[error("length prefix {claimed} exceeds decrypted payload of {available} bytes")]
    InvalidLengthPrefix { claimed: usize, available: usize },

    /// AEAD tag verification failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Encryption failure when using the symmetric primitives.
    #[error("encryption failure: {0}")]
    Encryption(&'static str),

    /// Invalid nonce material supplied to the crypto helper routines.
    #[error("invalid nonce length")]
    InvalidNonce,

    /// Ed25519 secret material was neither 32 nor 64 bytes.
    #[error("private key must be 32 or 64 bytes (got {0})")]
    InvalidKeyPairLength(usize),

    /// Public key or signature bytes could not be parsed.
    #[error("malformed ed25519 {0}")]
    MalformedEd25519(&'static str),

    /// The random source failed to produce bytes.
    #[error("random source unavailable: {0}")]
    Randomness(#[from] rand::Error),

    /// Reading a hash input stream failed.
    #[error("input stream error: {0}")]
    Io(#[from] std::io::Error),
}

impl S5Error {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            S5Error::InvalidChecksum { .. }
            | S5Error::AuthenticationFailed
            | S5Error::PaddingOverflow(_)
            | S5Error::InvalidLengthPrefix { .. }
            | S5Error::Encryption(_) => ErrorKind::Cryptographic,
            S5Error::Randomness(_) | S5Error::Io(_) => ErrorKind::Capability,
            _ => ErrorKind::Validation,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, S5Error>;
