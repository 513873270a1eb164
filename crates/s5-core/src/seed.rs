//! Mnemonic seed phrases.
//!
//! A phrase is 15 words: 13 seed words carrying 128 bits of entropy
//! (8 bits from the first word, 10 from each of the other twelve) followed by
//! 2 checksum words sliced from a Blake3 digest of the seed. Only the first
//! three letters of each word matter when a phrase is read back.

use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::crypto::{hash_blake3, hash_blake3_xof, random_below};
use crate::error::{Result, S5Error};
use crate::wordlist::{find_by_prefix, word_at, word_prefix, PREFIX_LEN, WORDLIST_LEN};

/// Bytes of entropy encoded by a phrase.
pub const SEED_LENGTH: usize = 16;
/// Words carrying seed entropy.
pub const SEED_WORDS_LENGTH: usize = 13;
/// Trailing checksum words.
pub const CHECKSUM_WORDS_LENGTH: usize = 2;
/// Total words in a phrase.
pub const PHRASE_LENGTH: usize = SEED_WORDS_LENGTH + CHECKSUM_WORDS_LENGTH;
/// The first word is drawn from this many vocabulary entries only.
pub const FIRST_WORD_BOUND: usize = 256;

/// Raw 16-byte phrase entropy.
pub type Seed = [u8; SEED_LENGTH];

fn word_bits(position: usize) -> u32 {
    if position == 0 {
        8
    } else {
        10
    }
}

fn check_seed_words(seed_words: &[u16]) -> Result<()> {
    if seed_words.len() != SEED_WORDS_LENGTH {
        return Err(S5Error::InvalidSeedWordsLength {
            expected: SEED_WORDS_LENGTH,
            actual: seed_words.len(),
        });
    }
    Ok(())
}

/// Pack 13 seed word indices into a 16-byte seed, most significant bit first.
pub fn seed_words_to_seed(seed_words: &[u16]) -> Result<Seed> {
    check_seed_words(seed_words)?;
    let mut seed = [0u8; SEED_LENGTH];
    let mut bit = 0usize;
    for (i, &word) in seed_words.iter().enumerate() {
        let bits = word_bits(i);
        for j in (0..bits).rev() {
            if word & (1 << j) != 0 {
                seed[bit / 8] |= 0x80 >> (bit % 8);
            }
            bit += 1;
        }
    }
    Ok(seed)
}

/// Unpack a seed back into its 13 word indices.
pub fn seed_to_seed_words(seed: &Seed) -> [u16; SEED_WORDS_LENGTH] {
    let mut words = [0u16; SEED_WORDS_LENGTH];
    let mut bit = 0usize;
    for (i, word) in words.iter_mut().enumerate() {
        for _ in 0..word_bits(i) {
            let set = seed[bit / 8] & (0x80 >> (bit % 8)) != 0;
            *word = (*word << 1) | u16::from(set);
            bit += 1;
        }
    }
    words
}

/// Slice two 10-bit checksum words out of the first 20 bits of `h`.
pub fn hash_to_checksum_words(h: &[u8]) -> Result<[u16; CHECKSUM_WORDS_LENGTH]> {
    if h.len() < 3 {
        return Err(S5Error::InvalidHashLength {
            expected: 3,
            actual: h.len(),
        });
    }
    let (h0, h1, h2) = (u32::from(h[0]), u32::from(h[1]), u32::from(h[2]));
    let word1 = ((h0 << 8) | h1) >> 6;
    let word2 = (((h1 << 10) & 0xffff) + (h2 << 2)) >> 6;
    Ok([word1 as u16, word2 as u16])
}

/// Checksum words for a seed word vector.
pub fn generate_checksum_words_from_seed_words(
    seed_words: &[u16],
) -> Result<[u16; CHECKSUM_WORDS_LENGTH]> {
    check_seed_words(seed_words)?;
    let seed = Zeroizing::new(seed_words_to_seed(seed_words)?);
    let digest = hash_blake3_xof(&seed[..], SEED_LENGTH);
    hash_to_checksum_words(&digest)
}

/// Draw a new random phrase from `rng`.
pub fn generate_phrase<R>(rng: &mut R) -> Result<String>
where
    R: RngCore + CryptoRng,
{
    let mut seed_words = Zeroizing::new([0u16; SEED_WORDS_LENGTH]);
    for (i, word) in seed_words.iter_mut().enumerate() {
        *word = random_below(rng, WORDLIST_LEN as u32)? as u16 % (1 << word_bits(i));
    }
    let checksum = generate_checksum_words_from_seed_words(&seed_words[..])?;

    let phrase = seed_words
        .iter()
        .chain(checksum.iter())
        .map(|&idx| word_at(idx))
        .collect::<Vec<_>>()
        .join(" ");
    tracing::debug!("generated new seed phrase");
    Ok(phrase)
}

/// Trim surrounding whitespace and lowercase.
pub fn sanitize_phrase(phrase: &str) -> String {
    phrase.trim().to_lowercase()
}

/// Check a phrase and recover the seed it encodes.
pub fn validate_phrase(phrase: &str) -> Result<Seed> {
    let phrase = Zeroizing::new(sanitize_phrase(phrase));
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.len() != PHRASE_LENGTH {
        return Err(S5Error::InvalidPhraseLength {
            expected: PHRASE_LENGTH,
            actual: words.len(),
        });
    }

    let mut seed_words = Zeroizing::new([0u16; SEED_WORDS_LENGTH]);
    for (i, word) in words[..SEED_WORDS_LENGTH].iter().enumerate() {
        if word.chars().count() < PREFIX_LEN {
            return Err(S5Error::WordTooShort { position: i + 1 });
        }
        let prefix = word_prefix(word);
        seed_words[i] = find_by_prefix(prefix, i == 0).ok_or_else(|| {
            tracing::debug!(position = i + 1, "unknown word prefix");
            S5Error::UnknownWordPrefix {
                position: i + 1,
                prefix: prefix.to_string(),
            }
        })?;
    }

    let checksum = generate_checksum_words_from_seed_words(&seed_words[..])?;
    for (i, &expected) in checksum.iter().enumerate() {
        let position = SEED_WORDS_LENGTH + i;
        // A token shorter than the prefix is compared whole and cannot match.
        if word_prefix(words[position]) != word_prefix(word_at(expected)) {
            tracing::debug!(position = position + 1, "checksum mismatch");
            return Err(S5Error::InvalidChecksum {
                position: position + 1,
            });
        }
    }

    seed_words_to_seed(&seed_words[..])
}

/// 32-byte key generation seed for a phrase: `Blake3(validated seed)`.
///
/// The raw 16-byte seed is never used as signing key material directly.
pub fn generate_seed_from_phrase(phrase: &str) -> Result<[u8; 32]> {
    let seed = Zeroizing::new(validate_phrase(phrase)?);
    Ok(hash_blake3(&seed[..]))
}
