//! End-to-end checks across the phrase, derivation and container codecs.

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};
use s5_core::keys::gen_key_pair_from_phrase;
use s5_core::mutable::{decrypt_mutable_bytes, encrypt_mutable_bytes};
use s5_core::padding::{check_padded_block, pad_file_size_default};
use s5_core::path::{derive_key_for_path_segments, derive_path_key_for_path};
use s5_core::seed::{
    generate_phrase, generate_seed_from_phrase, seed_to_seed_words, validate_phrase,
};
use s5_core::{ErrorKind, S5Error};

#[test]
fn container_round_trip_for_reference_sizes() {
    let mut rng = StdRng::seed_from_u64(2024);
    let key: [u8; 32] = rng.gen();
    for len in [0usize, 1, 4096, 1_000_000] {
        let mut payload = vec![0u8; len];
        rng.fill(&mut payload[..]);
        let sealed = encrypt_mutable_bytes(&payload, &key, &mut rng).expect("encrypt");
        assert!(check_padded_block(sealed.len() as u128).expect("padded"));
        assert_eq!(
            sealed.len() as u128,
            pad_file_size_default(len as u128 + 46).expect("pad")
        );
        assert_eq!(decrypt_mutable_bytes(&sealed, &key).expect("decrypt"), payload);
    }
}

#[test]
fn container_works_with_os_randomness() {
    let key = [0x5au8; 32];
    let sealed = encrypt_mutable_bytes(b"registry entry", &key, &mut OsRng).expect("encrypt");
    assert_eq!(
        decrypt_mutable_bytes(&sealed, &key).expect("decrypt"),
        b"registry entry"
    );
}

#[test]
fn every_single_byte_flip_is_rejected() {
    let mut rng = StdRng::seed_from_u64(77);
    let key: [u8; 32] = rng.gen();
    let sealed = encrypt_mutable_bytes(b"do not touch", &key, &mut rng).expect("encrypt");

    for idx in 0..sealed.len() {
        let mut tampered = sealed.clone();
        tampered[idx] ^= 0x01;
        let err = decrypt_mutable_bytes(&tampered, &key).expect_err("tampered container");
        match idx {
            0 => assert!(matches!(err, S5Error::UnsupportedContainerType(_))),
            1 => assert!(matches!(err, S5Error::UnsupportedVersion(_))),
            _ => {
                assert!(matches!(err, S5Error::AuthenticationFailed), "byte {idx}: {err}");
                assert_eq!(err.kind(), ErrorKind::Cryptographic);
            }
        }
    }
}

#[test]
fn wrong_key_fails_authentication() {
    let mut rng = StdRng::seed_from_u64(78);
    let sealed = encrypt_mutable_bytes(b"secret", &[1u8; 32], &mut rng).expect("encrypt");
    assert!(matches!(
        decrypt_mutable_bytes(&sealed, &[2u8; 32]),
        Err(S5Error::AuthenticationFailed)
    ));
    let err = decrypt_mutable_bytes(&sealed, &[1u8; 16]).expect_err("short key");
    assert!(matches!(err, S5Error::WrongKeyLength { actual: 16, .. }));
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn phrases_survive_generation_and_validation() {
    let mut rng = StdRng::seed_from_u64(15);
    for _ in 0..50 {
        let phrase = generate_phrase(&mut rng).expect("phrase");
        let seed = validate_phrase(&phrase).expect("valid");
        assert!(seed_to_seed_words(&seed).iter().skip(1).all(|&w| w < 1024));
        assert_eq!(
            generate_seed_from_phrase(&phrase).expect("key seed"),
            generate_seed_from_phrase(&format!(" {phrase} ")).expect("key seed")
        );
        gen_key_pair_from_phrase(&phrase).expect("key pair");
    }
}

#[test]
fn checksum_error_is_cryptographic() {
    let mut rng = StdRng::seed_from_u64(16);
    let phrase = generate_phrase(&mut rng).expect("phrase");
    let mut words: Vec<String> = phrase.split(' ').map(str::to_owned).collect();
    // Swap the two checksum words unless they happen to share a prefix.
    if words[13][..3] != words[14][..3] {
        words.swap(13, 14);
        let err = validate_phrase(&words.join(" ")).expect_err("bad checksum");
        assert!(matches!(err, S5Error::InvalidChecksum { position: 14 }));
        assert_eq!(err.kind(), ErrorKind::Cryptographic);
    }
}

#[test]
fn path_keys_form_a_tree() {
    let mut rng = StdRng::seed_from_u64(3);
    let root: [u8; 32] = rng.gen();

    assert_eq!(
        &*derive_key_for_path_segments::<&str>(&root, &[]).expect("root"),
        &root[..]
    );

    let docs = derive_path_key_for_path(&root, "home/docs").expect("docs");
    let music = derive_path_key_for_path(&root, "home/music").expect("music");
    assert_ne!(docs, music);
    // Only the last byte of a segment reaches the hash.
    assert_eq!(docs, derive_path_key_for_path(&root, "home/pics").expect("pics"));
    assert_eq!(docs, derive_path_key_for_path(&root, "home/docs").expect("again"));

    // A delegate holding the segment-chain key for `home` reaches its children.
    let home = derive_key_for_path_segments(&root, &["home"]).expect("home");
    assert_eq!(docs, derive_path_key_for_path(&home, "docs").expect("delegated"));

    let other_root = [0u8; 32];
    assert_ne!(docs, derive_path_key_for_path(&other_root, "home/docs").expect("other"));
}
