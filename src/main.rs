use std::{
    error::Error,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use clap::{Parser, Subcommand};
use rand::rngs::OsRng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use s5_core::{
    crypto::hash_blake3_reader,
    keys::{gen_key_pair_and_seed, gen_key_pair_from_phrase, get_data_key, KeyPairEd25519},
    mutable::{decrypt_mutable_bytes, encrypt_mutable_bytes, ENCRYPTION_KEY_LENGTH},
    padding::{check_padded_block, pad_file_size_default},
    path::derive_path_key_for_path,
    seed::{generate_phrase, sanitize_phrase, validate_phrase},
    wordlist::{find_by_prefix, unique_prefix_len, word_at, word_prefix},
};

type CliResult<T> = Result<T, Box<dyn Error>>;

//==================== Arguments ====================//

#[derive(Parser)]
#[command(name = "s5", version, about = "S5 identity tools: seed phrases, path keys, mutable containers")]
struct Cli {
    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Seed phrase tools.
    #[command(subcommand)]
    Phrase(PhraseCommand),
    /// Ed25519 key pairs.
    #[command(subcommand)]
    Keypair(KeypairCommand),
    /// Derive the key for a slash-separated path under a root key.
    PathKey {
        /// 32-byte root key in hex.
        #[arg(long, env = "S5_ROOT_KEY_HEX", hide_env_values = true)]
        root_hex: String,
        path: String,
    },
    /// Public data key for a master key and a data seed.
    DataKey {
        #[arg(long, env = "S5_MASTER_KEY", hide_env_values = true)]
        master: String,
        seed: String,
    },
    /// Show the padded size for SIZE bytes.
    Pad { size: u128 },
    /// Seal a file into a padded mutable container.
    Encrypt {
        #[arg(long, env = "S5_KEY_HEX", hide_env_values = true)]
        key_hex: String,
        input: PathBuf,
        output: PathBuf,
    },
    /// Open a mutable container.
    Decrypt {
        #[arg(long, env = "S5_KEY_HEX", hide_env_values = true)]
        key_hex: String,
        input: PathBuf,
        output: PathBuf,
    },
    /// Blake3 digest of a file.
    Hash { input: PathBuf },
}

#[derive(Subcommand)]
enum PhraseCommand {
    /// Print a new random phrase.
    Generate,
    /// Check a phrase and print its seed.
    Validate {
        #[arg(env = "S5_PHRASE", hide_env_values = true)]
        phrase: String,
    },
    /// Print the phrase with every word cut to its shortest unique prefix.
    Shorten {
        #[arg(env = "S5_PHRASE", hide_env_values = true)]
        phrase: String,
    },
}

#[derive(Subcommand)]
enum KeypairCommand {
    /// Random seed and key pair.
    Random,
    /// Deterministic key pair for a phrase.
    FromPhrase {
        #[arg(env = "S5_PHRASE", hide_env_values = true)]
        phrase: String,
    },
}

//==================== Output ====================//

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KeyPairOutput {
    private_key: String,
    public_key: String,
    public_key_raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<String>,
}

impl KeyPairOutput {
    fn new(kp: &KeyPairEd25519, seed: Option<&[u8]>) -> Self {
        Self {
            private_key: URL_SAFE_NO_PAD.encode(kp.extract_bytes()),
            public_key: URL_SAFE_NO_PAD.encode(kp.public_key()),
            public_key_raw: URL_SAFE_NO_PAD.encode(kp.public_key_raw()),
            seed: seed.map(hex::encode),
        }
    }
}

#[derive(Serialize)]
struct PadOutput {
    size: String,
    padded: String,
    already_padded: bool,
}

//==================== Helpers ====================//

fn decode_hex_arg(name: &str, value: &str, len: usize) -> CliResult<Vec<u8>> {
    let bytes = hex::decode(value.trim()).map_err(|err| format!("invalid {name}: {err}"))?;
    if bytes.len() != len {
        return Err(format!("{name} must be {len} bytes ({} hex chars)", len * 2).into());
    }
    Ok(bytes)
}

fn write_all(p: &Path, bytes: &[u8]) -> CliResult<()> {
    if let Some(parent) = p.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut f = fs::File::create(p)?;
    f.write_all(bytes)?;
    Ok(())
}

fn shorten_phrase(phrase: &str) -> CliResult<String> {
    validate_phrase(phrase)?;
    let sanitized = sanitize_phrase(phrase);
    let short: Vec<&str> = sanitized
        .split_whitespace()
        .map(|word| {
            let idx = find_by_prefix(word_prefix(word), false).unwrap_or_default();
            let full = word_at(idx);
            &full[..unique_prefix_len(full, idx as usize)]
        })
        .collect();
    Ok(short.join(" "))
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

//==================== Commands ====================//

fn run(command: Command) -> CliResult<()> {
    match command {
        Command::Phrase(PhraseCommand::Generate) => {
            println!("{}", generate_phrase(&mut OsRng)?);
        }
        Command::Phrase(PhraseCommand::Validate { phrase }) => {
            let seed = validate_phrase(&phrase)?;
            println!("{}", hex::encode(seed));
        }
        Command::Phrase(PhraseCommand::Shorten { phrase }) => {
            println!("{}", shorten_phrase(&phrase)?);
        }
        Command::Keypair(KeypairCommand::Random) => {
            let generated = gen_key_pair_and_seed(&mut OsRng)?;
            let out = KeyPairOutput::new(&generated.key_pair, Some(&generated.seed[..]));
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Keypair(KeypairCommand::FromPhrase { phrase }) => {
            let kp = gen_key_pair_from_phrase(&phrase)?;
            println!("{}", serde_json::to_string_pretty(&KeyPairOutput::new(&kp, None))?);
        }
        Command::PathKey { root_hex, path } => {
            let root = decode_hex_arg("--root-hex", &root_hex, 32)?;
            println!("{}", hex::encode(derive_path_key_for_path(&root, &path)?));
        }
        Command::DataKey { master, seed } => {
            println!("{}", URL_SAFE_NO_PAD.encode(get_data_key(master, seed)));
        }
        Command::Pad { size } => {
            let padded = pad_file_size_default(size)?;
            let out = PadOutput {
                size: size.to_string(),
                padded: padded.to_string(),
                already_padded: check_padded_block(size)?,
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::Encrypt {
            key_hex,
            input,
            output,
        } => {
            let key = decode_hex_arg("--key-hex", &key_hex, ENCRYPTION_KEY_LENGTH)?;
            let plain = fs::read(&input)?;
            let sealed = encrypt_mutable_bytes(&plain, &key, &mut OsRng)?;
            write_all(&output, &sealed)?;
            tracing::info!(input = %input.display(), bytes = sealed.len(), "container written");
        }
        Command::Decrypt {
            key_hex,
            input,
            output,
        } => {
            let key = decode_hex_arg("--key-hex", &key_hex, ENCRYPTION_KEY_LENGTH)?;
            let sealed = fs::read(&input)?;
            let plain = decrypt_mutable_bytes(&sealed, &key)?;
            write_all(&output, &plain)?;
            tracing::info!(output = %output.display(), bytes = plain.len(), "payload written");
        }
        Command::Hash { input } => {
            let digest = hash_blake3_reader(fs::File::open(&input)?)?;
            println!("{}", hex::encode(digest));
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    if let Err(err) = run(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use s5_core::seed::PHRASE_LENGTH;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn hex_arguments_are_length_checked() {
        assert_eq!(decode_hex_arg("--key-hex", &"ab".repeat(32), 32).expect("ok").len(), 32);
        let err = decode_hex_arg("--key-hex", "abcd", 32).expect_err("short");
        assert!(err.to_string().contains("32 bytes"));
        assert!(decode_hex_arg("--key-hex", "zz", 1).is_err());
    }

    #[test]
    fn shortened_phrase_still_validates() {
        let phrase = generate_phrase(&mut OsRng).expect("phrase");
        let short = shorten_phrase(&phrase).expect("shorten");
        assert_eq!(short.split(' ').count(), PHRASE_LENGTH);
        assert!(short.len() <= phrase.len());
        assert_eq!(
            validate_phrase(&short).expect("short"),
            validate_phrase(&phrase).expect("full")
        );
    }

    #[test]
    fn encrypt_then_decrypt_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        let plain = dir.path().join("plain.txt");
        let sealed = dir.path().join("out/sealed.bin");
        let opened = dir.path().join("opened.txt");
        fs::write(&plain, b"mutable registry payload").expect("write");
        let key_hex = "11".repeat(32);

        run(Command::Encrypt {
            key_hex: key_hex.clone(),
            input: plain.clone(),
            output: sealed.clone(),
        })
        .expect("encrypt");
        assert_eq!(fs::metadata(&sealed).expect("sealed").len(), 4096);

        run(Command::Decrypt {
            key_hex,
            input: sealed,
            output: opened.clone(),
        })
        .expect("decrypt");
        assert_eq!(fs::read(&opened).expect("opened"), b"mutable registry payload");
    }

    #[test]
    fn key_pair_output_shape() {
        let kp = gen_key_pair_from_phrase(&generate_phrase(&mut OsRng).expect("phrase"))
            .expect("kp");
        let json = serde_json::to_value(KeyPairOutput::new(&kp, None)).expect("json");
        assert!(json.get("seed").is_none());
        let public = json["publicKey"].as_str().expect("publicKey");
        assert_eq!(URL_SAFE_NO_PAD.decode(public).expect("b64")[0], 0xed);
    }
}
