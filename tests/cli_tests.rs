// tests/cli_tests.rs
#![cfg(feature = "cli")]

mod common;
use common::setup;

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use clap::Parser;
use krypt_rs::cli::{self, Cli, Outcome, Services};
use krypt_rs::config::Config;
use krypt_rs::{CoreError, HashAlgorithm};
use tempfile::NamedTempFile;

const MJELLO_DIGEST: &str =
    "smead7o0xQLWPXOdJRht3o9kTsKLqjOgKY9RsY/UX2T9fEy3YOU5emDEYcU06fpwAqdNBVernUMZRXN0ffHZRQ==";

fn no_prompt() -> io::Result<String> {
    panic!("DATA was given on the command line")
}

fn run(args: &[&str]) -> krypt_rs::CoreResult<Outcome> {
    let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
    cli::run(cli.command, &Services::from_config(&Config::default()), no_prompt)
}

#[test]
fn verify_succeeds_on_matching_digest() {
    setup();
    let outcome = run(&[
        "krypt", "verify", "--salt", "foobar123", "--digest", MJELLO_DIGEST, "Mjello",
    ])
    .unwrap();
    assert!(outcome.success);
    assert_eq!(outcome.output, "ok");
}

#[test]
fn verify_fails_on_mismatching_digest() {
    let outcome = run(&[
        "krypt", "verify", "--salt", "foobar123", "--digest", MJELLO_DIGEST, "mjello",
    ])
    .unwrap();
    assert!(!outcome.success);
    assert_eq!(outcome.output, "mismatch");
}

#[test]
fn hash_prompts_for_missing_data() {
    let cli = Cli::try_parse_from(["krypt", "hash", "--salt", "foobar123"]).unwrap();
    let services = Services::from_config(&Config::default());
    let outcome = cli::run(cli.command, &services, || Ok("Mjello".to_owned())).unwrap();
    assert_eq!(outcome.output, MJELLO_DIGEST);
}

#[test]
fn failed_prompt_is_an_io_error() {
    let cli = Cli::try_parse_from(["krypt", "verify", "--salt", "s", "--digest", "d"]).unwrap();
    let services = Services::from_config(&Config::default());
    let err = cli::run(cli.command, &services, || {
        Err(io::Error::new(io::ErrorKind::NotFound, "no terminal"))
    })
    .unwrap_err();
    assert!(matches!(err, CoreError::Io(_)));
}

#[test]
fn password_length_must_be_positive() {
    for length in ["0", "-1"] {
        let err = run(&["krypt", "password", "--length", length]).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}

#[test]
fn password_without_length_uses_salt_size() {
    let outcome = run(&["krypt", "password"]).unwrap();
    assert_eq!(STANDARD.decode(&outcome.output).unwrap().len(), 64);
}

#[test]
fn keygen_encrypt_decrypt_round_trip() {
    let key = run(&["krypt", "keygen"]).unwrap().output;
    let envelope = run(&["krypt", "encrypt", "--key", &key, "attack at dawn"])
        .unwrap()
        .output;
    let decrypted = run(&["krypt", "decrypt", "--key", &key, &envelope]).unwrap();
    assert!(decrypted.success);
    assert_eq!(decrypted.output, "attack at dawn");
}

#[test]
fn config_flag_selects_the_hash() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[hashing]\nalgorithm = \"sha256\"").unwrap();
    let path = file.path().to_str().unwrap();

    let cli = Cli::try_parse_from(["krypt", "salt", "--config", path]).unwrap();
    let config = cli::resolve_config(&cli).unwrap();
    assert_eq!(config.hashing.algorithm, HashAlgorithm::Sha256);

    let outcome = cli::run(cli.command, &Services::from_config(&config), no_prompt).unwrap();
    assert_eq!(STANDARD.decode(&outcome.output).unwrap().len(), 32);
}

#[test]
fn unreadable_config_flag_is_an_error() {
    let cli = Cli::try_parse_from(["krypt", "--config", "/nonexistent/krypt.toml", "salt"])
        .unwrap();
    assert!(matches!(cli::resolve_config(&cli), Err(CoreError::Io(_))));
}
