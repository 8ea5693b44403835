// src/cli.rs
//! Command-line surface of the `krypt` binary
//!
//! Parsing, logging setup and dispatch live here so every command can be
//! driven without a terminal. The binary only wires them together.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

use crate::cipher::Aes256CbcService;
use crate::config::{self, Config};
use crate::consts::DEFAULT_LOG_FILTER;
use crate::enums::CipherAlgorithm;
use crate::error::Result;
use crate::hashing::HashingService;

#[derive(Debug, Parser)]
#[command(name = "krypt", version, about = "Salted hashing and string encryption")]
pub struct Cli {
    /// TOML config file (defaults to $KRYPT_CONFIG, then ./krypt.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a fresh salt sized for the configured hash
    Salt,
    /// Print a random password
    Password {
        #[arg(long, allow_negative_numbers = true)]
        length: Option<i64>,
    },
    /// Hash DATA with SALT prepended (prompts for DATA when omitted)
    Hash {
        #[arg(long)]
        salt: String,
        data: Option<String>,
    },
    /// Check DATA against a stored digest; exits 1 on mismatch
    Verify {
        #[arg(long)]
        salt: String,
        #[arg(long)]
        digest: String,
        data: Option<String>,
    },
    /// Print a new base64 cipher key
    Keygen,
    /// Encrypt TEXT under KEY
    Encrypt {
        #[arg(long)]
        key: String,
        text: String,
    },
    /// Decrypt ENVELOPE under KEY
    Decrypt {
        #[arg(long)]
        key: String,
        envelope: String,
    },
}

/// Text a command prints and whether the process should exit with success
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Self {
            output,
            success: true,
        }
    }
}

/// The services a command runs against, built from the active config
#[derive(Debug, Clone)]
pub struct Services {
    pub hashing: HashingService,
    pub cipher: Aes256CbcService,
}

impl Services {
    pub fn from_config(config: &Config) -> Self {
        let cipher = match config.cipher.algorithm {
            CipherAlgorithm::Aes256Cbc => Aes256CbcService::new(),
        };
        Self {
            hashing: HashingService::from_config(config),
            cipher,
        }
    }
}

/// The file named by `--config`, or the process-wide config otherwise
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => config::load_from(path),
        None => config::load().cloned(),
    }
}

/// Handle to the installed log filter
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

/// Install a stderr subscriber before anything else logs
///
/// `RUST_LOG` wins when set; otherwise the built-in filter applies until
/// [`LogHandle::apply`] swaps in the configured one.
pub fn init_logging() -> LogHandle {
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(DEFAULT_LOG_FILTER), false),
    };
    let (filter, handle) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .try_init()
        .ok();
    LogHandle {
        filter: handle,
        from_env,
    }
}

impl LogHandle {
    /// Switch to the config's filter unless `RUST_LOG` already chose one
    pub fn apply(&self, config: &Config) {
        if self.from_env {
            return;
        }
        match EnvFilter::try_new(&config.logging.filter) {
            Ok(filter) => {
                if let Err(e) = self.filter.reload(filter) {
                    warn!(error = %e, "could not apply configured log filter");
                }
            }
            Err(e) => {
                warn!(filter = %config.logging.filter, error = %e, "ignoring invalid log filter")
            }
        }
    }
}

/// Execute one command
///
/// `prompt` supplies DATA for `hash` and `verify` when it was not given on
/// the command line.
pub fn run<F>(command: Command, services: &Services, prompt: F) -> Result<Outcome>
where
    F: FnOnce() -> io::Result<String>,
{
    let Services { hashing, cipher } = services;
    let outcome = match command {
        Command::Salt => Outcome::ok(hashing.generate_salt()?),
        Command::Password { length } => Outcome::ok(match length {
            Some(n) => hashing.random_password(n)?,
            None => hashing.default_random_password()?,
        }),
        Command::Hash { salt, data } => {
            let data = data_or_prompt(data, prompt)?;
            Outcome::ok(hashing.encrypt(&data, &salt)?)
        }
        Command::Verify { salt, digest, data } => {
            let data = data_or_prompt(data, prompt)?;
            if hashing.validate(&data, &salt, &digest)? {
                Outcome::ok("ok".to_owned())
            } else {
                warn!("verification failed");
                Outcome {
                    output: "mismatch".to_owned(),
                    success: false,
                }
            }
        }
        Command::Keygen => Outcome::ok(cipher.generate_cipher_key()?),
        Command::Encrypt { key, text } => Outcome::ok(cipher.encrypt_string(&text, &key)?),
        Command::Decrypt { key, envelope } => Outcome::ok(cipher.decrypt_string(&envelope, &key)?),
    };
    Ok(outcome)
}

fn data_or_prompt<F>(data: Option<String>, prompt: F) -> Result<String>
where
    F: FnOnce() -> io::Result<String>,
{
    match data {
        Some(data) => Ok(data),
        None => Ok(prompt()?),
    }
}
