// src/bin/krypt.rs
//! krypt: salts, digests and string envelopes from the command line

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use krypt_rs::cli::{self, Cli, Services};
use rpassword::prompt_password;
use tracing::info;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let logging = cli::init_logging();

    let config = cli::resolve_config(&cli).with_context(|| match &cli.config {
        Some(path) => format!("Failed to load config from {}", path.display()),
        None => "Failed to load config; check KRYPT_CONFIG".to_owned(),
    })?;
    logging.apply(&config);

    let services = Services::from_config(&config);
    info!(hashing = ?services.hashing, cipher = ?services.cipher, "krypt ready");

    let outcome = cli::run(cli.command, &services, || prompt_password("Data: "))
        .context("Command failed")?;
    println!("{}", outcome.output);

    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
