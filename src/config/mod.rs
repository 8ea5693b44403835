// src/config/mod.rs
//! Configuration system for krypt-rs
//!
//! Lazy-loaded global config from TOML, located through `KRYPT_CONFIG`.

pub use app::{config_path, load, load_from, CipherConfig, Config, HashingConfig, LoggingConfig};

mod app;
mod defaults;
