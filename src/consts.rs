// src/consts.rs
//! Shared constants: security parameters and defaults

/// Salt length recommended for the SHA-512 primitive (one digest worth of bytes)
pub const SHA512_MINIMUM_SALT_LENGTH: usize = 64;

/// Salt length recommended for the SHA-256 primitive
pub const SHA256_MINIMUM_SALT_LENGTH: usize = 32;

/// Upper bound on the random bytes behind a single password or salt
pub const MAX_RANDOM_PASSWORD_LENGTH: usize = 1 << 20;

/// Environment variable naming the TOML config file
pub const CONFIG_ENV_VAR: &str = "KRYPT_CONFIG";

/// Config file looked up when `KRYPT_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "krypt.toml";

/// Default `tracing` filter directive
pub const DEFAULT_LOG_FILTER: &str = "info";
