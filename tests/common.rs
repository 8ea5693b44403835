// tests/common.rs
//! Shared test utilities: logging setup and a recording hash primitive

#![allow(dead_code)] // each test binary uses a different subset

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use krypt_rs::{CoreResult, HashPrimitive};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging
/// Call once at the start of any test that needs logs
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer()) // works in `cargo test`
        .with(EnvFilter::from_default_env()) // respects RUST_LOG=
        .try_init()
        .ok(); // idempotent, safe to call multiple times
}

/// Primitive that always answers with a fixed digest and records its inputs
pub struct RecordingPrimitive {
    pub digest: String,
    pub salt_length: usize,
    pub calls: AtomicUsize,
    pub inputs: Mutex<Vec<String>>,
}

impl RecordingPrimitive {
    pub fn new(digest: &str) -> Self {
        Self {
            digest: digest.to_owned(),
            salt_length: digest.len(),
            calls: AtomicUsize::new(0),
            inputs: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_input(&self) -> Option<String> {
        self.inputs.lock().unwrap().last().cloned()
    }
}

impl HashPrimitive for RecordingPrimitive {
    fn compute_hash(&self, data: &str) -> CoreResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inputs.lock().unwrap().push(data.to_owned());
        Ok(self.digest.clone())
    }

    fn minimum_salt_length(&self) -> usize {
        self.salt_length
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
