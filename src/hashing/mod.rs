// src/hashing/mod.rs
//! Salted one-way password hashing
//!
//! [`HashingService`] composes a random salt with the input and delegates the
//! actual digest to a pluggable [`HashPrimitive`]. SHA-512 is the default.

mod primitive;
mod service;

pub use primitive::{HashPrimitive, Sha256Hash, Sha512Hash};
pub use service::HashingService;
