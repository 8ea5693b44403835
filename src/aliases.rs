// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! Every buffer that holds key material or decrypted text is wrapped in one
//! of these so it is zeroized when it goes out of scope.

pub use secure_gate::dynamic_alias;

// Dynamic secrets
dynamic_alias!(KeyMaterial, Vec<u8>); // decoded key bytes, sized by the cipher
dynamic_alias!(PlainText, Vec<u8>); // decrypted bytes before UTF-8 validation
dynamic_alias!(SaltedInput, Vec<u8>); // salt ‖ data before it is hashed
