// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical types used throughout pw-stash.

pub use secure_gate::{
    dynamic_alias, fixed_alias, random_alias, SecureConversionsExt, SecureRandomExt,
};

// Fixed-size secrets
fixed_alias!(CipherKey32, 32); // AES-256 key clamped from the master password
fixed_alias!(Secret32, 32); // Suggested random secrets

// Dynamic secrets
dynamic_alias!(MasterPassword, String); // Unlocks the whole stash
dynamic_alias!(StoredPassword, String); // A decrypted entry value

// Random secrets
random_alias!(RandomSecret32, 32);
