// src/keygen.rs
//! Random password suggestion for the `suggest` command

use crate::aliases::{RandomSecret32, Secret32, SecureConversionsExt, SecureRandomExt};

/// Propose a strong replacement password: 32 random bytes rendered as
/// 64 hex characters, ready to paste into `add`, `update`, or `init`.
/// Hex keeps the suggestion ASCII, so its clamped key is exactly its
/// first 32 characters.
pub fn suggest_password() -> String {
    Secret32::new(**RandomSecret32::new())
        .expose_secret()
        .to_hex()
}
