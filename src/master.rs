// src/master.rs
//! Sealing and verifying the master password
//!
//! The master password is encrypted under a key derived from its own
//! bytes and written to a fixed `master_pw` file. Verification decrypts
//! that file with a candidate password as the key and compares the
//! recovered value to the candidate.

use std::path::Path;

use crate::aliases::MasterPassword;
use crate::crypto::{decrypt_password, encrypt_password, Result};
use crate::error::CoreError;

/// Seal the master password into `path`, overwriting any previous file.
///
/// Returns the ciphertext size in bytes (always a positive multiple of 16).
pub fn seal_master<P: AsRef<Path>>(path: P, master: &MasterPassword) -> Result<u64> {
    let ciphertext = encrypt_password(master.expose_secret(), master);
    std::fs::write(path.as_ref(), &ciphertext)?;
    Ok(ciphertext.len() as u64)
}

/// Verify a candidate master password against the sealed file.
///
/// The file must decrypt, under the candidate's clamped key, back to the
/// candidate itself. A missing file surfaces as an IO error — the stash
/// was never initialised.
pub fn verify_master<P: AsRef<Path>>(path: P, candidate: &MasterPassword) -> Result<()> {
    let ciphertext = std::fs::read(path.as_ref())?;
    let recovered = decrypt_password(&ciphertext, candidate)?;
    if recovered != *candidate.expose_secret() {
        return Err(CoreError::Auth);
    }
    Ok(())
}
