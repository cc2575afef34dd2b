// src/lib.rs
//! pw-stash — a local password stash sealed under a master password
//!
//! Features:
//! - Length-prefixed AES-256-ECB sealing (fixed legacy wire format)
//! - Self-keyed `master_pw` file for master-password verification
//! - Flat-directory stash of named entries
//! - Full secure-gate v0.5 integration

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod export;
pub mod keygen;
pub mod master;
pub mod stash;

pub mod error;

// Re-export everything users need at the crate root
pub use aliases::{CipherKey32, MasterPassword, SecureConversionsExt, SecureRandomExt};
pub use config::load as load_config;
pub use crypto::{decrypt_password, encrypt_password, Result as CoreResult};
pub use error::CoreError;
pub use export::{export_plain_to_json, export_to_json};
pub use master::{seal_master, verify_master};
pub use stash::Stash;
