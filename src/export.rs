// src/export.rs
//! Portable JSON exports of the stash
//!
//! Encrypted export carries each entry's ciphertext as Base64URL plus a
//! BLAKE3 fingerprint; the plaintext variant decrypts everything and is
//! gated behind the `allow_insecure_export` config flag.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use serde_json::json;

use crate::crypto::{blake3_hex, Result};
use crate::error::CoreError;
use crate::stash::Stash;

/// Export all entries in encrypted form to a pretty JSON file.
pub fn export_to_json(stash: &Stash, path: &str) -> Result<()> {
    let mut entries = Vec::new();
    for (name, blob) in stash.export()? {
        entries.push(json!({
            "name": name,
            "ciphertext_base64url": URL_SAFE_NO_PAD.encode(&blob),
            "ciphertext_blake3": blake3_hex(&blob),
            "ciphertext_len": blob.len(),
        }));
    }

    let export = json!({
        "export_format": "pw-stash-v1",
        "exported_at": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        "exporter_version": env!("CARGO_PKG_VERSION"),
        "total_entries": entries.len(),
        "entries": entries,
    });

    std::fs::write(path, serde_json::to_string_pretty(&export)?)?;
    Ok(())
}

/// Export all entries decrypted to a pretty JSON file.
///
/// SECURITY WARNING: the output contains every password in cleartext.
/// Refused unless `allow_insecure_export` is set in the config.
pub fn export_plain_to_json(stash: &Stash, path: &str) -> Result<()> {
    let config = crate::config::load();
    if !config.features.allow_insecure_export {
        return Err(CoreError::Config(
            "plaintext export is disabled — set features.allow_insecure_export = true".to_owned(),
        ));
    }

    let entries = stash.export_plain()?;

    let export = json!({
        "export_format": "pw-stash-plain-v1",
        "exported_at": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        "exporter_version": env!("CARGO_PKG_VERSION"),
        "total_entries": entries.len(),
        "warning": "THIS FILE CONTAINS ALL PASSWORDS IN PLAINTEXT. ENCRYPT OR DELETE IMMEDIATELY AFTER USE.",
        "entries": entries,
    });

    std::fs::write(path, serde_json::to_string_pretty(&export)?)?;
    Ok(())
}
