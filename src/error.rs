// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid master password")]
    Auth,

    #[error("malformed ciphertext: {0} bytes is not a positive multiple of 16")]
    MalformedCiphertext(usize),

    #[error("invalid entry name: {0}")]
    InvalidName(String),

    #[error("entry already exists: {0}")]
    EntryExists(String),

    #[error("no such entry: {0}")]
    EntryMissing(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}
