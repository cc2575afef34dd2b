// src/consts.rs
//! Shared constants — wire format parameters and defaults

/// AES-256 key size; master password bytes are clamped to exactly this length
pub const KEY_SIZE: usize = 32;

/// AES block size; every ciphertext is a positive multiple of this
pub const BLOCK_SIZE: usize = 16;

/// Width of the big-endian length prefix at the front of each plaintext buffer
pub const LEN_PREFIX: usize = 8;

/// Reserved filename of the self-encrypted master password inside the stash
pub const MASTER_PW_FILENAME: &str = "master_pw";

/// Default output path for encrypted JSON exports
pub const DEFAULT_EXPORT_FILE: &str = "pw-stash-export.json";

/// Default output path for plaintext JSON exports
pub const DEFAULT_PLAIN_EXPORT_FILE: &str = "pw-stash-export-plain.json";
