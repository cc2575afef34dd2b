// src/crypto.rs
//! The stash's wire format — length-prefixed AES-256-ECB
//!
//! Every stored value is an 8-byte big-endian length prefix followed by
//! the raw password bytes, zero-padded to a whole number of 16-byte
//! blocks and encrypted block-by-block under the clamped master key.
//! ECB is the compatibility contract here: existing `master_pw` files
//! and stash entries were written this way, so no IV, no chaining, no
//! authenticated mode.

use aes::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes256;
use blake3::Hasher;

use crate::aliases::{CipherKey32, MasterPassword};
use crate::consts::{BLOCK_SIZE, KEY_SIZE, LEN_PREFIX};
use crate::error::CoreError;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Clamp the master password's bytes to an AES-256 key.
///
/// Shorter than 32 bytes → right-padded with zeros; 32 bytes or longer →
/// truncated to the first 32 bytes. Always succeeds.
pub fn clamp_key(master: &MasterPassword) -> CipherKey32 {
    let bytes = master.expose_secret().as_bytes();
    let mut key = [0u8; KEY_SIZE];
    let n = bytes.len().min(KEY_SIZE);
    key[..n].copy_from_slice(&bytes[..n]);
    CipherKey32::new(key)
}

/// Build the padded plaintext buffer: big-endian length prefix, raw
/// bytes, zero padding to the next multiple of the block size.
pub fn length_prefixed(password: &str) -> Vec<u8> {
    let bytes = password.as_bytes();
    let mut buf = Vec::with_capacity(LEN_PREFIX + bytes.len() + BLOCK_SIZE);
    buf.extend_from_slice(&(bytes.len() as u64).to_be_bytes());
    buf.extend_from_slice(bytes);
    let rem = buf.len() % BLOCK_SIZE;
    if rem != 0 {
        buf.resize(buf.len() + (BLOCK_SIZE - rem), 0);
    }
    buf
}

/// Encrypt a password under the master password.
///
/// Deterministic: the same inputs always yield the same ciphertext. The
/// output length is the smallest multiple of 16 ≥ 8 + the password's
/// byte length.
pub fn encrypt_password(password: &str, master: &MasterPassword) -> Vec<u8> {
    let key = clamp_key(master);
    let cipher = Aes256::new(GenericArray::from_slice(key.expose_secret()));

    let mut buf = length_prefixed(password);
    for block in buf.chunks_exact_mut(BLOCK_SIZE) {
        cipher.encrypt_block(GenericArray::from_mut_slice(block));
    }
    buf
}

/// Decrypt a stored ciphertext under the master password.
///
/// A decrypted length prefix that overruns the buffer means the key was
/// wrong (the prefix is effectively random under a wrong key), as do
/// recovered bytes that are not valid UTF-8 — both surface as `Auth`.
pub fn decrypt_password(ciphertext: &[u8], master: &MasterPassword) -> Result<String> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CoreError::MalformedCiphertext(ciphertext.len()));
    }

    let key = clamp_key(master);
    let cipher = Aes256::new(GenericArray::from_slice(key.expose_secret()));

    let mut buf = ciphertext.to_vec();
    for block in buf.chunks_exact_mut(BLOCK_SIZE) {
        cipher.decrypt_block(GenericArray::from_mut_slice(block));
    }

    let mut prefix = [0u8; LEN_PREFIX];
    prefix.copy_from_slice(&buf[..LEN_PREFIX]);
    let len = u64::from_be_bytes(prefix);

    if len > (buf.len() - LEN_PREFIX) as u64 {
        return Err(CoreError::Auth);
    }

    let raw = buf[LEN_PREFIX..LEN_PREFIX + len as usize].to_vec();
    String::from_utf8(raw).map_err(|_| CoreError::Auth)
}

pub fn blake3_hex(data: &[u8]) -> String {
    Hasher::new().update(data).finalize().to_hex().to_string()
}
