// tests/crypto_tests.rs
use aes::cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit};
use aes::Aes256;
use pw_stash::aliases::MasterPassword;
use pw_stash::consts::{BLOCK_SIZE, KEY_SIZE, LEN_PREFIX};
use pw_stash::crypto::*;
use pw_stash::error::CoreError;

#[test]
fn test_encrypt_decrypt_roundtrip_in_memory() {
    let master = MasterPassword::new("correct horse".to_owned());

    let ciphertext = encrypt_password("Attack at dawn!", &master);
    let decrypted = decrypt_password(&ciphertext, &master).unwrap();

    assert_eq!(decrypted, "Attack at dawn!");
}

#[test]
fn test_encryption_is_deterministic() {
    let master = MasterPassword::new("hi".to_owned());
    assert_eq!(
        encrypt_password("hunter2", &master),
        encrypt_password("hunter2", &master)
    );
}

#[test]
fn test_short_master_key_is_zero_padded() {
    let master = MasterPassword::new("hi".to_owned());
    let key = clamp_key(&master);

    assert_eq!(&key.expose_secret()[..2], b"hi");
    assert_eq!(&key.expose_secret()[2..], &[0u8; 30]);
}

#[test]
fn test_long_master_key_is_truncated_to_32_bytes() {
    let long = "0123456789012345678901234567890123456789"; // 40 bytes
    let prefix = &long[..KEY_SIZE];

    let key_long = clamp_key(&MasterPassword::new(long.to_owned()));
    let key_prefix = clamp_key(&MasterPassword::new(prefix.to_owned()));

    assert_eq!(key_long.expose_secret(), key_prefix.expose_secret());
    // Same key → same ciphertext, even though the passwords differ
    assert_eq!(
        encrypt_password("secret", &MasterPassword::new(long.to_owned())),
        encrypt_password("secret", &MasterPassword::new(prefix.to_owned()))
    );
}

#[test]
fn test_plaintext_buffer_layout() {
    let buf = length_prefixed("hunter2");

    assert_eq!(buf.len() % BLOCK_SIZE, 0);
    let mut prefix = [0u8; LEN_PREFIX];
    prefix.copy_from_slice(&buf[..LEN_PREFIX]);
    assert_eq!(u64::from_be_bytes(prefix), 7);
    assert_eq!(&buf[LEN_PREFIX..LEN_PREFIX + 7], b"hunter2");
    assert!(buf[LEN_PREFIX + 7..].iter().all(|&b| b == 0));
}

#[test]
fn test_ciphertext_length_is_smallest_block_multiple() {
    let master = MasterPassword::new("m".to_owned());
    for len in [0usize, 1, 7, 8, 9, 23, 24, 40, 100] {
        let password = "x".repeat(len);
        let ciphertext = encrypt_password(&password, &master);
        let expected = (LEN_PREFIX + len).div_ceil(BLOCK_SIZE) * BLOCK_SIZE;
        assert_eq!(ciphertext.len(), expected, "password length {len}");
    }
}

#[test]
fn test_decrypt_fails_with_wrong_master() {
    let ciphertext = encrypt_password("secret", &MasterPassword::new("correct horse".to_owned()));

    let wrong = decrypt_password(&ciphertext, &MasterPassword::new("battery staple".to_owned()));
    assert!(matches!(wrong, Err(CoreError::Auth)));
}

#[test]
fn test_decrypt_rejects_non_utf8_payload() {
    let master = MasterPassword::new("hi".to_owned());

    // Well-formed buffer: in-range length prefix (1) but a payload byte
    // that can never be UTF-8
    let mut buf = vec![0u8; BLOCK_SIZE];
    buf[LEN_PREFIX - 1] = 1;
    buf[LEN_PREFIX] = 0xFF;

    let key = clamp_key(&master);
    let cipher = Aes256::new(GenericArray::from_slice(key.expose_secret()));
    for block in buf.chunks_exact_mut(BLOCK_SIZE) {
        cipher.encrypt_block(GenericArray::from_mut_slice(block));
    }

    assert!(matches!(
        decrypt_password(&buf, &master),
        Err(CoreError::Auth)
    ));
}

#[test]
fn test_decrypt_rejects_malformed_ciphertext() {
    let master = MasterPassword::new("hi".to_owned());

    assert!(matches!(
        decrypt_password(&[], &master),
        Err(CoreError::MalformedCiphertext(0))
    ));
    assert!(matches!(
        decrypt_password(&[0u8; 17], &master),
        Err(CoreError::MalformedCiphertext(17))
    ));
}
