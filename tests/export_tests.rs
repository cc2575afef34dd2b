// tests/export_tests.rs
mod support;
use support::TestStash;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use pw_stash::export::{export_plain_to_json, export_to_json};
use serde_json::Value;

fn enable_insecure_export() {
    // Must be set before the first config::load() in this process
    std::env::set_var("PWS_ALLOW_INSECURE_EXPORT", "1");
}

#[test]
fn test_encrypted_export_writes_fingerprinted_entries() {
    enable_insecure_export();
    let t = TestStash::new("hi");
    t.stash.add("site", "hunter2").unwrap();
    t.stash.add("db", "s3cret").unwrap();

    let out = t.path().join("export.json");
    export_to_json(&t.stash, out.to_str().unwrap()).unwrap();

    let export: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(export["export_format"], "pw-stash-v1");
    assert_eq!(export["total_entries"], 2);

    let entries = export["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    for entry in entries {
        let blob = URL_SAFE_NO_PAD
            .decode(entry["ciphertext_base64url"].as_str().unwrap())
            .unwrap();
        assert_eq!(blob.len() % 16, 0);
        assert_eq!(entry["ciphertext_len"], blob.len() as u64);
        assert_eq!(
            entry["ciphertext_blake3"].as_str().unwrap(),
            blake3::hash(&blob).to_hex().to_string()
        );
    }
}

#[test]
fn test_plaintext_export_decrypts_every_entry() {
    enable_insecure_export();
    let t = TestStash::new("hi");
    t.stash.add("site", "hunter2").unwrap();

    let out = t.path().join("plain.json");
    export_plain_to_json(&t.stash, out.to_str().unwrap()).unwrap();

    let export: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(export["export_format"], "pw-stash-plain-v1");
    assert_eq!(export["entries"]["site"], "hunter2");
    assert!(export["warning"].as_str().unwrap().contains("PLAINTEXT"));
}
