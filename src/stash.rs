// src/stash.rs
//! The named password store — a flat directory of sealed entries
//!
//! One file per entry, each holding the raw ciphertext of the entry's
//! value under the master password. The reserved `master_pw` file holds
//! the self-encrypted master password and is never a user entry.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::aliases::{MasterPassword, StoredPassword};
use crate::consts::MASTER_PW_FILENAME;
use crate::crypto::{decrypt_password, encrypt_password, Result};
use crate::error::CoreError;
use crate::master::{seal_master, verify_master};

/// An unlocked stash — the master password has been verified (or freshly
/// sealed) against the directory's `master_pw` file.
pub struct Stash {
    root: PathBuf,
    master: MasterPassword,
}

impl Stash {
    /// Create the stash directory and seal the master password into it.
    pub fn init<P: AsRef<Path>>(root: P, master: MasterPassword) -> Result<Self> {
        fs::create_dir_all(root.as_ref())?;
        let stash = Self {
            root: root.as_ref().to_path_buf(),
            master,
        };
        seal_master(stash.master_path(), &stash.master)?;
        Ok(stash)
    }

    /// Open an existing stash, verifying the master password first.
    pub fn open<P: AsRef<Path>>(root: P, master: MasterPassword) -> Result<Self> {
        let stash = Self {
            root: root.as_ref().to_path_buf(),
            master,
        };
        verify_master(stash.master_path(), &stash.master)?;
        Ok(stash)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn master_path(&self) -> PathBuf {
        self.root.join(MASTER_PW_FILENAME)
    }

    fn entry_path(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.root.join(name))
    }

    /// Entry names, sorted, excluding the reserved master file.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if name != MASTER_PW_FILENAME {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    /// Decrypt and return a stored entry.
    pub fn get(&self, name: &str) -> Result<StoredPassword> {
        let path = self.entry_path(name)?;
        let ciphertext = fs::read(&path).map_err(|e| missing_if_not_found(e, name))?;
        let value = decrypt_password(&ciphertext, &self.master)?;
        Ok(StoredPassword::new(value))
    }

    /// Add a new entry; refuses to overwrite an existing one.
    pub fn add(&self, name: &str, value: &str) -> Result<()> {
        let path = self.entry_path(name)?;
        if path.exists() {
            return Err(CoreError::EntryExists(name.to_owned()));
        }
        fs::write(&path, encrypt_password(value, &self.master))?;
        Ok(())
    }

    /// Overwrite an existing entry; refuses to create a new one.
    pub fn update(&self, name: &str, value: &str) -> Result<()> {
        let path = self.entry_path(name)?;
        if !path.exists() {
            return Err(CoreError::EntryMissing(name.to_owned()));
        }
        fs::write(&path, encrypt_password(value, &self.master))?;
        Ok(())
    }

    /// Delete an existing entry.
    pub fn remove(&self, name: &str) -> Result<()> {
        let path = self.entry_path(name)?;
        fs::remove_file(&path).map_err(|e| missing_if_not_found(e, name))?;
        Ok(())
    }

    /// All entries as raw ciphertext — no decryption, safe to hand out.
    pub fn export(&self) -> Result<BTreeMap<String, Vec<u8>>> {
        let mut entries = BTreeMap::new();
        for name in self.list()? {
            let blob = fs::read(self.root.join(&name))?;
            entries.insert(name, blob);
        }
        Ok(entries)
    }

    /// All entries decrypted. Handle with care.
    pub fn export_plain(&self) -> Result<BTreeMap<String, String>> {
        let mut entries = BTreeMap::new();
        for (name, blob) in self.export()? {
            let value = decrypt_password(&blob, &self.master)?;
            entries.insert(name, value);
        }
        Ok(entries)
    }
}

fn missing_if_not_found(err: std::io::Error, name: &str) -> CoreError {
    if err.kind() == ErrorKind::NotFound {
        CoreError::EntryMissing(name.to_owned())
    } else {
        CoreError::Io(err)
    }
}

/// Entry names map directly to filenames, so anything that could escape
/// the stash directory (or collide with the master file) is rejected.
fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(CoreError::InvalidName("name cannot be empty".to_owned()));
    }
    if name == MASTER_PW_FILENAME {
        return Err(CoreError::InvalidName(format!(
            "{name} is reserved for the master password"
        )));
    }
    if name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(CoreError::InvalidName(format!(
            "{name} is not a valid entry name"
        )));
    }
    Ok(())
}
