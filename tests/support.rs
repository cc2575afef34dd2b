// tests/support.rs
//! Test utilities — temporary stash directories with a known master password

use pw_stash::aliases::MasterPassword;
use pw_stash::stash::Stash;
use std::path::Path;
use tempfile::TempDir;

#[allow(dead_code)] // Fields are used across different test binaries
pub struct TestStash {
    pub stash: Stash,
    pub master: MasterPassword,
    // Keeps the directory alive for the duration of the test
    _dir: TempDir,
}

impl TestStash {
    pub fn new(master: &str) -> Self {
        let dir = TempDir::new().expect("create temp stash dir");
        let master = MasterPassword::new(master.to_owned());
        let stash = Stash::init(dir.path(), master.clone()).expect("init stash");
        Self {
            stash,
            master,
            _dir: dir,
        }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self._dir.path()
    }
}
