//! Test helpers
//!
//! Shared setup for integration tests: logging, fixture paths and
//! throwaway translation directories.

#![allow(dead_code)]

use std::fs;
use std::sync::Once;

use tempfile::TempDir;
use unic_langid::{langid, LanguageIdentifier};

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Base path of the bundled fixtures, trailing separator included
pub fn fixtures_path() -> String {
    format!("{}/tests/fixtures/translations/", env!("CARGO_MANIFEST_DIR"))
}

pub fn english_and_lithuanian() -> Vec<LanguageIdentifier> {
    vec![langid!("en"), langid!("lt")]
}

/// Temporary translations directory
pub struct TranslationDir {
    pub dir: TempDir,
}

impl TranslationDir {
    pub fn new() -> Self {
        init_test_env();
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Write `<code>.json` with the given content
    pub fn with_file(self, code: &str, content: &str) -> Self {
        fs::write(self.dir.path().join(format!("{}.json", code)), content)
            .expect("Failed to write translation file");
        self
    }

    /// Base path for loaders, trailing separator included
    pub fn base_path(&self) -> String {
        format!("{}/", self.dir.path().display())
    }
}
