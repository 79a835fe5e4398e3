//! Shared helpers for the integration tests.
//!
//! The fixture tree under `tests/fixtures/data/` follows the default
//! [`SourceLayout`], so `fixture_root()` can be handed to the extractors
//! unchanged.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use poke_extract::{extract_all, Domain, Extraction, Layout, Style};
use serde_json::Value;

pub fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn cases_dir() -> PathBuf {
    fixture_root().join("cases")
}

/// Run every domain over the fixture tree into `out_dir`.
pub fn extract_fixtures(out_dir: &Path, style: Style) -> (Extraction, Vec<PathBuf>) {
    extract_all(&fixture_root(), out_dir, &Layout::default(), &Domain::ALL, style)
        .expect("fixture extraction should write its outputs")
}

pub fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("Failed to read {}: {err}", path.display()));
    serde_json::from_str(&text)
        .unwrap_or_else(|err| panic!("Failed to parse {}: {err}", path.display()))
}
