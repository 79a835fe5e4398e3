//! Reading source files.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use walkdir::WalkDir;

use crate::error::{ExtractError, Result};

/// Read a source file as text. Invalid UTF-8 is replaced with U+FFFD so
/// the valid lines of the file still parse.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(ExtractError::Missing(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            warn!("{}: invalid UTF-8 replaced", path.display());
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

/// [`read_source`], logging failures.
pub fn read_or_warn(path: &Path) -> Option<String> {
    read_source(path).map_err(|err| warn!("{err}")).ok()
}

/// `.asm` files directly inside `dir`, sorted by name.
pub fn asm_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ExtractError::Missing(dir.to_path_buf()));
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|err| ExtractError::Read {
            path: err.path().unwrap_or(dir).to_path_buf(),
            source: err.into(),
        })?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "asm") {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

/// [`asm_files`], logging failures.
pub fn asm_files_or_warn(dir: &Path) -> Vec<PathBuf> {
    asm_files(dir).map_err(|err| warn!("{err}")).unwrap_or_default()
}

/// File name without its extension, or empty.
pub fn file_stem(path: &Path) -> &str {
    path.file_stem().and_then(|s| s.to_str()).unwrap_or_default()
}

/// Path for diagnostics.
pub fn origin(path: &Path) -> String {
    path.display().to_string()
}
