//! Requirements manifest — the externally-authored dependency list.
//!
//! Read-only input. A missing manifest is reported as a distinct error before
//! pip is ever invoked, so the operator sees which file is absent instead of
//! a pip usage dump.

use std::fs;
use std::path::Path;

use crate::error::SetupError;

/// Read package specifiers from a `requirements.txt`-style manifest.
/// Blank lines and `#` comments are skipped; an empty result is valid.
pub fn read_requirements(path: &Path) -> Result<Vec<String>, SetupError> {
    if !path.exists() {
        return Err(SetupError::ManifestMissing(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)
        .map_err(|e| SetupError::io(format!("Read {}", path.display()), e))?;
    Ok(parse_specifiers(&content))
}

/// Extract specifier lines from manifest content.
pub fn parse_specifiers(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(String::from)
        .collect()
}
