//! `botstrap clean` — remove the virtual environment directory.
//!
//! The venv is recreated by the next `botstrap up`; `.env` and
//! `requirements.txt` are never touched.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// `botstrap clean`
pub fn cmd_clean(venv_dir: &Path, dry_run: bool, force: bool) -> Result<()> {
    if !venv_dir.exists() {
        eprintln!("No virtual environment found at {}", venv_dir.display());
        return Ok(());
    }

    let size = dir_size(venv_dir);
    eprintln!(
        "🗂  Virtual environment at {} ({})",
        venv_dir.display(),
        format_size(size)
    );

    if dry_run {
        eprintln!();
        eprintln!("(Dry run — nothing removed. Remove --dry-run to delete.)");
        return Ok(());
    }

    if !force {
        eprint!("\nRemove the virtual environment? [y/N] ");
        let mut answer = String::new();
        std::io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    fs::remove_dir_all(venv_dir)
        .with_context(|| format!("Failed to remove {}", venv_dir.display()))?;

    eprintln!();
    eprintln!(
        "✓ Removed {}, freed {}",
        venv_dir.display(),
        format_size(size)
    );
    Ok(())
}

/// Compute total size of a directory recursively.
/// Symlinks are not followed: venv layouts link `lib64 -> lib`, which would
/// double-count everything under it.
fn dir_size(path: &Path) -> u64 {
    let mut total: u64 = 0;
    if let Ok(entries) = fs::read_dir(path) {
        for entry in entries.flatten() {
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            if file_type.is_symlink() {
                continue;
            }
            let p = entry.path();
            if file_type.is_dir() {
                total += dir_size(&p);
            } else if let Ok(meta) = p.metadata() {
                total += meta.len();
            }
        }
    }
    total
}

/// Format byte size to human-readable string.
fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}
