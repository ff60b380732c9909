//! Build the project virtual environment and resolve its interpreter path.
//!
//! Every pip call goes through `{venv}/bin/python -m pip` (or `Scripts\` on
//! Windows) so no step depends on process-global PATH mutation.

use std::path::{Path, PathBuf};
use std::process::Command;

use botstrap_core::SetupError;

/// Locate a usable system Python, honoring an explicit override.
pub fn find_system_python(override_bin: Option<&Path>) -> Result<PathBuf, SetupError> {
    if let Some(bin) = override_bin {
        if probe_python(bin) {
            return Ok(bin.to_path_buf());
        }
        return Err(SetupError::PythonNotFound);
    }
    for name in ["python3", "python"] {
        let candidate = PathBuf::from(name);
        if probe_python(&candidate) {
            return Ok(candidate);
        }
    }
    Err(SetupError::PythonNotFound)
}

fn probe_python(bin: &Path) -> bool {
    Command::new(bin)
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// The venv's own interpreter, if the venv exists.
pub fn venv_python(venv_dir: &Path) -> Option<PathBuf> {
    let unix = venv_dir.join("bin").join("python");
    if unix.exists() {
        return Some(unix);
    }
    let windows = venv_dir.join("Scripts").join("python.exe");
    if windows.exists() {
        return Some(windows);
    }
    None
}

/// Whether the venv already exists and is usable.
pub fn venv_ready(venv_dir: &Path) -> bool {
    venv_python(venv_dir).is_some()
}

/// Create the venv with `python -m venv`. Callers check `venv_ready` first;
/// an existing venv is never re-created.
pub fn create_venv(system_python: &Path, venv_dir: &Path) -> Result<(), SetupError> {
    let out = Command::new(system_python)
        .arg("-m")
        .arg("venv")
        .arg(venv_dir)
        .output()
        .map_err(|e| SetupError::io(format!("Spawn {}", system_python.display()), e))?;
    if !out.status.success() {
        return Err(SetupError::VenvCreate {
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        });
    }
    Ok(())
}

/// Upgrade pip inside the venv to its latest version.
pub fn upgrade_pip(venv_python: &Path) -> Result<(), SetupError> {
    let out = Command::new(venv_python)
        .args(["-m", "pip", "install", "--upgrade", "pip"])
        .output()
        .map_err(|e| SetupError::io(format!("Spawn {}", venv_python.display()), e))?;
    if !out.status.success() {
        return Err(SetupError::PipUpgrade {
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        });
    }
    Ok(())
}

/// Install the given package specifiers into the venv. No-op when empty.
/// Resolution conflicts and network failures surface pip's stderr verbatim.
pub fn install_packages(venv_python: &Path, packages: &[String]) -> Result<(), SetupError> {
    if packages.is_empty() {
        return Ok(());
    }
    let out = Command::new(venv_python)
        .args(["-m", "pip", "install"])
        .args(packages)
        .output()
        .map_err(|e| SetupError::io(format!("Spawn {}", venv_python.display()), e))?;
    if !out.status.success() {
        return Err(SetupError::PipInstall {
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_venv_ready_false_for_missing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(!venv_ready(&tmp.path().join("venv")));
    }

    #[test]
    fn test_venv_python_finds_unix_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let venv = tmp.path().join("venv");
        fs::create_dir_all(venv.join("bin")).unwrap();
        fs::write(venv.join("bin").join("python"), "").unwrap();
        assert_eq!(venv_python(&venv), Some(venv.join("bin").join("python")));
        assert!(venv_ready(&venv));
    }

    #[test]
    fn test_venv_python_finds_windows_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let venv = tmp.path().join("venv");
        fs::create_dir_all(venv.join("Scripts")).unwrap();
        fs::write(venv.join("Scripts").join("python.exe"), "").unwrap();
        assert!(venv_ready(&venv));
    }

    #[test]
    fn test_find_system_python_bad_override_is_distinct_error() {
        let err = find_system_python(Some(Path::new("/nonexistent/python-binary"))).unwrap_err();
        assert!(matches!(err, SetupError::PythonNotFound));
    }

    #[test]
    fn test_install_packages_empty_is_noop() {
        // Never spawns pip, so a bogus interpreter path is fine.
        let python = Path::new("/nonexistent/python");
        assert!(install_packages(python, &[]).is_ok());
    }
}
