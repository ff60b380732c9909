//! `botstrap up` — the four-step setup pipeline.
//!
//! Flow:
//!   1. Ensure the virtual environment exists (create if missing)
//!   2. Upgrade pip, install requirements.txt into the venv
//!   3. Seed .env from .env.example if missing (never overwrites)
//!   4. Print the completion banner
//!
//! Strict fail-fast: each step returns a distinct error kind and the first
//! failure aborts before later steps run. The banner prints only after every
//! step succeeded. Re-running is idempotent — an existing venv is reused and
//! an existing .env is left byte-for-byte untouched.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use botstrap_core::config::PathsConfig;
use botstrap_core::{manifest, SetupError};

use crate::env::builder;
use crate::observability;

/// `botstrap up`
pub fn cmd_up(paths: &PathsConfig, skip_install: bool) -> Result<()> {
    eprintln!("🚀 Setting up the bot environment...");
    eprintln!();

    // Step 1: virtual environment
    let venv_python = audited("ensure_venv", &paths.venv_dir.display().to_string(), || {
        ensure_venv(paths)
    })?;

    // Step 2: dependencies
    eprintln!();
    if skip_install {
        eprintln!("⏭  Step 2/4: Skipping dependency installation (--skip-install)");
    } else {
        audited(
            "install_dependencies",
            &paths.requirements.display().to_string(),
            || install_dependencies(paths, &venv_python),
        )?;
    }

    // Step 3: config file
    eprintln!();
    audited("ensure_config", &paths.env_file.display().to_string(), || {
        let seeded = ensure_config(&paths.env_file, &paths.env_template)?;
        if seeded {
            eprintln!(
                "✅ Step 3/4: Created {} from {}",
                paths.env_file.display(),
                paths.env_template.display()
            );
            eprintln!(
                "   ⚠ Edit {} and fill in your bot credentials before starting the bot!",
                paths.env_file.display()
            );
        } else {
            eprintln!(
                "✅ Step 3/4: {} already exists — left untouched",
                paths.env_file.display()
            );
        }
        Ok(())
    })?;

    // Step 4: banner — only reached when every previous step succeeded
    eprintln!();
    print_summary(paths);

    Ok(())
}

/// Run a step with audit-log bracketing. The step result passes through.
fn audited<T>(step: &str, detail: &str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let started = Instant::now();
    observability::audit_step_started(step, detail);
    let result = f();
    observability::audit_step_completed(
        step,
        result.is_ok(),
        started.elapsed().as_millis() as u64,
    );
    result
}

/// Step 1: reuse the venv when present, otherwise create it.
/// Returns the venv's interpreter path for the following steps.
fn ensure_venv(paths: &PathsConfig) -> Result<PathBuf> {
    if let Some(python) = builder::venv_python(&paths.venv_dir) {
        eprintln!(
            "✅ Step 1/4: Virtual environment already exists at {}",
            paths.venv_dir.display()
        );
        return Ok(python);
    }

    let system = builder::find_system_python(paths.python.as_deref())?;
    eprintln!(
        "📦 Step 1/4: Creating virtual environment at {} ...",
        paths.venv_dir.display()
    );
    tracing::info!(python = %system.display(), venv = %paths.venv_dir.display(), "creating venv");
    builder::create_venv(&system, &paths.venv_dir)?;

    let python = builder::venv_python(&paths.venv_dir).ok_or_else(|| SetupError::VenvCreate {
        stderr: "venv reported success but no interpreter found inside".to_string(),
    })?;
    eprintln!("✅ Step 1/4: Virtual environment created");
    Ok(python)
}

/// Step 2: upgrade pip, then install everything the manifest lists.
/// A missing manifest is reported before pip ever runs.
fn install_dependencies(paths: &PathsConfig, venv_python: &Path) -> Result<()> {
    let specs = manifest::read_requirements(&paths.requirements)?;

    eprintln!("📦 Step 2/4: Upgrading pip ...");
    builder::upgrade_pip(venv_python)?;

    if specs.is_empty() {
        eprintln!(
            "✅ Step 2/4: {} lists no packages — nothing to install",
            paths.requirements.display()
        );
        return Ok(());
    }

    eprintln!(
        "   Installing {} package(s) from {} ...",
        specs.len(),
        paths.requirements.display()
    );
    builder::install_packages(venv_python, &specs)?;
    eprintln!("✅ Step 2/4: Dependencies installed");
    Ok(())
}

/// Step 3: seed the config file from the template when absent.
/// Returns true when the file was seeded. An existing config is never
/// overwritten; a missing template is a distinct fail-fast error.
pub(crate) fn ensure_config(env_file: &Path, template: &Path) -> Result<bool, SetupError> {
    if env_file.exists() {
        return Ok(false);
    }
    if !template.exists() {
        return Err(SetupError::TemplateMissing(template.to_path_buf()));
    }
    fs::copy(template, env_file).map_err(|e| {
        SetupError::io(
            format!("Copy {} to {}", template.display(), env_file.display()),
            e,
        )
    })?;
    Ok(true)
}

/// Step 4: tell the operator how to use the prepared environment.
fn print_summary(paths: &PathsConfig) {
    eprintln!("{}", "═".repeat(50));
    eprintln!("🎉 Setup complete!");
    eprintln!();
    eprintln!("Next steps:");
    eprintln!(
        "   1. Activate the environment:  source {}/bin/activate",
        paths.venv_dir.display()
    );
    eprintln!("   2. Start the bot:             python bot.py");
    eprintln!();
    eprintln!("   Verify configuration first:  botstrap check");
    eprintln!("{}", "═".repeat(50));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_ensure_config_seeds_from_template() {
        let tmp = tempfile::tempdir().unwrap();
        let template = tmp.path().join(".env.example");
        let env_file = tmp.path().join(".env");
        fs::write(&template, "BOT_TOKEN=your_bot_token_here\nCHANNEL_ID=0\n").unwrap();

        let seeded = ensure_config(&env_file, &template).unwrap();
        assert!(seeded);
        // Verbatim copy
        assert_eq!(
            fs::read(&env_file).unwrap(),
            fs::read(&template).unwrap()
        );
    }

    #[test]
    fn test_ensure_config_never_overwrites_existing() {
        let tmp = tempfile::tempdir().unwrap();
        let template = tmp.path().join(".env.example");
        let env_file = tmp.path().join(".env");
        fs::write(&template, "BOT_TOKEN=placeholder\n").unwrap();
        fs::write(&env_file, "BOT_TOKEN=real-user-token\n").unwrap();

        let seeded = ensure_config(&env_file, &template).unwrap();
        assert!(!seeded);
        assert_eq!(
            fs::read_to_string(&env_file).unwrap(),
            "BOT_TOKEN=real-user-token\n"
        );
    }

    #[test]
    fn test_ensure_config_idempotent_across_runs() {
        let tmp = tempfile::tempdir().unwrap();
        let template = tmp.path().join(".env.example");
        let env_file = tmp.path().join(".env");
        fs::write(&template, "A=1\n").unwrap();

        assert!(ensure_config(&env_file, &template).unwrap());
        // Second run: file exists now, nothing happens
        assert!(!ensure_config(&env_file, &template).unwrap());
        assert_eq!(fs::read_to_string(&env_file).unwrap(), "A=1\n");
    }

    /// A venv directory that looks ready (bin/python exists) so `cmd_up`
    /// never probes the system interpreter.
    fn stub_venv(dir: &std::path::Path) -> PathBuf {
        let venv = dir.join("venv");
        fs::create_dir_all(venv.join("bin")).unwrap();
        fs::write(venv.join("bin").join("python"), "").unwrap();
        venv
    }

    #[test]
    fn test_up_halts_on_missing_manifest_before_config_seed() {
        let tmp = tempfile::tempdir().unwrap();
        let template = tmp.path().join(".env.example");
        fs::write(&template, "BOT_TOKEN=placeholder\n").unwrap();
        let env_file = tmp.path().join(".env");

        let paths = PathsConfig {
            venv_dir: stub_venv(tmp.path()),
            requirements: tmp.path().join("requirements.txt"),
            env_file: env_file.clone(),
            env_template: template,
            python: None,
        };

        let err = cmd_up(&paths, false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SetupError>(),
            Some(SetupError::ManifestMissing(_))
        ));
        // The pipeline stopped at step 2: the config step never ran
        assert!(!env_file.exists());
    }

    #[test]
    fn test_up_skip_install_runs_remaining_steps() {
        let tmp = tempfile::tempdir().unwrap();
        let template = tmp.path().join(".env.example");
        fs::write(&template, "BOT_TOKEN=placeholder\nCHANNEL_ID=0\n").unwrap();
        let env_file = tmp.path().join(".env");

        let paths = PathsConfig {
            venv_dir: stub_venv(tmp.path()),
            requirements: tmp.path().join("requirements.txt"),
            env_file: env_file.clone(),
            env_template: template.clone(),
            python: None,
        };

        // Missing manifest is irrelevant when installation is skipped;
        // the pipeline reaches the config step and seeds .env
        cmd_up(&paths, true).unwrap();
        assert_eq!(fs::read(&env_file).unwrap(), fs::read(&template).unwrap());
    }

    #[test]
    fn test_ensure_config_missing_template_fails_fast() {
        let tmp = tempfile::tempdir().unwrap();
        let template = tmp.path().join(".env.example");
        let env_file = tmp.path().join(".env");

        let err = ensure_config(&env_file, &template).unwrap_err();
        assert!(matches!(err, SetupError::TemplateMissing(_)));
        assert!(!env_file.exists());
    }
}
