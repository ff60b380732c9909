//! `botstrap check` — verify the prepared state before starting the bot.
//!
//! Checks: system python discoverable, venv present, config file present and
//! parseable, and the keys the bot reads at startup are well-formed. Real
//! environment variables override file values, matching the bot's own reads.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use botstrap_core::config::PathsConfig;
use botstrap_core::envfile::{self, KeyStatus};

use crate::env::builder;

/// Capture the bot keys as they exist in the real environment.
/// Must run before anything loads `./.env` into the process env — afterwards
/// file values are indistinguishable from operator-set variables.
pub fn real_env_snapshot() -> HashMap<String, String> {
    envfile::BOT_KEYS
        .iter()
        .filter_map(|key| {
            std::env::var(key)
                .ok()
                .filter(|v| !v.is_empty())
                .map(|v| ((*key).to_string(), v))
        })
        .collect()
}

/// `botstrap check`
pub fn cmd_check(paths: &PathsConfig, real_env: &HashMap<String, String>) -> Result<()> {
    eprintln!("🔎 Checking the bot environment...");
    eprintln!();

    let mut failures = 0usize;

    match builder::find_system_python(paths.python.as_deref()) {
        Ok(python) => eprintln!("   ✓ system python: {}", python.display()),
        Err(e) => {
            eprintln!("   ✗ system python: {}", e);
            failures += 1;
        }
    }

    if builder::venv_ready(&paths.venv_dir) {
        eprintln!("   ✓ virtual environment: {}", paths.venv_dir.display());
    } else {
        eprintln!(
            "   ✗ virtual environment missing at {} — run `botstrap up`",
            paths.venv_dir.display()
        );
        failures += 1;
    }

    if paths.env_file.exists() {
        eprintln!("   ✓ config file: {}", paths.env_file.display());
        failures += check_config_keys(&paths.env_file, real_env)?;
    } else {
        eprintln!(
            "   ✗ config file missing at {} — run `botstrap up`",
            paths.env_file.display()
        );
        failures += 1;
    }

    eprintln!();
    if failures > 0 {
        anyhow::bail!("{} check(s) failed", failures);
    }
    eprintln!("✅ All checks passed — the bot is ready to start");
    Ok(())
}

/// Validate the bot's configuration keys. Returns the failure count.
/// `real_env` is the pre-dotenv snapshot, so values injected from the cwd's
/// `.env` never masquerade as operator-set variables when `--env-file`
/// points elsewhere.
fn check_config_keys(env_file: &Path, real_env: &HashMap<String, String>) -> Result<usize> {
    let content = fs::read_to_string(env_file)
        .with_context(|| format!("Failed to read {}", env_file.display()))?;

    let mut vars: HashMap<String, String> = envfile::parse(&content).into_iter().collect();
    // Real environment wins over file values
    for (key, value) in real_env {
        vars.insert(key.clone(), value.clone());
    }

    let mut failures = 0usize;
    for report in envfile::check_bot_keys(&vars) {
        match &report.status {
            KeyStatus::Ok(detail) => eprintln!("   ✓ {}: {}", report.key, detail),
            KeyStatus::Defaulted(default) => {
                eprintln!("   ✓ {}: not set ({})", report.key, default)
            }
            KeyStatus::Missing => {
                eprintln!("   ✗ {}: required but not set", report.key);
                failures += 1;
            }
            KeyStatus::Invalid(reason) => {
                eprintln!("   ✗ {}: {}", report.key, reason);
                failures += 1;
            }
        }
    }
    Ok(failures)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_check_config_keys_reads_the_given_file() {
        let tmp = tempfile::tempdir().unwrap();
        let env_file = tmp.path().join("bot.env");
        fs::write(&env_file, "BOT_TOKEN=123:abc\nCHANNEL_ID=-100123\n").unwrap();

        let failures = check_config_keys(&env_file, &HashMap::new()).unwrap();
        assert_eq!(failures, 0);
    }

    #[test]
    fn test_check_config_keys_real_env_overrides_file() {
        let tmp = tempfile::tempdir().unwrap();
        let env_file = tmp.path().join("bot.env");
        fs::write(&env_file, "BOT_TOKEN=123:abc\nCHANNEL_ID=not-a-number\n").unwrap();

        // File value alone is malformed
        let failures = check_config_keys(&env_file, &HashMap::new()).unwrap();
        assert_eq!(failures, 1);

        // A real environment value fixes it without touching the file
        let real_env: HashMap<String, String> =
            [("CHANNEL_ID".to_string(), "-100123".to_string())]
                .into_iter()
                .collect();
        let failures = check_config_keys(&env_file, &real_env).unwrap();
        assert_eq!(failures, 0);
    }

    #[test]
    fn test_check_config_keys_only_snapshot_counts_as_env() {
        let tmp = tempfile::tempdir().unwrap();
        let env_file = tmp.path().join("bot.env");
        fs::write(&env_file, "BOT_TOKEN=123:abc\n").unwrap();

        // CHANNEL_ID absent from both the file and the snapshot is missing,
        // whatever a previous dotenv load put into the process env
        let failures = check_config_keys(&env_file, &HashMap::new()).unwrap();
        assert_eq!(failures, 1);
    }
}
