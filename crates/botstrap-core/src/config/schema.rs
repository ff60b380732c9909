//! Configuration structs grouped by concern, loaded from the environment.

use std::path::PathBuf;

use super::env_keys::{observability as obs_keys, paths as path_keys};
use super::loader::{env_bool, env_optional, env_or, load_dotenv};

/// Filesystem layout consumed and produced by the setup pipeline.
///
/// Defaults match the bot project layout: `venv/`, `requirements.txt`,
/// `.env` seeded from `.env.example`.
#[derive(Debug, Clone)]
pub struct PathsConfig {
    pub venv_dir: PathBuf,
    pub requirements: PathBuf,
    pub env_file: PathBuf,
    pub env_template: PathBuf,
    /// Explicit system interpreter; when unset the PATH probe decides.
    pub python: Option<PathBuf>,
}

impl PathsConfig {
    pub fn from_env() -> Self {
        load_dotenv();
        Self {
            venv_dir: PathBuf::from(env_or(path_keys::VENV_DIR, || "venv".to_string())),
            requirements: PathBuf::from(env_or(path_keys::REQUIREMENTS, || {
                "requirements.txt".to_string()
            })),
            env_file: PathBuf::from(env_or(path_keys::ENV_FILE, || ".env".to_string())),
            env_template: PathBuf::from(env_or(path_keys::ENV_TEMPLATE, || {
                ".env.example".to_string()
            })),
            python: env_optional(path_keys::PYTHON).map(PathBuf::from),
        }
    }

    /// CLI flags win over environment variables.
    pub fn with_cli_overrides(
        mut self,
        venv_dir: Option<String>,
        requirements: Option<String>,
        env_file: Option<String>,
        template: Option<String>,
        python: Option<String>,
    ) -> Self {
        if let Some(v) = venv_dir {
            self.venv_dir = PathBuf::from(v);
        }
        if let Some(v) = requirements {
            self.requirements = PathBuf::from(v);
        }
        if let Some(v) = env_file {
            self.env_file = PathBuf::from(v);
        }
        if let Some(v) = template {
            self.env_template = PathBuf::from(v);
        }
        if let Some(v) = python {
            self.python = Some(PathBuf::from(v));
        }
        self
    }
}

/// Logging and audit configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// When set, only WARN and above are logged.
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
    /// JSONL audit log of setup steps; disabled when unset.
    pub audit_log: Option<String>,
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        load_dotenv();
        Self {
            quiet: env_bool(obs_keys::QUIET, false),
            log_level: env_or(obs_keys::LOG_LEVEL, || "botstrap=info".to_string()),
            log_json: env_bool(obs_keys::LOG_JSON, false),
            audit_log: env_optional(obs_keys::AUDIT_LOG),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_defaults() {
        let paths = PathsConfig {
            venv_dir: PathBuf::from("venv"),
            requirements: PathBuf::from("requirements.txt"),
            env_file: PathBuf::from(".env"),
            env_template: PathBuf::from(".env.example"),
            python: None,
        };
        let overridden = paths.with_cli_overrides(
            Some("custom-venv".to_string()),
            None,
            None,
            None,
            Some("/usr/bin/python3.12".to_string()),
        );
        assert_eq!(overridden.venv_dir, PathBuf::from("custom-venv"));
        assert_eq!(overridden.requirements, PathBuf::from("requirements.txt"));
        assert_eq!(
            overridden.python,
            Some(PathBuf::from("/usr/bin/python3.12"))
        );
    }
}
