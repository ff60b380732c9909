//! Setup error taxonomy — one variant per pipeline failure kind.
//!
//! The `up` pipeline halts on the first error; each variant names which step
//! failed so the operator never has to guess from a generic tool dump.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the setup pipeline.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("python3 or python not found in PATH — install Python 3 first")]
    PythonNotFound,

    #[error("virtual environment creation failed: {stderr}")]
    VenvCreate { stderr: String },

    #[error("pip upgrade failed: {stderr}")]
    PipUpgrade { stderr: String },

    #[error("pip install failed: {stderr}")]
    PipInstall { stderr: String },

    #[error("requirements manifest not found: {}", .0.display())]
    ManifestMissing(PathBuf),

    #[error("config template not found: {} — cannot seed the config file", .0.display())]
    TemplateMissing(PathBuf),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl SetupError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
