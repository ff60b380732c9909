//! Observability: tracing init and an optional JSONL audit log of setup steps.
//!
//! Uses `ObservabilityConfig` for BOTSTRAP_QUIET, BOTSTRAP_LOG_LEVEL,
//! BOTSTRAP_LOG_JSON and BOTSTRAP_AUDIT_LOG.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use serde_json::json;
use tracing_subscriber::{prelude::*, EnvFilter};

/// Initialize tracing. Call at process startup.
/// When BOTSTRAP_QUIET=1, only WARN and above are logged.
pub fn init_tracing() {
    let cfg = botstrap_core::config::ObservabilityConfig::from_env();
    let level = if cfg.quiet {
        "botstrap=warn".to_string()
    } else {
        cfg.log_level.clone()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    };
}

fn audit_path() -> Option<String> {
    let path = botstrap_core::config::ObservabilityConfig::from_env().audit_log?;
    if path.is_empty() {
        return None;
    }
    // Ensure parent dir exists
    if let Some(parent) = Path::new(&path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    Some(path)
}

fn append_jsonl(path: &str, record: &serde_json::Value) {
    if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(path) {
        if let Ok(line) = serde_json::to_string(record) {
            let _ = writeln!(f, "{}", line);
        }
    }
}

/// Audit: step_started (right before a pipeline step runs)
pub fn audit_step_started(step: &str, detail: &str) {
    if let Some(path) = audit_path() {
        let record = json!({
            "ts": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            "event": "step_started",
            "step": step,
            "detail": detail,
        });
        append_jsonl(&path, &record);
    }
}

/// Audit: step_completed (after a pipeline step returned)
pub fn audit_step_completed(step: &str, success: bool, duration_ms: u64) {
    if let Some(path) = audit_path() {
        let record = json!({
            "ts": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            "event": "step_completed",
            "step": step,
            "success": success,
            "duration_ms": duration_ms,
        });
        append_jsonl(&path, &record);
    }
}
