//! Environment variable key constants, grouped by concern.

pub mod paths {
    pub const VENV_DIR: &str = "BOTSTRAP_VENV_DIR";
    pub const REQUIREMENTS: &str = "BOTSTRAP_REQUIREMENTS";
    pub const ENV_FILE: &str = "BOTSTRAP_ENV_FILE";
    pub const ENV_TEMPLATE: &str = "BOTSTRAP_ENV_TEMPLATE";
    pub const PYTHON: &str = "BOTSTRAP_PYTHON";
}

pub mod observability {
    pub const QUIET: &str = "BOTSTRAP_QUIET";
    pub const LOG_LEVEL: &str = "BOTSTRAP_LOG_LEVEL";
    pub const LOG_JSON: &str = "BOTSTRAP_LOG_JSON";
    pub const AUDIT_LOG: &str = "BOTSTRAP_AUDIT_LOG";
}
