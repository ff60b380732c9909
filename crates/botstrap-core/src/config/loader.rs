//! Centralized environment variable loading.
//!
//! Keeps the fallback logic in one place so business code never repeats
//! `or_else` chains or touches `std::env::set_var` directly.

use std::env;
use std::sync::Once;

use crate::envfile;

/// Load `./.env` into the process environment once, never overwriting
/// variables that are already set. Missing file is not an error.
pub fn load_dotenv() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let path = env::current_dir()
            .map(|d| d.join(".env"))
            .unwrap_or_else(|_| std::path::PathBuf::from(".env"));
        let Ok(content) = std::fs::read_to_string(&path) else {
            return;
        };
        let mut loaded = 0usize;
        for (key, value) in envfile::parse(&content) {
            if env::var(&key).is_err() {
                set_env_var(&key, &value);
                loaded += 1;
            }
        }
        tracing::debug!("loaded {} variable(s) from {}", loaded, path.display());
    });
}

/// Read an environment variable, falling back to `default` when unset or empty.
pub fn env_or<F>(key: &str, default: F) -> String
where
    F: FnOnce() -> String,
{
    env::var(key)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(default)
}

/// Read an environment variable as `Option` (empty counts as unset).
pub fn env_optional(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|s| {
        let s = s.trim().to_string();
        if s.is_empty() {
            None
        } else {
            Some(s)
        }
    })
}

/// Parse a boolean environment variable: 0/false/no/off are false,
/// anything else set is true.
pub fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key).ok().as_deref() {
        Some(s) => !matches!(
            s.trim().to_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        ),
        None => default,
    }
}

/// Single wrapper around `env::set_var`.
///
/// SAFETY convention: callers must run before any threads are spawned;
/// botstrap only sets variables during single-threaded startup.
#[allow(unsafe_code, unused_unsafe)]
pub fn set_env_var(key: &str, value: &str) {
    unsafe { env::set_var(key, value) };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_default_when_unset() {
        assert_eq!(
            env_or("BOTSTRAP_TEST_UNSET_KEY_1", || "fallback".to_string()),
            "fallback"
        );
    }

    #[test]
    fn test_env_optional_empty_is_none() {
        set_env_var("BOTSTRAP_TEST_EMPTY_KEY_1", "");
        assert_eq!(env_optional("BOTSTRAP_TEST_EMPTY_KEY_1"), None);
    }

    #[test]
    fn test_env_bool_parses_falsy_values() {
        set_env_var("BOTSTRAP_TEST_BOOL_KEY_1", "off");
        assert!(!env_bool("BOTSTRAP_TEST_BOOL_KEY_1", true));
        set_env_var("BOTSTRAP_TEST_BOOL_KEY_2", "1");
        assert!(env_bool("BOTSTRAP_TEST_BOOL_KEY_2", false));
        assert!(env_bool("BOTSTRAP_TEST_BOOL_KEY_UNSET", true));
    }
}
