//! Unified configuration layer.
//!
//! All environment variable reads are centralized here; command code receives
//! structured config instead of calling `std::env::var` directly.
//!
//! - `loader`: env_or / env_optional / env_bool helpers, Once-guarded dotenv load
//! - `schema`: PathsConfig, ObservabilityConfig
//! - `env_keys`: key constants

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_optional, env_or, load_dotenv, set_env_var};
pub use schema::{ObservabilityConfig, PathsConfig};
