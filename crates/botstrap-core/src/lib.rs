//! Botstrap core: configuration layer, `.env` parsing, requirements manifest,
//! and the setup error taxonomy shared by the CLI.

pub mod config;
pub mod envfile;
pub mod error;
pub mod manifest;

pub use error::SetupError;
