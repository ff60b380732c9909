//! Virtual environment mechanics: creation and explicit path resolution.
//!
//! There is no "activation" — callers receive the venv's interpreter path and
//! every pip invocation is routed through it explicitly.

pub mod builder;
