//! Configuration module for the token compiler
//!
//! Compile-time limits live in [`constants`]; user-facing preferences that
//! can come from the environment or a TOML file live in [`runtime`].

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{ConfigError, ExportPreferences, LoggingPreferences, RuntimeConfig};
