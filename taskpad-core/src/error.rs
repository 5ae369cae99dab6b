//! src/error.rs
//! ============================================================================
//! # AppError: Unified Error Type for the Task List TUI
//!
//! Library modules return `Result<T, AppError>`; the binary boundary wraps
//! these in `anyhow` with context. The one user-level failure (empty task
//! input) is not an error at all: it is handled as a blocking alert in the
//! UI and never reaches this type.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Unified error type for initialization and configuration failures.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// TOML config serialization error.
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config file I/O error with path.
    #[error("Failed to access config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Platform config directory could not be determined.
    #[error("Could not determine config directory")]
    ConfigDir,
}
