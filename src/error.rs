//! Error types for dunemate
//!
//! Uses `thiserror` for library errors. Every variant is terminal to the
//! command invocation that raised it; the binary boundary renders it and
//! exits nonzero.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dunemate operations
pub type DunemateResult<T> = Result<T, DunemateError>;

/// Main error type for dunemate operations
#[derive(Error, Debug)]
pub enum DunemateError {
    /// No file argument and no way to infer one
    #[error("no active file - pass a path to operate on")]
    NoActiveContext,

    /// File suffix is not a recognized implementation or interface kind
    #[error("{path} is not a recognized implementation or interface file")]
    UnsupportedKind { path: PathBuf },

    /// Counterpart file(s) probed but absent
    #[error("no counterpart for {path} (tried {tried})")]
    NoMatch { path: PathBuf, tried: String },

    /// Alias target directory escapes the workspace root
    #[error("directory '{path}' is outside the workspace root '{root}'")]
    OutsideWorkspace { path: PathBuf, root: PathBuf },

    /// Failed to read or write the workspace manifest
    #[error("failed to update manifest {path}: {source}")]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `dune promotion list` failed
    #[error("dune promotion list failed: {details}")]
    PromotionList { details: String },

    /// `dune promotion apply` failed
    #[error("dune promotion apply failed: {details}")]
    PromotionApply { details: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file
    #[error("invalid config {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// Operation was aborted by user in interactive mode
    #[error("aborted by user")]
    Aborted,
}
