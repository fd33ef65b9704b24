//! Error types for the batch deduplicator
//!
//! Only failures that abort a file (or the whole run) get a variant here.
//! A candidate that fails to parse is not an error: the line simply
//! contributes no candidate and processing moves on.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning, reading or writing batch files.
#[derive(Error, Debug)]
pub enum BatchError {
    /// Fatal: the input directory is missing. Halts the run before any
    /// file is processed or written.
    #[error("Input directory does not exist: {path:?}")]
    DirectoryNotFound { path: PathBuf },

    /// Per-file: the input file vanished between listing and reading.
    #[error("File does not exist: {path:?}")]
    FileNotFound { path: PathBuf },

    /// Per-file: the input file could not be read (permissions, not UTF-8).
    #[error("Failed to read file: {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Per-file: the result file could not be written.
    #[error("Failed to write file: {path:?}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
