//! Error types for the dataset normalization pipeline.
//!
//! Errors are organized by stage so that every failure names the file or
//! directory it happened on. Nothing here is recovered from: the first error
//! aborts the dataset being processed.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for dataprep operations.
#[derive(Error, Debug)]
pub enum PrepError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pipeline processing errors
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Pipeline processing errors, organized by stage.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Input path is missing or is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Directory listing failed
    #[error("Cannot list directory {path}: {source}")]
    ListDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output directory could not be created
    #[error("Cannot create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Entry has no usable file stem
    #[error("Cannot derive an output name from {0}")]
    InvalidFileName(PathBuf),

    /// Input file could not be read
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image decoding failed
    #[error("Decode error for {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// JPEG encoding failed
    #[error("Encode error for {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// Output file could not be written or moved into place
    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Blocking worker panicked or was cancelled
    #[error("Worker failed for {path}: {message}")]
    Worker { path: PathBuf, message: String },
}

impl PipelineError {
    /// Path of the file or directory the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            PipelineError::NotADirectory(path) | PipelineError::InvalidFileName(path) => path,
            PipelineError::ListDir { path, .. }
            | PipelineError::CreateDir { path, .. }
            | PipelineError::Read { path, .. }
            | PipelineError::Decode { path, .. }
            | PipelineError::Encode { path, .. }
            | PipelineError::Write { path, .. }
            | PipelineError::Worker { path, .. } => path,
        }
    }
}

/// Convenience type alias for dataprep results.
pub type Result<T> = std::result::Result<T, PrepError>;

/// Convenience type alias for pipeline-specific results.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
