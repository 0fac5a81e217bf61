//! Error types for dataset ingestion.

use std::io;
use std::path::PathBuf;

use cvd_model::DashboardError;
use thiserror::Error;

/// Errors that can occur while loading the dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File exceeds the configured size limit.
    #[error("file {path} is {size} bytes, limit is {max_size}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// The dataset lives behind a network path that could not be reached.
    #[error("could not reach {path}: {reason}")]
    Connectivity { path: PathBuf, reason: String },

    // === CSV Parsing Errors ===
    /// File uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV parsed but holds no rows.
    #[error("dataset has no rows: {path}")]
    EmptyDataFrame { path: PathBuf },

    /// A header cell is blank.
    #[error("dataset has an empty column name: {path}")]
    EmptyColumnName { path: PathBuf },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl IngestError {
    /// Classifies an I/O failure on `path`, separating network trouble from
    /// local file problems.
    pub fn from_io(path: &std::path::Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            return Self::FileNotFound {
                path: path.to_path_buf(),
            };
        }
        if is_network_error(err.kind()) {
            return Self::Connectivity {
                path: path.to_path_buf(),
                reason: err.to_string(),
            };
        }
        Self::FileRead {
            path: path.to_path_buf(),
            source: err,
        }
    }
}

fn is_network_error(kind: io::ErrorKind) -> bool {
    matches!(
        kind,
        io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::NotConnected
            | io::ErrorKind::TimedOut
            | io::ErrorKind::HostUnreachable
            | io::ErrorKind::NetworkUnreachable
            | io::ErrorKind::NetworkDown
    )
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

impl From<IngestError> for DashboardError {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::Connectivity { reason, .. } => Self::Connectivity { reason },
            other => Self::Data {
                message: other.to_string(),
            },
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
