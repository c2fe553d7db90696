//! Error types for livedemo-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from catalog lookups and enumeration.
///
/// A missing file is not an error; lookups return `Ok(None)` for it.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Underlying I/O failure (permission denied, a directory where a file
    /// was expected, etc.).
    #[error("catalog I/O error at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from loading `livedemo.yaml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure (permission denied, etc.).
    #[error("I/O error reading {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error, with file path and serde_yaml line context.
    #[error("failed to parse config at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The config file did not exist.
    #[error("config not found at {path}")]
    NotFound { path: PathBuf },
}

/// Errors raised by a host document while accepting rendered content.
#[derive(Debug, Error)]
pub enum HostError {
    /// A block macro line could not be parsed.
    #[error("malformed block macro on line {line}: {message}")]
    MalformedMacro { line: usize, message: String },

    /// The host refused the rendered content.
    #[error("host rejected content: {0}")]
    Rejected(String),
}

pub(crate) fn catalog_io_err(path: impl Into<PathBuf>, source: std::io::Error) -> CatalogError {
    CatalogError::Io {
        path: path.into(),
        source,
    }
}
