//! Error types for livedemo-renderer.

use std::path::PathBuf;

use thiserror::Error;

use livedemo_core::CatalogError;

/// All errors that can arise from template parsing and rendering.
///
/// A missing demo file is not an error; these are build-fatal.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error (syntax error on parse, missing data on render).
    #[error("template engine error")]
    Tera(#[from] tera::Error),

    /// JSON serialization error (building the template data model).
    #[error("model serialization error")]
    Serialization(#[from] serde_json::Error),

    /// A demo resource exists but could not be read.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Filesystem error while loading the wrapper template.
    #[error("template io error at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}
