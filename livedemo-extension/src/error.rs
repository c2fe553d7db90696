//! Error types for livedemo-extension.

use thiserror::Error;

use livedemo_core::HostError;
use livedemo_renderer::RenderError;

/// All errors that can arise while expanding live demo macros.
///
/// Any of these aborts the build; there is no per-demo recovery.
#[derive(Debug, Error)]
pub enum ExtensionError {
    /// An error from the rendering engine (wrapper load, parse, render).
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The host document rejected the rendered block or a macro line.
    #[error(transparent)]
    Host(#[from] HostError),

    /// Rendering a specific demo failed.
    #[error("live demo '{target}' failed")]
    Demo {
        target: String,
        #[source]
        source: Box<ExtensionError>,
    },
}
