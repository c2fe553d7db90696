//! `livedemo.yaml` build configuration.
//!
//! ```yaml
//! catalog: docs            # content tree root, relative to this file
//! wrapper: live-demo.tera  # optional wrapper template override
//! attributes:              # default document attributes
//!   site-url: https://www.tiny.cloud/docs
//!   tinymce_live_demo_url: https://cdn.tiny.cloud/1/no-api-key/tinymce/6/tinymce.min.js
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::Attributes;

/// Default config file name looked up by the CLI.
pub const CONFIG_FILE_NAME: &str = "livedemo.yaml";

/// Build configuration for one documentation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Root of the content catalog tree.
    #[serde(default)]
    pub catalog: PathBuf,
    /// Wrapper template replacing the bundled one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrapper: Option<PathBuf>,
    /// Document attributes applied to every page.
    #[serde(default)]
    pub attributes: Attributes,
}

/// Load a config file, resolving relative paths against its directory.
///
/// Returns `ConfigError::NotFound` if absent, `ConfigError::Parse` (with path
/// and line context) if malformed.
pub fn load_config_at(path: &Path) -> Result<BuildConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound { path: path.to_path_buf() });
    }
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut config: BuildConfig = serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    config.catalog = base.join(&config.catalog);
    if let Some(wrapper) = config.wrapper.take() {
        config.wrapper = Some(base.join(wrapper));
    }
    tracing::debug!(path = %path.display(), "loaded build config");
    Ok(config)
}
