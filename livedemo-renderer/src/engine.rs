//! Tera engine wrapper — parse once, render many.
//!
//! Templates are registered in a single [`Tera`] instance under their cache
//! key; a [`CompiledTemplate`] is the handle naming one of them.
//! Autoescaping is off: demo fragments are raw HTML/JS and the wrapper embeds
//! them verbatim.

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;
use tera::{Tera, Value};

use crate::error::{io_err, RenderError};

// ---------------------------------------------------------------------------
// Bundled wrapper template
// ---------------------------------------------------------------------------

/// Name the bundled wrapper is registered under.
pub const BUNDLED_WRAPPER_NAME: &str = "live-demo.adoc.tera";

/// The default outer wrapper template, baked in at compile time.
pub const BUNDLED_WRAPPER: &str = include_str!("templates/live-demo.adoc.tera");

/// On-disk copy of the bundled wrapper inside this crate.
pub fn bundled_wrapper_path() -> &'static Path {
    Path::new(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/src/templates/live-demo.adoc.tera"
    ))
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// `uri_escape` — percent-encode a value for use inside a URI component.
fn uri_escape(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let raw = match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    Ok(Value::String(urlencoding::encode(&raw).into_owned()))
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Handle to a template parsed by a [`TemplateEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompiledTemplate {
    key: String,
}

impl CompiledTemplate {
    /// Key the template was parsed under (used in diagnostics).
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Tera-backed parse/render primitives.
pub struct TemplateEngine {
    tera: Tera,
    parses: usize,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine {
    pub fn new() -> Self {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.register_filter("uri_escape", uri_escape);
        TemplateEngine { tera, parses: 0 }
    }

    /// Parse `source` and register it under `key`.
    pub fn parse(&mut self, source: &str, key: &str) -> Result<CompiledTemplate, RenderError> {
        self.tera.add_raw_template(key, source)?;
        self.parses += 1;
        Ok(CompiledTemplate { key: key.to_string() })
    }

    /// Read and parse a template file, keyed by its path.
    pub fn parse_file(&mut self, path: &Path) -> Result<CompiledTemplate, RenderError> {
        let source = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
        let key = path.to_string_lossy().replace('\\', "/");
        self.parse(&source, &key)
    }

    /// Render `template` against any serializable map-shaped model.
    pub fn render<T: Serialize + ?Sized>(
        &self,
        template: &CompiledTemplate,
        model: &T,
    ) -> Result<String, RenderError> {
        let ctx = tera::Context::from_serialize(model)?;
        Ok(self.tera.render(&template.key, &ctx)?)
    }

    /// Number of successful parses performed by this engine.
    pub fn parse_count(&self) -> usize {
        self.parses
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
