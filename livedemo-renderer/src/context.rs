//! Wrapper template context — the `liveDemo` object handed to the outer render.

use serde::Serialize;
use serde_json::{Map, Value};

use livedemo_core::Attributes;

use crate::content::ResolvedContent;
use crate::error::RenderError;
use crate::presentation::Tab;

/// Script load directive for the wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptDirective {
    /// False when an earlier demo in this build already emitted the script tag.
    pub include: bool,
    pub url: Option<String>,
}

/// Outer rendering payload.
///
/// Macro attributes are flattened into the same object first, so every
/// author-supplied key reaches the template; the typed fields below replace
/// any attribute with the same name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveDemoContext {
    #[serde(skip)]
    pub attributes: Attributes,
    #[serde(rename = "type")]
    pub demo_type: String,
    pub css: String,
    pub id: String,
    pub content: ResolvedContent,
    pub initial_tab: String,
    pub script: ScriptDirective,
    pub tabs: Vec<Tab>,
}

impl LiveDemoContext {
    /// `{ "liveDemo": { ...attributes, type, css, id, content, initialTab, script, tabs } }`
    pub fn to_value(&self) -> Result<Value, RenderError> {
        let mut live_demo: Map<String, Value> = self
            .attributes
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        if let Value::Object(fields) = serde_json::to_value(self)? {
            live_demo.extend(fields);
        }

        let mut root = Map::new();
        root.insert("liveDemo".to_string(), Value::Object(live_demo));
        Ok(Value::Object(root))
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_value(self.to_value()?).map_err(RenderError::from)
    }
}
