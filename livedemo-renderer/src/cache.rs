//! Template cache for demo content files.
//!
//! Lives for one extension registration. Every distinct (context, path) pair
//! is resolved and parsed at most once; a missing file is cached too, so a
//! demo that lacks `example.js` never hits the catalog again for it.

use std::collections::HashMap;

use serde::Serialize;

use livedemo_core::{resolve_demo_resource, ContentCatalog, DemoContext};

use crate::engine::{CompiledTemplate, TemplateEngine};
use crate::error::RenderError;

/// `<component>/<version>/modules/<module>/examples/<relative_path>`
pub fn cache_key(context: &DemoContext, relative_path: &str) -> String {
    format!("{context}/examples/{relative_path}")
}

/// Memoised demo templates plus the engine that parsed them.
#[derive(Default)]
pub struct TemplateCache {
    engine: TemplateEngine,
    entries: HashMap<String, Option<CompiledTemplate>>,
    hits: usize,
    misses: usize,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiled template for `live-demos/<relative_path>`, or `None` if the
    /// catalog has no such file. Read failures are not cached.
    pub fn get_template(
        &mut self,
        catalog: &dyn ContentCatalog,
        context: &DemoContext,
        relative_path: &str,
    ) -> Result<Option<CompiledTemplate>, RenderError> {
        let key = cache_key(context, relative_path);
        if let Some(entry) = self.entries.get(&key) {
            self.hits += 1;
            tracing::debug!(%key, present = entry.is_some(), "template cache hit");
            return Ok(entry.clone());
        }

        self.misses += 1;
        let template = match resolve_demo_resource(catalog, context, relative_path)? {
            Some(source) => Some(self.engine.parse(&source, &key)?),
            None => None,
        };
        tracing::debug!(%key, present = template.is_some(), "template cache miss");
        self.entries.insert(key, template.clone());
        Ok(template)
    }

    /// Render a template held by this cache.
    pub fn render<T: Serialize + ?Sized>(
        &self,
        template: &CompiledTemplate,
        model: &T,
    ) -> Result<String, RenderError> {
        self.engine.render(template, model)
    }

    /// The underlying engine, for templates that bypass the cache (the wrapper).
    pub fn engine_mut(&mut self) -> &mut TemplateEngine {
        &mut self.engine
    }

    pub fn engine(&self) -> &TemplateEngine {
        &self.engine
    }

    /// Number of cached keys, absent ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(hits, misses)`
    pub fn stats(&self) -> (usize, usize) {
        (self.hits, self.misses)
    }
}
