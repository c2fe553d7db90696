//! The `liveDemo` block macro.
//!
//! One [`LiveDemoExtension`] corresponds to one registration with a host
//! document engine. It owns the template cache and the script tracker, so
//! both live exactly as long as the build that registered it.
//!
//! Per occurrence:
//!
//! 1. Read document attributes from the parent.
//! 2. Pick the demo type (`type`, default `tinymce`) and initial tab (`tab`, default `run`).
//! 3. Assemble content for the page's own context.
//! 4. Compose title, tabs, script URL and companion CSS.
//! 5. Claim the script URL with the tracker.
//! 6. Render the wrapper template.
//! 7. Parse the result into a new open block under the parent.

use std::path::Path;

use livedemo_core::{Attributes, BlockParent, ContentCatalog, DemoContext};
use livedemo_renderer::presentation::RUN_TAB;
use livedemo_renderer::{
    assemble, compose, CompiledTemplate, DemoType, LiveDemoContext, ScriptDirective,
    TemplateCache, BUNDLED_WRAPPER, BUNDLED_WRAPPER_NAME,
};

use crate::error::ExtensionError;
use crate::tracker::ScriptTracker;

/// Type string used when the macro has no `type` attribute.
pub const DEFAULT_DEMO_TYPE: &str = "tinymce";

/// Registered `liveDemo` block macro processor.
pub struct LiveDemoExtension<C: ContentCatalog> {
    catalog: C,
    cache: TemplateCache,
    wrapper: CompiledTemplate,
    scripts: ScriptTracker,
}

impl<C: ContentCatalog> LiveDemoExtension<C> {
    /// Register against `catalog`, loading the wrapper template from disk.
    ///
    /// An unreadable or malformed wrapper is fatal: every demo needs it.
    pub fn register(catalog: C, wrapper_path: &Path) -> Result<Self, ExtensionError> {
        let mut cache = TemplateCache::new();
        let wrapper = cache.engine_mut().parse_file(wrapper_path)?;
        tracing::debug!(wrapper = %wrapper_path.display(), "registered liveDemo macro");
        Ok(Self::with_wrapper(catalog, cache, wrapper))
    }

    /// Register with a wrapper template given as text.
    pub fn register_with_source(catalog: C, source: &str, name: &str) -> Result<Self, ExtensionError> {
        let mut cache = TemplateCache::new();
        let wrapper = cache.engine_mut().parse(source, name)?;
        Ok(Self::with_wrapper(catalog, cache, wrapper))
    }

    /// Register with the wrapper template bundled in `livedemo-renderer`.
    pub fn register_bundled(catalog: C) -> Result<Self, ExtensionError> {
        Self::register_with_source(catalog, BUNDLED_WRAPPER, BUNDLED_WRAPPER_NAME)
    }

    fn with_wrapper(catalog: C, cache: TemplateCache, wrapper: CompiledTemplate) -> Self {
        Self {
            catalog,
            cache,
            wrapper,
            scripts: ScriptTracker::new(),
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn template_cache(&self) -> &TemplateCache {
        &self.cache
    }

    pub fn scripts(&self) -> &ScriptTracker {
        &self.scripts
    }

    /// Expand one macro occurrence under `parent` and return the new block.
    pub fn process<P: BlockParent>(
        &mut self,
        parent: &mut P,
        target: &str,
        attrs: &Attributes,
    ) -> Result<P::Block, ExtensionError> {
        let doc_attrs = parent.document_attributes();
        let rendered = self.render(&doc_attrs, target, attrs)?;

        let mut block = parent.create_open_block();
        parent
            .parse_content(&mut block, &rendered)
            .map_err(|e| demo_err(target, e.into()))?;
        Ok(block)
    }

    /// Render the wrapper markup for one occurrence.
    pub fn render(
        &mut self,
        doc_attrs: &Attributes,
        target: &str,
        attrs: &Attributes,
    ) -> Result<String, ExtensionError> {
        let ctx = self
            .prepare(doc_attrs, target, attrs)
            .map_err(|e| demo_err(target, e))?;
        self.render_context(&ctx).map_err(|e| demo_err(target, e))
    }

    /// Build the wrapper context for one occurrence. Claims the script URL.
    pub fn prepare(
        &mut self,
        doc_attrs: &Attributes,
        target: &str,
        attrs: &Attributes,
    ) -> Result<LiveDemoContext, ExtensionError> {
        let type_name = attrs.demo_type().unwrap_or(DEFAULT_DEMO_TYPE);
        let demo_type = DemoType::parse(type_name);
        let initial_tab = attrs.initial_tab().unwrap_or(RUN_TAB);
        let context = DemoContext::from_document(doc_attrs);

        let content = assemble(&mut self.cache, &self.catalog, &context, target, doc_attrs)?;
        let presentation = compose(
            demo_type,
            attrs.script_url_override(),
            doc_attrs,
            &context,
            &self.catalog,
            &content,
        )?;

        let include = match presentation.script_url.as_deref() {
            Some(url) => self.scripts.claim(url),
            None => {
                tracing::warn!(
                    demo = %target,
                    attribute = demo_type.profile().script_attribute,
                    "no script URL configured for live demo"
                );
                false
            }
        };

        tracing::info!(
            demo = %target,
            context = %context,
            title = presentation.title,
            tabs = presentation.tabs.len(),
            include_script = include,
            "prepared live demo"
        );

        Ok(LiveDemoContext {
            attributes: attrs.clone(),
            demo_type: type_name.to_string(),
            css: presentation.css,
            id: target.to_string(),
            content,
            initial_tab: initial_tab.to_string(),
            script: ScriptDirective {
                include,
                url: presentation.script_url,
            },
            tabs: presentation.tabs,
        })
    }

    /// Render the wrapper template against a prepared context.
    pub fn render_context(&self, ctx: &LiveDemoContext) -> Result<String, ExtensionError> {
        Ok(self.cache.render(&self.wrapper, &ctx.to_value()?)?)
    }
}

fn demo_err(target: &str, source: ExtensionError) -> ExtensionError {
    ExtensionError::Demo {
        target: target.to_string(),
        source: Box::new(source),
    }
}
