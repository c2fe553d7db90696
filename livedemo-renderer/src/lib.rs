//! # livedemo-renderer
//!
//! Tera-based rendering for live demo widgets: a template cache over the
//! content catalog, per-role content assembly, presentation composition and
//! the `liveDemo` wrapper context.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use livedemo_core::{Attributes, DemoContext, FsCatalog};
//! use livedemo_renderer::{assemble, build_tabs, DemoType, TemplateCache};
//!
//! fn tabs_for(catalog: &FsCatalog, doc: &Attributes) {
//!     let mut cache = TemplateCache::new();
//!     let ctx = DemoContext::from_document(doc);
//!     if let Ok(content) = assemble(&mut cache, catalog, &ctx, "basic", doc) {
//!         for tab in build_tabs(DemoType::Tinymce, &content) {
//!             println!("{}: {}", tab.name, tab.text);
//!         }
//!     }
//! }
//! ```

pub mod cache;
pub mod content;
pub mod context;
pub mod engine;
pub mod error;
pub mod presentation;

pub use cache::TemplateCache;
pub use content::{assemble, inner_model, InnerModel, ResolvedContent};
pub use context::{LiveDemoContext, ScriptDirective};
pub use engine::{CompiledTemplate, TemplateEngine, BUNDLED_WRAPPER, BUNDLED_WRAPPER_NAME};
pub use error::RenderError;
pub use presentation::{build_tabs, compose, DemoType, Presentation, Tab};
