//! Content assembly — resolve and render every content role of one demo.

use serde::Serialize;

use livedemo_core::types::ATTR_SITE_URL;
use livedemo_core::{Attributes, ContentCatalog, ContentRole, DemoContext};

use crate::cache::TemplateCache;
use crate::error::RenderError;

/// Rendered content of a demo, one optional slot and one presence flag per role.
///
/// `examplejs` / `examplehtml` may hold the `js` / `html` value as a fallback
/// while their `has` flag stays false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub js: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examplejs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examplehtml: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
    pub has_html: bool,
    pub has_js: bool,
    pub has_examplejs: bool,
    pub has_examplehtml: bool,
    pub has_css: bool,
}

impl ResolvedContent {
    pub fn value(&self, role: ContentRole) -> Option<&str> {
        let slot = match role {
            ContentRole::Html        => &self.html,
            ContentRole::Js          => &self.js,
            ContentRole::Examplejs   => &self.examplejs,
            ContentRole::Examplehtml => &self.examplehtml,
            ContentRole::Css         => &self.css,
        };
        slot.as_deref()
    }

    /// Whether the role's own file was found.
    pub fn has(&self, role: ContentRole) -> bool {
        match role {
            ContentRole::Html        => self.has_html,
            ContentRole::Js          => self.has_js,
            ContentRole::Examplejs   => self.has_examplejs,
            ContentRole::Examplehtml => self.has_examplehtml,
            ContentRole::Css         => self.has_css,
        }
    }

    fn slot_mut(&mut self, role: ContentRole) -> (&mut Option<String>, &mut bool) {
        match role {
            ContentRole::Html        => (&mut self.html, &mut self.has_html),
            ContentRole::Js          => (&mut self.js, &mut self.has_js),
            ContentRole::Examplejs   => (&mut self.examplejs, &mut self.has_examplejs),
            ContentRole::Examplehtml => (&mut self.examplehtml, &mut self.has_examplehtml),
            ContentRole::Css         => (&mut self.css, &mut self.has_css),
        }
    }

    fn apply_fallbacks(&mut self) {
        if !self.has_examplejs {
            self.examplejs = self.js.clone();
        }
        if !self.has_examplehtml {
            self.examplehtml = self.html.clone();
        }
    }
}

/// Data model for inner demo templates.
///
/// Every document attribute is a top-level variable next to
/// `baseurl = <site-url>/<component>/<version>`; document attributes win on a
/// key collision. Names Tera cannot spell as identifiers (`site-url`,
/// `page-component-name`) are reached through the nested map:
/// `{{ attributes["site-url"] }}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InnerModel {
    #[serde(flatten)]
    pub values: Attributes,
    pub attributes: Attributes,
}

impl InnerModel {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key)
    }
}

pub fn inner_model(context: &DemoContext, doc_attrs: &Attributes) -> InnerModel {
    let mut values = Attributes::new();
    values.insert(
        "baseurl",
        format!(
            "{}/{}/{}",
            doc_attrs.get_or_empty(ATTR_SITE_URL),
            context.component,
            context.version
        ),
    );
    values.merge(doc_attrs);
    InnerModel {
        values,
        attributes: doc_attrs.clone(),
    }
}

/// Resolve, render and flag each content role of `demo_id`.
pub fn assemble(
    cache: &mut TemplateCache,
    catalog: &dyn ContentCatalog,
    context: &DemoContext,
    demo_id: &str,
    doc_attrs: &Attributes,
) -> Result<ResolvedContent, RenderError> {
    let model = inner_model(context, doc_attrs);
    let mut content = ResolvedContent::default();

    for role in ContentRole::all() {
        let path = format!("{demo_id}/{}", role.file_name());
        let Some(template) = cache.get_template(catalog, context, &path)? else {
            continue;
        };
        let rendered = cache.render(&template, &model)?;
        let (slot, has) = content.slot_mut(*role);
        *slot = Some(rendered);
        *has = true;
    }

    content.apply_fallbacks();
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use livedemo_core::MemoryCatalog;

    fn ctx() -> DemoContext {
        DemoContext::new("core", "tinymce", "6")
    }

    fn doc_attrs() -> Attributes {
        [
            ("page-module", "core"),
            ("page-component-name", "tinymce"),
            ("page-component-version", "6"),
            ("site-url", "https://x"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn no_files_means_nothing_present() {
        let mut cache = TemplateCache::new();
        let content = assemble(&mut cache, &MemoryCatalog::new(), &ctx(), "empty", &doc_attrs()).unwrap();
        for role in ContentRole::all() {
            assert!(!content.has(*role), "{role} should be absent");
            assert!(content.value(*role).is_none(), "{role} should be unset");
        }
    }

    #[test]
    fn html_and_css_only_falls_back_for_examplehtml() {
        let ctx = ctx();
        let catalog = MemoryCatalog::new()
            .with_demo_file(&ctx, "s/index.html", "<textarea>{{ baseurl }}</textarea>")
            .with_demo_file(&ctx, "s/style.css", "textarea { height: 1px; }");
        let mut cache = TemplateCache::new();
        let content = assemble(&mut cache, &catalog, &ctx, "s", &doc_attrs()).unwrap();

        assert!(content.has_html);
        assert!(content.has_css);
        assert!(!content.has_js);
        assert!(!content.has_examplejs);
        assert!(!content.has_examplehtml);
        assert_eq!(content.html.as_deref(), Some("<textarea>https://x/tinymce/6</textarea>"));
        assert_eq!(content.examplehtml, content.html);
        assert!(content.examplejs.is_none());
    }

    #[test]
    fn example_files_take_precedence_over_fallback() {
        let ctx = ctx();
        let catalog = MemoryCatalog::new()
            .with_demo_file(&ctx, "s/index.js", "primary();")
            .with_demo_file(&ctx, "s/example.js", "example();");
        let mut cache = TemplateCache::new();
        let content = assemble(&mut cache, &catalog, &ctx, "s", &doc_attrs()).unwrap();

        assert!(content.has_examplejs);
        assert_eq!(content.examplejs.as_deref(), Some("example();"));
        assert_eq!(content.js.as_deref(), Some("primary();"));
    }

    #[test]
    fn inner_model_exposes_document_attributes_and_baseurl() {
        let mut attrs = doc_attrs();
        attrs.insert("tinymce_live_demo_url", "https://cdn/tinymce.js");
        let model = inner_model(&ctx(), &attrs);
        assert_eq!(model.get("baseurl"), Some("https://x/tinymce/6"));
        assert_eq!(model.get("tinymce_live_demo_url"), Some("https://cdn/tinymce.js"));
    }

    #[test]
    fn hyphenated_attributes_are_reachable_through_nested_map() {
        let ctx = ctx();
        let catalog = MemoryCatalog::new().with_demo_file(
            &ctx,
            "s/index.html",
            "<a href=\"{{ attributes[\"site-url\"] }}\">{{ attributes[\"page-module\"] }} {{ baseurl }}</a>",
        );
        let mut cache = TemplateCache::new();
        let content = assemble(&mut cache, &catalog, &ctx, "s", &doc_attrs()).unwrap();
        assert_eq!(
            content.html.as_deref(),
            Some("<a href=\"https://x\">core https://x/tinymce/6</a>")
        );
    }

    #[test]
    fn serialized_model_keeps_flat_and_nested_views() {
        let value = serde_json::to_value(inner_model(&ctx(), &doc_attrs())).unwrap();
        assert_eq!(value["site-url"], "https://x");
        assert_eq!(value["baseurl"], "https://x/tinymce/6");
        assert_eq!(value["attributes"]["site-url"], "https://x");
        assert!(value["attributes"].get("baseurl").is_none());
    }

    #[test]
    fn document_baseurl_attribute_wins() {
        let mut attrs = doc_attrs();
        attrs.insert("baseurl", "https://override");
        assert_eq!(inner_model(&ctx(), &attrs).get("baseurl"), Some("https://override"));
    }

    #[test]
    fn render_error_aborts_assembly() {
        let ctx = ctx();
        let catalog = MemoryCatalog::new().with_demo_file(&ctx, "s/index.js", "{{ not_provided }}");
        let mut cache = TemplateCache::new();
        let err = assemble(&mut cache, &catalog, &ctx, "s", &doc_attrs()).unwrap_err();
        assert!(matches!(err, RenderError::Tera(_)), "got: {err}");
    }

    #[test]
    fn serialized_record_uses_has_flags_and_skips_unset_roles() {
        let content = ResolvedContent {
            html: Some("<p/>".into()),
            has_html: true,
            ..Default::default()
        };
        let value = serde_json::to_value(&content).unwrap();
        assert_eq!(value["html"], "<p/>");
        assert_eq!(value["hasHtml"], true);
        assert_eq!(value["hasExamplejs"], false);
        assert!(value.get("js").is_none());
    }
}
