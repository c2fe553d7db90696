//! Page expansion entrypoint used by the CLI.

use std::collections::HashMap;

use livedemo_core::{AdocPage, Attributes, ContentCatalog, OpenBlock, MACRO_NAME};

use crate::error::ExtensionError;
use crate::handler::LiveDemoExtension;

/// Result of expanding one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedPage {
    /// Page source with every `liveDemo::` line replaced by its open block.
    pub source: String,
    /// Demo ids in the order they were expanded.
    pub demos: Vec<String>,
}

/// Expand every `liveDemo::target[attrs]` line of `source`.
///
/// `defaults` are layered under the page's own header attributes. Demos
/// expanded through the same `extension` share its script tracker, so only the
/// first demo per script URL emits the script tag.
pub fn expand_page<C: ContentCatalog>(
    extension: &mut LiveDemoExtension<C>,
    source: &str,
    defaults: &Attributes,
) -> Result<ExpandedPage, ExtensionError> {
    let mut page = AdocPage::parse(source, defaults);
    let macros = page.block_macros(MACRO_NAME)?;

    let mut blocks: HashMap<usize, OpenBlock> = HashMap::with_capacity(macros.len());
    for m in &macros {
        let block = extension.process(&mut page, &m.target, &m.attributes)?;
        blocks.insert(m.line, block);
    }

    let mut out = String::with_capacity(source.len());
    for (idx, line) in page.lines().iter().enumerate() {
        match blocks.get(&(idx + 1)) {
            Some(block) => out.push_str(&block.to_asciidoc()),
            None => out.push_str(line),
        }
        out.push('\n');
    }

    Ok(ExpandedPage {
        source: out,
        demos: macros.into_iter().map(|m| m.target).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use livedemo_core::{DemoContext, MemoryCatalog};

    fn defaults() -> Attributes {
        [
            ("page-module", "core"),
            ("page-component-name", "tinymce"),
            ("page-component-version", "6"),
            ("site-url", "https://x"),
            ("tinymce_live_demo_url", "https://cdn/tinymce.js"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn page_without_macros_is_unchanged() {
        let mut ext = LiveDemoExtension::register_bundled(MemoryCatalog::new()).unwrap();
        let source = "= Title\n\nSome text.\n";
        let page = expand_page(&mut ext, source, &defaults()).unwrap();
        assert_eq!(page.source, source);
        assert!(page.demos.is_empty());
    }

    #[test]
    fn each_macro_becomes_an_open_block_and_script_loads_once() {
        let ctx = DemoContext::new("core", "tinymce", "6");
        let catalog = MemoryCatalog::new()
            .with_demo_file(&ctx, "one/index.html", "<div id=\"one\"></div>")
            .with_demo_file(&ctx, "two/index.html", "<div id=\"two\"></div>");
        let mut ext = LiveDemoExtension::register_bundled(catalog).unwrap();

        let source = "= Title\n\nintro\n\nliveDemo::one[]\n\nbetween\n\nliveDemo::two[tab=html]\n";
        let page = expand_page(&mut ext, source, &defaults()).unwrap();

        assert_eq!(page.demos, vec!["one", "two"]);
        assert!(!page.source.contains("liveDemo::"));
        assert!(page.source.contains("between"));
        assert_eq!(page.source.matches("<script src=\"https://cdn/tinymce.js\"").count(), 1);
        let first = page.source.find("id=\"one\"").unwrap();
        let second = page.source.find("id=\"two\"").unwrap();
        assert!(first < second);
    }

    #[test]
    fn header_attributes_select_the_context() {
        let ctx = DemoContext::new("plugins", "tinymce", "7");
        let catalog = MemoryCatalog::new().with_demo_file(&ctx, "p/index.js", "base='{{ baseurl }}'");
        let mut ext = LiveDemoExtension::register_bundled(catalog).unwrap();

        let source = "= Plugins\n:page-module: plugins\n:page-component-version: 7\n\nliveDemo::p[]\n";
        let page = expand_page(&mut ext, source, &defaults()).unwrap();
        assert!(page.source.contains("base='https://x/tinymce/7'"));
    }

    #[test]
    fn malformed_macro_aborts_expansion() {
        let mut ext = LiveDemoExtension::register_bundled(MemoryCatalog::new()).unwrap();
        let err = expand_page(&mut ext, "liveDemo::x[oops\n", &defaults()).unwrap_err();
        assert!(matches!(err, ExtensionError::Host(_)), "got: {err}");
    }
}
