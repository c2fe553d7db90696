//! End-to-end behaviour of the liveDemo macro against real catalogs.

use livedemo_core::{AdocPage, Attributes, DemoContext, FsCatalog, MemoryCatalog};
use livedemo_extension::{expand_page, ExtensionError, LiveDemoExtension};
use livedemo_renderer::RenderError;
use serde_json::Value;
use tempfile::TempDir;

/// Wrapper that dumps the whole `liveDemo` object as JSON.
const JSON_WRAPPER: &str = "{{ liveDemo | json_encode() }}";

fn init_logs() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn doc_attrs() -> Attributes {
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

fn render_json(ext: &mut LiveDemoExtension<MemoryCatalog>, target: &str, attrs: &Attributes) -> Value {
    let out = ext.render(&doc_attrs(), target, attrs).expect("render");
    serde_json::from_str(&out).expect("wrapper output is JSON")
}

fn tab_names(model: &Value) -> Vec<String> {
    model["tabs"]
        .as_array()
        .expect("tabs array")
        .iter()
        .map(|t| t["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn sample_demo_end_to_end() {
    init_logs();
    let ctx = DemoContext::new("core", "tinymce", "6");
    let catalog = MemoryCatalog::new()
        .with_demo_file(&ctx, "sample/index.html", "<textarea id=\"sample\"></textarea>")
        .with_demo_file(&ctx, "sample/index.js", "tinymce.init({ base_url: '{{ baseurl }}' });");
    let mut ext = LiveDemoExtension::register_with_source(catalog, JSON_WRAPPER, "json").unwrap();

    let model = render_json(&mut ext, "sample", &Attributes::new());

    assert_eq!(tab_names(&model), ["run", "html", "js", "codepen"]);
    assert_eq!(model["script"]["include"], true);
    assert_eq!(model["script"]["url"], "https://cdn/tinymce.js");
    assert_eq!(model["id"], "sample");
    assert_eq!(model["type"], "tinymce");
    assert_eq!(model["initialTab"], "run");
    assert_eq!(model["css"], "");
    assert_eq!(
        model["content"]["js"],
        "tinymce.init({ base_url: 'https://x/tinymce/6' });"
    );
    assert_eq!(model["content"]["examplejs"], model["content"]["js"]);
    assert_eq!(model["content"]["examplehtml"], model["content"]["html"]);
    assert_eq!(model["content"]["hasExamplejs"], false);
    assert_eq!(model["content"]["hasExamplehtml"], false);
}

#[test]
fn demo_without_files_gets_run_and_codepen_only() {
    let mut ext = LiveDemoExtension::register_with_source(MemoryCatalog::new(), JSON_WRAPPER, "json").unwrap();
    let model = render_json(&mut ext, "ghost", &Attributes::new());
    assert_eq!(tab_names(&model), ["run", "codepen"]);
    for key in ["html", "js", "css", "examplejs", "examplehtml"] {
        assert!(model["content"].get(key).is_none(), "{key} should be unset");
    }
}

#[test]
fn example_js_suppresses_codepen_tab() {
    let ctx = DemoContext::new("core", "tinymce", "6");
    let catalog = MemoryCatalog::new()
        .with_demo_file(&ctx, "ex/index.html", "<p/>")
        .with_demo_file(&ctx, "ex/example.js", "run();");
    let mut ext = LiveDemoExtension::register_with_source(catalog, JSON_WRAPPER, "json").unwrap();
    let model = render_json(&mut ext, "ex", &Attributes::new());
    assert_eq!(model["content"]["hasExamplejs"], true);
    assert_eq!(tab_names(&model), ["run", "html"]);
}

#[test]
fn pass_through_attributes_reach_the_wrapper() {
    let mut ext = LiveDemoExtension::register_with_source(MemoryCatalog::new(), JSON_WRAPPER, "json").unwrap();
    let attrs: Attributes = [("height", "600"), ("type", "tinydrive"), ("tab", "html")]
        .into_iter()
        .collect();
    let model = render_json(&mut ext, "d", &attrs);
    assert_eq!(model["height"], "600");
    assert_eq!(model["type"], "tinydrive");
    assert_eq!(model["initialTab"], "html");
    assert_eq!(model["tabs"][0]["text"], "Tiny Drive");
    assert_eq!(model["script"]["url"], Value::Null);
    assert_eq!(model["script"]["include"], false);
}

#[test]
fn second_occurrence_omits_script_directive() {
    let mut ext = LiveDemoExtension::register_with_source(MemoryCatalog::new(), JSON_WRAPPER, "json").unwrap();
    let first = render_json(&mut ext, "a", &Attributes::new());
    let second = render_json(&mut ext, "b", &Attributes::new());
    assert_eq!(first["script"]["include"], true);
    assert_eq!(second["script"]["include"], false);
    assert_eq!(second["script"]["url"], "https://cdn/tinymce.js");
}

#[test]
fn filesystem_catalog_with_bundled_wrapper() {
    init_logs();
    let tree = TempDir::new().unwrap();
    let demo = tree.path().join("tinymce/6/modules/core/examples/live-demos/basic");
    std::fs::create_dir_all(&demo).unwrap();
    std::fs::write(demo.join("index.html"), "<textarea id=\"basic\">Hello</textarea>").unwrap();
    std::fs::write(demo.join("index.js"), "tinymce.init({ selector: '#basic' });").unwrap();
    std::fs::write(demo.join("style.css"), "#basic { height: 300px; }").unwrap();

    let mut ext = LiveDemoExtension::register_bundled(FsCatalog::new(tree.path())).unwrap();
    let mut page = AdocPage::parse("= Basic\n", &doc_attrs());
    let block = ext.process(&mut page, "basic", &Attributes::new()).unwrap();
    let text = block.lines.join("\n");

    assert!(text.contains("data-tab=\"run\""));
    assert!(text.contains("data-tab=\"html\""));
    assert!(text.contains("data-tab=\"css\""));
    assert!(text.contains("data-tab=\"js\""));
    assert!(text.contains("Edit on CodePen"));
    assert!(text.contains("[source,css]"));
    assert!(text.contains("#basic { height: 300px; }"));
    assert!(text.contains("tinymce.init({ selector: '#basic' });"));
    assert!(text.contains("<script src=\"https://cdn/tinymce.js\""));
}

#[test]
fn expanded_page_keeps_prose_and_replaces_macros() {
    let ctx = DemoContext::new("core", "tinymce", "6");
    let catalog = MemoryCatalog::new().with_demo_file(&ctx, "inline/index.html", "<div>inline</div>");
    let mut ext = LiveDemoExtension::register_bundled(catalog).unwrap();

    let page = expand_page(
        &mut ext,
        "= Inline\n\nBefore.\n\nliveDemo::inline[height=200]\n\nAfter.\n",
        &doc_attrs(),
    )
    .unwrap();

    assert_eq!(page.demos, vec!["inline"]);
    assert!(page.source.starts_with("= Inline\n\nBefore.\n\n--\n"));
    assert!(page.source.ends_with("--\n\nAfter.\n"));
    assert!(page.source.contains("<div>inline</div>"));
}

#[test]
fn unreadable_demo_file_fails_the_build() {
    let tree = TempDir::new().unwrap();
    let demo = tree.path().join("tinymce/6/modules/core/examples/live-demos/basic");
    std::fs::create_dir_all(demo.join("index.html")).unwrap();
    std::fs::write(demo.join("index.js"), "tinymce.init({});").unwrap();

    let mut ext = LiveDemoExtension::register_bundled(FsCatalog::new(tree.path())).unwrap();
    let err = ext.render(&doc_attrs(), "basic", &Attributes::new()).unwrap_err();
    match err {
        ExtensionError::Demo { target, source } => {
            assert_eq!(target, "basic");
            assert!(
                matches!(*source, ExtensionError::Render(RenderError::Catalog(_))),
                "got: {source}"
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn inner_templates_read_hyphenated_document_attributes() {
    let ctx = DemoContext::new("core", "tinymce", "6");
    let catalog = MemoryCatalog::new().with_demo_file(
        &ctx,
        "links/index.html",
        "<a href=\"{{ attributes[\"site-url\"] }}/{{ attributes[\"page-component-name\"] }}\">docs</a>",
    );
    let mut ext = LiveDemoExtension::register_with_source(catalog, JSON_WRAPPER, "json").unwrap();
    let model = render_json(&mut ext, "links", &Attributes::new());
    assert_eq!(model["content"]["html"], "<a href=\"https://x/tinymce\">docs</a>");
}
