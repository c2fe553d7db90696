//! Presentation composition — demo type profiles, tab list, script and CSS.
//!
//! | Type        | Title        | Script attribute          | Companion CSS   |
//! |-------------|--------------|---------------------------|-----------------|
//! | `tinymce`   | `TinyMCE`    | `tinymce_live_demo_url`   | —               |
//! | `tinydrive` | `Tiny Drive` | `tinydrive_live_demo_url` | `tinydrive.css` |
//!
//! Any unrecognised type string behaves like `tinymce`.

use serde::Serialize;

use livedemo_core::types::{ATTR_TINYDRIVE_SCRIPT, ATTR_TINYMCE_SCRIPT};
use livedemo_core::{resolve_demo_resource, Attributes, ContentCatalog, ContentRole, DemoContext};

use crate::content::ResolvedContent;
use crate::error::RenderError;

/// Shared stylesheet loaded for Tiny Drive demos, from the ROOT module.
pub const TINYDRIVE_CSS: &str = "tinydrive.css";

// ---------------------------------------------------------------------------
// DemoType
// ---------------------------------------------------------------------------

/// Static presentation record for a demo type.
#[derive(Debug, PartialEq, Eq)]
pub struct DemoProfile {
    pub title: &'static str,
    /// Document attribute holding the product script URL.
    pub script_attribute: &'static str,
    /// Whether the shared companion stylesheet is loaded.
    pub has_css: bool,
}

const TINYMCE_PROFILE: DemoProfile = DemoProfile {
    title: "TinyMCE",
    script_attribute: ATTR_TINYMCE_SCRIPT,
    has_css: false,
};

const TINYDRIVE_PROFILE: DemoProfile = DemoProfile {
    title: "Tiny Drive",
    script_attribute: ATTR_TINYDRIVE_SCRIPT,
    has_css: true,
};

/// Product a demo showcases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemoType {
    #[default]
    Tinymce,
    Tinydrive,
}

impl DemoType {
    /// Parse a `type` attribute; anything but `tinydrive` is `Tinymce`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "tinydrive" => DemoType::Tinydrive,
            _ => DemoType::Tinymce,
        }
    }

    pub fn profile(&self) -> &'static DemoProfile {
        match self {
            DemoType::Tinymce => &TINYMCE_PROFILE,
            DemoType::Tinydrive => &TINYDRIVE_PROFILE,
        }
    }

    pub fn title(&self) -> &'static str {
        self.profile().title
    }
}

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

/// One entry of the demo tab bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub name: &'static str,
    pub text: &'static str,
}

/// Name of the always-present preview tab.
pub const RUN_TAB: &str = "run";
/// Name of the trailing CodePen link tab.
pub const CODEPEN_TAB: &str = "codepen";

/// Candidate tabs in display order, with the role gating each one.
const DEFAULT_TABS: &[(&str, &str, Option<ContentRole>)] = &[
    (RUN_TAB, "", None),
    ("html", "HTML", Some(ContentRole::Html)),
    ("css", "CSS", Some(ContentRole::Css)),
    ("js", "JS", Some(ContentRole::Js)),
];

/// Tab list for a demo: run (titled by type), then html/css/js when their own
/// file exists, then the CodePen tab when no `example.js` was provided.
pub fn build_tabs(demo_type: DemoType, content: &ResolvedContent) -> Vec<Tab> {
    let mut tabs: Vec<Tab> = DEFAULT_TABS
        .iter()
        .filter(|(_, _, role)| role.map_or(true, |r| content.has(r)))
        .map(|&(name, text, role)| Tab {
            name,
            text: if role.is_none() { demo_type.title() } else { text },
        })
        .collect();

    if !content.has_examplejs {
        tabs.push(Tab {
            name: CODEPEN_TAB,
            text: "Edit on CodePen",
        });
    }
    tabs
}

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

/// Everything about a demo that is derived rather than rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub title: &'static str,
    pub tabs: Vec<Tab>,
    /// `None` when neither an override nor the type's document attribute is set.
    pub script_url: Option<String>,
    /// Companion stylesheet, `""` unless the type loads one.
    pub css: String,
}

/// Derive the presentation of a demo.
///
/// `context` is the page context; the companion stylesheet is looked up in its
/// ROOT module. A stylesheet that exists but cannot be read is an error.
pub fn compose(
    demo_type: DemoType,
    script_url_override: Option<&str>,
    doc_attrs: &Attributes,
    context: &DemoContext,
    catalog: &dyn ContentCatalog,
    content: &ResolvedContent,
) -> Result<Presentation, RenderError> {
    let profile = demo_type.profile();
    let script_url = script_url_override
        .or_else(|| doc_attrs.get(profile.script_attribute))
        .map(str::to_string);

    let css = if profile.has_css {
        resolve_demo_resource(catalog, &context.root(), TINYDRIVE_CSS)?.unwrap_or_default()
    } else {
        String::new()
    };

    Ok(Presentation {
        title: profile.title,
        tabs: build_tabs(demo_type, content),
        script_url,
        css,
    })
}
