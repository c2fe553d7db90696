//! Domain types shared by every livedemo crate.
//!
//! Attribute maps are ordered (`BTreeMap`) so rendered output and serialized
//! models are deterministic.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Well-known attribute names
// ---------------------------------------------------------------------------

/// Document attribute naming the module of the page being processed.
pub const ATTR_PAGE_MODULE: &str = "page-module";
/// Document attribute naming the component of the page being processed.
pub const ATTR_PAGE_COMPONENT: &str = "page-component-name";
/// Document attribute naming the component version of the page.
pub const ATTR_PAGE_VERSION: &str = "page-component-version";
/// Document attribute holding the published site root URL.
pub const ATTR_SITE_URL: &str = "site-url";
/// Document attribute holding the TinyMCE script URL.
pub const ATTR_TINYMCE_SCRIPT: &str = "tinymce_live_demo_url";
/// Document attribute holding the Tiny Drive script URL.
pub const ATTR_TINYDRIVE_SCRIPT: &str = "tinydrive_live_demo_url";

/// Macro attribute selecting the demo type.
pub const MACRO_ATTR_TYPE: &str = "type";
/// Macro attribute selecting the initially active tab.
pub const MACRO_ATTR_TAB: &str = "tab";
/// Macro attribute replacing the script URL taken from document attributes.
pub const MACRO_ATTR_SCRIPT_OVERRIDE: &str = "script_url_override";

/// Module name used for resources shared by a whole component version.
pub const ROOT_MODULE: &str = "ROOT";

// ---------------------------------------------------------------------------
// Attributes
// ---------------------------------------------------------------------------

/// Open string key/value map used for document and macro attributes.
///
/// Macro attributes recognise `type`, `tab` and `script_url_override`; every
/// other key is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(pub BTreeMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Attribute value, or `""` when unset.
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }

    /// Copy every entry of `other` into `self`, replacing existing keys.
    pub fn merge(&mut self, other: &Attributes) {
        for (k, v) in other.iter() {
            self.0.insert(k.clone(), v.clone());
        }
    }

    /// The `type` macro attribute, if non-empty.
    pub fn demo_type(&self) -> Option<&str> {
        self.non_empty(MACRO_ATTR_TYPE)
    }

    /// The `tab` macro attribute, if non-empty.
    pub fn initial_tab(&self) -> Option<&str> {
        self.non_empty(MACRO_ATTR_TAB)
    }

    /// The `script_url_override` macro attribute, if non-empty.
    pub fn script_url_override(&self) -> Option<&str> {
        self.non_empty(MACRO_ATTR_SCRIPT_OVERRIDE)
    }

    fn non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// ---------------------------------------------------------------------------
// DemoContext
// ---------------------------------------------------------------------------

/// Coordinates locating a demo's files in the documentation tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DemoContext {
    pub module: String,
    pub component: String,
    pub version: String,
}

impl DemoContext {
    pub fn new(
        module: impl Into<String>,
        component: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            component: component.into(),
            version: version.into(),
        }
    }

    /// Context of the page described by `attrs`. Missing attributes become `""`.
    pub fn from_document(attrs: &Attributes) -> Self {
        Self::new(
            attrs.get_or_empty(ATTR_PAGE_MODULE),
            attrs.get_or_empty(ATTR_PAGE_COMPONENT),
            attrs.get_or_empty(ATTR_PAGE_VERSION),
        )
    }

    /// Same component and version, `ROOT` module.
    pub fn root(&self) -> Self {
        Self::new(ROOT_MODULE, self.component.clone(), self.version.clone())
    }
}

impl fmt::Display for DemoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/modules/{}", self.component, self.version, self.module)
    }
}

// ---------------------------------------------------------------------------
// ContentRole
// ---------------------------------------------------------------------------

/// The fixed set of files a demo directory may provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentRole {
    Html,
    Js,
    Examplejs,
    Examplehtml,
    Css,
}

impl ContentRole {
    /// All roles in resolution order.
    pub fn all() -> &'static [ContentRole] {
        &[
            ContentRole::Html,
            ContentRole::Js,
            ContentRole::Examplejs,
            ContentRole::Examplehtml,
            ContentRole::Css,
        ]
    }

    /// Canonical file name inside a demo directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            ContentRole::Html        => "index.html",
            ContentRole::Js          => "index.js",
            ContentRole::Examplejs   => "example.js",
            ContentRole::Examplehtml => "example.html",
            ContentRole::Css         => "style.css",
        }
    }

    /// Role name as used in template data (`html`, `examplejs`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            ContentRole::Html        => "html",
            ContentRole::Js          => "js",
            ContentRole::Examplejs   => "examplejs",
            ContentRole::Examplehtml => "examplehtml",
            ContentRole::Css         => "css",
        }
    }

    pub fn from_file_name(name: &str) -> Option<ContentRole> {
        Self::all().iter().copied().find(|r| r.file_name() == name)
    }
}

impl fmt::Display for ContentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
