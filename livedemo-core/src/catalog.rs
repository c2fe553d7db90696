//! Content catalog access.
//!
//! # Logical layout
//!
//! ```text
//! <component>/<version>/modules/<module>/examples/
//!   live-demos/
//!     tinydrive.css              (ROOT module only)
//!     <demo_id>/
//!       index.html  index.js  example.js  example.html  style.css
//! ```
//!
//! Lookups go through [`ContentCatalog`]. A missing resource is `Ok(None)`;
//! callers branch on presence. Any other read failure is an error.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{catalog_io_err, CatalogError};
use crate::types::{ContentRole, DemoContext};

/// Directory under the examples family holding every demo.
pub const DEMO_ROOT: &str = "live-demos";

/// Resource family demo assets belong to.
pub const EXAMPLE_FAMILY: &str = "example";

// ---------------------------------------------------------------------------
// 1. Resource references
// ---------------------------------------------------------------------------

/// A resource addressed by context, family and family-relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef<'a> {
    pub context: &'a DemoContext,
    pub family: &'a str,
    pub relative: String,
}

impl<'a> ResourceRef<'a> {
    /// A file under `live-demos/` in the example family.
    pub fn demo(context: &'a DemoContext, relative: &str) -> Self {
        Self {
            context,
            family: EXAMPLE_FAMILY,
            relative: format!("{DEMO_ROOT}/{relative}"),
        }
    }

    /// `<component>/<version>/modules/<module>/<family>s/<relative>`
    pub fn logical_path(&self) -> String {
        format!(
            "{}/{}s/{}",
            self.context, self.family, self.relative
        )
    }

    /// Family-relative path, or `None` if it would escape the family directory.
    fn checked_relative(&self) -> Option<&Path> {
        let path = Path::new(&self.relative);
        let safe = path
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        safe.then_some(path)
    }
}

/// Source of documentation resources.
pub trait ContentCatalog {
    /// Raw bytes of `resource`, `Ok(None)` if it does not exist.
    fn resolve_resource(&self, resource: &ResourceRef<'_>) -> Result<Option<Vec<u8>>, CatalogError>;
}

/// Resolve `live-demos/<relative>` for `context` as text.
pub fn resolve_demo_resource(
    catalog: &dyn ContentCatalog,
    context: &DemoContext,
    relative: &str,
) -> Result<Option<String>, CatalogError> {
    let resource = ResourceRef::demo(context, relative);
    let Some(bytes) = catalog.resolve_resource(&resource)? else {
        return Ok(None);
    };
    tracing::debug!(path = %resource.logical_path(), "resolved demo resource");
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}

// ---------------------------------------------------------------------------
// 2. Filesystem catalog
// ---------------------------------------------------------------------------

/// Catalog backed by an Antora-style content tree rooted at `root`.
#[derive(Debug, Clone)]
pub struct FsCatalog {
    root: PathBuf,
}

/// A demo directory and the content roles it provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoListing {
    pub id: String,
    pub roles: Vec<ContentRole>,
}

impl FsCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// On-disk location of `resource` — pure, no I/O.
    pub fn path_for(&self, resource: &ResourceRef<'_>) -> Option<PathBuf> {
        let relative = resource.checked_relative()?;
        Some(
            self.family_dir(resource.context, resource.family)
                .join(relative),
        )
    }

    fn family_dir(&self, context: &DemoContext, family: &str) -> PathBuf {
        self.root
            .join(&context.component)
            .join(&context.version)
            .join("modules")
            .join(&context.module)
            .join(format!("{family}s"))
    }

    /// List every demo directory under `live-demos/` for `context`, sorted by id.
    ///
    /// Returns an empty list when the module has no demos.
    pub fn list_demos(&self, context: &DemoContext) -> Result<Vec<DemoListing>, CatalogError> {
        let dir = self.family_dir(context, EXAMPLE_FAMILY).join(DEMO_ROOT);
        if !dir.exists() {
            return Ok(vec![]);
        }

        let mut entries: Vec<_> = std::fs::read_dir(&dir)
            .map_err(|e| catalog_io_err(&dir, e))?
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .collect();
        entries.sort_by_key(|e| e.file_name());

        let mut demos = Vec::with_capacity(entries.len());
        for entry in entries {
            let demo_dir = entry.path();
            let roles = ContentRole::all()
                .iter()
                .copied()
                .filter(|role| demo_dir.join(role.file_name()).is_file())
                .collect();
            demos.push(DemoListing {
                id: entry.file_name().to_string_lossy().into_owned(),
                roles,
            });
        }
        Ok(demos)
    }
}

impl ContentCatalog for FsCatalog {
    fn resolve_resource(&self, resource: &ResourceRef<'_>) -> Result<Option<Vec<u8>>, CatalogError> {
        let Some(path) = self.path_for(resource) else {
            tracing::warn!(relative = %resource.relative, "rejected resource path outside catalog");
            return Ok(None);
        };
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(catalog_io_err(&path, err)),
        }
    }
}

// ---------------------------------------------------------------------------
// 3. In-memory catalog
// ---------------------------------------------------------------------------

/// Catalog held in memory, keyed by logical path. Counts every lookup.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    files: HashMap<String, Vec<u8>>,
    lookups: AtomicUsize,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `live-demos/<relative>` for `context`.
    pub fn insert_demo_file(
        &mut self,
        context: &DemoContext,
        relative: &str,
        content: impl Into<Vec<u8>>,
    ) {
        let key = ResourceRef::demo(context, relative).logical_path();
        self.files.insert(key, content.into());
    }

    /// Builder form of [`MemoryCatalog::insert_demo_file`].
    pub fn with_demo_file(
        mut self,
        context: &DemoContext,
        relative: &str,
        content: impl Into<Vec<u8>>,
    ) -> Self {
        self.insert_demo_file(context, relative, content);
        self
    }

    /// Number of `resolve_resource` calls served so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl ContentCatalog for MemoryCatalog {
    fn resolve_resource(&self, resource: &ResourceRef<'_>) -> Result<Option<Vec<u8>>, CatalogError> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        Ok(self.files.get(&resource.logical_path()).cloned())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
