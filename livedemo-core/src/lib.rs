//! livedemo core library — domain types, catalog access, host seam, config.
//!
//! - [`types`] — attributes, demo context, content roles
//! - [`catalog`] — [`ContentCatalog`] plus filesystem and in-memory catalogs
//! - [`host`] — [`BlockParent`] seam and the [`AdocPage`] adapter
//! - [`config`] — `livedemo.yaml` loading
//! - [`error`] — error enums

pub mod catalog;
pub mod config;
pub mod error;
pub mod host;
pub mod types;

pub use catalog::{
    resolve_demo_resource, ContentCatalog, DemoListing, FsCatalog, MemoryCatalog, ResourceRef,
};
pub use config::{load_config_at, BuildConfig};
pub use error::{CatalogError, ConfigError, HostError};
pub use host::{AdocPage, BlockMacro, BlockParent, OpenBlock, MACRO_NAME};
pub use types::{Attributes, ContentRole, DemoContext};
