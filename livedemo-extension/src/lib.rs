//! # livedemo-extension
//!
//! The `liveDemo` block macro: content assembly, presentation, script
//! de-duplication and wrapper rendering for each occurrence, spliced back into
//! the host document.
//!
//! Register once per build with [`LiveDemoExtension::register`] and call
//! [`LiveDemoExtension::process`] for every occurrence, or hand a whole page
//! to [`expand_page`].

pub mod error;
pub mod handler;
pub mod pipeline;
pub mod tracker;

pub use error::ExtensionError;
pub use handler::{LiveDemoExtension, DEFAULT_DEMO_TYPE};
pub use pipeline::{expand_page, ExpandedPage};
pub use tracker::ScriptTracker;
