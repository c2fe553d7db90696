pub mod common;
pub mod expand;
pub mod list;
pub mod render;
