//! CLI commands over a loaded blog

pub mod list;
pub mod show;
