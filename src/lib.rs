//! blog-service: markdown blog posts served from memory
//!
//! Posts are listed in a `blog-config.json` manifest, rendered from their
//! markdown sources once at load time, and then looked up by slug.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod server;
pub mod service;

pub use config::{BlogManifest, PostEntry, MANIFEST_FILENAME};
pub use content::{MarkdownRenderer, Post};
pub use error::BlogError;
pub use service::{BlogService, InMemoryBlogService};
