//! Blog manifest (blog-config.json)

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{BlogError, Result};

/// Name of the manifest file inside the blog directory
pub const MANIFEST_FILENAME: &str = "blog-config.json";

/// The parsed manifest: an ordered list of post entries
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogManifest {
    pub posts: Vec<PostEntry>,
}

/// A single post as described by the manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostEntry {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub image: String,
    pub image_alt: String,
    /// Markdown source, relative to the blog directory
    pub filename: String,
}

impl BlogManifest {
    /// Load the manifest from a blog directory
    ///
    /// A file that cannot be read is `ConfigNotFound`. Anything read but not
    /// parseable is `ConfigInvalid`, including invalid UTF-8 and a `posts`
    /// key that is missing, `null`, or not an array.
    pub fn load<P: AsRef<Path>>(blog_dir: P) -> Result<Self> {
        let path = blog_dir.as_ref().join(MANIFEST_FILENAME);
        tracing::debug!(path = %path.display(), "Reading blog config file");

        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(source) => {
                tracing::debug!(path = %path.display(), "Unable to read blog config file");
                return Err(BlogError::ConfigNotFound { path, source });
            }
        };

        Self::from_slice(&data).map_err(|source| {
            tracing::debug!(path = %path.display(), "Blog config file found, but invalid");
            BlogError::ConfigInvalid { path, source }
        })
    }

    /// Parse a manifest from JSON text
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Parse a manifest from raw JSON bytes
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}
