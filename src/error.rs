//! Error types for loading the blog

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building the blog service
#[derive(Error, Debug)]
pub enum BlogError {
    #[error("blog config not found at {path:?}: {source}")]
    ConfigNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid blog config at {path:?}: {source}")]
    ConfigInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("markdown for post '{slug}' not found at {path:?}: {source}")]
    PostSourceNotFound {
        slug: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BlogError>;
