//! Configuration module

mod manifest;

pub use manifest::BlogManifest;
pub use manifest::PostEntry;
pub use manifest::MANIFEST_FILENAME;
