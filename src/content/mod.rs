//! Content module - post model and markdown rendering

mod markdown;
mod post;

pub use markdown::MarkdownRenderer;
pub use post::Post;
