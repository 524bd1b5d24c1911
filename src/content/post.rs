//! Post model

use serde::{Deserialize, Serialize};

use crate::config::PostEntry;

/// A materialized blog post with its rendered body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Lookup key
    pub slug: String,

    pub title: String,

    pub summary: String,

    /// Image reference
    pub image: String,

    pub image_alt: String,

    /// Rendered HTML content
    pub html_content: String,
}

impl Post {
    /// Build a post from its manifest entry and rendered HTML
    pub fn from_entry(entry: PostEntry, html_content: String) -> Self {
        Self {
            slug: entry.slug,
            title: entry.title,
            summary: entry.summary,
            image: entry.image,
            image_alt: entry.image_alt,
            html_content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entry_copies_metadata() {
        let entry = PostEntry {
            slug: "hello".to_string(),
            title: "Hello".to_string(),
            summary: "Greeting".to_string(),
            image: "/hello.png".to_string(),
            image_alt: "A wave".to_string(),
            filename: "hello.md".to_string(),
        };
        let post = Post::from_entry(entry, "<p>hi</p>\n".to_string());
        assert_eq!(post.slug, "hello");
        assert_eq!(post.title, "Hello");
        assert_eq!(post.summary, "Greeting");
        assert_eq!(post.image, "/hello.png");
        assert_eq!(post.image_alt, "A wave");
        assert_eq!(post.html_content, "<p>hi</p>\n");
    }

    #[test]
    fn test_serialize_camel_case() {
        let post = Post {
            slug: "s".to_string(),
            title: "t".to_string(),
            summary: String::new(),
            image: String::new(),
            image_alt: "alt".to_string(),
            html_content: "<p>x</p>".to_string(),
        };
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["imageAlt"], "alt");
        assert_eq!(value["htmlContent"], "<p>x</p>");
    }
}
