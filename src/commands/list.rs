//! List loaded posts

use anyhow::Result;

use crate::service::BlogService;

/// Print every post, ordered by slug
pub fn run(service: &impl BlogService) -> Result<()> {
    print!("{}", listing(service));
    Ok(())
}

fn listing(service: &impl BlogService) -> String {
    let posts = service.posts_sorted();
    let mut out = format!("Posts ({}):\n", posts.len());
    for post in posts {
        out.push_str(&format!("  {} - {}\n", post.slug, post.title));
    }
    out
}
