//! Show a single post

use anyhow::Result;

use crate::service::BlogService;

/// Print the rendered HTML of the post with `slug`
pub fn run(service: &impl BlogService, slug: &str) -> Result<()> {
    let html = render(service, slug)?;
    print!("{}", html);
    Ok(())
}

fn render(service: &impl BlogService, slug: &str) -> Result<String> {
    match service.post_by_slug(slug) {
        Some(post) => Ok(post.html_content),
        None => anyhow::bail!("Post not found: {}", slug),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::sample_blog;

    #[test]
    fn test_render_existing_post() {
        let (_dir, service) = sample_blog();
        let html = render(&service, "alpha").unwrap();
        assert_eq!(html, "<h1>Alpha</h1>\n<p>The beginning</p>\n");
    }

    #[test]
    fn test_render_missing_post() {
        let (_dir, service) = sample_blog();
        let err = render(&service, "beta").unwrap_err();
        assert_eq!(err.to_string(), "Post not found: beta");
    }
}
