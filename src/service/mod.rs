//! In-memory blog service - materializes posts once and serves them by slug

use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::config::BlogManifest;
use crate::content::{MarkdownRenderer, Post};
use crate::error::{BlogError, Result};

/// Read-only access to blog posts
pub trait BlogService {
    /// Every post, in no particular order
    fn posts(&self) -> Vec<Post>;

    /// The post with exactly this slug, if any
    fn post_by_slug(&self, slug: &str) -> Option<Post>;

    /// Every post, ordered by slug
    fn posts_sorted(&self) -> Vec<Post> {
        let mut posts = self.posts();
        posts.sort_by(|a, b| a.slug.cmp(&b.slug));
        posts
    }
}

/// Blog service holding every rendered post in memory
#[derive(Debug, Clone)]
pub struct InMemoryBlogService {
    blog_dir: PathBuf,
    posts: HashMap<String, Post>,
}

impl InMemoryBlogService {
    /// Load the manifest from `blog_dir` and render every post it lists
    pub fn new<P: AsRef<Path>>(blog_dir: P) -> Result<Self> {
        let manifest = BlogManifest::load(blog_dir.as_ref())?;
        Self::from_manifest(manifest, blog_dir)
    }

    /// Render the posts of an already parsed manifest
    ///
    /// Filenames are resolved against `blog_dir`. Any unreadable source aborts
    /// the whole load. A slug listed twice keeps the later entry.
    pub fn from_manifest<P: AsRef<Path>>(manifest: BlogManifest, blog_dir: P) -> Result<Self> {
        let blog_dir = blog_dir.as_ref().to_path_buf();
        let renderer = MarkdownRenderer::new();
        let mut posts = HashMap::with_capacity(manifest.posts.len());

        for entry in manifest.posts {
            let path = resolve_source(&blog_dir, &entry.filename);
            tracing::debug!(
                path = %path.display(),
                slug = %entry.slug,
                title = %entry.title,
                "Loading blog post"
            );

            let bytes = match fs::read(&path) {
                Ok(bytes) => bytes,
                Err(source) => {
                    tracing::debug!(
                        path = %path.display(),
                        slug = %entry.slug,
                        "Unable to load blog post markdown from disk"
                    );
                    return Err(BlogError::PostSourceNotFound {
                        slug: entry.slug,
                        path,
                        source,
                    });
                }
            };

            let html = renderer.render_bytes(&bytes);
            let post = Post::from_entry(entry, html);
            if let Some(previous) = posts.insert(post.slug.clone(), post) {
                tracing::warn!(slug = %previous.slug, "Duplicate slug, keeping the later post");
            }
        }

        tracing::info!("Loaded {} blog posts from {:?}", posts.len(), blog_dir);

        Ok(Self { blog_dir, posts })
    }

    /// Directory the posts were loaded from
    pub fn blog_dir(&self) -> &Path {
        &self.blog_dir
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

/// Join a manifest filename onto the blog directory
///
/// Root and prefix components are dropped so `/post.md` stays inside `blog_dir`.
fn resolve_source(blog_dir: &Path, filename: &str) -> PathBuf {
    Path::new(filename)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)))
        .fold(blog_dir.to_path_buf(), |path, c| path.join(c))
}

impl BlogService for InMemoryBlogService {
    fn posts(&self) -> Vec<Post> {
        self.posts.values().cloned().collect()
    }

    fn post_by_slug(&self, slug: &str) -> Option<Post> {
        self.posts.get(slug).cloned()
    }
}
