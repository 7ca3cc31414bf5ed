use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::blog::BlogPostMeta;
use crate::error::ContentError;

/// Load a blog catalog from a JSON array of [`BlogPostMeta`] records and validate it.
pub fn load_blog_posts(path: &Path) -> Result<Vec<BlogPostMeta>, ContentError> {
    let content = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let posts = parse_blog_posts(&content)?;
    info!(path = %path.display(), posts = posts.len(), "loaded blog catalog");
    Ok(posts)
}

pub fn parse_blog_posts(json: &str) -> Result<Vec<BlogPostMeta>, ContentError> {
    let posts: Vec<BlogPostMeta> = serde_json::from_str(json)?;
    validate_catalog(&posts)?;
    Ok(posts)
}

/// Ids must be positive and unique, titles non-blank.
pub fn validate_catalog(posts: &[BlogPostMeta]) -> Result<(), ContentError> {
    let mut seen = HashSet::with_capacity(posts.len());
    for post in posts {
        if post.id == 0 {
            return Err(ContentError::Invalid {
                id: post.id,
                message: "id must be positive".to_string(),
            });
        }
        if !seen.insert(post.id) {
            return Err(ContentError::Invalid {
                id: post.id,
                message: "duplicate id".to_string(),
            });
        }
        if post.title.trim().is_empty() {
            return Err(ContentError::Invalid {
                id: post.id,
                message: "title is empty".to_string(),
            });
        }
    }
    Ok(())
}
