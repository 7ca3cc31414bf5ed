use std::path::PathBuf;

use crate::error::AppError;

pub const DEFAULT_SITE_URL: &str = "https://svayurvibe.com";
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_DIST_DIR: &str = "dist";

/// Generator configuration, read once at startup and handed to the builder.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute site URL without a trailing slash.
    pub base_url: String,
    /// Always written; created if missing.
    pub public_dir: PathBuf,
    /// Written only when it already exists (the generator ran after a build).
    pub dist_dir: PathBuf,
    /// JSON blog catalog replacing the built-in one.
    pub blog_posts_path: Option<PathBuf>,
}

impl Config {
    /// Optional:
    /// - `SITE_URL` (default: "https://svayurvibe.com")
    /// - `SITEMAP_PUBLIC_DIR` (default: "public")
    /// - `SITEMAP_DIST_DIR` (default: "dist")
    /// - `SITEMAP_BLOG_POSTS` (path to a JSON blog catalog)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let raw_url = lookup("SITE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
        let base_url = normalize_base_url(&raw_url)?;

        let public_dir = lookup("SITEMAP_PUBLIC_DIR")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_PUBLIC_DIR.to_string());
        let dist_dir = lookup("SITEMAP_DIST_DIR")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_DIST_DIR.to_string());
        if public_dir == dist_dir {
            return Err(AppError::Config(format!(
                "SITEMAP_PUBLIC_DIR and SITEMAP_DIST_DIR must differ (both {public_dir})"
            )));
        }

        Ok(Self {
            base_url,
            public_dir: PathBuf::from(public_dir),
            dist_dir: PathBuf::from(dist_dir),
            blog_posts_path: lookup("SITEMAP_BLOG_POSTS")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        })
    }
}

fn normalize_base_url(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .ok_or_else(|| {
            AppError::Config(format!("SITE_URL must start with http:// or https:// (got {raw})"))
        })?;
    if host.is_empty() {
        return Err(AppError::Config(format!("SITE_URL has no host (got {raw})")));
    }
    Ok(trimmed.to_string())
}
