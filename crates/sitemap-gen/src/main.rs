mod builder;
mod config;
mod error;
mod model;
mod output;
mod routes;
mod xml;

use chrono::Utc;
use clinic_content::blog::{blog_posts, BlogPostMeta};
use clinic_content::catalog::{load_blog_posts, validate_catalog};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use builder::{SitemapBuilder, SitemapSet};
use config::Config;
use error::AppError;
use output::{OutputWriter, WrittenFile};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let build_time = Utc::now();
    info!(build_time = %xml::format_timestamp(&build_time), "starting sitemap generation");

    let config = Config::from_env()?;
    info!(
        base_url = %config.base_url,
        public_dir = %config.public_dir.display(),
        dist_dir = %config.dist_dir.display(),
        custom_catalog = config.blog_posts_path.is_some(),
        "configuration loaded"
    );

    let posts = load_posts(&config)?;
    let pages = routes::static_pages();

    let set = SitemapBuilder::new(config.base_url.clone(), build_time).build(&pages, &posts)?;
    info!(
        static_urls = set.static_only.len(),
        blog_urls = set.blog.len(),
        combined_urls = set.combined.len(),
        "sitemaps built"
    );
    if set.blog.is_empty() {
        warn!("blog catalog is empty, sitemap-blog.xml has no entries");
    }

    let files = output::render_set(&set);
    let written = OutputWriter::new(&config.public_dir, &config.dist_dir).write_all(&files)?;
    info!(files = written.len(), "sitemaps written");

    print_summary(&set, &written);
    Ok(())
}

fn load_posts(config: &Config) -> Result<Vec<BlogPostMeta>, AppError> {
    let posts = match &config.blog_posts_path {
        Some(path) => load_blog_posts(path)?,
        None => {
            let posts = blog_posts();
            validate_catalog(&posts)?;
            posts
        }
    };
    Ok(posts)
}

fn print_summary(set: &SitemapSet, written: &[WrittenFile]) {
    println!(
        "Sitemaps generated: {} static, {} blog, {} combined URLs.",
        set.static_only.len(),
        set.blog.len(),
        set.combined.len()
    );
    for file in written {
        println!(
            "  {}  {} bytes  sha256:{}",
            file.path.display(),
            file.bytes,
            file.sha256
        );
    }
}
