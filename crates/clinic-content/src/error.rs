/// Errors raised while loading or validating the shared content catalog.
///
/// Consumers (the sitemap generator, listing pages) wrap this via `#[from]`.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid blog catalog json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid blog post {id}: {message}")]
    Invalid { id: u32, message: String },
}
