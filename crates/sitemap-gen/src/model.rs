use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// Hand-authored route descriptor. Unset fields fall back to the builder defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticPage {
    pub path: &'static str,
    pub priority: Option<f64>,
    pub change_frequency: Option<ChangeFrequency>,
}

impl StaticPage {
    pub const fn new(path: &'static str) -> Self {
        Self {
            path,
            priority: None,
            change_frequency: None,
        }
    }

    pub const fn with(path: &'static str, priority: f64, change_frequency: ChangeFrequency) -> Self {
        Self {
            path,
            priority: Some(priority),
            change_frequency: Some(change_frequency),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SitemapImage {
    /// Absolute image URL.
    pub loc: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentRoute {
    /// Site-relative path, always starting with `/`.
    pub path: String,
    pub priority: f64,
    pub change_frequency: ChangeFrequency,
    pub last_modified: DateTime<Utc>,
    pub image: Option<SitemapImage>,
}

/// One `<urlset>` document. Entry order is the serialization order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SitemapDocument {
    pub entries: Vec<ContentRoute>,
}

impl SitemapDocument {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_images(&self) -> bool {
        self.entries.iter().any(|e| e.image.is_some())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IndexEntry {
    pub loc: String,
    pub last_modified: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SitemapIndexDocument {
    pub entries: Vec<IndexEntry>,
}

/// The physical `<urlset>` files, in the order the index lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitemapKind {
    Combined,
    Static,
    Blog,
}

impl SitemapKind {
    pub const ALL: [SitemapKind; 3] = [Self::Combined, Self::Static, Self::Blog];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Combined => "sitemap.xml",
            Self::Static => "sitemap-static.xml",
            Self::Blog => "sitemap-blog.xml",
        }
    }
}

pub const INDEX_FILE_NAME: &str = "sitemap_index.xml";
