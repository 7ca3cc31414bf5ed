/// Turns static route descriptors and blog metadata into sitemap documents.
///
/// All `lastmod` values derive from the single `build_time` captured at startup,
/// so the same inputs and build time always produce the same documents.
use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use clinic_content::blog::{blog_post_path, BlogPostMeta};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::model::{
    ChangeFrequency, ContentRoute, IndexEntry, SitemapDocument, SitemapImage,
    SitemapIndexDocument, SitemapKind, StaticPage,
};

pub const DEFAULT_PRIORITY: f64 = 0.7;
pub const DEFAULT_CHANGE_FREQUENCY: ChangeFrequency = ChangeFrequency::Weekly;
const ROOT_PRIORITY: f64 = 1.0;
const ROOT_CHANGE_FREQUENCY: ChangeFrequency = ChangeFrequency::Daily;

/// The four documents of one generator run.
#[derive(Debug, Clone)]
pub struct SitemapSet {
    pub base_url: String,
    pub combined: SitemapDocument,
    pub static_only: SitemapDocument,
    pub blog: SitemapDocument,
    pub index: SitemapIndexDocument,
}

impl SitemapSet {
    pub fn document(&self, kind: SitemapKind) -> &SitemapDocument {
        match kind {
            SitemapKind::Combined => &self.combined,
            SitemapKind::Static => &self.static_only,
            SitemapKind::Blog => &self.blog,
        }
    }
}

pub struct SitemapBuilder {
    base_url: String,
    build_time: DateTime<Utc>,
}

impl SitemapBuilder {
    pub fn new(base_url: impl Into<String>, build_time: DateTime<Utc>) -> Self {
        Self {
            base_url: base_url.into(),
            build_time,
        }
    }

    pub fn build(
        &self,
        static_pages: &[StaticPage],
        blog_posts: &[BlogPostMeta],
    ) -> Result<SitemapSet, AppError> {
        let static_routes = static_pages
            .iter()
            .map(|page| self.static_route(page))
            .collect::<Result<Vec<_>, _>>()?;
        let blog_routes: Vec<ContentRoute> =
            blog_posts.iter().map(|post| self.blog_route(post)).collect();

        let combined = dedup_by_path(static_routes.iter().chain(blog_routes.iter()).cloned());
        let static_only = dedup_by_path(static_routes);
        let blog = dedup_by_path(blog_routes);

        let collisions = static_only.len() + blog.len() - combined.len();
        if collisions > 0 {
            warn!(collisions, "duplicate paths dropped from combined sitemap");
        }

        Ok(SitemapSet {
            base_url: self.base_url.clone(),
            combined: SitemapDocument { entries: combined },
            static_only: SitemapDocument {
                entries: static_only,
            },
            blog: SitemapDocument { entries: blog },
            index: self.index(),
        })
    }

    /// Root is always `1.0`/`daily`; other pages use their overrides or the defaults.
    pub fn static_route(&self, page: &StaticPage) -> Result<ContentRoute, AppError> {
        if !page.path.starts_with('/') {
            return Err(AppError::InvalidRoute {
                path: page.path.to_string(),
                message: "path must start with '/'".to_string(),
            });
        }

        let (priority, change_frequency) = if page.path == "/" {
            (ROOT_PRIORITY, ROOT_CHANGE_FREQUENCY)
        } else {
            (
                page.priority.unwrap_or(DEFAULT_PRIORITY),
                page.change_frequency.unwrap_or(DEFAULT_CHANGE_FREQUENCY),
            )
        };
        if !(0.0..=1.0).contains(&priority) {
            return Err(AppError::InvalidRoute {
                path: page.path.to_string(),
                message: format!("priority {priority} outside [0.0, 1.0]"),
            });
        }

        Ok(ContentRoute {
            path: page.path.to_string(),
            priority,
            change_frequency,
            last_modified: self.build_time,
            image: None,
        })
    }

    pub fn blog_route(&self, post: &BlogPostMeta) -> ContentRoute {
        let image = post.image.as_deref().map(|src| SitemapImage {
            loc: self.absolute_url(src),
            title: post.title.clone(),
        });

        ContentRoute {
            path: blog_post_path(post),
            priority: DEFAULT_PRIORITY,
            change_frequency: DEFAULT_CHANGE_FREQUENCY,
            last_modified: self.blog_last_modified(post.id, &post.date),
            image,
        }
    }

    /// Past publication dates are kept as-is; future ones are pulled back to one
    /// second before the build, and unparseable ones become the build time.
    pub fn blog_last_modified(&self, id: u32, date: &str) -> DateTime<Utc> {
        match parse_publish_date(date) {
            Some(published) if published <= self.build_time => published,
            Some(published) => {
                debug!(id, %published, "publication date is after build time, clamping");
                self.build_time - Duration::seconds(1)
            }
            None => {
                debug!(id, date, "unparseable publication date, using build time");
                self.build_time
            }
        }
    }

    fn index(&self) -> SitemapIndexDocument {
        SitemapIndexDocument {
            entries: SitemapKind::ALL
                .iter()
                .map(|kind| IndexEntry {
                    loc: format!("{}/{}", self.base_url, kind.file_name()),
                    last_modified: self.build_time,
                })
                .collect(),
        }
    }

    fn absolute_url(&self, src: &str) -> String {
        if src.starts_with("http://") || src.starts_with("https://") {
            src.to_string()
        } else if src.starts_with('/') {
            format!("{}{src}", self.base_url)
        } else {
            format!("{}/{src}", self.base_url)
        }
    }
}

/// First occurrence of each path wins; order is otherwise preserved.
pub fn dedup_by_path(routes: impl IntoIterator<Item = ContentRoute>) -> Vec<ContentRoute> {
    let mut seen = HashSet::new();
    routes
        .into_iter()
        .filter(|route| seen.insert(route.path.clone()))
        .collect()
}

/// Accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (UTC midnight).
pub fn parse_publish_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    const BASE: &str = "https://svayurvibe.com";

    fn build_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn builder() -> SitemapBuilder {
        SitemapBuilder::new(BASE, build_time())
    }

    fn post(id: u32, title: &str, date: &str) -> BlogPostMeta {
        BlogPostMeta {
            id,
            title: title.to_string(),
            excerpt: String::new(),
            date: date.to_string(),
            image: None,
            category: None,
            author: None,
        }
    }

    #[test]
    fn root_always_gets_top_priority() {
        let pages = [
            StaticPage::new("/about"),
            StaticPage::with("/", 0.3, ChangeFrequency::Yearly),
        ];
        let set = builder().build(&pages, &[]).expect("build");
        let root = set
            .combined
            .entries
            .iter()
            .find(|r| r.path == "/")
            .expect("root present");
        assert_eq!(root.priority, 1.0);
        assert_eq!(root.change_frequency, ChangeFrequency::Daily);
        assert_eq!(set.combined.entries[0].priority, DEFAULT_PRIORITY);
        assert_eq!(set.combined.entries[0].change_frequency, ChangeFrequency::Weekly);
    }

    #[test]
    fn static_overrides_apply() {
        let route = builder()
            .static_route(&StaticPage::with("/faq", 0.4, ChangeFrequency::Monthly))
            .expect("valid");
        assert_eq!(route.priority, 0.4);
        assert_eq!(route.change_frequency, ChangeFrequency::Monthly);
        assert_eq!(route.last_modified, build_time());
    }

    #[test]
    fn rejects_relative_path_and_bad_priority() {
        let b = builder();
        assert!(matches!(
            b.static_route(&StaticPage::new("about")),
            Err(AppError::InvalidRoute { .. })
        ));
        assert!(matches!(
            b.static_route(&StaticPage::with("/x", 1.5, ChangeFrequency::Daily)),
            Err(AppError::InvalidRoute { .. })
        ));
    }

    #[test]
    fn combined_count_excludes_collisions() {
        let pages = [StaticPage::new("/"), StaticPage::new("/blog/1/hello")];
        let posts = [post(1, "Hello", "2024-01-01"), post(2, "World", "2024-01-02")];
        let set = builder().build(&pages, &posts).expect("build");

        assert_eq!(set.static_only.len(), 2);
        assert_eq!(set.blog.len(), 2);
        assert_eq!(set.combined.len(), 3);
        let collided = &set.combined.entries[1];
        assert_eq!(collided.path, "/blog/1/hello");
        // the static descriptor came first, so it wins
        assert_eq!(collided.last_modified, build_time());
        let paths: Vec<&str> = set.combined.entries.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, ["/", "/blog/1/hello", "/blog/2/world"]);
    }

    #[test]
    fn duplicate_static_paths_keep_first() {
        let pages = [
            StaticPage::with("/faq", 0.5, ChangeFrequency::Monthly),
            StaticPage::with("/faq", 0.9, ChangeFrequency::Daily),
        ];
        let set = builder().build(&pages, &[]).expect("build");
        assert_eq!(set.static_only.len(), 1);
        assert_eq!(set.static_only.entries[0].priority, 0.5);
    }

    #[test]
    fn past_blog_date_is_kept() {
        let route = builder().blog_route(&post(3, "10 Morning Rituals!", "2024-01-05"));
        assert_eq!(route.path, "/blog/3/10-morning-rituals");
        assert_eq!(
            route.last_modified,
            Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn future_blog_date_is_clamped_before_build() {
        let route = builder().blog_route(&post(9, "Soon", "2030-01-01"));
        assert_eq!(route.last_modified, build_time() - Duration::seconds(1));
        assert!(route.last_modified < build_time());
    }

    #[test]
    fn unparseable_blog_date_uses_build_time() {
        for date in ["", "next tuesday", "2024-13-45"] {
            let route = builder().blog_route(&post(4, "Odd", date));
            assert_eq!(route.last_modified, build_time(), "date {date:?}");
        }
    }

    #[test]
    fn rfc3339_blog_date_is_normalized_to_utc() {
        let route = builder().blog_route(&post(5, "Tz", "2024-03-01T10:30:00+05:30"));
        assert_eq!(
            route.last_modified,
            Utc.with_ymd_and_hms(2024, 3, 1, 5, 0, 0).unwrap()
        );
    }

    #[test]
    fn blog_image_is_made_absolute() {
        let b = builder();
        let mut relative = post(1, "Abhyanga", "2024-01-01");
        relative.image = Some("/images/abhyanga.jpg".to_string());
        let image = b.blog_route(&relative).image.expect("image attached");
        assert_eq!(image.loc, "https://svayurvibe.com/images/abhyanga.jpg");
        assert_eq!(image.title, "Abhyanga");

        let mut bare = post(2, "Bare", "2024-01-01");
        bare.image = Some("img/bare.png".to_string());
        assert_eq!(
            b.blog_route(&bare).image.expect("image").loc,
            "https://svayurvibe.com/img/bare.png"
        );

        let mut absolute = post(3, "Cdn", "2024-01-01");
        absolute.image = Some("https://cdn.example.com/a.jpg".to_string());
        assert_eq!(
            b.blog_route(&absolute).image.expect("image").loc,
            "https://cdn.example.com/a.jpg"
        );
    }

    #[test]
    fn index_lists_three_sitemaps_at_build_time() {
        let set = builder().build(&[StaticPage::new("/")], &[]).expect("build");
        let locs: Vec<&str> = set.index.entries.iter().map(|e| e.loc.as_str()).collect();
        assert_eq!(
            locs,
            [
                "https://svayurvibe.com/sitemap.xml",
                "https://svayurvibe.com/sitemap-static.xml",
                "https://svayurvibe.com/sitemap-blog.xml",
            ]
        );
        assert!(set.index.entries.iter().all(|e| e.last_modified == build_time()));
    }

    #[test]
    fn parse_publish_date_formats() {
        assert_eq!(
            parse_publish_date(" 2023-12-25 "),
            Some(Utc.with_ymd_and_hms(2023, 12, 25, 0, 0, 0).unwrap())
        );
        assert_eq!(
            parse_publish_date("2024-01-15T08:00:00Z"),
            Some(Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap())
        );
        assert_eq!(parse_publish_date("15/01/2024"), None);
    }
}
