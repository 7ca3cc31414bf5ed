/// Persists rendered sitemaps as `.xml` plus a `.xml.gz` sibling.
///
/// Directory creation and raw XML writes are fatal. Compression is best effort:
/// a failed `.gz` is logged and skipped without affecting the other files.
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::builder::SitemapSet;
use crate::error::AppError;
use crate::model::{SitemapKind, INDEX_FILE_NAME};
use crate::xml;

/// A serialized document awaiting persistence.
#[derive(Debug, Clone)]
pub struct RenderedFile {
    pub name: &'static str,
    pub xml: String,
}

#[derive(Debug, Clone)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub bytes: usize,
    pub sha256: String,
}

/// Combined, static and blog sitemaps, then the index.
pub fn render_set(set: &SitemapSet) -> Vec<RenderedFile> {
    let mut files: Vec<RenderedFile> = SitemapKind::ALL
        .iter()
        .map(|&kind| RenderedFile {
            name: kind.file_name(),
            xml: xml::render_urlset(set.document(kind), &set.base_url),
        })
        .collect();
    files.push(RenderedFile {
        name: INDEX_FILE_NAME,
        xml: xml::render_index(&set.index),
    });
    files
}

pub struct OutputWriter {
    public_dir: PathBuf,
    dist_dir: PathBuf,
}

impl OutputWriter {
    pub fn new(public_dir: impl Into<PathBuf>, dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            public_dir: public_dir.into(),
            dist_dir: dist_dir.into(),
        }
    }

    /// The public directory (created if missing), plus the dist directory when
    /// a build has already produced it.
    pub fn target_dirs(&self) -> Result<Vec<PathBuf>, AppError> {
        std::fs::create_dir_all(&self.public_dir)
            .map_err(|e| AppError::io(&self.public_dir, e))?;
        let mut dirs = vec![self.public_dir.clone()];
        if self.dist_dir.is_dir() {
            dirs.push(self.dist_dir.clone());
        } else {
            info!(dist_dir = %self.dist_dir.display(), "dist directory absent, writing public only");
        }
        Ok(dirs)
    }

    pub fn write_all(&self, files: &[RenderedFile]) -> Result<Vec<WrittenFile>, AppError> {
        let mut written = Vec::with_capacity(files.len() * 4);
        for dir in self.target_dirs()? {
            for file in files {
                let xml_path = dir.join(file.name);
                written.push(write_file(&xml_path, file.xml.as_bytes())?);

                let gz_path = dir.join(format!("{}.gz", file.name));
                match gzip(file.xml.as_bytes()).and_then(|gz| {
                    std::fs::write(&gz_path, &gz)?;
                    Ok(gz)
                }) {
                    Ok(gz) => written.push(describe(gz_path, &gz)),
                    Err(e) => {
                        warn!(error = %e, path = %gz_path.display(), "gzip output failed, skipping");
                    }
                }
            }
        }
        Ok(written)
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<WrittenFile, AppError> {
    std::fs::write(path, bytes).map_err(|e| AppError::io(path, e))?;
    Ok(describe(path.to_path_buf(), bytes))
}

fn describe(path: PathBuf, bytes: &[u8]) -> WrittenFile {
    WrittenFile {
        path,
        bytes: bytes.len(),
        sha256: format!("{:x}", Sha256::digest(bytes)),
    }
}

/// Gzip with a zeroed header mtime, so identical input gives identical output.
pub fn gzip(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(bytes.len() / 4), Compression::default());
    encoder.write_all(bytes)?;
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use chrono::{TimeZone, Utc};
    use flate2::read::GzDecoder;

    use super::*;
    use crate::builder::SitemapBuilder;
    use crate::routes::static_pages;

    const BASE: &str = "https://svayurvibe.com";

    fn rendered() -> Vec<RenderedFile> {
        let build_time = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let set = SitemapBuilder::new(BASE, build_time)
            .build(&static_pages(), &clinic_content::blog::blog_posts())
            .expect("build");
        render_set(&set)
    }

    fn gunzip(bytes: &[u8]) -> Vec<u8> {
        let mut decoder = GzDecoder::new(bytes);
        let mut out = Vec::new();
        decoder.read_to_end(&mut out).expect("valid gzip");
        out
    }

    #[test]
    fn render_set_names_and_order() {
        let names: Vec<&str> = rendered().iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            [
                "sitemap.xml",
                "sitemap-static.xml",
                "sitemap-blog.xml",
                "sitemap_index.xml"
            ]
        );
    }

    #[test]
    fn creates_public_dir_and_round_trips_gzip() {
        let root = tempfile::tempdir().expect("tempdir");
        let public = root.path().join("nested").join("public");
        let writer = OutputWriter::new(&public, root.path().join("dist"));

        let files = rendered();
        let written = writer.write_all(&files).expect("write");
        assert_eq!(written.len(), 8);

        for file in &files {
            let xml = std::fs::read(public.join(file.name)).expect("xml written");
            assert_eq!(xml, file.xml.as_bytes());
            let gz = std::fs::read(public.join(format!("{}.gz", file.name))).expect("gz written");
            assert_eq!(gunzip(&gz), xml);
        }
        assert!(!root.path().join("dist").exists());
    }

    #[test]
    fn mirrors_into_existing_dist() {
        let root = tempfile::tempdir().expect("tempdir");
        let public = root.path().join("public");
        let dist = root.path().join("dist");
        std::fs::create_dir(&dist).expect("mkdir dist");

        let written = OutputWriter::new(&public, &dist)
            .write_all(&rendered())
            .expect("write");
        assert_eq!(written.len(), 16);
        assert_eq!(
            std::fs::read(public.join("sitemap_index.xml")).expect("public index"),
            std::fs::read(dist.join("sitemap_index.xml")).expect("dist index")
        );
        assert!(dist.join("sitemap-blog.xml.gz").is_file());
    }

    #[test]
    fn gz_failure_is_isolated() {
        let root = tempfile::tempdir().expect("tempdir");
        let public = root.path().join("public");
        // a directory where the .gz file should go makes that one write fail
        std::fs::create_dir_all(public.join("sitemap.xml.gz")).expect("blocker");

        let written = OutputWriter::new(&public, root.path().join("dist"))
            .write_all(&rendered())
            .expect("gzip failures are not fatal");
        assert_eq!(written.len(), 7);
        assert!(public.join("sitemap.xml").is_file());
        assert!(public.join("sitemap-static.xml.gz").is_file());
        assert!(public.join("sitemap_index.xml.gz").is_file());
    }

    #[test]
    fn xml_write_failure_is_fatal() {
        let root = tempfile::tempdir().expect("tempdir");
        let public = root.path().join("public");
        std::fs::create_dir_all(public.join("sitemap-static.xml")).expect("blocker");

        let err = OutputWriter::new(&public, root.path().join("dist"))
            .write_all(&rendered())
            .unwrap_err();
        assert!(matches!(err, AppError::Io { ref path, .. } if path.ends_with("sitemap-static.xml")));
    }

    #[test]
    fn unwritable_public_dir_is_fatal() {
        let root = tempfile::tempdir().expect("tempdir");
        let blocker = root.path().join("public");
        std::fs::write(&blocker, b"not a directory").expect("blocker file");

        let err = OutputWriter::new(blocker.join("inner"), root.path().join("dist"))
            .target_dirs()
            .unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }

    #[test]
    fn gzip_is_deterministic() {
        let a = gzip(b"<urlset/>").expect("gzip");
        let b = gzip(b"<urlset/>").expect("gzip");
        assert_eq!(a, b);
        assert_eq!(gunzip(&a), b"<urlset/>");
    }

    #[test]
    fn written_file_reports_digest() {
        let root = tempfile::tempdir().expect("tempdir");
        let path = root.path().join("x.xml");
        let file = write_file(&path, b"abc").expect("write");
        assert_eq!(file.bytes, 3);
        assert_eq!(
            file.sha256,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
