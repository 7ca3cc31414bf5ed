use std::fmt::Write as _;

use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::escape::escape;

use crate::model::{ContentRoute, SitemapDocument, SitemapIndexDocument};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const IMAGE_NS: &str = "http://www.google.com/schemas/sitemap-image/1.1";

/// `2024-01-15T00:00:00.000Z`
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serialize a `<urlset>`. The image namespace is declared only when needed.
pub fn render_urlset(doc: &SitemapDocument, base_url: &str) -> String {
    let mut out = String::with_capacity(256 + doc.len() * 256);
    out.push_str(XML_DECLARATION);
    out.push('\n');
    if doc.has_images() {
        let _ = writeln!(out, r#"<urlset xmlns="{SITEMAP_NS}" xmlns:image="{IMAGE_NS}">"#);
    } else {
        let _ = writeln!(out, r#"<urlset xmlns="{SITEMAP_NS}">"#);
    }
    for route in &doc.entries {
        render_url(&mut out, route, base_url);
    }
    out.push_str("</urlset>\n");
    out
}

fn render_url(out: &mut String, route: &ContentRoute, base_url: &str) {
    let loc = format!("{base_url}{}", route.path);
    out.push_str("  <url>\n");
    let _ = writeln!(out, "    <loc>{}</loc>", escape(loc.as_str()));
    let _ = writeln!(
        out,
        "    <lastmod>{}</lastmod>",
        format_timestamp(&route.last_modified)
    );
    let _ = writeln!(
        out,
        "    <changefreq>{}</changefreq>",
        route.change_frequency.as_str()
    );
    let _ = writeln!(out, "    <priority>{:.1}</priority>", route.priority);
    if let Some(image) = &route.image {
        out.push_str("    <image:image>\n");
        let _ = writeln!(out, "      <image:loc>{}</image:loc>", escape(image.loc.as_str()));
        let _ = writeln!(out, "      <image:title>{}</image:title>", cdata(&image.title));
        out.push_str("    </image:image>\n");
    }
    out.push_str("  </url>\n");
}

pub fn render_index(index: &SitemapIndexDocument) -> String {
    let mut out = String::with_capacity(256 + index.entries.len() * 160);
    out.push_str(XML_DECLARATION);
    out.push('\n');
    let _ = writeln!(out, r#"<sitemapindex xmlns="{SITEMAP_NS}">"#);
    for entry in &index.entries {
        out.push_str("  <sitemap>\n");
        let _ = writeln!(out, "    <loc>{}</loc>", escape(entry.loc.as_str()));
        let _ = writeln!(
            out,
            "    <lastmod>{}</lastmod>",
            format_timestamp(&entry.last_modified)
        );
        out.push_str("  </sitemap>\n");
    }
    out.push_str("</sitemapindex>\n");
    out
}

/// Wrap text in CDATA, splitting any `]]>` so it cannot close the section early.
fn cdata(text: &str) -> String {
    format!("<![CDATA[{}]]>", text.replace("]]>", "]]]]><![CDATA[>"))
}
