use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use xml::writer::{EmitterConfig, EventWriter, XmlEvent};

use crate::index::INDEX_FILE;
use crate::pipeline::GeneratedArticle;

pub const SITEMAP_FILE: &str = "sitemap.xml";
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

fn page_url(site_url: &str, file_name: &str) -> String {
    format!("{}/{}", site_url.trim_end_matches('/'), file_name)
}

fn write_url<W: Write>(writer: &mut EventWriter<W>, loc: &str) -> xml::writer::Result<()> {
    writer.write(XmlEvent::start_element("url"))?;
    writer.write(XmlEvent::start_element("loc"))?;
    writer.write(XmlEvent::characters(loc))?;
    writer.write(XmlEvent::end_element())?;
    writer.write(XmlEvent::end_element())
}

/// Sitemap protocol 0.9 document: the index page, then each article.
pub fn write_sitemap<W: Write>(sink: W, site_url: &str, articles: &[GeneratedArticle]) -> xml::writer::Result<()> {
    let mut writer = EmitterConfig::new().perform_indent(true).create_writer(sink);
    writer.write(XmlEvent::StartDocument {
        version: xml::common::XmlVersion::Version10,
        encoding: Some("UTF-8"),
        standalone: None,
    })?;
    writer.write(XmlEvent::start_element("urlset").default_ns(SITEMAP_NS))?;

    write_url(&mut writer, &page_url(site_url, INDEX_FILE))?;
    for article in articles {
        write_url(&mut writer, &page_url(site_url, &format!("{}.html", article.slug)))?;
    }

    writer.write(XmlEvent::end_element())
}

pub fn build_sitemap(output_dir: &Path, site_url: &str, articles: &[GeneratedArticle]) -> Result<PathBuf> {
    let sitemap_path = output_dir.join(SITEMAP_FILE);
    let file = File::create(&sitemap_path)
        .with_context(|| format!("failed to create {}", sitemap_path.display()))?;
    write_sitemap(file, site_url, articles)
        .with_context(|| format!("failed to write {}", sitemap_path.display()))?;
    log::debug!("wrote {}", sitemap_path.display());
    Ok(sitemap_path)
}
