use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;

use crate::catalog::{Catalog, KeywordEntry};
use crate::dump::dump_article;
use crate::format::format_article;
use crate::helpers::{create_progress_bar, format_thousands};
use crate::index::build_index;
use crate::requester::ArticleSource;
use crate::sitemap::build_sitemap;

/// One article that was generated and written during this run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArticle {
    pub keyword: String,
    pub slug: String,
    pub monthly_searches: u64,
    pub source_file_path: PathBuf,
}

impl GeneratedArticle {
    pub fn new(entry: &KeywordEntry, source_file_path: PathBuf) -> Self {
        GeneratedArticle {
            keyword: entry.keyword.clone(),
            slug: entry.slug(),
            monthly_searches: entry.monthly_searches,
            source_file_path,
        }
    }
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub generated: Vec<GeneratedArticle>,
    pub failed: Vec<String>,
}

/// Output locations shared by `generate` and `index`.
#[derive(Debug, Clone)]
pub struct Site<'a> {
    pub output_dir: &'a Path,
    pub site_url: Option<&'a str>,
}

impl Site<'_> {
    /// Rewrites index.html, and sitemap.xml when a site URL is known.
    pub fn publish(&self, articles: &[GeneratedArticle]) -> Result<()> {
        build_index(self.output_dir, articles)?;
        if let Some(site_url) = self.site_url {
            build_sitemap(self.output_dir, site_url, articles)?;
        }
        Ok(())
    }
}

/// Generates every catalog entry in order, one request at a time.
///
/// After each success, except on the last entry, `sleep(delay)` is called
/// before the next request. Failed entries are skipped without a pause.
/// Filesystem errors abort the run.
pub fn generate_all<S, F>(
    catalog: &Catalog,
    source: &mut S,
    output_dir: &Path,
    delay: Duration,
    mut sleep: F,
) -> Result<RunReport>
where
    S: ArticleSource,
    F: FnMut(Duration),
{
    let total = catalog.len();
    let progress_bar = create_progress_bar(total as u64, "Generating articles");
    let mut report = RunReport::default();

    for (i, entry) in catalog.entries().iter().enumerate() {
        let position = i + 1;
        progress_bar.suspend(|| {
            println!("\n[{}/{}] Processing: {}", position, total, entry.keyword);
            println!("Monthly searches: {}", format_thousands(entry.monthly_searches));
        });

        match source.generate(entry) {
            Some(content) => {
                let page = format_article(&entry.keyword, &content, entry.monthly_searches)?;
                let path = dump_article(output_dir, &page.slug, &page.html)?;
                progress_bar.suspend(|| println!("✓ Saved: {}", path.display()));
                report.generated.push(GeneratedArticle::new(entry, path));

                if position < total {
                    progress_bar.suspend(|| println!("Waiting {} seconds...", delay.as_secs()));
                    sleep(delay);
                }
            }
            None => {
                progress_bar.suspend(|| println!("✗ Failed to generate article"));
                report.failed.push(entry.keyword.clone());
            }
        }
        progress_bar.inc(1);
    }

    progress_bar.finish_and_clear();
    Ok(report)
}

/// Articles of `catalog` whose page already exists in `output_dir`.
pub fn existing_articles(catalog: &Catalog, output_dir: &Path) -> Vec<GeneratedArticle> {
    catalog
        .entries()
        .iter()
        .filter_map(|entry| {
            let path = output_dir.join(format!("{}.html", entry.slug()));
            path.is_file().then(|| GeneratedArticle::new(entry, path))
        })
        .collect()
}
