use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use serde::Serialize;
use tera::Context;

use crate::dump::write_page;
use crate::helpers::{format_thousands, title_case};
use crate::pipeline::GeneratedArticle;
use crate::templates::{self, INDEX_TEMPLATE};

pub const INDEX_FILE: &str = "index.html";

#[derive(Debug, Serialize)]
struct Card<'a> {
    slug: &'a str,
    title: String,
    searches: String,
}

impl<'a> From<&'a GeneratedArticle> for Card<'a> {
    fn from(article: &'a GeneratedArticle) -> Self {
        Card {
            slug: &article.slug,
            title: title_case(&article.keyword),
            searches: format_thousands(article.monthly_searches),
        }
    }
}

/// Blog listing with one card per article, in the order given.
pub fn render_index(articles: &[GeneratedArticle]) -> Result<String> {
    let tera = templates::load()?;
    let cards: Vec<Card> = articles.iter().map(Card::from).collect();
    let mut ctx = Context::new();
    ctx.insert("cards", &cards);
    tera.render(INDEX_TEMPLATE, &ctx)
        .with_context(|| "failed to render blog index")
}

/// Writes `<output_dir>/index.html`, always replacing it.
pub fn build_index(output_dir: &Path, articles: &[GeneratedArticle]) -> Result<PathBuf> {
    let index_path = output_dir.join(INDEX_FILE);
    write_page(&index_path, &render_index(articles)?)?;
    log::debug!("wrote {} with {} articles", index_path.display(), articles.len());
    Ok(index_path)
}
