use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;

const DEFAULT_CATALOG: &str = include_str!("../catalog.yaml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub monthly_searches: u64,
}

impl KeywordEntry {
    pub fn new(keyword: &str, monthly_searches: u64) -> Self {
        KeywordEntry { keyword: keyword.to_owned(), monthly_searches }
    }

    pub fn slug(&self) -> String {
        slug(&self.keyword)
    }
}

/// Lowercases and swaps each space for a hyphen. Punctuation is kept as-is.
pub fn slug(keyword: &str) -> String {
    keyword.to_lowercase().replace(' ', "-")
}

/// A slug must name a file directly inside the output directory.
fn is_safe_file_stem(slug: &str) -> bool {
    !slug.contains(['/', '\\', '\0']) && !slug.contains("..")
}

/// Ordered keyword targets. Order is processing order.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<KeywordEntry>,
}

impl Catalog {
    pub fn embedded() -> Result<Catalog, CatalogError> {
        Catalog::from_yaml(DEFAULT_CATALOG)
    }

    pub fn load(path: &Path) -> Result<Catalog, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Catalog::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> Result<Catalog, CatalogError> {
        let entries: Vec<KeywordEntry> = serde_yaml_ng::from_str(text)?;
        Catalog::new(entries)
    }

    /// Rejects empty catalogs, blank keywords, keywords whose file would land
    /// outside the output directory, and keywords that would overwrite each
    /// other's output file.
    pub fn new(entries: Vec<KeywordEntry>) -> Result<Catalog, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen: HashMap<String, &str> = HashMap::new();
        for (index, entry) in entries.iter().enumerate() {
            if entry.keyword.trim().is_empty() {
                return Err(CatalogError::EmptyKeyword { index });
            }
            let slug = entry.slug();
            if !is_safe_file_stem(&slug) {
                return Err(CatalogError::UnsafeKeyword { keyword: entry.keyword.clone() });
            }
            if let Some(first) = seen.get(&slug) {
                return Err(CatalogError::SlugCollision {
                    first: first.to_string(),
                    second: entry.keyword.clone(),
                    slug,
                });
            }
            seen.insert(slug, &entry.keyword);
        }

        Ok(Catalog { entries })
    }

    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over every entry, generated or not.
    pub fn total_monthly_searches(&self) -> u64 {
        self.entries.iter().map(|entry| entry.monthly_searches).sum()
    }
}
