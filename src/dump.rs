use std::fs::{create_dir_all, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Writes `<output_dir>/<slug>.html`, replacing any earlier file of that name.
pub fn dump_article(output_dir: &Path, slug: &str, html: &str) -> Result<PathBuf> {
    let file_path = output_dir.join(format!("{}.html", slug));
    write_page(&file_path, html)?;
    log::debug!("saved {}", file_path.display());
    Ok(file_path)
}

/// Creates parent directories as needed, then truncates and writes.
pub fn write_page(file_path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        create_dir_all(parent)
            .with_context(|| format!("failed to create output directory {}", parent.display()))?;
    }
    let mut file = File::create(file_path)
        .with_context(|| format!("failed to create {}", file_path.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("failed to write {}", file_path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_directory_and_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("generated_articles");

        let path = dump_article(&output_dir, "drowsy-but-awake", "first").unwrap();
        assert_eq!(path, output_dir.join("drowsy-but-awake.html"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first");

        let again = dump_article(&output_dir, "drowsy-but-awake", "second").unwrap();
        assert_eq!(again, path);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn unwritable_target_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "file").unwrap();

        assert!(dump_article(&blocker, "x", "html").is_err());
    }
}
