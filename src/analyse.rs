use std::fmt::{self, Write};
use std::path::Path;

use crate::catalog::Catalog;
use crate::helpers::format_thousands;
use crate::pipeline::RunReport;

const RULE: &str = "============================================================";

/// Run summary. Potential traffic covers the whole catalog, not only the
/// articles that were generated.
pub fn summary(catalog: &Catalog, report: &RunReport, output_dir: &Path) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "\n{RULE}")?;
    writeln!(out, "GENERATION COMPLETE!")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "\nGenerated: {} articles", report.generated.len())?;
    if !report.failed.is_empty() {
        writeln!(out, "Failed: {} ({})", report.failed.len(), report.failed.join(", "))?;
    }
    writeln!(out, "Location: {}/", output_dir.display())?;
    writeln!(
        out,
        "\nTotal potential monthly traffic: {} visitors",
        format_thousands(catalog.total_monthly_searches())
    )?;
    writeln!(out, "\nNext steps:")?;
    writeln!(out, "1. Review articles in {}/", output_dir.display())?;
    writeln!(out, "2. Upload them to the blog/ directory of your site")?;
    writeln!(out, "3. Submit the sitemap to Google Search Console")?;
    writeln!(out, "\n{RULE}")?;
    Ok(out)
}

/// Catalog listing for the `catalog` subcommand.
pub fn describe_catalog(catalog: &Catalog) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for (i, entry) in catalog.entries().iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {:<45} {:>8}  {}.html",
            i + 1,
            entry.keyword,
            format_thousands(entry.monthly_searches),
            entry.slug()
        )?;
    }
    writeln!(out, "\nTotal keywords: {}", catalog.len())?;
    writeln!(
        out,
        "Total potential monthly traffic: {}",
        format_thousands(catalog.total_monthly_searches())
    )?;
    Ok(out)
}
