use anyhow::{Context as _, Result};
use tera::Context;

use crate::catalog::slug;
use crate::helpers::title_case;
use crate::templates::{self, ARTICLE_TEMPLATE, END_CTA, INLINE_CTA, TITLE_SUFFIX};

const H2_CLOSE: &str = "</h2>";

/// A complete article page and the file stem it belongs under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedArticle {
    pub html: String,
    pub slug: String,
}

/// Places the inline call to action right after the second `</h2>`.
///
/// Generated text is not guaranteed to have two sections; with fewer than
/// two `</h2>` the block goes after all of the content instead. The end
/// call to action is always appended last.
pub fn insert_calls_to_action(content: &str) -> String {
    let parts: Vec<&str> = content.splitn(3, H2_CLOSE).collect();

    let mut body = String::with_capacity(content.len() + INLINE_CTA.len() + END_CTA.len());
    if let [first, second, rest] = parts.as_slice() {
        body.push_str(first);
        body.push_str(H2_CLOSE);
        body.push_str(second);
        body.push_str(H2_CLOSE);
        body.push_str(INLINE_CTA);
        body.push_str(rest);
    } else {
        body.push_str(content);
        body.push_str(INLINE_CTA);
    }
    body.push_str(END_CTA);
    body
}

/// Wraps generated article text in the full page shell.
///
/// `_monthly_searches` is accepted for symmetry with the index card but
/// does not appear on the article page.
pub fn format_article(keyword: &str, content: &str, _monthly_searches: u64) -> Result<FormattedArticle> {
    let tera = templates::load()?;
    let mut ctx = Context::new();
    ctx.insert("keyword", keyword);
    ctx.insert("title", &title_case(keyword));
    ctx.insert("title_suffix", TITLE_SUFFIX);
    ctx.insert("body", &insert_calls_to_action(content));

    let html = tera
        .render(ARTICLE_TEMPLATE, &ctx)
        .with_context(|| format!("failed to render article page for {:?}", keyword))?;

    Ok(FormattedArticle { html, slug: slug(keyword) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{DISCLAIMER_MARKER, FOOTER_MARKER, INLINE_CTA_MARKER};

    const TWO_SECTIONS: &str =
        "<h1>T</h1><h2>One</h2><p>a</p><h2>Two</h2><p>AFTER-SECOND</p><h2>Three</h2><p>c</p>";

    #[test]
    fn cta_lands_after_second_heading() {
        let body = insert_calls_to_action(TWO_SECTIONS);
        let second_close = body.match_indices(H2_CLOSE).nth(1).unwrap().0;
        let marker = body.find(INLINE_CTA_MARKER).unwrap();
        let after = body.find("<p>AFTER-SECOND</p>").unwrap();

        assert!(marker > second_close);
        assert!(marker < after);
        assert!(body.starts_with("<h1>T</h1><h2>One</h2><p>a</p><h2>Two</h2>"));
        assert!(body.ends_with(END_CTA));
    }

    #[test]
    fn cta_appended_with_one_heading() {
        let content = "<h1>T</h1><h2>Only</h2><p>text</p>";
        let body = insert_calls_to_action(content);
        assert_eq!(body, format!("{content}{INLINE_CTA}{END_CTA}"));
    }

    #[test]
    fn cta_appended_without_headings() {
        let content = "<p>just a paragraph</p>";
        let body = insert_calls_to_action(content);
        assert!(body.starts_with(content));
        assert!(body.find(INLINE_CTA_MARKER).unwrap() > content.len());
    }

    #[test]
    fn exactly_two_headings_splice_before_empty_rest() {
        let content = "<h2>A</h2>x<h2>B</h2>";
        let body = insert_calls_to_action(content);
        assert_eq!(body, format!("{content}{INLINE_CTA}{END_CTA}"));
    }

    #[test]
    fn disclaimer_and_footer_on_every_branch() {
        for content in [TWO_SECTIONS, "<h2>one</h2>", "plain"] {
            let page = format_article("drowsy but awake", content, 5400).unwrap();
            assert!(page.html.contains(DISCLAIMER_MARKER));
            assert!(page.html.contains(FOOTER_MARKER));
            assert!(page.html.contains(INLINE_CTA_MARKER));
            assert!(page.html.contains("Ready for Better Sleep Tonight?"));
        }
    }

    #[test]
    fn page_metadata() {
        let page = format_article("4 month sleep regression", "<p>x</p>", 60500).unwrap();
        assert_eq!(page.slug, "4-month-sleep-regression");
        assert!(page.html.starts_with("<!DOCTYPE html>"));
        assert!(page.html.contains("<title>4 Month Sleep Regression - Complete Guide 2026</title>"));
        assert!(page
            .html
            .contains(r#"<meta name="description" content="Complete guide to 4 month sleep regression."#));
        assert!(page.html.contains(
            r#"<meta name="keywords" content="4 month sleep regression, baby sleep, sleep schedule, sleep training">"#
        ));
        assert!(page.html.contains(r#"href="../css/styles.css""#));
    }

    #[test]
    fn apostrophes_survive_unescaped() {
        let page = format_article("newborn won't sleep", "<p>x</p>", 3600).unwrap();
        assert!(page.html.contains("<title>Newborn Won't Sleep - Complete Guide 2026</title>"));
        assert!(page.html.contains("Complete guide to newborn won't sleep."));
        assert_eq!(page.slug, "newborn-won't-sleep");
    }

    #[test]
    fn quotes_are_escaped_in_attributes() {
        let page = format_article(r#"the "five s" method"#, "<p>x</p>", 1).unwrap();
        assert!(page.html.contains("Complete guide to the &quot;five s&quot; method."));
    }
}
