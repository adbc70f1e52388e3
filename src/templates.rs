//! Page templates shared by article pages and the blog index.

use html_escape::encode_double_quoted_attribute;
use tera::Tera;

pub const ARTICLE_TEMPLATE: &str = "article.html";
pub const INDEX_TEMPLATE: &str = "index.html";

/// Marker present in the mid-article call to action.
pub const INLINE_CTA_MARKER: &str = "Every Baby is Different";

/// Marker present in the end-of-article disclaimer.
pub const DISCLAIMER_MARKER: &str = "Medical Disclaimer:";

/// Present in both footers.
pub const FOOTER_MARKER: &str = "&copy; 2026 Baby Sleep Optimizer. All rights reserved.";

pub const TITLE_SUFFIX: &str = "Complete Guide 2026";

/// Spliced into generated text, so used outside of tera as well.
pub const INLINE_CTA: &str = include_str!("../templates/partials/inline_cta.html");
pub const END_CTA: &str = include_str!("../templates/partials/end_cta.html");

const SOURCES: [(&str, &str); 9] = [
    (ARTICLE_TEMPLATE, include_str!("../templates/article.html")),
    (INDEX_TEMPLATE, include_str!("../templates/index.html")),
    ("partials/article_style.html", include_str!("../templates/partials/article_style.html")),
    ("partials/nav.html", include_str!("../templates/partials/nav.html")),
    ("partials/disclaimer.html", include_str!("../templates/partials/disclaimer.html")),
    ("partials/article_footer.html", include_str!("../templates/partials/article_footer.html")),
    ("partials/index_footer.html", include_str!("../templates/partials/index_footer.html")),
    ("partials/inline_cta.html", INLINE_CTA),
    ("partials/end_cta.html", END_CTA),
];

/// Escapes `& < > "` only, so apostrophes in keywords stay readable.
fn escape_html(text: &str) -> String {
    encode_double_quoted_attribute(text).into_owned()
}

pub fn load() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(SOURCES)?;
    tera.set_escape_fn(escape_html);
    Ok(tera)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tera::Context;

    #[test]
    fn all_templates_parse() {
        let tera = load().unwrap();
        let names: Vec<&str> = tera.get_template_names().collect();
        assert!(names.contains(&ARTICLE_TEMPLATE));
        assert!(names.contains(&INDEX_TEMPLATE));
    }

    #[test]
    fn keyword_is_escaped_but_body_is_not() {
        let tera = load().unwrap();
        let mut ctx = Context::new();
        ctx.insert("title", "A <b> & 'c'");
        ctx.insert("title_suffix", TITLE_SUFFIX);
        ctx.insert("keyword", "say \"hi\"");
        ctx.insert("body", "<h2>raw</h2>");
        let html = tera.render(ARTICLE_TEMPLATE, &ctx).unwrap();

        assert!(html.contains("<title>A &lt;b&gt; &amp; 'c' - Complete Guide 2026</title>"));
        assert!(html.contains("Complete guide to say &quot;hi&quot;."));
        assert!(html.contains("<h2>raw</h2>"));
        assert!(html.contains(DISCLAIMER_MARKER));
        assert!(html.contains(FOOTER_MARKER));
    }
}
