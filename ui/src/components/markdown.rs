use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Render a one-paragraph Markdown snippet to HTML without the wrapping `<p>`.
pub fn inline_html(source: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);

    let mut html_out = String::new();
    html::push_html(&mut html_out, Parser::new_ext(source, opts));

    let trimmed = html_out.trim_end();
    match trimmed
        .strip_prefix("<p>")
        .and_then(|inner| inner.strip_suffix("</p>"))
    {
        Some(inner) if !inner.contains("<p>") => inner.to_string(),
        _ => trimmed.to_string(),
    }
}

#[component]
pub fn InlineMarkdown(source: &'static str) -> Element {
    let html_content = use_hook(|| inline_html(source));

    rsx! {
        span { dangerous_inner_html: "{html_content}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_lead_in() {
        assert_eq!(
            inline_html("**Important:** read this."),
            "<strong>Important:</strong> read this."
        );
    }

    #[test]
    fn test_plain_text_is_escaped() {
        assert_eq!(inline_html("Terms & Policies"), "Terms &amp; Policies");
    }

    #[test]
    fn test_multiple_paragraphs_keep_their_tags() {
        let out = inline_html("first\n\nsecond");
        assert_eq!(out, "<p>first</p>\n<p>second</p>");
    }
}
