use ammonia::{Builder, UrlRelative};
use pulldown_cmark::{html, Options, Parser};

/// Renders news markdown to HTML and strips anything unsafe from the result.
pub fn safe_markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);

    let mut raw_html = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut raw_html, parser);

    sanitize_markdown_content(&raw_html)
}

/// Removes scripts, event handlers and relative URLs from user content.
pub fn sanitize_markdown_content(content: &str) -> String {
    Builder::default()
        .link_rel(Some("nofollow noopener noreferrer"))
        .url_relative(UrlRelative::Deny)
        .clean(content)
        .to_string()
}
