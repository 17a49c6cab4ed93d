//! Standalone HTML page for a snippet.
//!
//! The page is a full document: a heading with the title, then the escaped
//! code in a `<pre>` block. With `linenos` set the code sits in a two-column
//! table whose first column numbers the lines. Language and style surface
//! as CSS classes for client-side colouring.

use std::fmt::Write as _;

use super::Snippet;

/// Render the highlight page for `snippet`.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use snippets::domain::{highlight, Code, NewSnippet, Snippet, SnippetId, UserId};
///
/// let code = Code::new("a < b").expect("code");
/// let snippet = Snippet::new(SnippetId::new(1), UserId::new(1), Utc::now(), NewSnippet::new(code));
/// let page = highlight::render(&snippet);
/// assert!(page.contains("a &lt; b"));
/// ```
pub fn render(snippet: &Snippet) -> String {
    let title = escape(snippet.title().as_str());
    let heading = if title.is_empty() {
        format!("Snippet {}", snippet.id())
    } else {
        title
    };
    let code = escape(snippet.code().as_str());

    let mut page = String::with_capacity(code.len() + 512);
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    let _ = writeln!(page, "<title>{heading}</title>");
    page.push_str("<meta http-equiv=\"content-type\" content=\"text/html; charset=utf-8\">\n");
    page.push_str("</head>\n<body>\n");
    let _ = writeln!(page, "<h2>{heading}</h2>");
    let _ = writeln!(
        page,
        "<div class=\"highlight style-{} language-{}\">",
        snippet.style(),
        snippet.language()
    );
    if snippet.linenos() {
        let numbers = (1..=line_count(snippet.code().as_str()))
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        let _ = write!(
            page,
            "<table class=\"highlighttable\"><tr>\
             <td class=\"linenos\"><pre>{numbers}</pre></td>\
             <td class=\"code\"><pre>{code}</pre></td>\
             </tr></table>\n"
        );
    } else {
        let _ = writeln!(page, "<pre>{code}</pre>");
    }
    page.push_str("</div>\n</body>\n</html>\n");
    page
}

fn line_count(code: &str) -> usize {
    code.lines().count().max(1)
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}
