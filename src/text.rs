//! Text Helpers
//!
//! Escaping and search-term highlighting for markup built on the client.

use regex::{Regex, RegexBuilder};

/// Escape text for use in HTML content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Case-insensitive literal matcher for a search query
pub fn search_pattern(query: &str) -> Option<Regex> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Escaped `text` with every match wrapped in `<mark>`
pub fn highlight(text: &str, pattern: &Regex) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for m in pattern.find_iter(text) {
        out.push_str(&escape_html(&text[last..m.start()]));
        out.push_str("<mark>");
        out.push_str(&escape_html(m.as_str()));
        out.push_str("</mark>");
        last = m.end();
    }
    out.push_str(&escape_html(&text[last..]));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<b onclick="x">&'"#), "&lt;b onclick=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_highlight_is_case_insensitive() {
        let re = search_pattern("rust").unwrap();
        assert_eq!(highlight("Rust and rust", &re), "<mark>Rust</mark> and <mark>rust</mark>");
    }

    #[test]
    fn test_highlight_treats_query_literally() {
        let re = search_pattern("c++").unwrap();
        assert_eq!(highlight("C++ <api>", &re), "<mark>C++</mark> &lt;api&gt;");
    }

    #[test]
    fn test_highlight_does_not_touch_entities() {
        let re = search_pattern("amp").unwrap();
        assert_eq!(highlight("a & b", &re), "a &amp; b");
    }

    #[test]
    fn test_blank_query_has_no_pattern() {
        assert!(search_pattern("   ").is_none());
    }
}
