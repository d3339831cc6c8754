//! HTML escaping for rendered fragments.

/// Escape the characters that are significant in HTML text content.
///
/// Quotes are left alone: fragments only ever land in element content,
/// never in attribute values.
///
/// # Examples
///
/// ```
/// use mdqti::markdown::escape_html;
///
/// assert_eq!(escape_html("1 < 2 && 3 > 2"), "1 &lt; 2 &amp;&amp; 3 &gt; 2");
/// assert_eq!(escape_html(r#"print("Hello")"#), r#"print("Hello")"#);
/// ```
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 10);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}
