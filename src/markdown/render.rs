//! Markdown fragment → HTML rendering.
//!
//! Fragments support exactly two constructs beyond plain text: fenced code
//! blocks and inline code spans. Everything else is escaped and passed
//! through with explicit line breaks.

use std::sync::LazyLock;

use regex_lite::Regex;

use super::escape::escape_html;

/// ```` ```lang\n body ``` ````, non-greedy across lines.
static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w*)\n(.*?)```").unwrap());

/// `` `code` `` on already-escaped text.
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// A piece of a fragment, either prose or a protected code block.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Code { language: &'a str, body: &'a str },
}

/// Split a fragment into prose and fenced code blocks, in order.
fn split_code_blocks(fragment: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in FENCED_BLOCK.captures_iter(fragment) {
        let (Some(whole), Some(language), Some(body)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        segments.push(Segment::Text(&fragment[last..whole.start()]));
        segments.push(Segment::Code {
            language: language.as_str(),
            body: body.as_str(),
        });
        last = whole.end();
    }
    segments.push(Segment::Text(&fragment[last..]));

    segments
}

/// Render prose: escape, break lines, then mark up inline code.
fn render_text(text: &str, out: &mut String) {
    let escaped = escape_html(text).replace('\n', "<br/>\n");
    out.push_str(&INLINE_CODE.replace_all(&escaped, "<code>$1</code>"));
}

fn render_code_block(language: &str, body: &str, out: &mut String) {
    out.push_str("<pre><code");
    if !language.is_empty() {
        out.push_str(" class=\"language-");
        out.push_str(language);
        out.push('"');
    }
    out.push('>');
    out.push_str(&escape_html(body.trim_end()));
    out.push_str("</code></pre>");
}

/// Render a stem or choice fragment to HTML.
///
/// Code block bodies are escaped exactly once and never see line-break or
/// inline-code substitution. Inline code spans never reach across a code
/// block.
///
/// # Examples
///
/// ```
/// use mdqti::markdown::render_fragment;
///
/// assert_eq!(render_fragment("Use `x < y`"), "Use <code>x &lt; y</code>");
/// assert_eq!(
///     render_fragment("```rust\nlet a = 1;\n```"),
///     "<pre><code class=\"language-rust\">let a = 1;</code></pre>"
/// );
/// ```
pub fn render_fragment(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len() + fragment.len() / 4);
    for segment in split_code_blocks(fragment) {
        match segment {
            Segment::Text(text) => render_text(text, &mut out),
            Segment::Code { language, body } => render_code_block(language, body, &mut out),
        }
    }
    out
}
