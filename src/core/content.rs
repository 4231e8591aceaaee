//! # Lesson Content Renderer
//!
//! Turns a module's lesson text into structured blocks. The input is a small
//! markdown subset, handled line by line in one forward pass:
//!
//! ```text
//! ```lang        → CodeStart / CodeEnd (toggles the fence, line not emitted)
//! (inside fence) → CodeLine, verbatim
//! # .. ####      → Heading (1-4)
//! - x / * x      → ListItem (unordered)
//! 12. x          → ListItem (ordered, number dropped)
//! (blank)        → Spacer
//! anything else  → Paragraph
//! ```
//!
//! Inline spans (`**bold**`, `*italic*`, `` `code` ``) are found by a small
//! scanner rather than chained substitutions. Bold is tried before italic at
//! every position, so `**a*b*c**` is one bold span with an italic inside;
//! `***x***` is read the same way, as bold around italic.
//!
//! Nothing here can fail: unrecognised syntax becomes paragraph text.
//! The terminal layer (`tui::markdown`) styles the blocks; `to_html` produces
//! an escaped markup string for other hosts.

/// A formatted run of text inside a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(Vec<Inline>),
    Italic(Vec<Inline>),
    Code(String),
}

impl Inline {
    /// The visible characters, with all markers removed.
    pub fn plain_text(&self) -> String {
        match self {
            Inline::Text(t) | Inline::Code(t) => t.clone(),
            Inline::Bold(children) | Inline::Italic(children) => plain_text(children),
        }
    }
}

/// Concatenated visible text of a span sequence.
pub fn plain_text(inlines: &[Inline]) -> String {
    inlines.iter().map(Inline::plain_text).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// One structural element of rendered lesson content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: u8, inlines: Vec<Inline> },
    ListItem {
        kind: ListKind,
        inlines: Vec<Inline>,
    },
    Paragraph(Vec<Inline>),
    Spacer,
    CodeStart { lang: Option<String> },
    CodeLine(String),
    CodeEnd,
}

const FENCE: &str = "```";
const MAX_HEADING_LEVEL: usize = 4;

/// Render lesson text into blocks, in input order.
///
/// A fence left open at end of input produces no `CodeEnd`.
pub fn render(text: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut in_code = false;

    for line in text.lines() {
        let trimmed = line.trim();

        if let Some(info) = trimmed.strip_prefix(FENCE) {
            if in_code {
                blocks.push(Block::CodeEnd);
            } else {
                let lang = info.trim();
                blocks.push(Block::CodeStart {
                    lang: (!lang.is_empty()).then(|| lang.to_string()),
                });
            }
            in_code = !in_code;
            continue;
        }

        if in_code {
            blocks.push(Block::CodeLine(line.to_string()));
            continue;
        }

        blocks.push(render_line(line, trimmed));
    }

    blocks
}

fn render_line(line: &str, trimmed: &str) -> Block {
    if let Some((level, rest)) = heading(line) {
        return Block::Heading {
            level,
            inlines: parse_inlines(rest),
        };
    }
    if let Some(rest) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        return Block::ListItem {
            kind: ListKind::Unordered,
            inlines: parse_inlines(rest),
        };
    }
    if let Some(rest) = ordered_item(trimmed) {
        return Block::ListItem {
            kind: ListKind::Ordered,
            inlines: parse_inlines(rest),
        };
    }
    if trimmed.is_empty() {
        return Block::Spacer;
    }
    Block::Paragraph(parse_inlines(line))
}

/// `#`..`####` followed by a space. Five or more hashes is not a heading.
fn heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=MAX_HEADING_LEVEL).contains(&hashes) {
        return None;
    }
    line[hashes..]
        .strip_prefix(' ')
        .map(|rest| (hashes as u8, rest))
}

/// `<digits>. ` prefix; returns the remainder.
fn ordered_item(trimmed: &str) -> Option<&str> {
    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    trimmed[digits..].strip_prefix(". ")
}

// ── Inline scanner ──────────────────────────────────────────────────────────

/// Split a line into text, bold, italic, and code spans.
///
/// Unmatched or empty markers are kept as literal text.
pub fn parse_inlines(text: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        match match_span(rest) {
            Some((span, consumed)) => {
                if !literal.is_empty() {
                    out.push(Inline::Text(std::mem::take(&mut literal)));
                }
                out.push(span);
                rest = &rest[consumed..];
            }
            None => {
                literal.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    if !literal.is_empty() {
        out.push(Inline::Text(literal));
    }
    out
}

/// Try each span type at the start of `s`: bold, then italic, then code.
/// Returns the span and the number of bytes it consumed.
fn match_span(s: &str) -> Option<(Inline, usize)> {
    // `***x***` is bold wrapping italic
    if let Some(body) = s.strip_prefix("***")
        && let Some(end) = body.find("***")
        && end > 0
    {
        let italic = Inline::Italic(parse_inlines(&body[..end]));
        return Some((Inline::Bold(vec![italic]), end + 6));
    }
    if let Some(body) = s.strip_prefix("**")
        && let Some(end) = body.find("**")
        && end > 0
    {
        return Some((Inline::Bold(parse_inlines(&body[..end])), end + 4));
    }
    if let Some(body) = s.strip_prefix('*')
        && let Some(end) = find_italic_close(body)
        && end > 0
    {
        return Some((Inline::Italic(parse_inlines(&body[..end])), end + 2));
    }
    if let Some(body) = s.strip_prefix('`')
        && let Some(end) = body.find('`')
        && end > 0
    {
        return Some((Inline::Code(body[..end].to_string()), end + 2));
    }
    None
}

/// First `*` that closes an italic span, stepping over complete `**bold**`
/// pairs so bold keeps priority inside italic text.
fn find_italic_close(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'*' {
            i += 1;
            continue;
        }
        if body[i..].starts_with("**")
            && let Some(end) = body[i + 2..].find("**")
            && end > 0
        {
            i += end + 4;
            continue;
        }
        return Some(i);
    }
    None
}

// ── Markup string output ────────────────────────────────────────────────────

/// Render lesson text straight to an HTML fragment.
pub fn render_html(text: &str) -> String {
    to_html(&render(text))
}

/// Serialize blocks as an HTML fragment. All literal text is escaped.
pub fn to_html(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Heading { level, inlines } => {
                out.push_str(&format!("<h{level}>"));
                push_inlines_html(&mut out, inlines);
                out.push_str(&format!("</h{level}>"));
            }
            Block::ListItem { kind, inlines } => {
                let list = match kind {
                    ListKind::Unordered => "ul",
                    ListKind::Ordered => "ol",
                };
                out.push_str(&format!("<li data-list=\"{list}\">"));
                push_inlines_html(&mut out, inlines);
                out.push_str("</li>");
            }
            Block::Paragraph(inlines) => {
                out.push_str("<p>");
                push_inlines_html(&mut out, inlines);
                out.push_str("</p>");
            }
            Block::Spacer => out.push_str("<br/>"),
            Block::CodeStart { lang: Some(lang) } => {
                out.push_str(&format!(
                    "<pre><code class=\"language-{}\">",
                    escape_html(lang)
                ));
            }
            Block::CodeStart { lang: None } => out.push_str("<pre><code>"),
            Block::CodeLine(line) => {
                out.push_str(&escape_html(line));
                out.push('\n');
            }
            Block::CodeEnd => out.push_str("</code></pre>"),
        }
    }
    out
}

fn push_inlines_html(out: &mut String, inlines: &[Inline]) {
    for inline in inlines {
        match inline {
            Inline::Text(t) => out.push_str(&escape_html(t)),
            Inline::Bold(children) => {
                out.push_str("<strong>");
                push_inlines_html(out, children);
                out.push_str("</strong>");
            }
            Inline::Italic(children) => {
                out.push_str("<em>");
                push_inlines_html(out, children);
                out.push_str("</em>");
            }
            Inline::Code(c) => {
                out.push_str("<code>");
                out.push_str(&escape_html(c));
                out.push_str("</code>");
            }
        }
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    #[test]
    fn heading_levels_one_through_four() {
        for k in 1..=4u8 {
            let line = format!("{} Intro *x*", "#".repeat(k as usize));
            let blocks = render(&line);
            assert_eq!(
                blocks,
                vec![Block::Heading {
                    level: k,
                    inlines: vec![text("Intro "), Inline::Italic(vec![text("x")])],
                }],
                "level {k}"
            );
        }
    }

    #[test]
    fn five_hashes_fall_through_to_paragraph() {
        let blocks = render("##### Deep");
        assert_eq!(blocks, vec![Block::Paragraph(vec![text("##### Deep")])]);
    }

    #[test]
    fn hashes_without_space_are_paragraph() {
        let blocks = render("#hashtag");
        assert_eq!(blocks, vec![Block::Paragraph(vec![text("#hashtag")])]);
    }

    #[test]
    fn bullets_and_numbers() {
        let blocks = render("- a\n* b\n  10. c");
        assert_eq!(
            blocks,
            vec![
                Block::ListItem {
                    kind: ListKind::Unordered,
                    inlines: vec![text("a")],
                },
                Block::ListItem {
                    kind: ListKind::Unordered,
                    inlines: vec![text("b")],
                },
                Block::ListItem {
                    kind: ListKind::Ordered,
                    inlines: vec![text("c")],
                },
            ]
        );
    }

    #[test]
    fn number_without_space_is_paragraph() {
        let blocks = render("3.14 is pi");
        assert_eq!(blocks, vec![Block::Paragraph(vec![text("3.14 is pi")])]);
    }

    #[test]
    fn fence_lines_are_not_emitted_and_content_is_verbatim() {
        let blocks = render("```python\n# not a heading\n  **x**\n```");
        assert_eq!(
            blocks,
            vec![
                Block::CodeStart {
                    lang: Some("python".to_string()),
                },
                Block::CodeLine("# not a heading".to_string()),
                Block::CodeLine("  **x**".to_string()),
                Block::CodeEnd,
            ]
        );
    }

    #[test]
    fn unclosed_fence_stays_open() {
        let blocks = render("```\ncode");
        assert_eq!(
            blocks,
            vec![
                Block::CodeStart { lang: None },
                Block::CodeLine("code".to_string()),
            ]
        );
    }

    #[test]
    fn bold_resolves_before_italic() {
        assert_eq!(
            parse_inlines("**a*b*c**"),
            vec![Inline::Bold(vec![
                text("a"),
                Inline::Italic(vec![text("b")]),
                text("c"),
            ])]
        );
    }

    #[test]
    fn triple_star_is_bold_around_italic() {
        assert_eq!(
            parse_inlines("***x***"),
            vec![Inline::Bold(vec![Inline::Italic(vec![text("x")])])]
        );
        assert_eq!(
            parse_inlines("a ***b c*** d"),
            vec![
                text("a "),
                Inline::Bold(vec![Inline::Italic(vec![text("b c")])]),
                text(" d"),
            ]
        );
    }

    #[test]
    fn unclosed_triple_star_falls_back_to_bold() {
        assert_eq!(
            parse_inlines("***x**"),
            vec![Inline::Bold(vec![text("*x")])]
        );
    }

    #[test]
    fn trailing_newline_adds_no_spacer() {
        assert_eq!(render("a\n"), vec![Block::Paragraph(vec![text("a")])]);
        assert_eq!(
            render("a\n\n"),
            vec![Block::Paragraph(vec![text("a")]), Block::Spacer]
        );
        assert_eq!(render(""), Vec::<Block>::new());
    }

    #[test]
    fn italic_can_contain_bold() {
        assert_eq!(
            parse_inlines("*a **b** c*"),
            vec![Inline::Italic(vec![
                text("a "),
                Inline::Bold(vec![text("b")]),
                text(" c"),
            ])]
        );
    }

    #[test]
    fn code_span_is_literal() {
        assert_eq!(
            parse_inlines("use `**kwargs` here"),
            vec![text("use "), Inline::Code("**kwargs".to_string()), text(" here")]
        );
    }

    #[test]
    fn unmatched_markers_stay_literal() {
        assert_eq!(parse_inlines("2 * 3 = 6"), vec![text("2 * 3 = 6")]);
        assert_eq!(parse_inlines("**open"), vec![text("**open")]);
        assert_eq!(parse_inlines("``"), vec![text("``")]);
    }

    #[test]
    fn multibyte_text_survives_scanning() {
        assert_eq!(
            parse_inlines("λ **β** → γ"),
            vec![text("λ "), Inline::Bold(vec![text("β")]), text(" → γ")]
        );
    }

    #[test]
    fn html_escapes_literal_text() {
        let html = render_html("a <b> & \"c\"\n```\nif x < 1:\n```");
        assert_eq!(
            html,
            "<p>a &lt;b&gt; &amp; &quot;c&quot;</p><pre><code>if x &lt; 1:\n</code></pre>"
        );
    }

    #[test]
    fn html_nests_spans() {
        assert_eq!(
            render_html("## **a*b*c** `d`"),
            "<h2><strong>a<em>b</em>c</strong> <code>d</code></h2>"
        );
    }

    #[test]
    fn plain_text_strips_markers() {
        let inlines = parse_inlines("Some **bold** and *it* `x`");
        assert_eq!(plain_text(&inlines), "Some bold and it x");
    }
}
