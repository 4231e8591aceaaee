//! Lesson blocks → ratatui `Text` renderer.
//!
//! Consumes the `Block`s produced by `core::content` and styles them for the
//! terminal: headings, bold, italic, inline code, bullet and numbered items,
//! and fenced code blocks (with syntect highlighting when the fence names a
//! known language).

use std::sync::LazyLock;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;

use crate::core::config::DEFAULT_CODE_THEME;
use crate::core::content::{Block, Inline, ListKind};

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Style lesson blocks into owned `Text`.
///
/// `code_theme` names a syntect default theme; unknown names fall back to
/// `base16-ocean.dark`.
pub fn render(blocks: &[Block], base_fg: Color, code_theme: &str) -> Text<'static> {
    let mut w = Writer::new(base_fg, code_theme);
    for block in blocks {
        w.handle(block);
    }
    w.finish()
}

// ── Writer ──────────────────────────────────────────────────────────────────

struct Writer {
    text: Text<'static>,
    base_fg: Color,
    theme: Option<&'static Theme>,
    /// Next number for a run of ordered items. Reset by any other block.
    ordered_next: usize,
    /// Active syntax highlighter for the current fenced block.
    highlighter: Option<HighlightLines<'static>>,
    in_code: bool,
}

impl Writer {
    fn new(base_fg: Color, code_theme: &str) -> Self {
        let theme = THEME_SET
            .themes
            .get(code_theme)
            .or_else(|| THEME_SET.themes.get(DEFAULT_CODE_THEME));
        Self {
            text: Text::default(),
            base_fg,
            theme,
            ordered_next: 1,
            highlighter: None,
            in_code: false,
        }
    }

    fn base_style(&self) -> Style {
        Style::default().fg(self.base_fg)
    }

    fn push_line(&mut self, line: Line<'static>) {
        self.text.lines.push(line);
    }

    // ── Block dispatch ──────────────────────────────────────────────────

    fn handle(&mut self, block: &Block) {
        if !matches!(
            block,
            Block::ListItem {
                kind: ListKind::Ordered,
                ..
            }
        ) {
            self.ordered_next = 1;
        }

        match block {
            Block::Heading { level, inlines } => {
                let hs = heading_style(self.base_fg, *level);
                let mut spans = vec![Span::styled(
                    format!("{} ", "#".repeat(*level as usize)),
                    hs,
                )];
                // Heading text inherits the heading style, not just the prefix
                push_inlines(&mut spans, inlines, hs);
                self.push_line(Line::from(spans));
            }
            Block::ListItem { kind, inlines } => {
                let marker = match kind {
                    ListKind::Unordered => "  • ".to_string(),
                    ListKind::Ordered => {
                        let m = format!("  {}. ", self.ordered_next);
                        self.ordered_next += 1;
                        m
                    }
                };
                let mut spans = vec![Span::styled(marker, Style::default().fg(Color::DarkGray))];
                push_inlines(&mut spans, inlines, self.base_style());
                self.push_line(Line::from(spans));
            }
            Block::Paragraph(inlines) => {
                let mut spans = Vec::new();
                push_inlines(&mut spans, inlines, self.base_style());
                self.push_line(Line::from(spans));
            }
            Block::Spacer => self.push_line(Line::default()),
            Block::CodeStart { lang } => self.open_code(lang.as_deref()),
            Block::CodeLine(line) => self.code_line(line),
            Block::CodeEnd => self.close_code(),
        }
    }

    fn open_code(&mut self, lang: Option<&str>) {
        // Top border: ╭── lang ──  or just ╭──
        let bs = Style::default().fg(Color::DarkGray);
        let top = match lang {
            Some(lang) => Line::from(vec![
                Span::styled("╭── ", bs),
                Span::styled(lang.to_owned(), bs.add_modifier(Modifier::BOLD)),
                Span::styled(" ──", bs),
            ]),
            None => Line::from(Span::styled("╭──", bs)),
        };
        self.push_line(top);

        self.highlighter = match (lang, self.theme) {
            (Some(lang), Some(theme)) => SYNTAX_SET
                .find_syntax_by_token(lang)
                .map(|syn| HighlightLines::new(syn, theme)),
            _ => None,
        };
        self.in_code = true;
    }

    fn code_line(&mut self, raw: &str) {
        // ratatui renders \t as zero-width
        let line = raw.replace('\t', "    ");
        let mut spans = vec![Span::styled("│ ", Style::default().fg(Color::DarkGray))];

        let with_newline = format!("{line}\n");
        let highlighted = self.highlighter.as_mut().and_then(|hl| {
            hl.highlight_line(&with_newline, &SYNTAX_SET).ok().map(|ranges| {
                ranges
                    .into_iter()
                    .filter_map(|(hl_style, frag)| {
                        let content = frag.trim_end_matches('\n');
                        if content.is_empty() {
                            return None;
                        }
                        let fg = Color::Rgb(
                            hl_style.foreground.r,
                            hl_style.foreground.g,
                            hl_style.foreground.b,
                        );
                        Some(Span::styled(content.to_owned(), Style::default().fg(fg)))
                    })
                    .collect::<Vec<_>>()
            })
        });

        match highlighted {
            Some(hl_spans) => spans.extend(hl_spans),
            None => spans.push(Span::styled(line, Style::default().fg(Color::White))),
        }
        self.push_line(Line::from(spans));
    }

    fn close_code(&mut self) {
        self.highlighter = None;
        self.in_code = false;
        self.push_line(Line::from(Span::styled(
            "╰──",
            Style::default().fg(Color::DarkGray),
        )));
    }

    /// Close a fence the source left open so the border doesn't dangle.
    fn finish(mut self) -> Text<'static> {
        if self.in_code {
            self.close_code();
        }
        self.text
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────────

fn push_inlines(spans: &mut Vec<Span<'static>>, inlines: &[Inline], style: Style) {
    for inline in inlines {
        match inline {
            Inline::Text(t) => spans.push(Span::styled(t.clone(), style)),
            Inline::Bold(children) => {
                push_inlines(spans, children, style.add_modifier(Modifier::BOLD))
            }
            Inline::Italic(children) => {
                push_inlines(spans, children, style.add_modifier(Modifier::ITALIC))
            }
            Inline::Code(c) => spans.push(Span::styled(
                c.clone(),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            )),
        }
    }
}

fn heading_style(base_fg: Color, level: u8) -> Style {
    match level {
        1 => Style::default()
            .fg(base_fg)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        2 => Style::default().fg(base_fg).add_modifier(Modifier::BOLD),
        _ => Style::default()
            .fg(base_fg)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
    }
}
