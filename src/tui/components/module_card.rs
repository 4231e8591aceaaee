use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::core::catalog::Module;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

const TOPIC_SEPARATOR: &str = " · ";

/// One catalog entry: title in the border, subtitle, wrapped description,
/// and a topics line. A `✓` badge marks completed modules.
///
/// Transient: built each frame by `CatalogList` with borrowed data.
#[derive(Clone, Copy)]
pub struct ModuleCard<'a> {
    pub module: &'a Module,
    pub is_selected: bool,
    pub is_complete: bool,
    pub show_topics: bool,
}

impl<'a> ModuleCard<'a> {
    pub fn new(module: &'a Module, is_selected: bool, is_complete: bool, show_topics: bool) -> Self {
        Self {
            module,
            is_selected,
            is_complete,
            show_topics,
        }
    }

    /// Rows this card occupies at `width`, borders included.
    ///
    /// Uses the same wrapping as `body_lines` so the list can lay out cards
    /// without rendering them first.
    pub fn calculate_height(module: &Module, width: u16, show_topics: bool) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return VERTICAL_OVERHEAD + 1;
        }
        let rows = body_lines(module, content_width as usize, show_topics).len() as u16;
        rows.max(1) + VERTICAL_OVERHEAD
    }
}

/// Subtitle, wrapped description, and topics, as plain strings.
fn body_lines(module: &Module, width: usize, show_topics: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if !module.subtitle.is_empty() {
        lines.push(truncate_to_width(&module.subtitle, width));
    }
    if !module.description.is_empty() {
        let options = textwrap::Options::new(width)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);
        lines.extend(
            textwrap::wrap(&module.description, options)
                .into_iter()
                .map(|cow| cow.into_owned()),
        );
    }
    if show_topics && !module.topics.is_empty() {
        lines.push(truncate_to_width(&module.topics.join(TOPIC_SEPARATOR), width));
    }
    lines
}

/// Cut a string to at most `max_width` display columns, ending in `…` if cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

impl<'a> Widget for ModuleCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let accent = if self.is_complete {
            Color::Green
        } else {
            Color::Blue
        };
        let border_style = if self.is_selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(accent).add_modifier(Modifier::DIM)
        };

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    self.module.title.clone(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
            ]))
            .padding(Padding::horizontal(CONTENT_PAD_H));
        if self.is_complete {
            block = block.title(
                Line::from(Span::styled(" ✓ Completed ", Style::default().fg(Color::Green)))
                    .right_aligned(),
            );
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let mut lines = Vec::new();
        let body = body_lines(self.module, width, self.show_topics);
        let has_subtitle = !self.module.subtitle.is_empty();
        let has_topics = self.show_topics && !self.module.topics.is_empty();
        let last = body.len().saturating_sub(1);
        for (i, text) in body.into_iter().enumerate() {
            let style = if i == 0 && has_subtitle {
                Style::default().add_modifier(Modifier::ITALIC)
            } else if i == last && has_topics {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(text, style)));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::module;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_height_counts_subtitle_description_topics() {
        let m = module(1, "Foundations");
        // subtitle + 1 description line + topics + borders
        assert_eq!(ModuleCard::calculate_height(&m, 80, true), 5);
        assert_eq!(ModuleCard::calculate_height(&m, 80, false), 4);
    }

    #[test]
    fn test_height_grows_when_description_wraps() {
        let mut m = module(1, "Foundations");
        m.description = "word ".repeat(40);
        let wide = ModuleCard::calculate_height(&m, 200, true);
        let narrow = ModuleCard::calculate_height(&m, 30, true);
        assert!(narrow > wide);
    }

    #[test]
    fn test_degenerate_width() {
        let m = module(1, "Foundations");
        assert_eq!(ModuleCard::calculate_height(&m, 2, true), 3);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_render_shows_badge_only_when_complete() {
        let m = module(1, "Foundations");
        let height = ModuleCard::calculate_height(&m, 60, true);

        let mut terminal = Terminal::new(TestBackend::new(60, height)).unwrap();
        terminal
            .draw(|f| f.render_widget(ModuleCard::new(&m, false, true, true), f.area()))
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Foundations"));
        assert!(text.contains("Completed"));
        assert!(text.contains("alpha · beta"));

        let mut terminal = Terminal::new(TestBackend::new(60, height)).unwrap();
        terminal
            .draw(|f| f.render_widget(ModuleCard::new(&m, true, false, true), f.area()))
            .unwrap();
        assert!(!buffer_text(&terminal).contains("Completed"));
    }
}
