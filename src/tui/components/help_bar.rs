//! Bottom key-hint line. Content depends on the current screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const OVERVIEW_HINTS: &[(&str, &str)] = &[
    ("↑↓", "move"),
    ("Enter", "open"),
    ("q", "quit"),
];

const DETAIL_HINTS: &[(&str, &str)] = &[
    ("↑↓/PgUp/PgDn", "scroll"),
    ("c", "complete"),
    ("u", "reopen"),
    ("Esc", "back"),
    ("q", "quit"),
];

pub struct HelpBar {
    pub on_detail: bool,
}

impl HelpBar {
    pub fn new(on_detail: bool) -> Self {
        Self { on_detail }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.on_detail {
            DETAIL_HINTS
        } else {
            OVERVIEW_HINTS
        }
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(Color::Cyan);
        let desc_style = Style::default().fg(Color::DarkGray);
        let mut spans = Vec::new();
        for (key, desc) in self.hints() {
            spans.push(Span::styled(format!(" {key}"), key_style));
            spans.push(Span::styled(format!(" {desc} "), desc_style));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
