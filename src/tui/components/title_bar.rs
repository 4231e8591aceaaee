//! # TitleBar Component
//!
//! Top status bar: app name, current screen, session progress, and the
//! latest status message (e.g. "Completed: Transformers", "Module 9 not found").
//!
//! Stateless: all fields are props copied from `App` each frame.
//!
//! The text degrades with the available data:
//!
//! 1. **Status message**: `"coursedeck › Transformers | 2/5 completed (40%) | Completed: Transformers"`
//! 2. **Default**: `"coursedeck › Transformers | 2/5 completed (40%)"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar {
    /// Screen name shown after the app name ("Catalog" or a module title)
    pub location: String,
    /// "N/M completed"
    pub progress_summary: String,
    /// Completed fraction, `0.0..=1.0`
    pub completion: f64,
    /// Transient status from the last action
    pub status_message: String,
}

impl TitleBar {
    pub fn new(
        location: String,
        progress_summary: String,
        completion: f64,
        status_message: String,
    ) -> Self {
        Self {
            location,
            progress_summary,
            completion,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "coursedeck",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" › {}", self.location)),
            Span::styled(" | ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!(
                    "{} ({:.0}%)",
                    self.progress_summary,
                    self.completion * 100.0
                ),
                Style::default().fg(Color::Green),
            ),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
