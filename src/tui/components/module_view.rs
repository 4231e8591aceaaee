//! # ModuleView Component
//!
//! The detail screen for one module: a header (title, subtitle, topics,
//! completion control) over the scrollable lesson body.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ModuleViewState` lives in `TuiState`
//! - `ModuleView` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::{Module, ModuleId};
use crate::core::content;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::markdown;

const BODY_FG: Color = Color::White;

/// Styled lesson text for one module, kept between frames.
struct RenderCache {
    module_id: ModuleId,
    text: Text<'static>,
}

/// Persistent state for the detail screen.
pub struct ModuleViewState {
    pub scroll_state: ScrollViewState,
    /// Wrapped height of the lesson body from the last render.
    pub content_height: u16,
    /// Height of the body viewport from the last render.
    pub viewport_height: u16,
    cache: Option<RenderCache>,
}

impl Default for ModuleViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleViewState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            content_height: 0,
            viewport_height: 0,
            cache: None,
        }
    }

    /// Back to the top; called whenever a module is opened.
    pub fn reset(&mut self) {
        self.scroll_state.set_offset(Position { x: 0, y: 0 });
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    fn scroll_to(&mut self, y: u16) {
        let y = y.min(self.max_offset());
        self.scroll_state.set_offset(Position { x: 0, y });
    }

    fn scroll_by(&mut self, delta: i32) {
        let current = self.scroll_state.offset().y as i32;
        let target = (current + delta).clamp(0, u16::MAX as i32) as u16;
        self.scroll_to(target);
    }

    /// Styled body for `module`, rebuilt only when the module changes.
    fn text_for(&mut self, module: &Module, code_theme: &str) -> Text<'static> {
        match &self.cache {
            Some(cache) if cache.module_id == module.id => cache.text.clone(),
            _ => {
                let blocks = content::render(&module.content);
                let text = markdown::render(&blocks, BODY_FG, code_theme);
                self.cache = Some(RenderCache {
                    module_id: module.id,
                    text: text.clone(),
                });
                text
            }
        }
    }
}

/// High-level events emitted by the detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    Back,
    MarkComplete,
    MarkIncomplete,
}

impl EventHandler for ModuleViewState {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        let page = self.viewport_height.max(1) as i32;
        match event {
            TuiEvent::Back => return Some(DetailEvent::Back),
            TuiEvent::MarkComplete => return Some(DetailEvent::MarkComplete),
            TuiEvent::MarkIncomplete => return Some(DetailEvent::MarkIncomplete),
            TuiEvent::CursorUp | TuiEvent::ScrollUp => self.scroll_by(-1),
            TuiEvent::CursorDown | TuiEvent::ScrollDown => self.scroll_by(1),
            TuiEvent::PageUp => self.scroll_by(-page),
            TuiEvent::PageDown => self.scroll_by(page),
            TuiEvent::Home => self.scroll_to(0),
            TuiEvent::End => self.scroll_to(self.max_offset()),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the detail screen.
pub struct ModuleView<'a> {
    pub state: &'a mut ModuleViewState,
    pub module: &'a Module,
    pub is_complete: bool,
    pub show_topics: bool,
    pub code_theme: &'a str,
}

impl<'a> ModuleView<'a> {
    pub fn new(
        state: &'a mut ModuleViewState,
        module: &'a Module,
        is_complete: bool,
        show_topics: bool,
        code_theme: &'a str,
    ) -> Self {
        Self {
            state,
            module,
            is_complete,
            show_topics,
            code_theme,
        }
    }

    fn header_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            self.module.title.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))];
        if !self.module.subtitle.is_empty() {
            lines.push(Line::from(Span::styled(
                self.module.subtitle.clone(),
                Style::default().add_modifier(Modifier::ITALIC),
            )));
        }
        if self.show_topics && !self.module.topics.is_empty() {
            lines.push(Line::from(Span::styled(
                self.module.topics.join(" · "),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines.push(completion_line(self.is_complete));
        lines
    }
}

/// The completion control. Once complete it reads "Completed"; reopening
/// needs the separate `u` key.
fn completion_line(is_complete: bool) -> Line<'static> {
    if is_complete {
        Line::from(vec![
            Span::styled(
                "✓ Completed",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   [u] reopen", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(Span::styled(
            "[c] Mark complete",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    }
}

impl<'a> Component for ModuleView<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let header = self.header_lines();
        let header_height = header.len() as u16 + 1; // + bottom border
        let [header_area, body_area] =
            Layout::vertical([Constraint::Length(header_height), Constraint::Min(0)]).areas(area);

        let header_block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));
        frame.render_widget(Paragraph::new(header).block(header_block), header_area);

        // Body: wrapped lesson text inside a ScrollView
        let content_width = body_area.width.saturating_sub(3); // scrollbar + 1 col padding each side
        let text = self.state.text_for(self.module, self.code_theme);
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        let content_height = paragraph.line_count(content_width) as u16;

        self.state.content_height = content_height;
        self.state.viewport_height = body_area.height;
        let offset = self.state.scroll_state.offset().y;
        self.state.scroll_to(offset);

        let mut scroll_view = ScrollView::new(Size::new(content_width + 2, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(1, 0, content_width, content_height));

        frame.render_stateful_widget(scroll_view, body_area, &mut self.state.scroll_state);
    }
}
