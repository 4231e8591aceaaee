//! # CatalogList Component
//!
//! Scrollable column of module cards for the overview screen.
//!
//! ## Responsibilities
//!
//! - Render one `ModuleCard` per catalog entry
//! - Track the highlighted card and keep it in view
//! - Cache card heights for layout and mouse hit testing
//!
//! `CatalogList` is a transient component (created each frame) that wraps
//! `&'a mut CatalogListState` (persistent state) and the catalog (props).

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::catalog::ModuleCatalog;
use crate::core::progress::ProgressSet;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::module_card::ModuleCard;
use crate::tui::event::TuiEvent;

/// Cards skipped by PageUp/PageDown.
const PAGE_STEP: usize = 5;

/// Persistent state for the overview list.
pub struct CatalogListState {
    pub scroll_state: ScrollViewState,
    /// Index of the highlighted card.
    pub selected: usize,
    /// Number of cards (refreshed each render).
    pub len: usize,
    /// Card heights from the last render.
    pub heights: Vec<u16>,
    /// Running totals of `heights`, for hit testing.
    pub prefix_heights: Vec<u16>,
    pub viewport_height: u16,
}

impl Default for CatalogListState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            selected: 0,
            len: 0,
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            viewport_height: 0,
        }
    }

    fn select(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        self.selected = index.min(self.len - 1);
        self.scroll_to_selected();
    }

    fn rebuild_prefix_heights(&mut self) {
        let mut total = 0u16;
        self.prefix_heights = self
            .heights
            .iter()
            .map(|h| {
                total = total.saturating_add(*h);
                total
            })
            .collect();
    }

    /// Scroll the viewport so the selected card is fully visible.
    /// If the card is taller than the viewport, align its top edge.
    pub fn scroll_to_selected(&mut self) {
        let idx = self.selected;
        if idx >= self.prefix_heights.len() {
            return;
        }
        let item_top = if idx == 0 {
            0
        } else {
            self.prefix_heights[idx - 1]
        };
        let item_bottom = self.prefix_heights[idx];
        let offset_y = self.scroll_state.offset().y;

        if item_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: item_top });
        } else if item_bottom > offset_y + self.viewport_height {
            let new_y = item_bottom
                .saturating_sub(self.viewport_height)
                .min(item_top);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    /// Card index at a row relative to the top of the list's viewport.
    pub fn hit_test(&self, row_in_viewport: u16) -> Option<usize> {
        let content_y = row_in_viewport.saturating_add(self.scroll_state.offset().y);
        self.prefix_heights.iter().position(|&bottom| content_y < bottom)
    }
}

/// High-level events emitted by the overview list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEvent {
    /// Open the card at this display index.
    Open(usize),
}

impl EventHandler for CatalogListState {
    type Event = CatalogEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CatalogEvent> {
        match event {
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.select(self.selected + 1);
                None
            }
            TuiEvent::PageUp => {
                self.select(self.selected.saturating_sub(PAGE_STEP));
                None
            }
            TuiEvent::PageDown => {
                self.select(self.selected + PAGE_STEP);
                None
            }
            TuiEvent::Home => {
                self.select(0);
                None
            }
            TuiEvent::End => {
                self.select(self.len.saturating_sub(1));
                None
            }
            TuiEvent::Select if self.len > 0 => Some(CatalogEvent::Open(self.selected)),
            _ => None,
        }
    }
}

/// Overview list component.
/// Created fresh each frame with references to state and data.
pub struct CatalogList<'a> {
    pub state: &'a mut CatalogListState,
    pub catalog: &'a ModuleCatalog,
    pub progress: &'a ProgressSet,
    pub show_topics: bool,
}

impl<'a> CatalogList<'a> {
    pub fn new(
        state: &'a mut CatalogListState,
        catalog: &'a ModuleCatalog,
        progress: &'a ProgressSet,
        show_topics: bool,
    ) -> Self {
        Self {
            state,
            catalog,
            progress,
            show_topics,
        }
    }
}

impl<'a> Component for CatalogList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let modules = self.catalog.modules();

        // 1. Layout cache
        self.state.len = modules.len();
        self.state.selected = self.state.selected.min(modules.len().saturating_sub(1));
        self.state.heights = modules
            .iter()
            .map(|m| ModuleCard::calculate_height(m, content_width, self.show_topics))
            .collect();
        self.state.rebuild_prefix_heights();
        self.state.viewport_height = area.height;
        let total_height = self.state.prefix_heights.last().copied().unwrap_or(0);

        // 2. Keep selection visible after resizes
        self.state.scroll_to_selected();

        // 3. Render cards into a ScrollView
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (i, module) in modules.iter().enumerate() {
            let height = self.state.heights[i];
            let card = ModuleCard::new(
                module,
                i == self.state.selected,
                self.progress.is_complete(module.id),
                self.show_topics,
            );
            scroll_view.render_widget(card, Rect::new(0, y_offset, content_width, height));
            y_offset = y_offset.saturating_add(height);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
