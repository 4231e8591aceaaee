use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// Something that draws itself into a region of the frame.
///
/// Props arrive as struct fields (a `&Module`, the `ProgressSet`, a theme
/// name); persistent presentation state is borrowed as `&mut XxxState` so it
/// outlives the per-frame component value.
///
/// `render` takes `&mut self` because the card list and the detail pane
/// record measured heights and clamp scroll offsets while drawing.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Turns raw key/mouse input into a screen-specific event.
pub trait EventHandler {
    /// What the screen reports back to the shell (`CatalogEvent`, `DetailEvent`).
    type Event;

    /// `None` means the input was consumed locally (scrolling) or ignored.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
