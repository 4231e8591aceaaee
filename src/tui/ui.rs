use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::catalog::ModuleId;
use crate::core::state::App;
use crate::core::view::View;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CatalogList, HelpBar, ModuleView, TitleBar};

/// Title bar, main area, help bar.
fn split(frame_area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame_area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let [title_area, main_area, help_area] = split(frame.area());

    let location = app
        .selected_module()
        .map(|m| m.title.clone())
        .unwrap_or_else(|| "Catalog".to_string());
    TitleBar::new(
        location,
        app.progress_summary(),
        app.progress.completion_ratio(app.catalog.len()),
        app.status_message.clone(),
    )
    .render(frame, title_area);

    match app.view {
        View::Overview => {
            CatalogList::new(
                &mut tui.catalog_list,
                &app.catalog,
                &app.progress,
                tui.show_topics,
            )
            .render(frame, main_area);
        }
        View::ModuleDetail(id) => match app.catalog.get(id) {
            Some(module) => {
                ModuleView::new(
                    &mut tui.module_view,
                    module,
                    app.progress.is_complete(id),
                    tui.show_topics,
                    &tui.code_theme,
                )
                .render(frame, main_area);
            }
            // Unreachable while View's invariant holds; shown rather than blank
            None => draw_not_found(frame, main_area, id),
        },
    }

    HelpBar::new(!app.view.is_overview()).render(frame, help_area);
}

fn draw_not_found(frame: &mut Frame, area: Rect, id: ModuleId) {
    let paragraph = Paragraph::new(format!("Module {id} not found"))
        .style(Style::default().fg(Color::Red))
        .block(Block::bordered().title("Not found"))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Hit test: given a screen Y coordinate, find which catalog card (if any) is there.
pub fn hit_test_card(screen_y: u16, frame_area: Rect, tui: &TuiState) -> Option<usize> {
    let [_title_area, main_area, _help_area] = split(frame_area);

    if screen_y < main_area.y || screen_y >= main_area.y + main_area.height {
        return None;
    }
    tui.catalog_list.hit_test(screen_y - main_area.y)
}
