//! # Actions
//!
//! Everything that can happen in coursedeck becomes an `Action`.
//! User presses Enter on a card? That's `Action::SelectModule(id)`.
//! User presses `c` on a lesson? That's `Action::MarkComplete(id)`.
//!
//! The `update()` function takes the current state and an action, and
//! returns an `Effect` for the event loop. No side effects here. I/O
//! happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::{debug, info};

use crate::core::catalog::ModuleId;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectModule(ModuleId),
    GoBack,
    MarkComplete(ModuleId),
    MarkIncomplete(ModuleId),
    Quit,
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SelectModule(id) => {
            if app.view.select_module(&app.catalog, id) {
                app.status_message.clear();
            } else {
                info!("Lookup miss for module {}", id);
                app.status_message = format!("Module {id} not found");
            }
            Effect::None
        }
        Action::GoBack => {
            app.view.go_back();
            app.status_message.clear();
            Effect::None
        }
        Action::MarkComplete(id) => {
            if !app.catalog.contains(id) {
                app.status_message = format!("Module {id} not found");
            } else if app.progress.mark_complete(id) {
                info!("Module {} marked complete", id);
                app.status_message = format!("Completed: {}", title_of(app, id));
            }
            Effect::None
        }
        Action::MarkIncomplete(id) => {
            if app.progress.mark_incomplete(id) {
                info!("Module {} marked incomplete", id);
                app.status_message = format!("Reopened: {}", title_of(app, id));
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn title_of(app: &App, id: ModuleId) -> String {
    app.catalog
        .get(id)
        .map(|m| m.title.clone())
        .unwrap_or_else(|| format!("module {id}"))
}
