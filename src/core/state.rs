//! # Application State
//!
//! Core business state for coursedeck. Domain data only; presentation
//! state (selected card, scroll offsets) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Arc<ModuleCatalog>   // read-only, shared
//! ├── view: View                    // overview or module detail
//! ├── progress: ProgressSet         // completed module ids
//! └── status_message: String        // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::catalog::{Module, ModuleCatalog};
use crate::core::progress::ProgressSet;
use crate::core::view::View;

pub struct App {
    pub catalog: Arc<ModuleCatalog>,
    pub view: View,
    pub progress: ProgressSet,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: Arc<ModuleCatalog>) -> Self {
        Self {
            catalog,
            view: View::Overview,
            progress: ProgressSet::new(),
            status_message: String::new(),
        }
    }

    /// The module shown on the detail screen, if any.
    pub fn selected_module(&self) -> Option<&Module> {
        self.view.selected().and_then(|id| self.catalog.get(id))
    }

    /// "3/8 completed" style summary.
    pub fn progress_summary(&self) -> String {
        format!("{}/{} completed", self.progress.len(), self.catalog.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::view::View;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.view, View::Overview);
        assert!(app.progress.is_empty());
        assert!(app.status_message.is_empty());
        assert!(app.selected_module().is_none());
        assert_eq!(app.progress_summary(), "0/3 completed");
    }
}
