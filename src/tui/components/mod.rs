//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: top bar with location, progress, and status
//! - `HelpBar`: key hints for the current screen
//! - `ModuleCard`: one catalog entry, a plain `Widget` drawn into the list's scroll view
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep persistent state in `TuiState` and emit events:
//! - `CatalogList`: scrollable overview of cards
//! - `ModuleView`: module header plus scrollable lesson body
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (top status bar)
//! ├── help_bar.rs      (bottom key hints)
//! ├── module_card.rs   (single catalog entry)
//! ├── catalog_list.rs  (overview screen)
//! └── module_view.rs   (detail screen)
//! ```

pub mod catalog_list;
pub mod help_bar;
pub mod module_card;
pub mod module_view;
pub mod title_bar;

pub use catalog_list::{CatalogEvent, CatalogList, CatalogListState};
pub use help_bar::HelpBar;
pub use module_view::{DetailEvent, ModuleView, ModuleViewState};
pub use title_bar::TitleBar;
