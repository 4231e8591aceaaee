//! # View
//!
//! Which screen is showing. Two states, no terminal state:
//!
//! ```text
//!            select_module(id) [id in catalog]
//!  Overview ─────────────────────────────────▶ ModuleDetail(id)
//!     ▲                                             │
//!     └──────────────── go_back() ──────────────────┘
//! ```
//!
//! `ModuleDetail` only ever holds an id that exists in the catalog; an
//! unknown id leaves the view untouched.

use crate::core::catalog::{ModuleCatalog, ModuleId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Overview,
    ModuleDetail(ModuleId),
}

impl View {
    /// Switch to the detail screen for `id`. Returns `false` (and changes
    /// nothing) if the catalog has no such module.
    pub fn select_module(&mut self, catalog: &ModuleCatalog, id: ModuleId) -> bool {
        if !catalog.contains(id) {
            return false;
        }
        *self = View::ModuleDetail(id);
        true
    }

    pub fn go_back(&mut self) {
        *self = View::Overview;
    }

    pub fn selected(&self) -> Option<ModuleId> {
        match self {
            View::Overview => None,
            View::ModuleDetail(id) => Some(*id),
        }
    }

    pub fn is_overview(&self) -> bool {
        matches!(self, View::Overview)
    }
}
