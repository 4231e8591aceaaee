//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::catalog::{Module, ModuleCatalog, ModuleId};
use crate::core::state::App;

/// A module with placeholder text fields.
pub fn module(id: ModuleId, title: &str) -> Module {
    Module {
        id,
        title: title.to_string(),
        subtitle: format!("{title} subtitle"),
        description: format!("What {title} covers."),
        topics: vec!["alpha".to_string(), "beta".to_string()],
        content: format!("# {title}\n\nSome **bold** text."),
    }
}

/// Three modules with ids 1, 2, 3.
pub fn test_catalog() -> ModuleCatalog {
    ModuleCatalog::new(vec![
        module(1, "Foundations"),
        module(2, "Neural Networks"),
        module(3, "Transformers"),
    ])
    .unwrap()
}

/// Creates a test App over `test_catalog()`.
pub fn test_app() -> App {
    App::new(Arc::new(test_catalog()))
}
