//! # Module Catalog
//!
//! The ordered, immutable list of training modules. Built once at startup
//! and shared read-only (behind an `Arc`) by everything else.
//!
//! ```text
//! ModuleCatalog
//! └── modules: Vec<Module>     // display order = file order
//!     ├── id: ModuleId         // unique, > 0
//!     ├── title / subtitle / description
//!     ├── topics: Vec<String>
//!     └── content: String      // markdown subset, see core::content
//! ```
//!
//! The default catalog is embedded at build time from `assets/modules.json`.
//! A different one can be loaded from any JSON file with the same shape.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Identifier of a module within the catalog.
pub type ModuleId = u32;

const BUILTIN_CATALOG: &str = include_str!("../../assets/modules.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Module {
    pub id: ModuleId,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub content: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Empty,
    InvalidId { title: String },
    DuplicateId(ModuleId),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::Empty => write!(f, "catalog contains no modules"),
            CatalogError::InvalidId { title } => {
                write!(f, "module {title:?} has id 0; ids must be positive")
            }
            CatalogError::DuplicateId(id) => write!(f, "duplicate module id {id}"),
        }
    }
}

impl std::error::Error for CatalogError {}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Clone)]
pub struct ModuleCatalog {
    modules: Vec<Module>,
}

impl ModuleCatalog {
    /// Build a catalog, checking that ids are positive and unique.
    pub fn new(modules: Vec<Module>) -> Result<Self, CatalogError> {
        if modules.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(modules.len());
        for module in &modules {
            if module.id == 0 {
                return Err(CatalogError::InvalidId {
                    title: module.title.clone(),
                });
            }
            if !seen.insert(module.id) {
                return Err(CatalogError::DuplicateId(module.id));
            }
        }

        debug!("Catalog built with {} modules", modules.len());
        Ok(Self { modules })
    }

    /// The catalog shipped inside the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// Parse a JSON array of module records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let modules: Vec<Module> = serde_json::from_str(json).map_err(CatalogError::Parse)?;
        Self::new(modules)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let catalog = Self::from_json_str(&contents)?;
        info!(
            "Loaded {} modules from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn get(&self, id: ModuleId) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn contains(&self, id: ModuleId) -> bool {
        self.get(id).is_some()
    }

    /// Display index of a module, if present.
    pub fn position(&self, id: ModuleId) -> Option<usize> {
        self.modules.iter().position(|m| m.id == id)
    }

    /// Module id at a display index.
    pub fn id_at(&self, index: usize) -> Option<ModuleId> {
        self.modules.get(index).map(|m| m.id)
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::module;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = ModuleCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        // Ids are unique by construction; check they are also ordered as shipped
        let ids: Vec<ModuleId> = catalog.modules().iter().map(|m| m.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert!(catalog.modules().iter().all(|m| !m.content.is_empty()));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = ModuleCatalog::new(vec![module(1, "A"), module(1, "B")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(1)));
    }

    #[test]
    fn test_rejects_zero_id() {
        let err = ModuleCatalog::new(vec![module(0, "Zero")]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidId { .. }));
        assert!(err.to_string().contains("Zero"));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            ModuleCatalog::new(vec![]),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_lookup_and_positions() {
        let catalog =
            ModuleCatalog::new(vec![module(7, "Seven"), module(3, "Three")]).unwrap();
        assert_eq!(catalog.get(3).map(|m| m.title.as_str()), Some("Three"));
        assert!(catalog.get(4).is_none());
        assert_eq!(catalog.position(3), Some(1));
        assert_eq!(catalog.id_at(0), Some(7));
        assert_eq!(catalog.id_at(2), None);
    }

    #[test]
    fn test_sparse_json_fields_default() {
        let json = r#"[{ "id": 5, "title": "Only a title" }]"#;
        let catalog = ModuleCatalog::from_json_str(json).unwrap();
        let m = catalog.get(5).unwrap();
        assert!(m.topics.is_empty());
        assert_eq!(m.subtitle, "");
        assert_eq!(m.content, "");
    }

    #[test]
    fn test_topics_keep_order() {
        let json = r#"[{ "id": 1, "title": "T", "topics": ["z", "a", "m"] }]"#;
        let catalog = ModuleCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.get(1).unwrap().topics, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = ModuleCatalog::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ModuleCatalog::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
