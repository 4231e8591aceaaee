//! # Progress
//!
//! Which modules the user has marked complete this session. Lives only in
//! memory and is discarded on exit.

use std::collections::BTreeSet;

use crate::core::catalog::ModuleId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressSet {
    completed: BTreeSet<ModuleId>,
}

impl ProgressSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a module complete. Returns `true` if it was not already complete.
    pub fn mark_complete(&mut self, id: ModuleId) -> bool {
        self.completed.insert(id)
    }

    /// Clear a module's completion. Returns `true` if it had been complete.
    ///
    /// Only reachable through its own key binding; marking complete is one-way.
    pub fn mark_incomplete(&mut self, id: ModuleId) -> bool {
        self.completed.remove(&id)
    }

    pub fn is_complete(&self, id: ModuleId) -> bool {
        self.completed.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Completed ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = ModuleId> + '_ {
        self.completed.iter().copied()
    }

    /// Fraction of `total` modules completed, clamped to `0.0..=1.0`.
    pub fn completion_ratio(&self, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        (self.len() as f64 / total as f64).min(1.0)
    }
}
