//! # Core Application Logic
//!
//! This module contains coursedeck's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Catalog (modules)    │
//!                    │  • Content (renderer)   │
//!                    │  • State + Action       │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Pure reducer.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │    HTML    │
//!             │  Adapter   │          │  to_html() │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: `Module` records and the read-only `ModuleCatalog`
//! - [`content`]: lesson text → `Block`s
//! - [`progress`]: the session's completed-module set
//! - [`view`]: overview / module-detail navigation
//! - [`state`]: the `App` struct — all application state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: settings file, env, and CLI resolution
//!
//! File reads happen only in `config` and `ModuleCatalog::load`, both at startup.

pub mod action;
pub mod catalog;
pub mod config;
pub mod content;
pub mod progress;
pub mod state;
pub mod view;
