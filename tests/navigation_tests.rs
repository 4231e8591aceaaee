use std::sync::Arc;

use coursedeck::core::action::{Action, Effect, update};
use coursedeck::core::catalog::ModuleCatalog;
use coursedeck::core::state::App;
use coursedeck::core::view::View;

// ============================================================================
// Helper Functions
// ============================================================================

const CATALOG_JSON: &str = r##"[
  { "id": 1, "title": "Intro", "topics": ["basics"], "content": "# Intro" },
  { "id": 3, "title": "Attention", "topics": ["transformers"], "content": "- q\n- k\n- v" },
  { "id": 8, "title": "Evaluation", "content": "1. measure\n2. compare" }
]"##;

fn app() -> App {
    App::new(Arc::new(ModuleCatalog::from_json_str(CATALOG_JSON).unwrap()))
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_select_and_go_back_round_trip() {
    for id in [1, 3, 8, 0, 2, 1000] {
        let mut app = app();
        update(&mut app, Action::SelectModule(id));
        update(&mut app, Action::GoBack);
        assert_eq!(app.view, View::Overview, "id {id}");
    }
}

#[test]
fn test_detail_view_only_holds_catalog_ids() {
    let mut app = app();
    for id in [3, 4, 8, 99, 1] {
        update(&mut app, Action::SelectModule(id));
        if let View::ModuleDetail(selected) = app.view {
            assert!(app.catalog.contains(selected));
        }
    }
    assert_eq!(app.view, View::ModuleDetail(1));
}

#[test]
fn test_lookup_miss_sets_status_and_keeps_view() {
    let mut app = app();
    update(&mut app, Action::SelectModule(3));
    update(&mut app, Action::SelectModule(4));
    assert_eq!(app.view, View::ModuleDetail(3));
    assert_eq!(app.status_message, "Module 4 not found");
}

// ============================================================================
// Progress
// ============================================================================

#[test]
fn test_progress_is_monotonic_under_mark_complete() {
    let mut app = app();
    let mut last = 0;
    for id in [3, 3, 1, 8, 1, 3] {
        update(&mut app, Action::MarkComplete(id));
        assert!(app.progress.len() >= last);
        last = app.progress.len();
        assert!(app.progress.is_complete(id));
    }
    assert_eq!(app.progress.iter().collect::<Vec<_>>(), vec![1, 3, 8]);
}

#[test]
fn test_mark_complete_twice_keeps_single_entry() {
    let mut app = app();
    update(&mut app, Action::MarkComplete(3));
    update(&mut app, Action::MarkComplete(3));
    assert!(app.progress.is_complete(3));
    assert_eq!(app.progress.iter().filter(|&id| id == 3).count(), 1);
}

#[test]
fn test_progress_survives_navigation() {
    let mut app = app();
    update(&mut app, Action::SelectModule(8));
    update(&mut app, Action::MarkComplete(8));
    update(&mut app, Action::GoBack);
    update(&mut app, Action::SelectModule(1));
    assert!(app.progress.is_complete(8));
    assert_eq!(app.progress_summary(), "1/3 completed");
}

#[test]
fn test_quit() {
    let mut app = app();
    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}
