use coursedeck::core::catalog::ModuleCatalog;
use coursedeck::core::content::{Block, Inline, ListKind, render, render_html};

// ============================================================================
// Helper Functions
// ============================================================================

fn text(s: &str) -> Inline {
    Inline::Text(s.to_string())
}

fn count_fences(blocks: &[Block]) -> (usize, usize) {
    let starts = blocks
        .iter()
        .filter(|b| matches!(b, Block::CodeStart { .. }))
        .count();
    let ends = blocks.iter().filter(|b| matches!(b, Block::CodeEnd)).count();
    (starts, ends)
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_heading_spacer_paragraph_scenario() {
    let blocks = render("# Title\n\nSome **bold** text.");
    assert_eq!(
        blocks,
        vec![
            Block::Heading {
                level: 1,
                inlines: vec![text("Title")],
            },
            Block::Spacer,
            Block::Paragraph(vec![
                text("Some "),
                Inline::Bold(vec![text("bold")]),
                text(" text."),
            ]),
        ]
    );
}

#[test]
fn test_mixed_list_scenario() {
    let blocks = render("- a\n- b\n1. c");
    assert_eq!(
        blocks,
        vec![
            Block::ListItem {
                kind: ListKind::Unordered,
                inlines: vec![text("a")],
            },
            Block::ListItem {
                kind: ListKind::Unordered,
                inlines: vec![text("b")],
            },
            Block::ListItem {
                kind: ListKind::Ordered,
                inlines: vec![text("c")],
            },
        ]
    );
}

#[test]
fn test_bold_before_italic_precedence() {
    assert_eq!(
        render_html("**a*b*c**"),
        "<p><strong>a<em>b</em>c</strong></p>"
    );
}

#[test]
fn test_triple_star_renders_bold_italic() {
    assert_eq!(
        render_html("***x***"),
        "<p><strong><em>x</em></strong></p>"
    );
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_render_is_deterministic_over_builtin_content() {
    let catalog = ModuleCatalog::builtin().unwrap();
    for module in catalog.modules() {
        assert_eq!(render(&module.content), render(&module.content));
        assert_eq!(render_html(&module.content), render_html(&module.content));
    }
}

#[test]
fn test_builtin_fences_are_balanced() {
    let catalog = ModuleCatalog::builtin().unwrap();
    for module in catalog.modules() {
        let (starts, ends) = count_fences(&render(&module.content));
        assert!(starts > 0, "module {} should show code", module.id);
        assert_eq!(starts, ends, "module {}", module.id);
    }
}

#[test]
fn test_fence_parity() {
    for fences in 0..6usize {
        let mut src = String::from("intro\n");
        for i in 0..fences {
            src.push_str("```\n");
            src.push_str(&format!("line {i}\n"));
        }
        let (starts, ends) = count_fences(&render(&src));
        assert_eq!(starts, fences.div_ceil(2), "{fences} fences");
        assert_eq!(ends, fences / 2, "{fences} fences");
    }
}

#[test]
fn test_heading_level_matches_hash_count() {
    for k in 1..=4usize {
        let src = format!("{} Chapter **{k}**", "#".repeat(k));
        match render(&src).as_slice() {
            [Block::Heading { level, inlines }] => {
                assert_eq!(*level as usize, k);
                assert_eq!(
                    inlines,
                    &vec![text("Chapter "), Inline::Bold(vec![text(&k.to_string())])]
                );
            }
            other => panic!("expected one heading for level {k}, got {other:?}"),
        }
    }
}

#[test]
fn test_every_line_produces_output_outside_fences() {
    let src = "plain\n#### four\n##### five\n* star\n  - indented\n42. answer\n\n<html>";
    assert_eq!(render(src).len(), src.lines().count());
}

#[test]
fn test_html_output_is_escaped() {
    let html = render_html("- <script>alert('x')</script>");
    assert_eq!(
        html,
        "<li data-list=\"ul\">&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</li>"
    );
}
