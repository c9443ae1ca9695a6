//! Selection, filtering and rendering over the fixture catalog.

use std::collections::HashSet;

use largo_curator::config::LayoutConfig;
use largo_curator::curator::filter;
use largo_curator::theme::Theme;
use largo_curator::{Catalog, CuratorState, Direction, Renderer};

use crate::helpers::{fixture_state, load_fixture_catalog, visible_names};

// ============================================================================
// Loading
// ============================================================================

#[test]
fn fixture_catalog_is_sorted_by_primary_type() {
    let catalog = load_fixture_catalog();
    let names: Vec<_> = catalog.largos.iter().map(|l| l.name.as_str()).collect();

    assert_eq!(
        names,
        [
            "Boom Rad Largo",
            "Pink Rock Largo",
            "Pink Tabby Largo",
            "Rock Boom Largo",
            "Tabby Rock Largo",
        ]
    );
    assert_eq!(catalog.slimes.len(), 6);
}

// ============================================================================
// Filter Coverage
// ============================================================================

#[test]
fn filter_matches_coverage_rule_for_every_selection() {
    let catalog = load_fixture_catalog();
    let count = catalog.largos.len();

    for mask in 0u32..(1 << count) {
        let mut largos = catalog.largos.clone();
        let mut slimes = catalog.slimes.clone();
        for (idx, largo) in largos.iter_mut().enumerate() {
            largo.selected = mask & (1 << idx) != 0;
        }

        let covered: HashSet<&str> = largos
            .iter()
            .filter(|l| l.selected)
            .flat_map(|l| l.slime_types.iter().map(String::as_str))
            .collect();
        let expected: Vec<usize> = largos
            .iter()
            .enumerate()
            .filter(|(_, l)| {
                l.selected || l.slime_types.iter().filter(|t| !covered.contains(t.as_str())).count() > 1
            })
            .map(|(idx, _)| idx)
            .collect();

        assert_eq!(
            filter::recompute(&largos, &mut slimes),
            expected,
            "selection mask {:05b}",
            mask
        );
    }
}

#[test]
fn slime_coverage_ignores_case() {
    let mut state = fixture_state();
    state.toggle(); // Boom Rad Largo

    let covered: Vec<_> = state
        .slimes()
        .iter()
        .filter(|s| s.selected)
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(covered, ["boom", "Rad"]);
}

// ============================================================================
// Cursor
// ============================================================================

#[test]
fn toggle_keeps_cursor_on_same_largo_from_any_row() {
    for start in 0..5 {
        let mut state = fixture_state();
        for _ in 0..start {
            state.move_cursor(Direction::Down);
        }
        let name = state.current().unwrap().name.clone();

        state.toggle();

        assert_eq!(state.current().unwrap().name, name, "starting at row {}", start);
        assert!(state.current().unwrap().selected);

        state.toggle();

        assert_eq!(state.current().unwrap().name, name, "untoggle at row {}", start);
        assert_eq!(state.selection(), start);
    }
}

#[test]
fn selecting_hides_entries_explained_by_selection() {
    let mut state = fixture_state();
    state.move_cursor(Direction::Down);

    state.toggle(); // Pink Rock Largo

    assert_eq!(visible_names(&state), ["Boom Rad Largo", "Pink Rock Largo"]);
    assert_eq!(state.selection(), 1);
}

#[test]
fn wraparound_in_both_directions() {
    let mut state = fixture_state();

    state.move_cursor(Direction::Up);
    assert_eq!(state.selection(), state.len() - 1);

    state.move_cursor(Direction::Down);
    assert_eq!(state.selection(), 0);
}

#[test]
fn empty_catalog_cursor_ops_are_noops() {
    let mut state = CuratorState::new(Catalog::default());

    assert!(!state.toggle());
    assert!(!state.move_cursor(Direction::Down));
    assert!(!state.move_cursor(Direction::Up));
    assert_eq!(state.selection(), 0);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn rerender_is_identical() {
    let renderer = Renderer::new(Theme::bands(), LayoutConfig::default()).unwrap();
    let mut state = fixture_state();
    state.move_cursor(Direction::Down);
    state.toggle();

    let first = renderer.render_frame(&state, 132);
    let second = renderer.render_frame(&state, 132);

    assert_eq!(first, second);
}

#[test]
fn frame_shows_cursor_and_food_columns() {
    let renderer = Renderer::new(Theme::bands(), LayoutConfig::default()).unwrap();
    let frame = renderer.render_frame(&fixture_state(), 132);

    assert!(frame.contains(">>>:Boom Rad Largo"));
    assert!(frame.contains("# 2:Pink Rock Largo"));
    assert!(frame.contains("Any food"));
    assert!(frame.contains("Has fav food"));
    assert!(frame.contains("Gold"));
}
