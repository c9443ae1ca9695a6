//! Culture export over real files.

use std::fs;

use largo_curator::export::{build_culture, write_culture};
use largo_curator::{Catalog, CuratorState, Direction};
use tempfile::TempDir;

use crate::helpers::{fixture_state, temp_workspace};

#[test]
fn export_lists_selected_largos_then_uncovered_slimes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("culture.txt");
    let mut state = fixture_state();
    state.move_cursor(Direction::Down);
    state.toggle(); // Pink Rock Largo
    state.move_cursor(Direction::Up);
    state.toggle(); // Boom Rad Largo

    let count = write_culture(&state, &path).unwrap();

    assert_eq!(count, 4);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Boom Rad Largo\nPink Rock Largo\nTabby Slime\nGold Slime\n"
    );
}

#[test]
fn export_without_selection_lists_every_slime() {
    let lines = build_culture(&fixture_state());
    assert_eq!(
        lines,
        [
            "Pink Slime",
            "Rock Slime",
            "Tabby Slime",
            "boom Slime",
            "Rad Slime",
            "Gold Slime",
        ]
    );
}

#[test]
fn empty_largo_catalog_exports_only_slimes() {
    let (temp, work) = temp_workspace(
        Some("[]"),
        Some(r#"[{"type":"Pink","food":{"type":null,"hasCrop":false,"fav":""},"largoable":true,"plot":"Corral","color":"pink"}]"#),
    );
    let catalog = Catalog::load(&work.join("largos.json"), &temp.path().join("slimes.json")).unwrap();
    let state = CuratorState::new(catalog);
    assert!(state.is_empty());

    let path = work.join("culture.txt");
    assert_eq!(write_culture(&state, &path).unwrap(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), "Pink Slime\n");
}

#[test]
fn both_catalogs_empty_exports_empty_file() {
    let (temp, work) = temp_workspace(Some("[]"), Some("[]"));
    let catalog = Catalog::load(&work.join("largos.json"), &temp.path().join("slimes.json")).unwrap();
    let state = CuratorState::new(catalog);

    let path = work.join("culture.txt");
    assert_eq!(write_culture(&state, &path).unwrap(), 0);
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}
