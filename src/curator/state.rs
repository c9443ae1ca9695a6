//! Curator state management
//!
//! Contains the central `CuratorState` struct that holds the catalog, the
//! filtered view and the cursor, as well as shared types used across the
//! input and render modules.

use std::collections::BTreeSet;

use crate::catalog::{Catalog, Largo, Slime};
use crate::curator::filter;

/// Result of processing an input command.
///
/// This enum is returned by the dispatcher to signal control flow
/// decisions to the session loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Nothing changed, keep reading input
    Continue,
    /// State changed, redraw the frame
    Redraw,
    /// Culture file written with this many lines
    Exported(usize),
    /// Leave the session
    Quit,
}

/// Cursor movement direction in list order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards index 0
    Up,
    /// Towards the end of the list
    Down,
}

impl Direction {
    fn step(self) -> isize {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

/// Central state for a curation session.
///
/// The filtered view holds catalog indices, so a largo's identity survives
/// re-filtering. `selection` always indexes `filtered`.
#[derive(Debug)]
pub struct CuratorState {
    catalog: Catalog,
    filtered: Vec<usize>,
    selection: usize,
}

impl CuratorState {
    /// Create the state for a freshly loaded catalog.
    pub fn new(mut catalog: Catalog) -> Self {
        let filtered = filter::recompute(&catalog.largos, &mut catalog.slimes);
        Self {
            catalog,
            filtered,
            selection: 0,
        }
    }

    /// Cursor position within the filtered view.
    pub fn selection(&self) -> usize {
        self.selection
    }

    /// Number of visible largos.
    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    /// Whether the filtered view is empty.
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// Visible largos in display order.
    pub fn filtered_largos(&self) -> impl Iterator<Item = &Largo> + '_ {
        self.filtered.iter().map(|&idx| &self.catalog.largos[idx])
    }

    /// The largo under the cursor, if any.
    pub fn current(&self) -> Option<&Largo> {
        self.filtered
            .get(self.selection)
            .map(|&idx| &self.catalog.largos[idx])
    }

    /// All slimes with their derived `selected` flag.
    pub fn slimes(&self) -> &[Slime] {
        &self.catalog.slimes
    }

    /// Slime types covered by the current selection.
    pub fn covered_types(&self) -> BTreeSet<String> {
        filter::covered_types(&self.catalog.largos)
    }

    /// Toggle selection of the largo under the cursor.
    ///
    /// The cursor follows the toggled largo to its new position, or falls
    /// back to the top when it left the view.
    ///
    /// Returns true if anything changed.
    pub fn toggle(&mut self) -> bool {
        let Some(&target) = self.filtered.get(self.selection) else {
            return false;
        };

        let largo = &mut self.catalog.largos[target];
        largo.selected = !largo.selected;
        tracing::debug!(largo = %largo.name, selected = largo.selected, "toggled");

        self.filtered = filter::recompute(&self.catalog.largos, &mut self.catalog.slimes);
        self.selection = self
            .filtered
            .iter()
            .position(|&idx| idx == target)
            .unwrap_or(0);
        true
    }

    /// Move the cursor one step, wrapping at both ends.
    ///
    /// Returns true if the cursor could move (view not empty).
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        let len = self.filtered.len() as isize;
        if len == 0 {
            return false;
        }
        let next = ((self.selection as isize + direction.step()) % len + len) % len;
        self.selection = next as usize;
        true
    }
}
