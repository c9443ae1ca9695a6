//! Coverage and filtering.
//!
//! A largo stays visible while it still adds at least two slime types the
//! current selection does not cover, or when it is itself selected.

use std::collections::BTreeSet;

use crate::catalog::{Largo, Slime};

/// Slime types covered by the selected largos (case preserved).
pub fn covered_types(largos: &[Largo]) -> BTreeSet<String> {
    largos
        .iter()
        .filter(|largo| largo.selected)
        .flat_map(|largo| largo.slime_types.iter().cloned())
        .collect()
}

/// Whether a largo belongs in the filtered view.
pub fn passes_filter(largo: &Largo, covered: &BTreeSet<String>) -> bool {
    if largo.selected {
        return true;
    }
    let uncovered = largo
        .slime_types
        .iter()
        .filter(|t| !covered.contains(t.as_str()))
        .count();
    uncovered > 1
}

/// Whether a slime type matches any covered type, ignoring case.
pub fn is_covered(slime_type: &str, covered: &BTreeSet<String>) -> bool {
    let wanted = slime_type.to_lowercase();
    covered.iter().any(|c| c.to_lowercase() == wanted)
}

/// Recompute the filtered view and the derived slime flags.
///
/// Returns catalog indices of the visible largos, in catalog order. Every
/// slime's `selected` flag is rewritten from the new coverage.
pub fn recompute(largos: &[Largo], slimes: &mut [Slime]) -> Vec<usize> {
    let covered = covered_types(largos);

    let filtered: Vec<usize> = largos
        .iter()
        .enumerate()
        .filter(|(_, largo)| passes_filter(largo, &covered))
        .map(|(idx, _)| idx)
        .collect();

    for slime in slimes.iter_mut() {
        slime.selected = is_covered(&slime.name, &covered);
    }

    tracing::debug!(
        covered = covered.len(),
        visible = filtered.len(),
        total = largos.len(),
        "recomputed filter"
    );
    filtered
}
