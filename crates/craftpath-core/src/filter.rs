//! Filters that narrow a searched path set against a secondary item set.

use std::collections::BTreeSet;

use crate::graph::ItemId;
use crate::path::Path;

/// Keep paths with at least one step whose partner candidates intersect
/// `ids`. Kept paths are returned with every intersecting step's candidate
/// set narrowed to the intersection; the input is left untouched.
pub fn adjacent_to(paths: &[Path], ids: &BTreeSet<ItemId>) -> Vec<Path> {
    let mut kept = Vec::new();
    for path in paths {
        let mut narrowed = path.clone();
        let mut valid = false;
        for step in narrowed.steps_mut() {
            let Some(right) = step.right.as_mut() else {
                continue;
            };
            let intersection: Vec<ItemId> =
                right.iter().copied().filter(|id| ids.contains(id)).collect();
            if !intersection.is_empty() {
                *right = intersection;
                valid = true;
            }
        }
        if valid {
            kept.push(narrowed);
        }
    }
    kept
}

/// Keep paths that reach a member of `ids` along the way.
///
/// Steps without a candidate set are skipped before the membership check, so
/// a path merely seeded inside `ids` does not count as an encounter.
pub fn encounters(paths: &[Path], ids: &BTreeSet<ItemId>) -> Vec<Path> {
    paths
        .iter()
        .filter(|path| {
            path.steps()
                .iter()
                .any(|step| step.right.is_some() && ids.contains(&step.to))
        })
        .cloned()
        .collect()
}

/// Minimal-length subset of a path set. Empty input stays empty.
pub fn shortest_only(paths: Vec<Path>) -> Vec<Path> {
    let Some(min) = paths.iter().map(Path::len).min() else {
        return paths;
    };
    paths.into_iter().filter(|path| path.len() == min).collect()
}
