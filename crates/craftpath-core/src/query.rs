//! Query orchestration: search, filter against the secondary set, and merge
//! only as a last resort.

use std::collections::BTreeSet;
use tracing::debug;

use crate::filter::{adjacent_to, encounters, shortest_only};
use crate::graph::{ItemId, RecipeGraph};
use crate::merge::merge_and_evaluate;
use crate::path::{Path, PathResult};
use crate::search::{search, SearchError, SearchOptions};

/// Find minimal combination chains from `start_ids1` to `target`, optionally
/// anchored through `start_ids2`.
///
/// With an empty `start_ids2` this is the shortest-length subset of a plain
/// frontier search. Otherwise the secondary set is tried as an adjacency
/// filter, then as an encounter filter, over the primary results; only when
/// both come up empty does a second frontier search run so the two path sets
/// can be merged at their convergence points.
pub fn find_shortest_paths(
    graph: &RecipeGraph,
    start_ids1: &[ItemId],
    start_ids2: &[ItemId],
    target: ItemId,
    options: &SearchOptions,
) -> Result<Vec<PathResult>, SearchError> {
    let paths1 = search(graph, start_ids1, target, options)?;

    if start_ids2.is_empty() {
        return Ok(wrap(shortest_only(paths1)));
    }

    let anchor: BTreeSet<ItemId> = start_ids2.iter().copied().collect();

    let adjacent = adjacent_to(&paths1, &anchor);
    if !adjacent.is_empty() {
        debug!(kept = adjacent.len(), "secondary set matched by adjacency");
        return Ok(wrap(shortest_only(adjacent)));
    }

    let encountered = encounters(&paths1, &anchor);
    if !encountered.is_empty() {
        debug!(kept = encountered.len(), "secondary set matched by encounter");
        return Ok(wrap(shortest_only(encountered)));
    }

    let paths2 = search(graph, start_ids2, target, options)?;
    Ok(merge_and_evaluate(&paths1, &paths2))
}

fn wrap(paths: Vec<Path>) -> Vec<PathResult> {
    paths.into_iter().map(PathResult::single).collect()
}
