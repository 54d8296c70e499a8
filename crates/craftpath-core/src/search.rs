//! Multi-source bounded-leeway breadth-first search over a recipe graph.
//!
//! Every start item seeds its own frontier entry and its own visited ledger.
//! The frontier is a FIFO, so entries come out in non-decreasing path-length
//! order; once a target hit fixes the minimum length, the first entry longer
//! than `min + leeway` ends the whole search. Correct termination depends on
//! that depth ordering — do not swap the queue for a priority structure.
//!
//! The per-seed ledger records the shortest depth at which each item was
//! first reached and prunes strictly-deeper revisits. Items reached again at
//! equal depth are kept: each such path carries a different partner-candidate
//! set, and downstream filters need all of them. The target is exempt from
//! the ledger so every near-shortest arrival at it survives.

use std::collections::{HashMap, HashSet, VecDeque};
use thiserror::Error;
use tracing::debug;

use crate::graph::{ItemId, RecipeGraph};
use crate::path::{Path, Step};

/// Default extra path length beyond the shortest found still included.
pub const DEFAULT_LEEWAY: usize = 1;

/// Tuning knobs for [`search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Paths up to `leeway` steps longer than the shortest found are kept.
    pub leeway: usize,
    /// Hard cap on dequeued frontier entries, for adversarial graphs with
    /// large partner cross-products. `None` disables the check.
    pub step_budget: Option<u64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            leeway: DEFAULT_LEEWAY,
            step_budget: None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("step budget exceeded after {steps} frontier entries")]
    BudgetExceeded { steps: u64 },
}

struct FrontierEntry {
    path: Path,
    /// Items already on this path (cycle guard).
    visited: HashSet<ItemId>,
    seed: ItemId,
}

/// Find all acyclic paths from any item in `start_ids` to `target` with
/// length at most (shortest found + leeway).
///
/// An unreachable target or empty start set yields `Ok(vec![])`, not an
/// error. A start id equal to the target yields a one-step path.
pub fn search(
    graph: &RecipeGraph,
    start_ids: &[ItemId],
    target: ItemId,
    options: &SearchOptions,
) -> Result<Vec<Path>, SearchError> {
    let mut ledgers: HashMap<ItemId, HashMap<ItemId, usize>> =
        start_ids.iter().map(|&seed| (seed, HashMap::new())).collect();

    let mut frontier: VecDeque<FrontierEntry> = start_ids
        .iter()
        .map(|&seed| FrontierEntry {
            path: Path::seeded(seed),
            visited: HashSet::from([seed]),
            seed,
        })
        .collect();

    let mut min_len: Option<usize> = None;
    let mut paths = Vec::new();
    let mut processed: u64 = 0;

    while let Some(entry) = frontier.pop_front() {
        if let Some(budget) = options.step_budget {
            if processed >= budget {
                return Err(SearchError::BudgetExceeded { steps: processed });
            }
        }
        processed += 1;

        let len = entry.path.len();
        if let Some(min) = min_len {
            // FIFO order: everything still queued is at least this long.
            if len > min + options.leeway {
                break;
            }
        }

        let Some(last) = entry.path.last_item() else {
            continue;
        };
        if last == target {
            min_len = Some(min_len.map_or(len, |min| min.min(len)));
            paths.push(entry.path);
            continue;
        }

        // An item with no node has nothing to expand.
        let Some(node) = graph.get(last) else {
            continue;
        };
        let Some(ledger) = ledgers.get_mut(&entry.seed) else {
            continue;
        };
        for (result, partners) in node.recipes() {
            if result != target {
                let depth = len + 1;
                match ledger.get(&result) {
                    Some(&seen) if seen < depth => continue,
                    _ => {
                        ledger.insert(result, depth);
                    }
                }
            }
            if !entry.visited.contains(&result) {
                let mut path = entry.path.clone();
                path.push(Step::combine(last, partners.to_vec(), result));
                let mut visited = entry.visited.clone();
                visited.insert(result);
                frontier.push_back(FrontierEntry {
                    path,
                    visited,
                    seed: entry.seed,
                });
            }
        }
    }

    debug!(
        starts = start_ids.len(),
        target_item = %target,
        found = paths.len(),
        processed,
        "frontier search finished"
    );
    Ok(paths)
}
