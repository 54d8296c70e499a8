//! Two-frontier path merging.
//!
//! Invoked when neither filter matched: the secondary start set got its own
//! frontier search, and every (primary, secondary) path pair is examined for
//! a point of convergence. Parent-convergence (a primary step's candidate
//! set contains an item the secondary path reached) is preferred over
//! node-convergence (both paths reach the same item); both scans take the
//! first match walking the primary path outer, secondary inner. Pairs are
//! scored by their total count of real combination steps and only the pairs
//! tied at the minimum survive.

use tracing::trace;

use crate::path::{Path, PathResult, Step};

struct Convergence {
    index1: usize,
    index2: usize,
    at_parent: bool,
}

fn find_convergence(path1: &Path, path2: &Path) -> Option<Convergence> {
    for (index1, step1) in path1.steps().iter().enumerate() {
        let Some(right) = step1.right.as_ref() else {
            continue;
        };
        for (index2, step2) in path2.steps().iter().enumerate() {
            if right.contains(&step2.to) {
                return Some(Convergence {
                    index1,
                    index2,
                    at_parent: true,
                });
            }
        }
    }
    for (index1, step1) in path1.steps().iter().enumerate() {
        for (index2, step2) in path2.steps().iter().enumerate() {
            if step1.to == step2.to {
                return Some(Convergence {
                    index1,
                    index2,
                    at_parent: false,
                });
            }
        }
    }
    None
}

/// Merge two independently searched path sets at their convergence points,
/// keeping every pair tied at the minimum combination-step count.
///
/// Pairs with no convergence contribute nothing; if no pair converges the
/// result is empty.
pub fn merge_and_evaluate(paths1: &[Path], paths2: &[Path]) -> Vec<PathResult> {
    let mut best: Vec<PathResult> = Vec::new();
    let mut min_score = usize::MAX;

    for path1 in paths1 {
        for path2 in paths2 {
            let Some(convergence) = find_convergence(path1, path2) else {
                continue;
            };

            // Last reached items of the truncated halves.
            let join1 = path1.steps()[convergence.index1].to;
            let anchor2 = path2.steps()[convergence.index2].to;

            let mut head1: Vec<Step> = path1.steps()[..=convergence.index1].to_vec();
            let head2: Vec<Step> = path2.steps()[..=convergence.index2].to_vec();
            let mut tail: Vec<Step> = path1.steps()[convergence.index1 + 1..].to_vec();

            if convergence.at_parent {
                // The secondary path supplies the partner: pin the candidate
                // set down to it.
                if let Some(last) = head1.last_mut() {
                    last.right = Some(vec![anchor2]);
                }
            } else {
                // Same item reached on both sides: bridge the remainder with
                // a synthetic step combining the two arrivals.
                tail.insert(
                    0,
                    Step {
                        left: Some(join1),
                        right: Some(vec![anchor2]),
                        to: join1,
                    },
                );
            }

            let score = head1
                .iter()
                .chain(head2.iter())
                .chain(tail.iter())
                .filter(|step| step.is_combination())
                .count();
            trace!(score, at_parent = convergence.at_parent, "converged pair");

            let result = PathResult {
                path1: Path::from_steps(head1),
                path2: Some(Path::from_steps(head2)),
                converge: Some(Path::from_steps(tail)),
            };
            if score < min_score {
                min_score = score;
                best = vec![result];
            } else if score == min_score {
                best.push(result);
            }
        }
    }

    best
}
