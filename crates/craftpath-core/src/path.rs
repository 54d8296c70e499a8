//! Path and step value types shared by the search, filter, and merge layers.
//!
//! Paths are transient per-query values: the search produces them, the
//! filters and merger reshape them, and the rendering layer consumes them.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::graph::ItemId;

/// One link in a combination chain.
///
/// The first step of every path is a seed carrying only `to` (the start
/// item). Every later step records the item it extended from (`left`), the
/// partner candidates known to combine with it (`right`), and the produced
/// item (`to`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub left: Option<ItemId>,
    pub right: Option<Vec<ItemId>>,
    pub to: ItemId,
}

impl Step {
    pub fn seed(to: ItemId) -> Self {
        Self {
            left: None,
            right: None,
            to,
        }
    }

    pub fn combine(left: ItemId, partners: Vec<ItemId>, to: ItemId) -> Self {
        Self {
            left: Some(left),
            right: Some(partners),
            to,
        }
    }

    /// Real combination steps carry a `left`; seed steps do not. Bridging
    /// steps introduced by the merger count as combinations.
    pub fn is_combination(&self) -> bool {
        self.left.is_some()
    }
}

/// An ordered chain of steps from a seed to a reached item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    /// A one-step path holding only the seed.
    pub fn seeded(seed: ItemId) -> Self {
        Self {
            steps: vec![Step::seed(seed)],
        }
    }

    pub fn from_steps(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Step count, seed included.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub(crate) fn steps_mut(&mut self) -> &mut [Step] {
        &mut self.steps
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// The item this path was seeded from.
    pub fn seed_id(&self) -> Option<ItemId> {
        self.steps.first().map(|step| step.to)
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// The most recently reached item.
    pub fn last_item(&self) -> Option<ItemId> {
        self.steps.last().map(|step| step.to)
    }

    /// Count of real combination steps (seed excluded).
    pub fn combination_count(&self) -> usize {
        self.steps.iter().filter(|step| step.is_combination()).count()
    }

    /// True when no reached item repeats along the chain.
    pub fn is_acyclic(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.steps.len());
        self.steps.iter().all(|step| seen.insert(step.to))
    }
}

/// One query answer: a primary path, plus the secondary path and the joined
/// remainder when the answer came from the merger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResult {
    pub path1: Path,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path2: Option<Path>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converge: Option<Path>,
}

impl PathResult {
    /// Wrap a directly searched path (no merge involved).
    pub fn single(path1: Path) -> Self {
        Self {
            path1,
            path2: None,
            converge: None,
        }
    }

    /// Total combination steps across all segments.
    pub fn combination_count(&self) -> usize {
        self.path1.combination_count()
            + self.path2.as_ref().map_or(0, Path::combination_count)
            + self.converge.as_ref().map_or(0, Path::combination_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> ItemId {
        ItemId::new(raw)
    }

    #[test]
    fn test_seed_step_has_no_sides() {
        let step = Step::seed(id(4));
        assert!(!step.is_combination());
        assert_eq!(step.left, None);
        assert_eq!(step.right, None);
        assert_eq!(step.to, id(4));
    }

    #[test]
    fn test_path_accessors() {
        let mut path = Path::seeded(id(1));
        path.push(Step::combine(id(1), vec![id(2)], id(3)));

        assert_eq!(path.len(), 2);
        assert_eq!(path.seed_id(), Some(id(1)));
        assert_eq!(path.last_item(), Some(id(3)));
        assert_eq!(path.combination_count(), 1);
        assert!(path.is_acyclic());
    }

    #[test]
    fn test_cycle_detection() {
        let path = Path::from_steps(vec![
            Step::seed(id(1)),
            Step::combine(id(1), vec![id(2)], id(3)),
            Step::combine(id(3), vec![id(4)], id(1)),
        ]);
        assert!(!path.is_acyclic());
    }

    #[test]
    fn test_result_serializes_without_absent_segments() {
        let result = PathResult::single(Path::seeded(id(1)));
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("path2").is_none());
        assert!(json.get("converge").is_none());
    }
}
