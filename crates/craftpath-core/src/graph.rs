//! Recipe graph: items and the binary combination edges between them.
//!
//! The graph is pure data. It knows which partners combine with an item to
//! produce which result, and nothing about how chains are searched. Edges are
//! directional in storage: `add_recipe(a, b, r)` records the recipe on `a`'s
//! node only, so symmetric recipes need both directions added explicitly.
//! Once a query starts the graph is only read.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use thiserror::Error;

/// Compact item identifier (4 bytes, usable as a JSON map key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(transparent)]
pub struct ItemId(u32);

// The on-disk JSON encodes ids as numeric strings everywhere (map keys and
// partner lists alike), so deserialization accepts both strings and numbers.
impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ItemIdVisitor;

        impl serde::de::Visitor<'_> for ItemIdVisitor {
            type Value = ItemId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an item id as a u32 or a numeric string")
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<ItemId, E> {
                u32::try_from(v)
                    .map(ItemId)
                    .map_err(|_| E::custom(format!("item id out of range: {v}")))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<ItemId, E> {
                u32::try_from(v)
                    .map(ItemId)
                    .map_err(|_| E::custom(format!("item id out of range: {v}")))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<ItemId, E> {
                v.parse::<u32>()
                    .map(ItemId)
                    .map_err(|_| E::custom(format!("invalid item id: {v:?}")))
            }
        }

        deserializer.deserialize_any(ItemIdVisitor)
    }
}

impl ItemId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for ItemId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("recipe endpoint {0} is not a registered item")]
    UnknownItem(ItemId),
    #[error("item not found: {0}")]
    NotFound(ItemId),
}

/// Recipes known for a single item: result id -> ordered partner candidates.
///
/// Buckets are kept in a `BTreeMap` so expansion order during search is
/// deterministic; the partner list preserves insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeNode {
    recipes: BTreeMap<ItemId, Vec<ItemId>>,
}

impl RecipeNode {
    fn add_partner(&mut self, partner: ItemId, result: ItemId) {
        self.recipes.entry(result).or_default().push(partner);
    }

    /// Partner candidates that combine with this item to yield `result`.
    pub fn partners_for(&self, result: ItemId) -> Option<&[ItemId]> {
        self.recipes.get(&result).map(Vec::as_slice)
    }

    /// All (result, partners) buckets in ascending result-id order.
    pub fn recipes(&self) -> impl Iterator<Item = (ItemId, &[ItemId])> {
        self.recipes.iter().map(|(&result, partners)| (result, partners.as_slice()))
    }

    /// Number of recipe edges recorded on this node.
    pub fn recipe_count(&self) -> usize {
        self.recipes.values().map(Vec::len).sum()
    }
}

/// The full item/recipe store. Built once, then queried read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeGraph {
    nodes: HashMap<ItemId, RecipeNode>,
}

impl RecipeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item. Idempotent; re-adding keeps existing recipes.
    pub fn add_item(&mut self, id: ItemId) {
        self.nodes.entry(id).or_default();
    }

    /// Record `source + partner -> result` on `source`'s node.
    ///
    /// Both endpoints must already be registered. The mirror edge
    /// `partner + source -> result` is NOT added.
    pub fn add_recipe(
        &mut self,
        source: ItemId,
        partner: ItemId,
        result: ItemId,
    ) -> Result<(), GraphError> {
        if !self.nodes.contains_key(&partner) {
            return Err(GraphError::UnknownItem(partner));
        }
        match self.nodes.get_mut(&source) {
            Some(node) => {
                node.add_partner(partner, result);
                Ok(())
            }
            None => Err(GraphError::UnknownItem(source)),
        }
    }

    /// Node lookup that treats absence as an error.
    pub fn node(&self, id: ItemId) -> Result<&RecipeNode, GraphError> {
        self.get(id).ok_or(GraphError::NotFound(id))
    }

    /// Node lookup for callers that handle absence themselves (the search
    /// treats an unregistered item as simply having nothing to expand).
    pub fn get(&self, id: ItemId) -> Option<&RecipeNode> {
        self.nodes.get(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.nodes.keys().copied()
    }

    /// Total recipe edges across all nodes.
    pub fn recipe_count(&self) -> usize {
        self.nodes.values().map(RecipeNode::recipe_count).sum()
    }
}

/// On-disk graph definition: item -> result -> ordered partner list.
///
/// This is the exact shape of `graph_data.json` as emitted by the spreadsheet
/// converter (JSON object keys are numeric-id strings).
pub type GraphDefinition = BTreeMap<ItemId, BTreeMap<ItemId, Vec<ItemId>>>;

/// Display names for items, consumed only by rendering. The search and merge
/// layers are purely id-based.
pub type NameMap = HashMap<ItemId, String>;

/// Build a [`RecipeGraph`] from a definition, registering every source and
/// partner item before adding its edges.
pub fn build_graph(definition: &GraphDefinition) -> Result<RecipeGraph, GraphError> {
    let mut graph = RecipeGraph::new();
    for (&item, results) in definition {
        graph.add_item(item);
        for (&result, partners) in results {
            for &partner in partners {
                graph.add_item(partner);
                graph.add_recipe(item, partner, result)?;
            }
        }
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u32) -> ItemId {
        ItemId::new(raw)
    }

    #[test]
    fn test_add_item_is_idempotent() {
        let mut graph = RecipeGraph::new();
        graph.add_item(id(1));
        graph.add_item(id(2));
        graph.add_recipe(id(1), id(2), id(3)).unwrap();

        graph.add_item(id(1));
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.node(id(1)).unwrap().partners_for(id(3)), Some(&[id(2)][..]));
    }

    #[test]
    fn test_add_recipe_requires_registered_endpoints() {
        let mut graph = RecipeGraph::new();
        graph.add_item(id(1));

        assert_eq!(
            graph.add_recipe(id(1), id(2), id(3)),
            Err(GraphError::UnknownItem(id(2)))
        );
        assert_eq!(
            graph.add_recipe(id(9), id(1), id(3)),
            Err(GraphError::UnknownItem(id(9)))
        );
    }

    #[test]
    fn test_add_recipe_is_not_symmetric() {
        let mut graph = RecipeGraph::new();
        graph.add_item(id(1));
        graph.add_item(id(2));
        graph.add_recipe(id(1), id(2), id(3)).unwrap();

        assert_eq!(graph.node(id(1)).unwrap().partners_for(id(3)), Some(&[id(2)][..]));
        assert_eq!(graph.node(id(2)).unwrap().partners_for(id(3)), None);
    }

    #[test]
    fn test_node_lookup_missing_is_not_found() {
        let graph = RecipeGraph::new();
        assert_eq!(graph.node(id(7)), Err(GraphError::NotFound(id(7))));
        assert!(graph.get(id(7)).is_none());
    }

    #[test]
    fn test_partner_order_is_preserved() {
        let mut graph = RecipeGraph::new();
        for raw in [1, 5, 2] {
            graph.add_item(id(raw));
        }
        graph.add_recipe(id(1), id(5), id(9)).unwrap();
        graph.add_recipe(id(1), id(2), id(9)).unwrap();

        assert_eq!(
            graph.node(id(1)).unwrap().partners_for(id(9)),
            Some(&[id(5), id(2)][..])
        );
    }

    #[test]
    fn test_build_graph_from_definition_json() {
        let definition: GraphDefinition =
            serde_json::from_str(r#"{ "1": { "3": ["2"], "5": ["4", "6"] } }"#).unwrap();
        let graph = build_graph(&definition).unwrap();

        // Source and partners registered; result items only if they appear
        // elsewhere as sources or partners.
        assert!(graph.contains(id(1)));
        assert!(graph.contains(id(2)));
        assert!(graph.contains(id(4)));
        assert_eq!(graph.recipe_count(), 3);
        assert_eq!(
            graph.node(id(1)).unwrap().partners_for(id(5)),
            Some(&[id(4), id(6)][..])
        );
    }
}
