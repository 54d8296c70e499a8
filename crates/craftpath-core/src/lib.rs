//! Craftpath core: minimal combination-recipe chains over an item graph.
//!
//! Items combine pairwise (item + item -> result); this crate finds the
//! shortest chains of such combinations linking a start set to a target,
//! optionally anchored through a secondary item set.
//!
//! ## Module Organization
//!
//! - `graph`: the recipe graph itself, pure data, no search logic
//! - `path`: step/path/result value types shared by every layer
//! - `search`: multi-source bounded-leeway breadth-first search
//! - `filter`: adjacency/encounter narrowing against a secondary item set
//! - `merge`: two-frontier convergence merging at minimum combination count
//! - `query`: the `find_shortest_paths` orchestration over all of the above
//!
//! The crate is single-threaded, synchronous, and performs no I/O; loading
//! graph definitions from disk and rendering results live in the CLI crate.

pub mod filter;
pub mod graph;
pub mod merge;
pub mod path;
pub mod query;
pub mod search;

pub use filter::{adjacent_to, encounters, shortest_only};
pub use graph::{build_graph, GraphDefinition, GraphError, ItemId, NameMap, RecipeGraph, RecipeNode};
pub use merge::merge_and_evaluate;
pub use path::{Path, PathResult, Step};
pub use query::find_shortest_paths;
pub use search::{search, SearchError, SearchOptions, DEFAULT_LEEWAY};
