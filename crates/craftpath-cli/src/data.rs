//! Loading the on-disk graph definition and name map.
//!
//! Both files are the spreadsheet converter's JSON output:
//! - `graph_data.json`: `{ "<item>": { "<result>": ["<partner>", ...] } }`
//! - `id_name_map.json`: `{ "<item>": "<name>" }`

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use craftpath_core::{build_graph, GraphDefinition, NameMap, RecipeGraph};

pub fn load_graph(path: &Path) -> Result<RecipeGraph> {
    let definition = load_definition(path)?;
    let graph = build_graph(&definition)
        .with_context(|| format!("building graph from {}", path.display()))?;
    Ok(graph)
}

pub fn load_definition(path: &Path) -> Result<GraphDefinition> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading graph definition {}", path.display()))?;
    let definition: GraphDefinition = serde_json::from_str(&text)
        .with_context(|| format!("parsing graph definition {}", path.display()))?;
    Ok(definition)
}

pub fn load_names(path: Option<&Path>) -> Result<NameMap> {
    let Some(path) = path else {
        return Ok(NameMap::new());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("reading name map {}", path.display()))?;
    let names: NameMap = serde_json::from_str(&text)
        .with_context(|| format!("parsing name map {}", path.display()))?;
    Ok(names)
}
