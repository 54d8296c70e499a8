//! Craftpath CLI
//!
//! Command-line interface for:
//! - Finding shortest combination-recipe chains (`craftpath find`)
//! - Summarizing a graph definition file (`craftpath stats`)
//!
//! The graph definition and name map are the spreadsheet converter's JSON
//! files (`graph_data.json` / `id_name_map.json`).

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use craftpath_core::{find_shortest_paths, ItemId, SearchOptions, DEFAULT_LEEWAY};

mod data;
mod render;

#[derive(Parser)]
#[command(name = "craftpath")]
#[command(
    author,
    version,
    about = "Shortest combination-recipe chains over an item graph"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find shortest recipe chains from a start set to a target item.
    Find(FindArgs),

    /// Summarize a graph definition file.
    Stats {
        /// Graph definition JSON (item -> result -> partner list).
        #[arg(long)]
        graph: PathBuf,
    },
}

#[derive(Args)]
struct FindArgs {
    /// Graph definition JSON (item -> result -> partner list).
    #[arg(long)]
    graph: PathBuf,

    /// Optional id -> display-name JSON map used for rendering.
    #[arg(long)]
    names: Option<PathBuf>,

    /// Primary start item ids (comma-separated).
    #[arg(long, value_delimiter = ',', required = true)]
    from: Vec<u32>,

    /// Secondary anchor item ids (comma-separated).
    #[arg(long, value_delimiter = ',')]
    via: Vec<u32>,

    /// Target item id.
    #[arg(long)]
    target: u32,

    /// Extra steps beyond the shortest chain still reported.
    #[arg(long, default_value_t = DEFAULT_LEEWAY)]
    leeway: usize,

    /// Abort the search after this many frontier entries.
    #[arg(long)]
    step_budget: Option<u64>,

    /// Emit raw JSON results instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Find(args) => cmd_find(&args),
        Commands::Stats { graph } => cmd_stats(&graph),
    }
}

fn cmd_find(args: &FindArgs) -> Result<()> {
    let graph = data::load_graph(&args.graph)?;
    let names = data::load_names(args.names.as_deref())?;

    let from: Vec<ItemId> = args.from.iter().copied().map(ItemId::new).collect();
    let via: Vec<ItemId> = args.via.iter().copied().map(ItemId::new).collect();
    let target = ItemId::new(args.target);
    let options = SearchOptions {
        leeway: args.leeway,
        step_budget: args.step_budget,
    };

    let results = find_shortest_paths(&graph, &from, &via, target, &options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("{}", render::display_paths(&results, &names));
        if !results.is_empty() {
            eprintln!(
                "{} {} result(s), {} combination step(s) each at minimum",
                "ok".green().bold(),
                results.len(),
                results
                    .iter()
                    .map(|result| result.combination_count())
                    .min()
                    .unwrap_or(0)
            );
        }
    }
    Ok(())
}

fn cmd_stats(graph_path: &PathBuf) -> Result<()> {
    let graph = data::load_graph(graph_path)?;

    let max_bucket = graph
        .items()
        .filter_map(|id| graph.get(id))
        .flat_map(|node| node.recipes().map(|(_, partners)| partners.len()))
        .max()
        .unwrap_or(0);

    println!("{} {}", "graph".bold(), graph_path.display());
    println!("  items:          {}", graph.len());
    println!("  recipe edges:   {}", graph.recipe_count());
    println!("  largest bucket: {max_bucket}");
    Ok(())
}
