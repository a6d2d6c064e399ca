//! CLI entry point for the `ldg` command-line tool.

use std::io;
use std::process;

use clap::{Parser, Subcommand};

use labeled_digraph::cli::commands;
use labeled_digraph::{GraphError, TraversalKind};

#[derive(Parser)]
#[command(
    name = "ldg",
    about = "Labeled directed graph — breadth-first and depth-first traversal"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Traverse the built-in nine-vertex sample graph (A..I)
    Demo {
        /// Label to start both traversals from
        #[arg(long, default_value = "A")]
        origin: String,
    },
    /// Build a graph from the arguments and traverse it
    Traverse {
        /// Comma-separated vertex labels, in index order
        #[arg(long)]
        vertices: String,
        /// Directed edge as SOURCE:TARGET (repeatable)
        #[arg(long = "edge")]
        edges: Vec<String>,
        /// Label to start from
        #[arg(long)]
        origin: String,
        /// Traversal: bfs, dfs, or both
        #[arg(long, default_value = "both")]
        kind: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Demo { origin } => commands::cmd_demo(&mut out, &origin, json),
        Commands::Traverse {
            vertices,
            edges,
            origin,
            kind,
        } => {
            let kinds = match kind.to_lowercase().as_str() {
                "both" => vec![TraversalKind::Bfs, TraversalKind::Dfs],
                other => match TraversalKind::from_name(other) {
                    Some(k) => vec![k],
                    None => {
                        eprintln!("Invalid traversal kind: {}", kind);
                        process::exit(3);
                    }
                },
            };
            let parsed: Result<Vec<_>, _> = edges
                .iter()
                .map(String::as_str)
                .map(commands::parse_edge)
                .collect();
            match parsed {
                Ok(parsed) => commands::cmd_traverse(
                    &mut out,
                    commands::parse_vertices(&vertices),
                    parsed,
                    &origin,
                    &kinds,
                    json,
                ),
                Err(e) => Err(e),
            }
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::InvalidArgument(_) => 3,
            GraphError::LabelNotFound(_) | GraphError::LabelNotSet(_) => 4,
            GraphError::IndexOutOfBounds { .. } => 5,
            _ => 6,
        };
        process::exit(code);
    }
}
