//! CLI entry point for the `relgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use relgraph::cli::commands;
use relgraph::RelError;

#[derive(Parser)]
#[command(
    name = "relgraph",
    about = "relgraph CLI — inspect edge-list files with the multigraph container"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Treat direction-unqualified relationships as undirected
    #[arg(long)]
    undirected: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize an edge-list file
    Info {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Render the whole graph as text
    Show {
        /// Path to the edge-list file
        file: PathBuf,
    },
    /// Look up one relationship value
    Get {
        /// Path to the edge-list file
        file: PathBuf,
        /// Source vertex
        source: i64,
        /// Target vertex
        target: i64,
        /// Relationship key
        #[arg(long, default_value = "")]
        key: String,
    },
    /// List a vertex's neighbors
    Nbrs {
        /// Path to the edge-list file
        file: PathBuf,
        /// The vertex to enumerate
        vertex: i64,
        /// Restrict to one relationship key
        #[arg(long)]
        key: Option<String>,
        /// Force a direction: from, to, or either
        #[arg(long)]
        direction: Option<String>,
    },
    /// List keys, graph-wide or for one vertex
    Keys {
        /// Path to the edge-list file
        file: PathBuf,
        /// Restrict to keys touching this vertex
        #[arg(long)]
        vertex: Option<i64>,
    },
    /// Export every real relationship as JSON
    Export {
        /// Path to the edge-list file
        file: PathBuf,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";
    let directed = !cli.undirected;

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, directed, json),
        Commands::Show { file } => commands::cmd_show(&file, directed),
        Commands::Get {
            file,
            source,
            target,
            key,
        } => commands::cmd_get(&file, directed, source, target, &key, json),
        Commands::Nbrs {
            file,
            vertex,
            key,
            direction,
        } => commands::cmd_nbrs(
            &file,
            directed,
            vertex,
            key.as_deref(),
            direction.as_deref(),
            json,
        ),
        Commands::Keys { file, vertex } => commands::cmd_keys(&file, directed, vertex, json),
        Commands::Export { file, pretty } => commands::cmd_export(&file, directed, pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            RelError::Io(_) => 1,
            RelError::Parse { .. } | RelError::UnknownDirection(_) => 2,
        };
        process::exit(code);
    }
}
