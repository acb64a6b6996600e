//! CLI entry point for the `lgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use labeled_graph::cli::commands;
use labeled_graph::format::SaveFormat;
use labeled_graph::types::{GraphError, GraphKind, DEFAULT_WEIGHT};

#[derive(Parser)]
#[command(
    name = "lgraph",
    about = "Labeled graph CLI — edit and convert graph text files"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Layout used when a command writes the graph file back
    #[arg(long, value_enum, default_value_t = SaveFormat::EdgeList)]
    layout: SaveFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new graph file
    Create {
        /// Path to the graph file to create
        file: PathBuf,
        /// Initial vertex labels
        #[arg(required = true)]
        vertices: Vec<String>,
        /// Make edges one-way
        #[arg(long)]
        directed: bool,
        /// Keep edge weights
        #[arg(long)]
        weighted: bool,
    },
    /// Print the adjacency of every vertex
    Show {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Add one or more vertices
    AddVertex {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex labels
        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// Remove a vertex and every edge touching it
    RemoveVertex {
        /// Path to the graph file
        file: PathBuf,
        /// Vertex label
        label: String,
    },
    /// Add an edge between two existing vertices
    AddEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Source vertex
        from: String,
        /// Target vertex
        to: String,
        /// Edge weight (ignored by unweighted graphs)
        #[arg(long, default_value_t = DEFAULT_WEIGHT, allow_negative_numbers = true)]
        weight: f64,
    },
    /// Remove an edge
    RemoveEdge {
        /// Path to the graph file
        file: PathBuf,
        /// Source vertex
        from: String,
        /// Target vertex
        to: String,
    },
    /// List every edge once
    Edges {
        /// Path to the graph file
        file: PathBuf,
    },
    /// Rewrite a graph file using --layout
    Convert {
        /// Path to the source graph file
        file: PathBuf,
        /// Path to write
        out: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";
    let layout = cli.layout;

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Create {
            file,
            vertices,
            directed,
            weighted,
        } => commands::cmd_create(
            &file,
            GraphKind::new(directed, weighted),
            &vertices,
            layout,
            json,
        ),
        Commands::Show { file } => commands::cmd_show(&file, json),
        Commands::AddVertex { file, labels } => {
            commands::cmd_add_vertex(&file, &labels, layout, json)
        }
        Commands::RemoveVertex { file, label } => {
            commands::cmd_remove_vertex(&file, &label, layout, json)
        }
        Commands::AddEdge {
            file,
            from,
            to,
            weight,
        } => commands::cmd_add_edge(&file, &from, &to, weight, layout, json),
        Commands::RemoveEdge { file, from, to } => {
            commands::cmd_remove_edge(&file, &from, &to, layout, json)
        }
        Commands::Edges { file } => commands::cmd_edges(&file, json),
        Commands::Convert { file, out } => commands::cmd_convert(&file, &out, layout, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) | GraphError::FileNotFound(_) => 1,
            GraphError::FileFormat(_) => 2,
            GraphError::VertexNotFound(_)
            | GraphError::DuplicateEdge { .. }
            | GraphError::ConsistencyError { .. } => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
