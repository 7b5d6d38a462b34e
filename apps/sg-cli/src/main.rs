use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use sg_core::SgError;
use sg_project::{BuiltGraph, ProjectError, build_graph};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sg-cli")]
#[command(about = "sparsegraph CLI - inspect and render graph documents", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); overrides RUST_LOG
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a graph document
    Validate {
        /// Path to the graph file (.yaml or .json)
        path: PathBuf,
    },
    /// Render a graph document as DOT text
    Render {
        /// Path to the graph file (.yaml or .json)
        path: PathBuf,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show vertex and edge counts and per-vertex degrees
    Summary {
        /// Path to the graph file (.yaml or .json)
        path: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    Graph(#[from] SgError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Serialize, PartialEq)]
struct Summary {
    name: String,
    vertices: usize,
    edges: usize,
    degrees: Vec<VertexDegree>,
}

#[derive(Debug, Serialize, PartialEq)]
struct VertexDegree {
    id: String,
    value: String,
    outgoing: usize,
    incoming: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Validate { path } => cmd_validate(&path),
        Commands::Render { path, output } => cmd_render(&path, output.as_deref()),
        Commands::Summary { path, json } => cmd_summary(&path, json),
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    // Logs go to stderr; stdout carries rendered output.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_graph(path: &Path) -> CliResult<BuiltGraph> {
    tracing::debug!(path = %path.display(), "loading graph document");
    let doc = sg_project::load(path)?;
    Ok(build_graph(&doc)?)
}

fn cmd_validate(path: &Path) -> CliResult<()> {
    println!("Validating graph: {}", path.display());
    let built = load_graph(path)?;
    built.graph.check_invariants()?;
    println!(
        "✓ Graph is valid ({} vertices, {} edges)",
        built.graph.vertex_count(),
        built.graph.edge_count()
    );
    Ok(())
}

fn cmd_render(path: &Path, output: Option<&Path>) -> CliResult<()> {
    let built = load_graph(path)?;
    let dot = built.graph.render();

    match output {
        Some(out) => {
            std::fs::write(out, format!("{dot}\n")).map_err(|source| CliError::Write {
                path: out.to_path_buf(),
                source,
            })?;
            println!("✓ Wrote {}", out.display());
        }
        None => println!("{dot}"),
    }
    Ok(())
}

fn cmd_summary(path: &Path, json: bool) -> CliResult<()> {
    let built = load_graph(path)?;
    let summary = summarize(&built)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let title = if summary.name.is_empty() {
        path.display().to_string()
    } else {
        summary.name.clone()
    };
    println!(
        "{}: {} vertices, {} edges",
        title, summary.vertices, summary.edges
    );
    for d in &summary.degrees {
        let label = d
            .label
            .as_deref()
            .map(|l| format!(" [{l}]"))
            .unwrap_or_default();
        println!(
            "  {} ({}) out={} in={}{}",
            d.id, d.value, d.outgoing, d.incoming, label
        );
    }
    Ok(())
}

fn summarize(built: &BuiltGraph) -> CliResult<Summary> {
    let graph = &built.graph;
    let mut degrees = Vec::with_capacity(built.ids.len());
    for (id, vertex) in &built.ids {
        let vertex = *vertex;
        degrees.push(VertexDegree {
            id: id.clone(),
            value: graph.vertex(vertex).map_err(SgError::from)?.clone(),
            outgoing: graph.outgoing(vertex).map_err(SgError::from)?.len(),
            incoming: graph.incoming(vertex).map_err(SgError::from)?.len(),
            label: graph.vertex_label(vertex).map_err(SgError::from)?.cloned(),
        });
    }

    Ok(Summary {
        name: built.name.clone(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        degrees,
    })
}
