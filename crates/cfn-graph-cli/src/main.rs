mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cfn-graph",
    about = "Visualize CloudFormation change sets as dependency graphs",
    version
)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a change set as Graphviz DOT
    Render {
        /// DescribeChangeSet response (JSON file)
        payload: PathBuf,

        /// Write DOT to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Render options (TOML); falls back to $CFN_GRAPH_CONFIG
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the derived graph (nodes, edges, clusters) as JSON
    Graph {
        /// DescribeChangeSet response (JSON file)
        payload: PathBuf,
    },

    /// List the parameters that cause at least one change
    Params {
        /// DescribeChangeSet response (JSON file)
        payload: PathBuf,
    },

    /// Summarize a change set
    Show {
        /// DescribeChangeSet response (JSON file)
        payload: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            payload,
            output,
            config,
        } => commands::render::run(payload, output, config),
        Commands::Graph { payload } => commands::graph::run(payload),
        Commands::Params { payload } => commands::params::run(payload, cli.json),
        Commands::Show { payload } => commands::show::run(payload, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
