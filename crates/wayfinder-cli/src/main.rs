use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;
mod output;

use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Road-network route planning utilities")]
struct Cli {
    /// Path to the road-map file (one edge declaration per line).
    #[arg(long)]
    map: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the cheapest route between two named nodes.
    Route {
        /// Starting node name.
        #[arg(long = "from")]
        from: String,
        /// Destination node name.
        #[arg(long = "to")]
        to: String,
    },
    /// Traverse the map interactively, replanning on deviation.
    Travel {
        /// Starting node name.
        #[arg(long = "from")]
        from: String,
        /// Destination node name.
        #[arg(long = "to")]
        to: String,
    },
    /// List the declared nodes and their road counts.
    Nodes,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Route { from, to } => commands::route::run(&cli.map, cli.format, &from, &to),
        Command::Travel { from, to } => commands::travel::run(&cli.map, cli.format, &from, &to),
        Command::Nodes => commands::nodes::run(&cli.map, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
