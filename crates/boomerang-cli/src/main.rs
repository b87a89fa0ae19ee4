mod cmd_render;
mod cmd_search;
mod cmd_validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "boomerang")]
#[command(about = "Search for the shortest chain of +r and reciprocal moves returning 1 to 1")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search for the shortest round trip under an offset r
    Search(cmd_search::SearchArgs),
    /// Render flight documents to other formats
    Render {
        #[command(subcommand)]
        format: cmd_render::RenderFormat,
    },
    /// Validate a flight document by replaying its moves from 1
    Validate {
        /// Input file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search(args) => cmd_search::run(args, cli.pretty),
        Commands::Render { format } => cmd_render::run(format),
        Commands::Validate { input } => cmd_validate::run(input),
    }
}
