use std::path::PathBuf;

use atlas_core::constants::DEFAULT_QUERY;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "atlas",
    version,
    about = "ATLAS (Advisory, Texas, Legal, Assistance, System): curated business Q&A"
)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Corpus file (.json or .toml), overrides `corpus.path`
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find the closest curated prompt and print its answer
    Ask {
        /// Question text
        #[arg(default_value = DEFAULT_QUERY)]
        query: String,

        /// Number of matches to show
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Print the hit list as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every entry in the knowledge base
    List,
    /// Answer questions read line by line from stdin (`:quit` to exit)
    Repl {
        /// Number of matches to show
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
    },
}
