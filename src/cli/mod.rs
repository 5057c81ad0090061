//! CLI module for depgraph.
//!
//! Commands:
//! - render: write the DOT document to a file
//! - print: write the DOT document to stdout
//! - stats: graph statistics as JSON

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::analyzer::AnalyzerKind;

#[derive(Parser)]
#[command(name = "depgraph")]
#[command(about = "Render an analyzed code model as a Graphviz dependency graph")]
pub struct Cli {
    /// Config file (default: depgraph.toml in the current directory)
    #[arg(short, long, default_value = "depgraph.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the dependency graph to a DOT file
    Render {
        /// Code model exported by the analysis (.json, .yaml)
        model: PathBuf,

        /// Output file (default: `output` from the config file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Analyzer whose results are being reported
        #[arg(short, long, value_enum, default_value_t = AnalyzerKind::Dependency)]
        analyzer: AnalyzerKind,
    },

    /// Print the dependency graph to stdout
    Print {
        /// Code model exported by the analysis (.json, .yaml)
        model: PathBuf,
    },

    /// Show graph statistics
    Stats {
        /// Code model exported by the analysis (.json, .yaml)
        model: PathBuf,
    },
}
