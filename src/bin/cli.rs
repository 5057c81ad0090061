//! depgraph CLI - Graphviz dependency graphs from an analyzed code model.
//!
//! Usage:
//!   depgraph render model.json -o graph.dot   # Write DOT file
//!   depgraph print model.json                 # DOT to stdout
//!   depgraph stats model.json                 # Graph statistics
//!
//!   dot -Tpng graph.dot > graph.png

use anyhow::Result;
use clap::Parser;
use tracing::info;

use depgraph::cli::{Cli, Commands};
use depgraph::{load_model, DepgraphConfig, GraphvizLogger};

fn main() {
    // Tracing goes to stderr; stdout carries documents and stats
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = DepgraphConfig::load(&cli.config);
    let mut logger = GraphvizLogger::new(config);

    match cli.command {
        Commands::Render {
            model,
            output,
            analyzer,
        } => {
            logger.require(analyzer)?;
            if let Some(output) = output {
                logger.set_log_file(output);
            }
            info!(model = %model.display(), "loading code model");
            logger.set_code(load_model(&model)?);
            let stats = logger.close()?;
            println!("{}", stats);
        }

        Commands::Print { model } => {
            logger.set_code(load_model(&model)?);
            let (document, _) = logger.render();
            print!("{}", document);
        }

        Commands::Stats { model } => {
            logger.set_code(load_model(&model)?);
            let (_, stats) = logger.render();
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}
