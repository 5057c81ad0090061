//! Graphviz report logger.
//!
//! Wraps the graph projection for the surrounding tool: it accepts results
//! of the dependency analyzer only, needs a destination file before it can
//! be closed, and writes the whole document in a single call on `close()`.
//!
//! ```rust,no_run
//! use depgraph::{AnalyzerKind, DepgraphConfig, GraphvizLogger, load_model};
//! use std::path::Path;
//!
//! # fn main() -> depgraph::Result<()> {
//! let mut logger = GraphvizLogger::new(DepgraphConfig::default());
//! logger.set_log_file("depgraph.dot");
//! logger.set_code(load_model(Path::new("model.json"))?);
//! logger.log(AnalyzerKind::Dependency);
//! let stats = logger.close()?;
//! println!("{stats}");
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::analyzer::AnalyzerKind;
use crate::config::DepgraphConfig;
use crate::error::{DepgraphError, Result};
use crate::graph::{build_graph, render, GraphStats};
use crate::model::CodeModel;

/// Writes the package-grouped dependency graph of a code model as DOT.
#[derive(Debug, Default)]
pub struct GraphvizLogger {
    config: DepgraphConfig,
    log_file: Option<PathBuf>,
    code: CodeModel,
}

impl GraphvizLogger {
    /// Identity reported in errors.
    pub const NAME: &'static str = "depgraph-graphviz";

    const ACCEPTED: [AnalyzerKind; 1] = [AnalyzerKind::Dependency];

    /// Create a logger. The config's `output`, if set, is the initial
    /// destination.
    pub fn new(config: DepgraphConfig) -> Self {
        Self {
            log_file: config.output.clone(),
            config,
            code: CodeModel::default(),
        }
    }

    pub fn set_log_file(&mut self, path: impl Into<PathBuf>) {
        self.log_file = Some(path.into());
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Set the code model to report on.
    pub fn set_code(&mut self, code: CodeModel) {
        self.code = code;
    }

    pub fn accepted_analyzers(&self) -> &'static [AnalyzerKind] {
        &Self::ACCEPTED
    }

    /// Offer the results of an analyzer. Returns `false` for analyzers this
    /// logger does not accept.
    pub fn log(&mut self, analyzer: AnalyzerKind) -> bool {
        let accepted = Self::ACCEPTED.contains(&analyzer);
        debug!(analyzer = %analyzer, accepted, "analyzer offered");
        accepted
    }

    /// Like [`log`](Self::log), but rejects unsupported analyzers with an error.
    pub fn require(&mut self, analyzer: AnalyzerKind) -> Result<()> {
        if self.log(analyzer) {
            Ok(())
        } else {
            Err(DepgraphError::UnsupportedAnalyzer {
                analyzer: analyzer.to_string(),
                logger: Self::NAME,
            })
        }
    }

    /// Render the current model without writing it anywhere.
    pub fn render(&self) -> (String, GraphStats) {
        let graph = build_graph(&self.code);
        (render(&graph, &self.config.graph), graph.stats())
    }

    /// Build, render and write the document.
    ///
    /// Fails with [`DepgraphError::NoLogOutput`] before doing any work if no
    /// destination was configured.
    pub fn close(&self) -> Result<GraphStats> {
        let path = self.log_file.as_deref().ok_or(DepgraphError::NoLogOutput {
            logger: Self::NAME,
        })?;

        let (document, stats) = self.render();
        fs::write(path, document)?;

        info!(
            path = %path.display(),
            packages = stats.packages,
            nodes = stats.nodes,
            extends = stats.inheritance_edges,
            implements = stats.implementation_edges,
            uses = stats.dependency_edges,
            "dependency graph written"
        );
        Ok(stats)
    }
}
