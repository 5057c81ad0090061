//! Reporter configuration, read from a TOML file.
//!
//! ```toml
//! output = "build/depgraph.dot"
//!
//! [graph]
//! rankdir = "LR"
//! pack = true
//! node_fillcolor = "gray95"
//! cluster_color = "lightgrey"
//! show_members = true
//! group_packages = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepgraphConfig {
    /// Destination used when none is given on the command line.
    pub output: Option<PathBuf>,
    pub graph: GraphStyle,
}

/// Layout and styling of the rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphStyle {
    pub rankdir: String,
    pub pack: bool,
    pub node_fillcolor: String,
    pub cluster_color: String,
    /// List public members in node labels.
    pub show_members: bool,
    /// Wrap each package's nodes in a labeled cluster.
    pub group_packages: bool,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            rankdir: "LR".to_string(),
            pack: true,
            node_fillcolor: "gray95".to_string(),
            cluster_color: "lightgrey".to_string(),
            show_members: true,
            group_packages: true,
        }
    }
}

impl DepgraphConfig {
    /// Load config from `path`, falling back to defaults when the file is
    /// missing or invalid.
    pub fn load(path: &Path) -> Self {
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable config, using defaults");
                return Self::default();
            }
        };
        match Self::from_toml_str(&source) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}
