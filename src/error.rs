//! Error types for the dependency graph reporter.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DepgraphError>;

#[derive(Error, Debug)]
pub enum DepgraphError {
    /// `close()` was called before a destination file was configured.
    #[error("The log target is not configured for '{logger}'.")]
    NoLogOutput { logger: &'static str },

    #[error("Analyzer '{analyzer}' is not accepted by '{logger}'")]
    UnsupportedAnalyzer {
        analyzer: String,
        logger: &'static str,
    },

    #[error("Unsupported model format: {0}")]
    UnsupportedModelFormat(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),
}
