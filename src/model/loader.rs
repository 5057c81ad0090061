//! Loading code models exported by the upstream analysis.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::types::CodeModel;
use crate::error::{DepgraphError, Result};

/// Supported model document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelFormat {
    Json,
    Yaml,
}

impl ModelFormat {
    /// Detect format from file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext {
            "json" => Some(ModelFormat::Json),
            "yaml" | "yml" => Some(ModelFormat::Yaml),
            _ => None,
        }
    }

    pub fn parse(&self, source: &str) -> Result<CodeModel> {
        let mut model: CodeModel = match self {
            ModelFormat::Json => serde_json::from_str(source)?,
            ModelFormat::Yaml => serde_yaml::from_str(source)?,
        };
        model.link();
        Ok(model)
    }
}

/// Read a model file, picking the format from its extension.
pub fn load_model(path: &Path) -> Result<CodeModel> {
    let format = ModelFormat::from_path(path)
        .ok_or_else(|| DepgraphError::UnsupportedModelFormat(path.to_path_buf()))?;
    let source = fs::read_to_string(path)?;
    let model = format.parse(&source)?;
    debug!(
        path = %path.display(),
        packages = model.packages.len(),
        entities = model.entity_count(),
        "loaded code model"
    );
    Ok(model)
}
