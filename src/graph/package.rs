//! Per-package containers of entity representations.

use super::encode::{EncodedId, DEFAULT_PACKAGE};
use super::representation::EntityRepresentation;
use crate::model::Package;

/// One package of the output: rendered as a labeled cluster holding the
/// nodes of its entities, in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageGrouping {
    pub id: EncodedId,
    pub name: String,
    nodes: Vec<EntityRepresentation>,
}

impl PackageGrouping {
    /// The grouping for a package. Packages without id map to the
    /// default grouping.
    pub fn for_package(package: &Package) -> Self {
        match &package.id {
            Some(id) => Self {
                id: EncodedId::encode(id),
                name: package.name.clone(),
                nodes: Vec::new(),
            },
            None => Self::default_grouping(),
        }
    }

    pub fn default_grouping() -> Self {
        Self {
            id: EncodedId::default_package(),
            name: DEFAULT_PACKAGE.to_string(),
            nodes: Vec::new(),
        }
    }

    /// The key a package is grouped under.
    pub fn key_for(package: &Package) -> EncodedId {
        package
            .id
            .as_deref()
            .map(EncodedId::encode)
            .unwrap_or_else(EncodedId::default_package)
    }

    pub fn add(&mut self, representation: EntityRepresentation) {
        self.nodes.push(representation);
    }

    pub fn nodes(&self) -> &[EntityRepresentation] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
