//! The projected dependency graph.
//!
//! Holds one grouping per package, created lazily on first use and kept in
//! first-creation order, which is the order they are rendered in.

use indexmap::IndexMap;
use tracing::debug;

use super::encode::EncodedId;
use super::package::PackageGrouping;
use super::representation::EntityRepresentation;
use super::types::GraphStats;
use crate::model::Package;

/// Package groupings of all visited entities.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    groupings: IndexMap<EncodedId, PackageGrouping>,
}

impl DependencyGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            groupings: IndexMap::new(),
        }
    }

    // ─── Groupings ──────────────────────────────────────────────

    /// The grouping for `package`, creating it on first request.
    pub fn grouping_for(&mut self, package: &Package) -> &mut PackageGrouping {
        let key = PackageGrouping::key_for(package);
        self.groupings.entry(key).or_insert_with(|| {
            let grouping = PackageGrouping::for_package(package);
            debug!(package = %grouping.name, id = %grouping.id, "created package grouping");
            grouping
        })
    }

    /// Add an entity representation to its package's grouping.
    pub fn add(&mut self, package: &Package, representation: EntityRepresentation) {
        self.grouping_for(package).add(representation);
    }

    /// Groupings in first-creation order.
    pub fn groupings(&self) -> impl Iterator<Item = &PackageGrouping> {
        self.groupings.values()
    }

    /// All node representations in emission order.
    pub fn nodes(&self) -> impl Iterator<Item = &EntityRepresentation> {
        self.groupings.values().flat_map(|g| g.nodes().iter())
    }

    pub fn grouping_count(&self) -> usize {
        self.groupings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groupings.is_empty()
    }

    // ─── Stats ──────────────────────────────────────────────────

    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            packages: self.groupings.len(),
            ..GraphStats::default()
        };
        for node in self.nodes() {
            stats.nodes += 1;
            for (kind, _) in node.edges() {
                stats.count_edge(kind);
            }
        }
        stats
    }
}
