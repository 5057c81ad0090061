//! Edge kinds and statistics of the projected dependency graph.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a relationship edge.
///
/// Kinds are listed in precedence order: when the same target is reachable
/// through several relationships, only the first kind keeps the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Class extends another class (solid line, empty arrowhead).
    Inheritance,
    /// Class implements an interface (dashed line, empty arrowhead).
    Implementation,
    /// Entity uses another entity (solid line, no arrowhead, no rank constraint).
    Dependency,
}

impl EdgeKind {
    /// All kinds, highest precedence first.
    pub const PRECEDENCE: [EdgeKind; 3] = [
        EdgeKind::Inheritance,
        EdgeKind::Implementation,
        EdgeKind::Dependency,
    ];

    /// DOT attributes for edges of this kind.
    pub fn dot_attributes(&self) -> &'static str {
        match self {
            EdgeKind::Inheritance => "arrowhead=empty",
            EdgeKind::Implementation => "style=dashed, arrowhead=empty",
            EdgeKind::Dependency => "constraint=false, arrowhead=none",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeKind::Inheritance => write!(f, "inheritance"),
            EdgeKind::Implementation => write!(f, "implementation"),
            EdgeKind::Dependency => write!(f, "dependency"),
        }
    }
}

/// Statistics about a built graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub packages: usize,
    pub nodes: usize,
    pub inheritance_edges: usize,
    pub implementation_edges: usize,
    pub dependency_edges: usize,
}

impl GraphStats {
    pub fn total_edges(&self) -> usize {
        self.inheritance_edges + self.implementation_edges + self.dependency_edges
    }

    pub(crate) fn count_edge(&mut self, kind: EdgeKind) {
        match kind {
            EdgeKind::Inheritance => self.inheritance_edges += 1,
            EdgeKind::Implementation => self.implementation_edges += 1,
            EdgeKind::Dependency => self.dependency_edges += 1,
        }
    }
}

impl fmt::Display for GraphStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} packages, {} nodes, {} edges (extends: {}, implements: {}, uses: {})",
            self.packages,
            self.nodes,
            self.total_edges(),
            self.inheritance_edges,
            self.implementation_edges,
            self.dependency_edges
        )
    }
}
