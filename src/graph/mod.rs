//! Dependency graph projection and DOT serialization.
//!
//! Walks the code model once, keeps user-defined classes and interfaces,
//! groups them by package, and renders the result as a Graphviz document.

pub mod builder;
pub mod encode;
pub mod engine;
pub mod package;
pub mod render;
pub mod representation;
pub mod types;

pub use builder::{build_graph, GraphBuilder};
pub use encode::{EncodedId, DEFAULT_PACKAGE, ID_PREFIX};
pub use engine::DependencyGraph;
pub use package::PackageGrouping;
pub use render::{render, Dot};
pub use representation::{EntityRepresentation, INTERFACE_STEREOTYPE};
pub use types::{EdgeKind, GraphStats};
