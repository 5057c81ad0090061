//! # depgraph
//!
//! Dependency graph reporter for an analyzed codebase.
//!
//! Takes the code model produced by a dependency analysis (packages holding
//! classes and interfaces, with inheritance, implementation and usage
//! relationships resolved) and writes it as a Graphviz DOT document with
//! UML-like node labels, one cluster per package.
//!
//! ## Edge styles
//!
//! - **Inheritance**: solid line, empty arrowhead
//! - **Implementation**: dashed line, empty arrowhead
//! - **Usage**: solid line, no arrowhead, not used for ranking
//!
//! ## Quick Start
//!
//! ```rust
//! use depgraph::{build_graph, render, CodeEntity, CodeModel, GraphStyle, Package};
//!
//! let base = CodeEntity::class("Base");
//! let child = CodeEntity::class("Child").extending(&base);
//! let model = CodeModel::new(vec![Package::new("app").with_type(base).with_type(child)]);
//!
//! let dot = render(&build_graph(&model), &GraphStyle::default());
//! assert!(dot.starts_with("digraph depgraph {"));
//! ```

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod logger;
pub mod model;

// Re-exports for convenience
pub use analyzer::AnalyzerKind;
pub use config::{DepgraphConfig, GraphStyle};
pub use error::{DepgraphError, Result};
pub use logger::GraphvizLogger;

// Graph re-exports
pub use graph::{
    build_graph, render, DependencyGraph, EdgeKind, EncodedId, EntityRepresentation,
    GraphStats, PackageGrouping,
};

// Model re-exports
pub use model::{
    load_model, CodeEntity, CodeModel, EntityKind, Method, Package, TypeRef, Visibility,
    Visitor,
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;
    use std::path::Path;

    fn fixture() -> CodeModel {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/model.json");
        load_model(&path).unwrap()
    }

    fn render_fixture() -> String {
        let mut logger = GraphvizLogger::default();
        logger.set_code(fixture());
        logger.render().0
    }

    #[test]
    fn test_interface_without_members_renders_stereotype_only() {
        let dot = render_fixture();
        assert!(dot.contains("[shape=record, label=\"«interface»\\nFooI|\"];"));
    }

    #[test]
    fn test_member_line_inside_package_cluster() {
        let dot = render_fixture();
        let cluster = dot
            .split("subgraph cluster")
            .find(|block| block.contains("label = \"pkg2\";"))
            .unwrap();
        assert!(cluster.contains("label=\"Foobar|+\\ Foobar\\ get\\l\"];"));
    }

    #[test]
    fn test_private_members_are_not_listed() {
        let dot = render_fixture();
        assert!(dot.contains("label=\"Foo|+\\ bar\\l\"];"));
        assert!(!dot.contains("secret"));
    }

    #[test]
    fn test_single_inheritance_edge() {
        let base = CodeEntity::class("B");
        let child = CodeEntity::class("A").extending(&base);
        let (a, b) = (EncodedId::encode(&child.id), EncodedId::encode(&base.id));
        let model = CodeModel::new(vec![Package::new("p").with_type(child).with_type(base)]);

        let dot = render(&build_graph(&model), &GraphStyle::default());
        let edges: Vec<&str> = dot.lines().filter(|l| l.contains(" -> ")).collect();
        assert_eq!(edges, vec![format!("  {a} -> {b} [arrowhead=empty];")]);
    }

    #[test]
    fn test_external_entities_never_rendered() {
        let dot = render_fixture();
        let vendor = EncodedId::encode("9a8b7c6d-5e4f-4a3b-8c2d-1e0f9a8b7c01");
        assert!(!dot.contains(vendor.as_str()));
        assert!(!dot.contains("Exception"));
        assert!(!dot.contains("+global"));
    }

    #[test]
    fn test_fixture_edges_respect_precedence() {
        let graph = build_graph(&fixture());
        let foo = graph.nodes().find(|n| n.name == "Foo").unwrap();

        let foo_i = EncodedId::encode("6f1d2c3b-0a9e-4e8f-8d7c-1b2a3c4d5e01");
        let foobar = EncodedId::encode("6f1d2c3b-0a9e-4e8f-8d7c-1b2a3c4d5e03");
        assert!(foo.parent.is_none());
        assert_eq!(foo.interfaces, vec![foo_i]);
        assert_eq!(foo.dependencies, vec![foobar]);
    }

    #[test]
    fn test_output_order_follows_traversal() {
        let dot = render_fixture();
        let positions: Vec<usize> = ["label=\"«interface»\\nFooI", "label=\"Foo|", "label=\"Foobar|"]
            .iter()
            .map(|needle| dot.find(needle).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let pkg1 = dot.find("label = \"pkg1\";").unwrap();
        let pkg2 = dot.find("label = \"pkg2\";").unwrap();
        assert!(pkg1 < pkg2);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let model = fixture();
        let first = render(&build_graph(&model), &GraphStyle::default());
        let second = render(&build_graph(&model), &GraphStyle::default());
        assert_eq!(first, second);
    }

    #[test]
    fn test_node_ids_are_unique() {
        let graph = build_graph(&fixture());
        let ids: Vec<&EncodedId> = graph.nodes().map(|n| &n.id).collect();
        let unique: HashSet<&EncodedId> = ids.iter().copied().collect();
        assert_eq!(ids.len(), unique.len());
    }

    #[test]
    fn test_close_without_destination_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("graph.dot");
        let config = DepgraphConfig {
            output: None,
            ..DepgraphConfig::default()
        };
        let mut logger = GraphvizLogger::new(config);
        logger.set_code(fixture());
        assert!(logger.log_file().is_none());

        assert!(matches!(
            logger.close().unwrap_err(),
            DepgraphError::NoLogOutput { .. }
        ));
        assert!(!target.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);

        logger.set_log_file(&target);
        logger.close().unwrap();
        assert!(target.exists());
    }

    #[test]
    fn test_wrong_analyzer_is_rejected_before_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("graph.dot");
        let mut logger = GraphvizLogger::default();
        logger.set_log_file(&target);

        assert!(!logger.log(AnalyzerKind::Hierarchy));
        assert!(logger.require(AnalyzerKind::Hierarchy).is_err());
        assert!(!target.exists());
    }

    #[test]
    fn test_full_run_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("graph.dot");

        let mut logger = GraphvizLogger::default();
        logger.set_log_file(&target);
        logger.set_code(fixture());
        assert!(logger.log(AnalyzerKind::Dependency));
        let stats = logger.close().unwrap();

        assert_eq!(stats.packages, 2);
        assert_eq!(stats.nodes, 3);
        assert_eq!(stats.implementation_edges, 1);
        assert_eq!(stats.dependency_edges, 1);

        let contents = fs::read_to_string(&target).unwrap();
        assert!(contents.contains(" -> uuid"));
        assert!(contents.trim_end().ends_with('}'));
    }
}
