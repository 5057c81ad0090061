//! DOT serialization of a `DependencyGraph`.
//!
//! Layout of the produced document:
//!
//! ```text
//! digraph depgraph {
//!   graph [rankdir="LR", pack=true];
//!   node [shape=record, style=filled, fillcolor="gray95"];
//!   edge [arrowhead=empty];
//!
//!   subgraph cluster<package id>{
//!   label = "<package name>";
//!   style=filled;
//!   color="lightgrey";
//!   <node> [shape=record, label="<name>|<member>\n<member>"];
//!   <node> -> <target> [<edge attributes>];
//!   }
//! }
//! ```

use std::fmt;

use super::engine::DependencyGraph;
use super::package::PackageGrouping;
use super::representation::EntityRepresentation;
use crate::config::GraphStyle;

const INDENT: &str = "  ";

/// Render `graph` as a complete DOT document.
pub fn render(graph: &DependencyGraph, style: &GraphStyle) -> String {
    Dot { graph, style }.to_string()
}

/// Display adapter writing the whole document.
pub struct Dot<'a> {
    pub graph: &'a DependencyGraph,
    pub style: &'a GraphStyle,
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph depgraph {{")?;
        writeln!(
            f,
            "{INDENT}graph [rankdir=\"{}\", pack={}];",
            escape_quoted(&self.style.rankdir),
            self.style.pack
        )?;
        writeln!(
            f,
            "{INDENT}node [shape=record, style=filled, fillcolor=\"{}\"];",
            escape_quoted(&self.style.node_fillcolor)
        )?;
        writeln!(f, "{INDENT}edge [arrowhead=empty];")?;

        for grouping in self.graph.groupings() {
            writeln!(f)?;
            self.write_grouping(f, grouping)?;
        }

        writeln!(f, "}}")
    }
}

impl Dot<'_> {
    fn write_grouping(&self, f: &mut fmt::Formatter<'_>, grouping: &PackageGrouping) -> fmt::Result {
        if !self.style.group_packages {
            for node in grouping.nodes() {
                self.write_node(f, node)?;
            }
            return Ok(());
        }

        writeln!(f, "{INDENT}subgraph cluster{}{{", grouping.id)?;
        writeln!(f, "{INDENT}label = \"{}\";", escape_quoted(&grouping.name))?;
        writeln!(f, "{INDENT}style=filled;")?;
        writeln!(
            f,
            "{INDENT}color=\"{}\";",
            escape_quoted(&self.style.cluster_color)
        )?;
        for node in grouping.nodes() {
            self.write_node(f, node)?;
        }
        writeln!(f, "{INDENT}}}")
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, node: &EntityRepresentation) -> fmt::Result {
        writeln!(
            f,
            "{INDENT}{} [shape=record, label=\"{}\"];",
            node.id,
            self.record_label(node)
        )?;
        for (kind, target) in node.edges() {
            writeln!(
                f,
                "{INDENT}{} -> {} [{}];",
                node.id,
                target,
                kind.dot_attributes()
            )?;
        }
        Ok(())
    }

    /// `<header>|<members>`: header lines joined by `\n`, each member
    /// left-justified with `\l`.
    fn record_label(&self, node: &EntityRepresentation) -> String {
        let header = node
            .header()
            .iter()
            .map(|line| escape_record(line))
            .collect::<Vec<_>>()
            .join("\\n");

        if !self.style.show_members {
            return header;
        }

        let members = node
            .members
            .iter()
            .map(|m| format!("{}\\l", escape_record(m)))
            .collect::<Vec<_>>()
            .join("\\n");
        format!("{header}|{members}")
    }
}

/// Escape text for a record label field. Spaces are escaped so
/// Graphviz keeps them inside the field.
fn escape_record(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' | '{' | '}' | '|' | '<' | '>' | '"' | ' ' => {
                out.push('\\');
                out.push(ch);
            }
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out
}

/// Escape text for a double-quoted DOT string.
fn escape_quoted(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;
    use crate::model::{CodeEntity, CodeModel, Method, Package};

    fn render_default(model: &CodeModel) -> String {
        render(&build_graph(model), &GraphStyle::default())
    }

    #[test]
    fn test_empty_document() {
        let dot = render_default(&CodeModel::default());
        assert_eq!(
            dot,
            "digraph depgraph {\n\
             \x20 graph [rankdir=\"LR\", pack=true];\n\
             \x20 node [shape=record, style=filled, fillcolor=\"gray95\"];\n\
             \x20 edge [arrowhead=empty];\n\
             }\n"
        );
    }

    #[test]
    fn test_interface_without_members() {
        let model = CodeModel::new(vec![
            Package::new("pkg1").with_type(CodeEntity::interface("FooI"))
        ]);
        let dot = render_default(&model);
        assert!(dot.contains("[shape=record, label=\"«interface»\\nFooI|\"];"));
    }

    #[test]
    fn test_member_line_and_cluster_label() {
        let foobar = CodeEntity::class("Foobar");
        let foobar = foobar
            .clone()
            .with_method(Method::public("get").returning(foobar.to_ref()));
        let model = CodeModel::new(vec![Package::new("pkg2").with_type(foobar)]);

        let dot = render_default(&model);
        assert!(dot.contains("label = \"pkg2\";"));
        assert!(dot.contains("[shape=record, label=\"Foobar|+\\ Foobar\\ get\\l\"];"));
        assert!(dot.contains("style=filled;\n"));
        assert!(dot.contains("color=\"lightgrey\";\n"));
    }

    #[test]
    fn test_members_joined_with_newline() {
        let entity = CodeEntity::class("Svc")
            .with_method(Method::public("start"))
            .with_method(Method::public("stop"));
        let model = CodeModel::new(vec![Package::new("p").with_type(entity)]);
        let dot = render_default(&model);
        assert!(dot.contains("label=\"Svc|+\\ start\\l\\n+\\ stop\\l\"];"));
    }

    #[test]
    fn test_edge_styles() {
        let base = CodeEntity::class("Base");
        let contract = CodeEntity::interface("Contract");
        let helper = CodeEntity::class("Helper");
        let child = CodeEntity::class("Child")
            .extending(&base)
            .implementing(&contract)
            .depending_on(&helper);
        let (c, b, i, h) = (
            crate::graph::EncodedId::encode(&child.id),
            crate::graph::EncodedId::encode(&base.id),
            crate::graph::EncodedId::encode(&contract.id),
            crate::graph::EncodedId::encode(&helper.id),
        );
        let model = CodeModel::new(vec![Package::new("p")
            .with_type(base)
            .with_type(contract)
            .with_type(helper)
            .with_type(child)]);

        let dot = render_default(&model);
        assert!(dot.contains(&format!("{c} -> {b} [arrowhead=empty];")));
        assert!(dot.contains(&format!("{c} -> {i} [style=dashed, arrowhead=empty];")));
        assert!(dot.contains(&format!("{c} -> {h} [constraint=false, arrowhead=none];")));
    }

    #[test]
    fn test_document_is_well_formed() {
        let model = CodeModel::new(vec![
            Package::new("a").with_type(CodeEntity::class("A1")),
            Package::unnamed().with_type(CodeEntity::class("D1")),
            Package::new("b").with_type(CodeEntity::interface("B1")),
        ]);
        let dot = render_default(&model);
        let lines: Vec<&str> = dot.lines().collect();

        assert_eq!(lines[0], "digraph depgraph {");
        assert_eq!(lines.iter().filter(|l| **l == "}").count(), 1);
        assert_eq!(*lines.last().unwrap(), "}");

        let opened = lines.iter().filter(|l| l.contains("subgraph cluster")).count();
        let closed = lines.iter().filter(|l| **l == "  }").count();
        assert_eq!(opened, 3);
        assert_eq!(opened, closed);
        assert!(dot.contains("subgraph clusterdefault{"));
        assert!(dot.contains("label = \"default\";"));
    }

    #[test]
    fn test_flat_style_without_members() {
        let entity = CodeEntity::class("Svc").with_method(Method::public("start"));
        let model = CodeModel::new(vec![Package::new("p").with_type(entity)]);
        let style = GraphStyle {
            show_members: false,
            group_packages: false,
            ..GraphStyle::default()
        };

        let dot = render(&build_graph(&model), &style);
        assert!(!dot.contains("subgraph"));
        assert!(dot.contains("[shape=record, label=\"Svc\"];"));
    }

    #[test]
    fn test_colors_with_spaces_are_quoted() {
        let model = CodeModel::new(vec![Package::new("p").with_type(CodeEntity::class("A"))]);
        let style = GraphStyle {
            node_fillcolor: "light blue".to_string(),
            cluster_color: "pale green".to_string(),
            ..GraphStyle::default()
        };

        let dot = render(&build_graph(&model), &style);
        assert!(dot.contains("fillcolor=\"light blue\"];"));
        assert!(dot.contains("  color=\"pale green\";\n"));
    }

    #[test]
    fn test_escaping() {
        assert_eq!(escape_record("a b|<c>"), "a\\ b\\|\\<c\\>");
        assert_eq!(escape_record("Ns\\Foo"), "Ns\\\\Foo");
        assert_eq!(escape_quoted("say \"hi\""), "say \\\"hi\\\"");
    }
}
