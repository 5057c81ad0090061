//! Graph builder: walks the code model and projects it into a
//! `DependencyGraph`.
//!
//! Only user-defined packages and entities are projected. Traversal order
//! follows the model, which fixes the node order of the output.

use std::collections::HashMap;
use tracing::debug;

use super::engine::DependencyGraph;
use super::representation::EntityRepresentation;
use crate::model::{CodeEntity, CodeModel, Package, Visitor};

/// Visitor collecting representations of user-defined entities.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: DependencyGraph,
    /// Entity scope by id, used to drop edges to out-of-scope targets.
    scope: HashMap<String, bool>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder resolving reference scope against `model`.
    pub fn for_model(model: &CodeModel) -> Self {
        Self {
            graph: DependencyGraph::new(),
            scope: model.scope_index(),
        }
    }

    pub fn finish(self) -> DependencyGraph {
        self.graph
    }

    fn visit_entity(&mut self, entity: &CodeEntity, package: &Package) {
        if !entity.user_defined {
            debug!(entity = %entity.name, kind = %entity.kind, "skipping external entity");
            return;
        }
        self.graph.add(package, EntityRepresentation::with_scope(entity, &self.scope));
    }
}

impl Visitor for GraphBuilder {
    fn visit_package(&mut self, package: &Package) {
        if !package.user_defined {
            debug!(package = %package.name, "skipping external package");
            return;
        }
        for entity in &package.types {
            entity.accept(package, self);
        }
    }

    fn visit_class(&mut self, class: &CodeEntity, package: &Package) {
        self.visit_entity(class, package);
    }

    fn visit_interface(&mut self, interface: &CodeEntity, package: &Package) {
        self.visit_entity(interface, package);
    }
}

/// Build the dependency graph of a code model in one traversal.
pub fn build_graph(model: &CodeModel) -> DependencyGraph {
    let mut builder = GraphBuilder::for_model(model);
    model.accept(&mut builder);
    builder.finish()
}
