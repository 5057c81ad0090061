//! Push-based traversal over the code model.
//!
//! The set of visitable nodes is closed: packages, classes and interfaces.
//! Each node dispatches itself to the matching `Visitor` method, so
//! consumers never inspect the model's storage directly.

use super::types::{CodeEntity, CodeModel, EntityKind, Package};

/// Receives notifications for every node of a traversal.
pub trait Visitor {
    /// Called once per package. The default walks the package's types in order.
    fn visit_package(&mut self, package: &Package) {
        for entity in &package.types {
            entity.accept(package, self);
        }
    }

    fn visit_class(&mut self, class: &CodeEntity, package: &Package);

    fn visit_interface(&mut self, interface: &CodeEntity, package: &Package);
}

impl CodeModel {
    /// Visit every package in model order.
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        for package in &self.packages {
            package.accept(visitor);
        }
    }
}

impl Package {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        visitor.visit_package(self);
    }
}

impl CodeEntity {
    /// Dispatch to the visitor method for this entity's kind.
    pub fn accept<V: Visitor + ?Sized>(&self, package: &Package, visitor: &mut V) {
        match self.kind {
            EntityKind::Class => visitor.visit_class(self, package),
            EntityKind::Interface => visitor.visit_interface(self, package),
        }
    }
}
