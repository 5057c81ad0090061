//! UML-like view of a single class or interface.

use std::collections::{HashMap, HashSet};

use super::encode::EncodedId;
use super::types::EdgeKind;
use crate::model::{CodeEntity, EntityKind, TypeRef};

/// Marker line rendered above the name of an interface.
pub const INTERFACE_STEREOTYPE: &str = "«interface»";

/// Normalized view of one user-defined entity: its node label content and
/// its outgoing edges.
///
/// The three edge lists never share a target. A target reachable through
/// several relationships is kept only under the highest-precedence kind
/// (see [`EdgeKind::PRECEDENCE`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRepresentation {
    pub id: EncodedId,
    pub name: String,
    pub kind: EntityKind,
    /// Public member signatures, e.g. `+ Foobar get`.
    pub members: Vec<String>,
    pub parent: Option<EncodedId>,
    pub interfaces: Vec<EncodedId>,
    pub dependencies: Vec<EncodedId>,
}

impl EntityRepresentation {
    /// Build from an entity, trusting the scope flags of its references.
    pub fn from_entity(entity: &CodeEntity) -> Self {
        Self::with_scope(entity, &HashMap::new())
    }

    /// Build from an entity, resolving each reference's scope through
    /// `scope` (see [`CodeModel::scope_index`](crate::model::CodeModel::scope_index)).
    /// References to ids missing from `scope` fall back to their own flag.
    pub fn with_scope(entity: &CodeEntity, scope: &HashMap<String, bool>) -> Self {
        let members = entity
            .methods
            .iter()
            .filter(|m| m.is_public())
            .map(|m| {
                let return_type = m
                    .return_type
                    .as_ref()
                    .map(|t| t.name.trim())
                    .unwrap_or_default();
                if return_type.is_empty() {
                    format!("+ {}", m.name)
                } else {
                    format!("+ {} {}", return_type, m.name)
                }
            })
            .collect();

        let mut representation = Self {
            id: EncodedId::encode(&entity.id),
            name: entity.name.clone(),
            kind: entity.kind,
            members,
            parent: None,
            interfaces: Vec::new(),
            dependencies: Vec::new(),
        };

        let mut claimed: HashSet<EncodedId> = HashSet::new();
        for kind in EdgeKind::PRECEDENCE {
            let targets: Vec<EncodedId> = relations(entity, kind)
                .filter(|r| scope.get(&r.id).copied().unwrap_or(r.user_defined))
                .map(|r| EncodedId::encode(&r.id))
                .filter(|id| claimed.insert(id.clone()))
                .collect();

            match kind {
                EdgeKind::Inheritance => representation.parent = targets.into_iter().next(),
                EdgeKind::Implementation => representation.interfaces = targets,
                EdgeKind::Dependency => representation.dependencies = targets,
            }
        }

        representation
    }

    /// Label header lines: the stereotype marker for interfaces, then the name.
    pub fn header(&self) -> Vec<&str> {
        match self.kind {
            EntityKind::Interface => vec![INTERFACE_STEREOTYPE, self.name.as_str()],
            EntityKind::Class => vec![self.name.as_str()],
        }
    }

    /// Outgoing edges in output order: parent, interfaces, dependencies.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeKind, &EncodedId)> {
        self.parent
            .iter()
            .map(|id| (EdgeKind::Inheritance, id))
            .chain(self.interfaces.iter().map(|id| (EdgeKind::Implementation, id)))
            .chain(self.dependencies.iter().map(|id| (EdgeKind::Dependency, id)))
    }
}

/// The model references behind one edge kind.
fn relations(entity: &CodeEntity, kind: EdgeKind) -> Box<dyn Iterator<Item = &TypeRef> + '_> {
    match kind {
        EdgeKind::Inheritance => Box::new(entity.parent.iter()),
        EdgeKind::Implementation => Box::new(entity.interfaces.iter()),
        EdgeKind::Dependency => Box::new(entity.dependencies.iter()),
    }
}
