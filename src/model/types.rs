//! Core types of the analyzed code model.
//!
//! The model is produced by the upstream dependency analysis: packages
//! containing classes and interfaces, with inheritance, implementation and
//! usage relationships already resolved. The reporter only reads it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

fn default_user_defined() -> bool {
    true
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// The root of an analyzed codebase: its packages in analysis order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeModel {
    #[serde(default)]
    pub packages: Vec<Package>,
}

impl CodeModel {
    pub fn new(packages: Vec<Package>) -> Self {
        Self { packages }
    }

    /// Scope of every entity of the model, keyed by id. An entity is in
    /// scope when it and its package are both user-defined.
    pub fn scope_index(&self) -> HashMap<String, bool> {
        self.packages
            .iter()
            .flat_map(|p| {
                p.types
                    .iter()
                    .map(move |t| (t.id.clone(), p.user_defined && t.user_defined))
            })
            .collect()
    }

    /// Set the scope flag of every reference that resolves to an entity of
    /// this model from that entity. References to ids outside the model
    /// keep their own flag.
    pub fn link(&mut self) {
        let scope = self.scope_index();

        for entity in self.packages.iter_mut().flat_map(|p| p.types.iter_mut()) {
            for reference in entity.references_mut() {
                if let Some(&in_scope) = scope.get(&reference.id) {
                    reference.user_defined = in_scope;
                }
            }
        }
    }

    /// Total number of entities across all packages.
    pub fn entity_count(&self) -> usize {
        self.packages.iter().map(|p| p.types.len()).sum()
    }
}

/// A package (namespace) holding classes and interfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    /// Unique id. `None` places the package's types in the default grouping.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default = "default_user_defined")]
    pub user_defined: bool,
    #[serde(default)]
    pub types: Vec<CodeEntity>,
}

impl Package {
    /// A user-defined package with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Some(new_id()),
            name: name.into(),
            user_defined: true,
            types: Vec::new(),
        }
    }

    /// A user-defined package without id (the default package).
    pub fn unnamed() -> Self {
        Self {
            id: None,
            name: String::new(),
            user_defined: true,
            types: Vec::new(),
        }
    }

    pub fn external(mut self) -> Self {
        self.user_defined = false;
        self
    }

    pub fn with_type(mut self, entity: CodeEntity) -> Self {
        self.types.push(entity);
        self
    }
}

/// Whether an entity is a class or an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Class,
    Interface,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Class => write!(f, "class"),
            EntityKind::Interface => write!(f, "interface"),
        }
    }
}

/// Member visibility as resolved by the upstream parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

/// A reference from one entity to another (possibly external) entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub user_defined: bool,
}

impl TypeRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>, user_defined: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            user_defined,
        }
    }
}

/// A method of a class or interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub visibility: Visibility,
    /// The resolved return type, if any.
    #[serde(default)]
    pub return_type: Option<TypeRef>,
}

impl Method {
    pub fn public(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            return_type: None,
        }
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn returning(mut self, return_type: TypeRef) -> Self {
        self.return_type = Some(return_type);
        self
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }
}

/// A class or interface of the analyzed codebase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeEntity {
    pub id: String,
    pub name: String,
    pub kind: EntityKind,
    #[serde(default = "default_user_defined")]
    pub user_defined: bool,
    #[serde(default)]
    pub methods: Vec<Method>,
    #[serde(default)]
    pub parent: Option<TypeRef>,
    #[serde(default)]
    pub interfaces: Vec<TypeRef>,
    /// Entities referenced from this entity's implementation.
    #[serde(default)]
    pub dependencies: Vec<TypeRef>,
}

impl CodeEntity {
    fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            kind,
            user_defined: true,
            methods: Vec::new(),
            parent: None,
            interfaces: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, EntityKind::Class)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, EntityKind::Interface)
    }

    pub fn external(mut self) -> Self {
        self.user_defined = false;
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn extending(mut self, parent: &CodeEntity) -> Self {
        self.parent = Some(parent.to_ref());
        self
    }

    pub fn implementing(mut self, interface: &CodeEntity) -> Self {
        self.interfaces.push(interface.to_ref());
        self
    }

    pub fn depending_on(mut self, dependency: &CodeEntity) -> Self {
        self.dependencies.push(dependency.to_ref());
        self
    }

    /// A reference to this entity, carrying its scope flag.
    pub fn to_ref(&self) -> TypeRef {
        TypeRef::new(self.id.clone(), self.name.clone(), self.user_defined)
    }

    pub fn is_interface(&self) -> bool {
        self.kind == EntityKind::Interface
    }

    fn references_mut(&mut self) -> impl Iterator<Item = &mut TypeRef> {
        self.parent
            .iter_mut()
            .chain(self.interfaces.iter_mut())
            .chain(self.dependencies.iter_mut())
            .chain(self.methods.iter_mut().filter_map(|m| m.return_type.as_mut()))
    }
}
