//! The analyzed code model consumed by the reporter.
//!
//! Provides the model types, the visitor contract used to traverse them,
//! and loading of model documents from disk.

pub mod loader;
pub mod types;
pub mod visitor;

pub use loader::{load_model, ModelFormat};
pub use types::{CodeEntity, CodeModel, EntityKind, Method, Package, TypeRef, Visibility};
pub use visitor::Visitor;
