pub mod classify;
pub mod error;
pub mod model;

pub use classify::{relation_for_edge, NodeClass, NodeKind, RelationResult, RoTerm};
pub use error::{BelroError, Result};
pub use model::{ActorModifier, BelGraph, EdgeData, Modification, Node, RelationType, Xref};
