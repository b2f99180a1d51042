//! BEL graph data model: node terms, edge attributes, and the in-memory
//! multigraph the classifier reads.
//!
//! Graph construction lives here so callers can assemble inputs; the
//! classification engine in [`crate::classify`] only ever reads this model.

mod edge;
mod graph;
mod node;

pub use edge::{ActorModifier, EdgeData, EdgeKey, RelationType};
pub use graph::BelGraph;
pub use node::{Modification, Node, Xref};
