//! Classification engine: entity classes, edge descriptors, and the ordered
//! rule catalog, composed behind [`relation_for_edge`].

mod descriptor;
mod entity;
mod rules;

pub use descriptor::{
    describe_edge, Directness, EdgeDescriptor, ObjectModifier, Polarity, SubjectModifier,
};
pub use entity::{classify_node, modified_view, ModifiedView, NodeClass, NodeKind};
pub use rules::{
    relation_for, RelationResult, RoTerm, RuleContext, ACTIVITY_DIRECTLY_NEGATIVELY_REGULATES_ACTIVITY_OF,
    ACTIVITY_DIRECTLY_POSITIVELY_REGULATES_ACTIVITY_OF, ACTIVITY_DIRECTLY_REGULATES_ACTIVITY_OF,
    CAUSES_CONDITION, INCREASES_EXPRESSION_OF, IS_SUBSTANCE_THAT_TREATS, OVER_EXPRESSED_IN,
    PHOSPHORYLATES, REGULATES_TRANSPORT_OF, REPRESSES_EXPRESSION_OF, RIBOSOMALLY_TRANSLATES_TO,
    TRANSCRIBED_TO, UBIQUITINATES, UNDER_EXPRESSED_IN,
};

use crate::error::Result;
use crate::model::{BelGraph, Node};

/// Classify the edge at `(u, v, key)` into an RO term, or the unmapped
/// sentinel when no rule covers it.
///
/// Pure function of its inputs: nothing is cached between calls, so it is
/// safe to invoke concurrently and repeatedly as long as the graph is not
/// mutated underneath a call.
pub fn relation_for_edge(
    graph: &BelGraph,
    u: &Node,
    v: &Node,
    key: &str,
) -> Result<RelationResult> {
    let descriptor = describe_edge(graph, u, v, key)?;
    let ctx = RuleContext {
        subject: u,
        object: v,
        subject_class: classify_node(u),
        object_class: classify_node(v),
        descriptor,
    };
    Ok(relation_for(&ctx))
}
