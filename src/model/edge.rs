//! BEL edge attributes: surface relation types, actor modifiers, edge data.

use serde::{Deserialize, Serialize};

/// Key identifying one edge among the parallel edges between a node pair.
/// Minted by the graph on insertion (UUID v4).
pub type EdgeKey = String;

/// Surface relation type as stored on an edge, before normalization.
///
/// `Association` and `CausesNoChange` occur in source graphs but are outside
/// the recognized polarity set; the descriptor extractor rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationType {
    Increases,
    DirectlyIncreases,
    Decreases,
    DirectlyDecreases,
    Regulates,
    DirectlyRegulates,
    PositiveCorrelation,
    NegativeCorrelation,
    TranscribedTo,
    TranslatedTo,
    Association,
    CausesNoChange,
}

/// Subject/object qualifier attached to a qualified edge, narrowing the
/// causal claim to a mechanistic context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorModifier {
    Activity,
    Secretion,
    Translocation,
    Degradation,
}

/// Attributes of one edge. Immutable once inserted into the graph.
///
/// Citation and evidence accompany every qualified BEL edge; the classifier
/// reads only the relation type and the modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeData {
    pub relation: RelationType,
    pub citation: String,
    pub evidence: String,
    pub subject_modifier: Option<ActorModifier>,
    pub object_modifier: Option<ActorModifier>,
}

impl EdgeData {
    pub fn new(relation: RelationType, citation: impl Into<String>, evidence: impl Into<String>) -> Self {
        Self {
            relation,
            citation: citation.into(),
            evidence: evidence.into(),
            subject_modifier: None,
            object_modifier: None,
        }
    }

    pub fn with_subject_modifier(mut self, modifier: ActorModifier) -> Self {
        self.subject_modifier = Some(modifier);
        self
    }

    pub fn with_object_modifier(mut self, modifier: ActorModifier) -> Self {
        self.object_modifier = Some(modifier);
        self
    }
}
