//! Edge descriptor extraction: normalizes the surface relation type and
//! actor modifiers of one edge into the triple the rule engine matches on.

use serde::Serialize;

use crate::error::{BelroError, Result};
use crate::model::{ActorModifier, BelGraph, Node, RelationType};

/// Normalized edge polarity. `Regulates` is the sign-neutral general
/// regulation polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Polarity {
    Increases,
    Decreases,
    Regulates,
    PositiveCorrelation,
    NegativeCorrelation,
    Transcription,
    Translation,
}

/// Whether a regulation edge asserts a direct (mechanistic) or general
/// relation. Only meaningful for increases/decreases/regulates polarities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Directness {
    Direct,
    General,
}

/// Normalized subject qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubjectModifier {
    None,
    Activity,
    Other,
}

/// Normalized object qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ObjectModifier {
    None,
    Activity,
    Secretion,
    Other,
}

/// Derived, immutable description of one edge.
///
/// Invariant: transcription/translation polarities never carry directness or
/// modifiers; structural edges are not causal-qualified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeDescriptor {
    pub polarity: Polarity,
    pub directness: Directness,
    pub subject_modifier: SubjectModifier,
    pub object_modifier: ObjectModifier,
}

/// Read and normalize the edge at `(u, v, key)`.
///
/// Directness is read from the explicit surface relation, never inferred
/// from modifiers.
pub fn describe_edge(graph: &BelGraph, u: &Node, v: &Node, key: &str) -> Result<EdgeDescriptor> {
    let data = graph
        .edge(u, v, key)
        .ok_or_else(|| BelroError::EdgeNotFound {
            key: key.to_string(),
        })?;

    let (polarity, directness) = match data.relation {
        RelationType::Increases => (Polarity::Increases, Directness::General),
        RelationType::DirectlyIncreases => (Polarity::Increases, Directness::Direct),
        RelationType::Decreases => (Polarity::Decreases, Directness::General),
        RelationType::DirectlyDecreases => (Polarity::Decreases, Directness::Direct),
        RelationType::Regulates => (Polarity::Regulates, Directness::General),
        RelationType::DirectlyRegulates => (Polarity::Regulates, Directness::Direct),
        RelationType::PositiveCorrelation => (Polarity::PositiveCorrelation, Directness::General),
        RelationType::NegativeCorrelation => (Polarity::NegativeCorrelation, Directness::General),
        RelationType::TranscribedTo => (Polarity::Transcription, Directness::General),
        RelationType::TranslatedTo => (Polarity::Translation, Directness::General),
        other @ (RelationType::Association | RelationType::CausesNoChange) => {
            return Err(BelroError::UnknownEdgeKind(other));
        }
    };

    let descriptor = if matches!(polarity, Polarity::Transcription | Polarity::Translation) {
        // Structural edges never carry causal qualifiers.
        EdgeDescriptor {
            polarity,
            directness: Directness::General,
            subject_modifier: SubjectModifier::None,
            object_modifier: ObjectModifier::None,
        }
    } else {
        EdgeDescriptor {
            polarity,
            directness,
            subject_modifier: match data.subject_modifier {
                None => SubjectModifier::None,
                Some(ActorModifier::Activity) => SubjectModifier::Activity,
                Some(_) => SubjectModifier::Other,
            },
            object_modifier: match data.object_modifier {
                None => ObjectModifier::None,
                Some(ActorModifier::Activity) => ObjectModifier::Activity,
                Some(ActorModifier::Secretion) => ObjectModifier::Secretion,
                Some(_) => ObjectModifier::Other,
            },
        }
    };
    log::debug!("edge {}: {:?}", key, descriptor);
    Ok(descriptor)
}
