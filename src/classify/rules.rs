//! Ordered rule catalog mapping classified edges onto RO terms.
//!
//! Rules are evaluated top to bottom, most specific first; the first match
//! wins. Keeping the catalog as a flat list of named predicates keeps the
//! order explicit and lets each rule be tested in isolation.

use serde::Serialize;

use super::descriptor::{Directness, EdgeDescriptor, ObjectModifier, Polarity, SubjectModifier};
use super::entity::{modified_view, NodeClass, NodeKind};
use crate::model::{Modification, Node};

/// One Relation Ontology term: stable identifier plus human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoTerm {
    pub ro_id: &'static str,
    pub label: &'static str,
}

const fn term(ro_id: &'static str, label: &'static str) -> RoTerm {
    RoTerm { ro_id, label }
}

pub const REGULATES_TRANSPORT_OF: RoTerm = term("RO:0002011", "regulates transport of");
pub const ACTIVITY_DIRECTLY_REGULATES_ACTIVITY_OF: RoTerm =
    term("RO:0002448", "activity directly regulates activity of");
pub const ACTIVITY_DIRECTLY_NEGATIVELY_REGULATES_ACTIVITY_OF: RoTerm =
    term("RO:0002449", "activity directly negatively regulates activity of");
pub const ACTIVITY_DIRECTLY_POSITIVELY_REGULATES_ACTIVITY_OF: RoTerm =
    term("RO:0002450", "activity directly positively regulates activity of");
pub const REPRESSES_EXPRESSION_OF: RoTerm = term("RO:0003002", "represses expression of");
pub const INCREASES_EXPRESSION_OF: RoTerm = term("RO:0003003", "increases expression of");
pub const IS_SUBSTANCE_THAT_TREATS: RoTerm = term("RO:0002606", "is substance that treats");
pub const CAUSES_CONDITION: RoTerm = term("RO:0003303", "causes condition");
pub const OVER_EXPRESSED_IN: RoTerm = term("RO:0002245", "over-expressed in");
pub const UNDER_EXPRESSED_IN: RoTerm = term("RO:0002246", "under-expressed in");
pub const TRANSCRIBED_TO: RoTerm = term("RO:0002511", "transcribed to");
pub const RIBOSOMALLY_TRANSLATES_TO: RoTerm = term("RO:0002513", "ribosomally translates to");
pub const PHOSPHORYLATES: RoTerm = term("RO:0002447", "phosphorylates");
pub const UBIQUITINATES: RoTerm = term("RO:0002480", "ubiquitinates");

/// Modification catalog: PTM kinds with a dedicated RO term. The
/// modification rule is driven by this table, not per-kind branches.
const MODIFICATION_CATALOG: &[(Modification, RoTerm)] = &[
    (Modification::Phosphorylation, PHOSPHORYLATES),
    (Modification::Ubiquitination, UBIQUITINATES),
];

/// Classification outcome: a mapped RO term, or the explicit unmapped
/// sentinel for well-formed edges no rule covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RelationResult {
    Mapped(RoTerm),
    Unmapped,
}

impl RelationResult {
    pub fn is_mapped(&self) -> bool {
        matches!(self, RelationResult::Mapped(_))
    }

    pub fn term(&self) -> Option<RoTerm> {
        match self {
            RelationResult::Mapped(term) => Some(*term),
            RelationResult::Unmapped => None,
        }
    }
}

/// Everything one rule may inspect about a single edge. The raw nodes are
/// carried alongside their classes because the structural rules (central
/// dogma, modification) need back-references and variant detail.
#[derive(Debug)]
pub struct RuleContext<'a> {
    pub subject: &'a Node,
    pub object: &'a Node,
    pub subject_class: NodeClass,
    pub object_class: NodeClass,
    pub descriptor: EdgeDescriptor,
}

struct Rule {
    name: &'static str,
    matches: fn(&RuleContext<'_>) -> Option<RoTerm>,
}

const RULES: &[Rule] = &[
    Rule {
        name: "transport_regulation",
        matches: transport_regulation,
    },
    Rule {
        name: "activity_regulates_activity",
        matches: activity_regulates_activity,
    },
    Rule {
        name: "expression_regulation",
        matches: expression_regulation,
    },
    Rule {
        name: "substance_vs_pathology",
        matches: substance_vs_pathology,
    },
    Rule {
        name: "expression_correlation",
        matches: expression_correlation,
    },
    Rule {
        name: "central_dogma",
        matches: central_dogma,
    },
    Rule {
        name: "protein_modification",
        matches: protein_modification,
    },
];

/// First-match evaluation over the ordered catalog. Total for well-formed
/// inputs: no rule matching yields the unmapped sentinel, never an error.
pub fn relation_for(ctx: &RuleContext<'_>) -> RelationResult {
    for rule in RULES {
        if let Some(term) = (rule.matches)(ctx) {
            log::debug!("rule {} matched: {} ({})", rule.name, term.ro_id, term.label);
            return RelationResult::Mapped(term);
        }
    }
    log::debug!("no rule matched; edge is unmapped");
    RelationResult::Unmapped
}

/// A secretion-qualified object makes the edge a transport regulation,
/// whatever the sign or directness.
fn transport_regulation(ctx: &RuleContext<'_>) -> Option<RoTerm> {
    let d = &ctx.descriptor;
    if d.object_modifier == ObjectModifier::Secretion
        && matches!(
            d.polarity,
            Polarity::Increases | Polarity::Decreases | Polarity::Regulates
        )
    {
        Some(REGULATES_TRANSPORT_OF)
    } else {
        None
    }
}

/// Both endpoints activity-qualified. Signed polarities additionally require
/// the explicit direct attribute; the sign-neutral regulates polarity maps
/// with or without it.
fn activity_regulates_activity(ctx: &RuleContext<'_>) -> Option<RoTerm> {
    let d = &ctx.descriptor;
    if d.subject_modifier != SubjectModifier::Activity
        || d.object_modifier != ObjectModifier::Activity
    {
        return None;
    }
    match (d.polarity, d.directness) {
        (Polarity::Increases, Directness::Direct) => {
            Some(ACTIVITY_DIRECTLY_POSITIVELY_REGULATES_ACTIVITY_OF)
        }
        (Polarity::Decreases, Directness::Direct) => {
            Some(ACTIVITY_DIRECTLY_NEGATIVELY_REGULATES_ACTIVITY_OF)
        }
        (Polarity::Regulates, _) => Some(ACTIVITY_DIRECTLY_REGULATES_ACTIVITY_OF),
        _ => None,
    }
}

/// Direct signed regulation of an RNA. A subject activity qualifier is
/// permitted but not required.
fn expression_regulation(ctx: &RuleContext<'_>) -> Option<RoTerm> {
    if ctx.object_class.kind != NodeKind::Rna {
        return None;
    }
    let d = &ctx.descriptor;
    if d.directness != Directness::Direct {
        return None;
    }
    match d.polarity {
        Polarity::Decreases => Some(REPRESSES_EXPRESSION_OF),
        Polarity::Increases => Some(INCREASES_EXPRESSION_OF),
        _ => None,
    }
}

/// A substance-like subject against a pathology: decreases reads as
/// treatment, increases as causation. Directness is irrelevant.
fn substance_vs_pathology(ctx: &RuleContext<'_>) -> Option<RoTerm> {
    if ctx.object_class.kind != NodeKind::Pathology {
        return None;
    }
    if !matches!(
        ctx.subject_class.kind,
        NodeKind::Abundance | NodeKind::Gene | NodeKind::Protein | NodeKind::Rna
    ) {
        return None;
    }
    match ctx.descriptor.polarity {
        Polarity::Decreases => Some(IS_SUBSTANCE_THAT_TREATS),
        Polarity::Increases => Some(CAUSES_CONDITION),
        _ => None,
    }
}

/// Correlation with a pathology maps to over-/under-expression.
fn expression_correlation(ctx: &RuleContext<'_>) -> Option<RoTerm> {
    if ctx.object_class.kind != NodeKind::Pathology {
        return None;
    }
    match ctx.descriptor.polarity {
        Polarity::PositiveCorrelation => Some(OVER_EXPRESSED_IN),
        Polarity::NegativeCorrelation => Some(UNDER_EXPRESSED_IN),
        _ => None,
    }
}

/// Structural transcription/translation edges, accepted only when the
/// object's back-reference resolves to the subject.
fn central_dogma(ctx: &RuleContext<'_>) -> Option<RoTerm> {
    match ctx.descriptor.polarity {
        Polarity::Transcription => {
            if ctx.subject_class.kind == NodeKind::Gene
                && ctx.object_class.kind == NodeKind::Rna
                && ctx.object.gene().as_ref() == Some(ctx.subject)
            {
                Some(TRANSCRIBED_TO)
            } else {
                None
            }
        }
        Polarity::Translation => {
            if ctx.subject_class.kind == NodeKind::Rna
                && ctx.object_class.kind == NodeKind::Protein
                && ctx.object.rna().as_ref() == Some(ctx.subject)
            {
                Some(RIBOSOMALLY_TRANSLATES_TO)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// A protein increasing the singly-modified form of a protein, whether the
/// object is the modified protein itself or an equivalent reaction. Any
/// directness; the catalog decides the term.
fn protein_modification(ctx: &RuleContext<'_>) -> Option<RoTerm> {
    if ctx.subject_class.kind != NodeKind::Protein {
        return None;
    }
    if ctx.descriptor.polarity != Polarity::Increases {
        return None;
    }
    let view = modified_view(ctx.object)?;
    MODIFICATION_CATALOG
        .iter()
        .find(|(kind, _)| *kind == view.modification)
        .map(|(_, term)| *term)
}
