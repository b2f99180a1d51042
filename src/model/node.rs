//! BEL node terms: entity identity, modification variants, and the node enum.

use serde::{Deserialize, Serialize};

/// Identity triple for a named entity. Namespace resolution is owned by the
/// caller; equality here is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Xref {
    pub namespace: String,
    pub identifier: String,
    pub name: String,
}

impl Xref {
    pub fn new(
        namespace: impl Into<String>,
        identifier: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            identifier: identifier.into(),
            name: name.into(),
        }
    }
}

/// Post-translational modification vocabulary.
///
/// The vocabulary is wider than the set of modifications with a dedicated RO
/// mapping; unmapped kinds still tag nodes but never match a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modification {
    Phosphorylation,
    Ubiquitination,
    Methylation,
    Acetylation,
}

impl Modification {
    /// Short BEL code, e.g. `Ph` for phosphorylation.
    pub fn code(self) -> &'static str {
        match self {
            Modification::Phosphorylation => "Ph",
            Modification::Ubiquitination => "Ub",
            Modification::Methylation => "Me",
            Modification::Acetylation => "Ac",
        }
    }
}

/// A BEL graph node.
///
/// `Complex` and `BiologicalProcess` are carried so graphs containing them
/// round-trip through classification; the classifier treats them as
/// unsupported shapes rather than errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Node {
    Gene(Xref),
    Rna(Xref),
    Protein { xref: Xref, variants: Vec<Modification> },
    Abundance(Xref),
    Pathology(Xref),
    Composite(Vec<Node>),
    Complex(Vec<Node>),
    BiologicalProcess(Xref),
    Reaction { reactants: Vec<Node>, products: Vec<Node> },
}

impl Node {
    /// Unmodified protein for the given identity.
    pub fn protein(xref: Xref) -> Self {
        Node::Protein {
            xref,
            variants: Vec::new(),
        }
    }

    /// Single-substrate reaction, e.g. `protein -> phosphorylated protein`.
    pub fn reaction(reactant: Node, product: Node) -> Self {
        Node::Reaction {
            reactants: vec![reactant],
            products: vec![product],
        }
    }

    /// The identity triple of a named node; `None` for list and reaction terms.
    pub fn xref(&self) -> Option<&Xref> {
        match self {
            Node::Gene(xref)
            | Node::Rna(xref)
            | Node::Abundance(xref)
            | Node::Pathology(xref)
            | Node::BiologicalProcess(xref) => Some(xref),
            Node::Protein { xref, .. } => Some(xref),
            Node::Composite(_) | Node::Complex(_) | Node::Reaction { .. } => None,
        }
    }

    /// Copy of this protein carrying the given variants in addition to any it
    /// already has. `None` for non-protein nodes.
    pub fn with_variants(&self, extra: impl IntoIterator<Item = Modification>) -> Option<Node> {
        match self {
            Node::Protein { xref, variants } => {
                let mut variants = variants.clone();
                variants.extend(extra);
                Some(Node::Protein {
                    xref: xref.clone(),
                    variants,
                })
            }
            _ => None,
        }
    }

    /// For a protein, the RNA it is translated from. Back-references share
    /// the identity triple; they carry no variants.
    pub fn rna(&self) -> Option<Node> {
        match self {
            Node::Protein { xref, .. } => Some(Node::Rna(xref.clone())),
            _ => None,
        }
    }

    /// For an RNA, the gene it is transcribed from.
    pub fn gene(&self) -> Option<Node> {
        match self {
            Node::Rna(xref) => Some(Node::Gene(xref.clone())),
            _ => None,
        }
    }
}
