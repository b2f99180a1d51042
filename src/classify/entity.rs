//! Entity classification: coarse node kinds and modification tagging.

use serde::Serialize;

use crate::model::{Modification, Node, Xref};

/// Coarse node kind. `Other` is a deliberate unknown for shapes the rules
/// never match, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    Gene,
    Rna,
    Protein,
    Abundance,
    Pathology,
    Reaction,
    Composite,
    Other,
}

/// Classification of one node: coarse kind plus modification tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeClass {
    pub kind: NodeKind,
    pub modifications: Vec<Modification>,
}

impl NodeClass {
    fn plain(kind: NodeKind) -> Self {
        Self {
            kind,
            modifications: Vec::new(),
        }
    }
}

/// Classify a node. Total: unsupported shapes come back as `Other` with no
/// tags, so a single odd node cannot abort a batch run.
///
/// A reaction is tagged with a modification when it reads as "apply exactly
/// this modification to one protein": one reactant, one product, same
/// identity triple, product variants = reactant variants plus one.
pub fn classify_node(node: &Node) -> NodeClass {
    let class = match node {
        Node::Gene(_) => NodeClass::plain(NodeKind::Gene),
        Node::Rna(_) => NodeClass::plain(NodeKind::Rna),
        Node::Protein { variants, .. } => NodeClass {
            kind: NodeKind::Protein,
            modifications: variants.clone(),
        },
        Node::Abundance(_) => NodeClass::plain(NodeKind::Abundance),
        Node::Pathology(_) => NodeClass::plain(NodeKind::Pathology),
        Node::Composite(_) => NodeClass::plain(NodeKind::Composite),
        Node::Reaction { reactants, products } => NodeClass {
            kind: NodeKind::Reaction,
            modifications: reaction_modifications(reactants, products),
        },
        Node::Complex(_) | Node::BiologicalProcess(_) => NodeClass::plain(NodeKind::Other),
    };
    log::trace!("classified node as {:?}", class.kind);
    class
}

/// Canonical view of "the modified form of a protein", whether encoded
/// directly as a variant-carrying protein or as an equivalent reaction.
/// Normalizing here keeps the modification rules free of reaction
/// special-casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModifiedView<'a> {
    pub base: &'a Xref,
    pub modification: Modification,
}

/// View a node as a singly-modified protein, if it is one.
pub fn modified_view(node: &Node) -> Option<ModifiedView<'_>> {
    match node {
        Node::Protein { xref, variants } => match variants.as_slice() {
            [modification] => Some(ModifiedView {
                base: xref,
                modification: *modification,
            }),
            _ => None,
        },
        Node::Reaction { reactants, products } => {
            let added = reaction_modifications(reactants, products);
            let [modification] = added.as_slice() else {
                return None;
            };
            let Some(Node::Protein { xref, .. }) = single(reactants) else {
                return None;
            };
            Some(ModifiedView {
                base: xref,
                modification: *modification,
            })
        }
        _ => None,
    }
}

fn single(nodes: &[Node]) -> Option<&Node> {
    match nodes {
        [node] => Some(node),
        _ => None,
    }
}

/// Modifications added by a reaction: non-empty only when the product is the
/// reactant plus exactly one modification.
fn reaction_modifications(reactants: &[Node], products: &[Node]) -> Vec<Modification> {
    let (
        Some(Node::Protein {
            xref: reactant_xref,
            variants: reactant_variants,
        }),
        Some(Node::Protein {
            xref: product_xref,
            variants: product_variants,
        }),
    ) = (single(reactants), single(products))
    else {
        return Vec::new();
    };
    if reactant_xref != product_xref {
        return Vec::new();
    }
    let removed_any = reactant_variants
        .iter()
        .any(|m| !product_variants.contains(m));
    if removed_any {
        return Vec::new();
    }
    let added: Vec<Modification> = product_variants
        .iter()
        .copied()
        .filter(|m| !reactant_variants.contains(m))
        .collect();
    if added.len() == 1 {
        added
    } else {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xref(name: &str) -> Xref {
        Xref::new("hgnc", name, name)
    }

    fn phosphorylated(name: &str) -> Node {
        Node::protein(xref(name))
            .with_variants([Modification::Phosphorylation])
            .unwrap()
    }

    #[test]
    fn test_coarse_kinds() {
        assert_eq!(classify_node(&Node::Gene(xref("G"))).kind, NodeKind::Gene);
        assert_eq!(classify_node(&Node::Rna(xref("R"))).kind, NodeKind::Rna);
        assert_eq!(
            classify_node(&Node::Abundance(xref("caffeine"))).kind,
            NodeKind::Abundance
        );
        assert_eq!(
            classify_node(&Node::Pathology(xref("asthma"))).kind,
            NodeKind::Pathology
        );
        assert_eq!(
            classify_node(&Node::Composite(vec![Node::Gene(xref("G"))])).kind,
            NodeKind::Composite
        );
    }

    #[test]
    fn test_unsupported_shapes_are_other() {
        let complex = Node::Complex(vec![Node::protein(xref("A")), Node::protein(xref("B"))]);
        let class = classify_node(&complex);
        assert_eq!(class.kind, NodeKind::Other);
        assert!(class.modifications.is_empty());

        let process = Node::BiologicalProcess(xref("apoptosis"));
        assert_eq!(classify_node(&process).kind, NodeKind::Other);
    }

    #[test]
    fn test_protein_modifications_carried() {
        let class = classify_node(&phosphorylated("MAPK1"));
        assert_eq!(class.kind, NodeKind::Protein);
        assert_eq!(class.modifications, vec![Modification::Phosphorylation]);
    }

    #[test]
    fn test_modification_reaction_is_tagged() {
        let reaction = Node::reaction(Node::protein(xref("MAPK1")), phosphorylated("MAPK1"));
        let class = classify_node(&reaction);
        assert_eq!(class.kind, NodeKind::Reaction);
        assert_eq!(class.modifications, vec![Modification::Phosphorylation]);
    }

    #[test]
    fn test_reaction_with_different_substrate_not_tagged() {
        let reaction = Node::reaction(Node::protein(xref("MAPK1")), phosphorylated("TP53"));
        assert!(classify_node(&reaction).modifications.is_empty());
    }

    #[test]
    fn test_reaction_adding_two_modifications_not_tagged() {
        let doubly = Node::protein(xref("MAPK1"))
            .with_variants([Modification::Phosphorylation, Modification::Ubiquitination])
            .unwrap();
        let reaction = Node::reaction(Node::protein(xref("MAPK1")), doubly);
        assert!(classify_node(&reaction).modifications.is_empty());
    }

    #[test]
    fn test_reaction_removing_a_modification_not_tagged() {
        let reaction = Node::reaction(phosphorylated("MAPK1"), Node::protein(xref("MAPK1")));
        assert!(classify_node(&reaction).modifications.is_empty());
    }

    #[test]
    fn test_multi_substrate_reaction_not_tagged() {
        let reaction = Node::Reaction {
            reactants: vec![Node::protein(xref("MAPK1")), Node::Abundance(xref("ATP"))],
            products: vec![phosphorylated("MAPK1")],
        };
        assert!(classify_node(&reaction).modifications.is_empty());
    }

    #[test]
    fn test_modified_view_of_protein_and_reaction_agree() {
        let direct = phosphorylated("MAPK1");
        let reaction = Node::reaction(Node::protein(xref("MAPK1")), phosphorylated("MAPK1"));
        let direct_view = modified_view(&direct).unwrap();
        let reaction_view = modified_view(&reaction).unwrap();
        assert_eq!(direct_view, reaction_view);
        assert_eq!(direct_view.modification, Modification::Phosphorylation);
        assert_eq!(direct_view.base, &xref("MAPK1"));
    }

    #[test]
    fn test_modified_view_rejects_unmodified_and_doubly_modified() {
        assert!(modified_view(&Node::protein(xref("MAPK1"))).is_none());
        let doubly = Node::protein(xref("MAPK1"))
            .with_variants([Modification::Phosphorylation, Modification::Ubiquitination])
            .unwrap();
        assert!(modified_view(&doubly).is_none());
    }
}
