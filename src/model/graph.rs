//! In-memory BEL multigraph.

use std::collections::HashMap;

use uuid::Uuid;

use super::edge::{ActorModifier, EdgeData, EdgeKey, RelationType};
use super::node::Node;

/// Directed multigraph of BEL nodes. Parallel edges between the same
/// endpoints are distinguished by a key minted on insertion.
#[derive(Debug, Clone, Default)]
pub struct BelGraph {
    edges: HashMap<Node, HashMap<Node, Vec<(EdgeKey, EdgeData)>>>,
    edge_count: usize,
}

impl BelGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an edge and mint its key.
    pub fn add_edge(&mut self, u: Node, v: Node, data: EdgeData) -> EdgeKey {
        let key = Uuid::new_v4().to_string();
        self.edges
            .entry(u)
            .or_default()
            .entry(v)
            .or_default()
            .push((key.clone(), data));
        self.edge_count += 1;
        key
    }

    /// Look up one edge by its endpoints and key.
    pub fn edge(&self, u: &Node, v: &Node, key: &str) -> Option<&EdgeData> {
        self.edges
            .get(u)?
            .get(v)?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, data)| data)
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }

    /// Qualified edge with an explicit relation type, mirroring the source
    /// DSL's `add_qualified_edge`.
    #[allow(clippy::too_many_arguments)]
    pub fn add_qualified_edge(
        &mut self,
        u: Node,
        v: Node,
        relation: RelationType,
        citation: &str,
        evidence: &str,
        subject_modifier: Option<ActorModifier>,
        object_modifier: Option<ActorModifier>,
    ) -> EdgeKey {
        let mut data = EdgeData::new(relation, citation, evidence);
        data.subject_modifier = subject_modifier;
        data.object_modifier = object_modifier;
        self.add_edge(u, v, data)
    }

    pub fn add_increases(
        &mut self,
        u: Node,
        v: Node,
        citation: &str,
        evidence: &str,
        subject_modifier: Option<ActorModifier>,
        object_modifier: Option<ActorModifier>,
    ) -> EdgeKey {
        self.add_qualified_edge(
            u,
            v,
            RelationType::Increases,
            citation,
            evidence,
            subject_modifier,
            object_modifier,
        )
    }

    pub fn add_directly_increases(
        &mut self,
        u: Node,
        v: Node,
        citation: &str,
        evidence: &str,
        subject_modifier: Option<ActorModifier>,
        object_modifier: Option<ActorModifier>,
    ) -> EdgeKey {
        self.add_qualified_edge(
            u,
            v,
            RelationType::DirectlyIncreases,
            citation,
            evidence,
            subject_modifier,
            object_modifier,
        )
    }

    pub fn add_decreases(
        &mut self,
        u: Node,
        v: Node,
        citation: &str,
        evidence: &str,
        subject_modifier: Option<ActorModifier>,
        object_modifier: Option<ActorModifier>,
    ) -> EdgeKey {
        self.add_qualified_edge(
            u,
            v,
            RelationType::Decreases,
            citation,
            evidence,
            subject_modifier,
            object_modifier,
        )
    }

    pub fn add_directly_decreases(
        &mut self,
        u: Node,
        v: Node,
        citation: &str,
        evidence: &str,
        subject_modifier: Option<ActorModifier>,
        object_modifier: Option<ActorModifier>,
    ) -> EdgeKey {
        self.add_qualified_edge(
            u,
            v,
            RelationType::DirectlyDecreases,
            citation,
            evidence,
            subject_modifier,
            object_modifier,
        )
    }

    /// Structural transcription edge (gene to RNA). Unqualified: no
    /// citation, evidence, or modifiers.
    pub fn add_transcription(&mut self, gene: Node, rna: Node) -> EdgeKey {
        self.add_edge(gene, rna, EdgeData::new(RelationType::TranscribedTo, "", ""))
    }

    /// Structural translation edge (RNA to protein).
    pub fn add_translation(&mut self, rna: Node, protein: Node) -> EdgeKey {
        self.add_edge(rna, protein, EdgeData::new(RelationType::TranslatedTo, "", ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Xref;

    fn protein(name: &str) -> Node {
        Node::protein(Xref::new("hgnc", name, name))
    }

    #[test]
    fn test_add_and_lookup_edge() {
        let mut graph = BelGraph::new();
        let key = graph.add_increases(protein("A"), protein("B"), "pmid:1", "ev", None, None);
        let data = graph.edge(&protein("A"), &protein("B"), &key).unwrap();
        assert_eq!(data.relation, RelationType::Increases);
        assert_eq!(data.citation, "pmid:1");
    }

    #[test]
    fn test_parallel_edges_get_distinct_keys() {
        let mut graph = BelGraph::new();
        let k1 = graph.add_increases(protein("A"), protein("B"), "pmid:1", "ev1", None, None);
        let k2 = graph.add_decreases(protein("A"), protein("B"), "pmid:2", "ev2", None, None);
        assert_ne!(k1, k2);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(
            graph.edge(&protein("A"), &protein("B"), &k1).unwrap().relation,
            RelationType::Increases
        );
        assert_eq!(
            graph.edge(&protein("A"), &protein("B"), &k2).unwrap().relation,
            RelationType::Decreases
        );
    }

    #[test]
    fn test_missing_edge_is_none() {
        let mut graph = BelGraph::new();
        let key = graph.add_increases(protein("A"), protein("B"), "pmid:1", "ev", None, None);
        assert!(graph.edge(&protein("B"), &protein("A"), &key).is_none());
        assert!(graph.edge(&protein("A"), &protein("B"), "no-such-key").is_none());
    }

    #[test]
    fn test_structural_edges_are_unqualified() {
        let mut graph = BelGraph::new();
        let gene = Node::Gene(Xref::new("hgnc", "G", "G"));
        let rna = Node::Rna(Xref::new("hgnc", "G", "G"));
        let key = graph.add_transcription(gene.clone(), rna.clone());
        let data = graph.edge(&gene, &rna, &key).unwrap();
        assert_eq!(data.relation, RelationType::TranscribedTo);
        assert!(data.subject_modifier.is_none());
        assert!(data.object_modifier.is_none());
    }

    #[test]
    fn test_empty_graph() {
        let graph = BelGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}
