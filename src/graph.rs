//! Arena-backed precedence graph.
//!
//! Node `i` of the graph is the activity at position `i` of the
//! [`Activities`] it was built from, so schedule state can live in a plain
//! `Vec` indexed the same way. Edges carry their [`RelationshipType`].
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

use crate::models::{Activities, ActivityId, RelationshipType};

#[derive(Debug, Clone)]
pub(crate) struct PrecedenceGraph {
    graph: DiGraph<ActivityId, RelationshipType>,
}

impl PrecedenceGraph {
    /// One node per activity, no edges.
    pub(crate) fn with_nodes(activities: &Activities) -> Self {
        let mut graph = DiGraph::with_capacity(activities.len(), activities.len());
        for activity in activities {
            graph.add_node(activity.id());
        }
        Self { graph }
    }

    pub(crate) fn add_edge(&mut self, from: usize, to: usize, relationship_type: RelationshipType) {
        self.graph
            .add_edge(NodeIndex::new(from), NodeIndex::new(to), relationship_type);
    }

    pub(crate) fn predecessors(
        &self,
        node: usize,
    ) -> impl Iterator<Item = (usize, RelationshipType)> + '_ {
        self.graph
            .edges_directed(NodeIndex::new(node), Direction::Incoming)
            .map(|e| (e.source().index(), *e.weight()))
    }

    pub(crate) fn successors(
        &self,
        node: usize,
    ) -> impl Iterator<Item = (usize, RelationshipType)> + '_ {
        self.graph
            .edges_directed(NodeIndex::new(node), Direction::Outgoing)
            .map(|e| (e.target().index(), *e.weight()))
    }

    pub(crate) fn has_predecessors(&self, node: usize) -> bool {
        self.predecessors(node).next().is_some()
    }

    pub(crate) fn has_successors(&self, node: usize) -> bool {
        self.successors(node).next().is_some()
    }

    /// Node positions in topological order, or the position of a node on a
    /// cycle.
    pub(crate) fn topological_order(&self) -> Result<Vec<usize>, usize> {
        toposort(&self.graph, None)
            .map(|order| order.into_iter().map(NodeIndex::index).collect())
            .map_err(|cycle| cycle.node_id().index())
    }
}
