//! Dependency Edges
//!
//! A directed edge `source -> target` means "target depends on source":
//! the source tier must be deployed before the target tier may start.
//!
//! Edges are kept in a flat insertion-ordered list rather than adjacency
//! maps. The graphs edited here are small (tens of tiers), every mutation
//! republishes the full projection anyway, and insertion order is what
//! makes the projected `parents` lists deterministic.

use serde::{Deserialize, Serialize};

use super::node::TierId;

/// A directed dependency between two tiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    source: TierId,
    target: TierId,
}

impl Edge {
    /// Create an edge meaning `target` depends on `source`.
    pub fn new(source: TierId, target: TierId) -> Self {
        Self { source, target }
    }

    /// The prerequisite tier.
    pub fn source(&self) -> &TierId {
        &self.source
    }

    /// The dependent tier.
    pub fn target(&self) -> &TierId {
        &self.target
    }
}

/// Insertion-ordered collection of edges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeList {
    edges: Vec<Edge>,
}

impl EdgeList {
    /// Create an empty edge list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True if no edges are present.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// True if the exact `source -> target` edge exists.
    pub fn contains(&self, source: &TierId, target: &TierId) -> bool {
        self.edges
            .iter()
            .any(|e| e.source() == source && e.target() == target)
    }

    /// Append an edge.
    pub fn push(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Remove the `source -> target` edge if present.
    ///
    /// Returns true when an edge was actually removed.
    pub fn remove(&mut self, source: &TierId, target: &TierId) -> bool {
        let before = self.edges.len();
        self.edges
            .retain(|e| !(e.source() == source && e.target() == target));
        self.edges.len() != before
    }

    /// Remove every edge whose source or target is one of `ids`.
    ///
    /// Returns the number of edges removed.
    pub fn purge_nodes(&mut self, ids: &[TierId]) -> usize {
        let before = self.edges.len();
        self.edges
            .retain(|e| !ids.contains(e.source()) && !ids.contains(e.target()));
        before - self.edges.len()
    }

    /// Sources of every edge targeting `target`, in insertion order.
    pub fn parents_of<'a>(&'a self, target: &'a TierId) -> impl Iterator<Item = &'a TierId> {
        self.edges
            .iter()
            .filter(move |e| e.target() == target)
            .map(|e| e.source())
    }

    /// Iterate over all edges in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    /// View the edges as a slice.
    pub fn as_slice(&self) -> &[Edge] {
        &self.edges
    }

    /// Remove all edges.
    pub fn clear(&mut self) {
        self.edges.clear();
    }
}

impl FromIterator<Edge> for EdgeList {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(source: &str, target: &str) -> Edge {
        Edge::new(TierId::new(source), TierId::new(target))
    }

    #[test]
    fn contains_and_remove() {
        let mut edges = EdgeList::new();
        edges.push(edge("a", "b"));

        assert!(edges.contains(&"a".into(), &"b".into()));
        assert!(!edges.contains(&"b".into(), &"a".into()));

        assert!(edges.remove(&"a".into(), &"b".into()));
        assert!(edges.is_empty());

        // Removing again is a no-op
        assert!(!edges.remove(&"a".into(), &"b".into()));
    }

    #[test]
    fn purge_nodes_removes_both_directions() {
        let mut edges = EdgeList::new();
        edges.push(edge("a", "b"));
        edges.push(edge("b", "c"));
        edges.push(edge("a", "c"));

        let removed = edges.purge_nodes(&["b".into()]);

        assert_eq!(removed, 2);
        assert_eq!(edges.len(), 1);
        assert!(edges.contains(&"a".into(), &"c".into()));
    }

    #[test]
    fn parents_follow_insertion_order() {
        let mut edges = EdgeList::new();
        edges.push(edge("x", "t"));
        edges.push(edge("y", "s"));
        edges.push(edge("z", "t"));

        let target = TierId::new("t");
        let parents: Vec<_> = edges.parents_of(&target).map(TierId::as_str).collect();
        assert_eq!(parents, vec!["x", "z"]);
    }
}
