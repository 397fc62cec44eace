//! Graph Editing Session
//!
//! The session is the single mutation entry point for the tier graph. Every
//! user intent from the designer canvas (add, remove, connect, disconnect,
//! move, select) maps onto one synchronous session operation.
//!
//! # Invariants
//!
//! - The edge set stays acyclic at all times; candidate edges are checked
//!   before they are committed.
//! - Operations are all-or-nothing: a failed operation leaves the graph in
//!   its previous valid state, and no intermediate state is observable.
//! - After every successful mutation the session republishes the projected
//!   tier list to the form-state sink. That republish is the only side
//!   effect besides the returned value.
//!
//! # Concurrency
//!
//! None. The session is driven by a single-threaded UI event loop, one
//! operation at a time; it holds no locks and assumes at most one in-flight
//! call.

use serde_json::Value;
use tracing::{debug, trace};

use crate::graph::{
    contains_cycle, would_create_cycle, Edge, EdgeList, GraphError, GraphResult, NodeRegistry,
    Position, TierId,
};
use crate::projection::{self, TierRecord};

/// Receiver for the projected tier list.
///
/// The hosting form implements this to pick up the canonical list after
/// every mutation; it may validate it, stage it for submission, or both.
/// The session assumes nothing else about the implementation.
pub trait FormStateSink {
    /// Called with the full projected list after each successful mutation.
    fn publish(&mut self, list: &[TierRecord]);
}

impl<F> FormStateSink for F
where
    F: FnMut(&[TierRecord]),
{
    fn publish(&mut self, list: &[TierRecord]) {
        self(list)
    }
}

/// Interactive editing session over a tier dependency graph.
///
/// Owns the node registry and the edge list exclusively; all changes go
/// through the operations below so the acyclicity invariant is enforced at
/// a single choke point.
#[derive(Debug)]
pub struct GraphEditingSession<S: FormStateSink> {
    registry: NodeRegistry,
    edges: EdgeList,
    sink: S,
}

impl<S: FormStateSink> GraphEditingSession<S> {
    /// Create an empty session publishing to `sink`.
    pub fn new(sink: S) -> Self {
        Self {
            registry: NodeRegistry::new(),
            edges: EdgeList::new(),
            sink,
        }
    }

    /// Seed the session from a previously saved tier list.
    ///
    /// Replaces the current graph wholesale. Fails with
    /// [`GraphError::MalformedInput`] when the list's `parents` references
    /// are inconsistent and with [`GraphError::CycleDetected`] when the
    /// saved dependencies are cyclic; in both cases the current graph is
    /// left untouched.
    pub fn load(&mut self, records: &[TierRecord]) -> GraphResult<()> {
        let (nodes, edges) = projection::from_list(records)?;
        if contains_cycle(&edges) {
            return Err(GraphError::cycle("loaded tier list contains a cycle"));
        }

        self.registry.clear();
        for node in nodes {
            self.registry.insert(node);
        }
        self.edges = edges.into_iter().collect();

        debug!(
            tiers = self.registry.len(),
            dependencies = self.edges.len(),
            "loaded tier list"
        );
        self.republish();
        Ok(())
    }

    /// Add a tier with a freshly generated id. Never fails.
    pub fn add_node(&mut self, attributes: Value, position: Position) -> TierId {
        let id = self.registry.add_node(attributes, position);
        debug!(tier = %id, "added tier");
        self.republish();
        id
    }

    /// Remove the given tiers and every dependency touching them.
    ///
    /// Unknown ids are ignored; an empty set is a no-op. Never fails.
    pub fn remove_nodes(&mut self, ids: &[TierId]) {
        for id in ids {
            self.registry.remove_node(id);
        }
        let purged = self.edges.purge_nodes(ids);
        debug!(tiers = ids.len(), dependencies = purged, "removed tiers");
        self.republish();
    }

    /// Add the dependency `target` runs after `source`.
    pub fn connect(&mut self, source: &TierId, target: &TierId) -> GraphResult<()> {
        if !self.registry.contains(source) {
            return Err(GraphError::unknown_node(source.clone()));
        }
        if !self.registry.contains(target) {
            return Err(GraphError::unknown_node(target.clone()));
        }
        if source == target {
            return Err(GraphError::self_loop(source.clone()));
        }

        let candidate = Edge::new(source.clone(), target.clone());
        if would_create_cycle(self.edges.as_slice(), &candidate) {
            return Err(GraphError::cycle(format!(
                "adding dependency {} -> {} would create a cycle",
                source, target
            )));
        }
        if self.edges.contains(source, target) {
            return Err(GraphError::duplicate_edge(source.clone(), target.clone()));
        }

        self.edges.push(candidate);
        debug!(source = %source, target = %target, "connected tiers");
        self.republish();
        Ok(())
    }

    /// Remove the `source -> target` dependency if present; no-op otherwise.
    pub fn disconnect(&mut self, source: &TierId, target: &TierId) {
        let removed = self.edges.remove(source, target);
        if removed {
            debug!(source = %source, target = %target, "disconnected tiers");
        }
        self.republish();
    }

    /// Update a tier's canvas position.
    pub fn move_node(&mut self, id: &TierId, position: Position) -> GraphResult<()> {
        if !self.registry.contains(id) {
            return Err(GraphError::unknown_node(id.clone()));
        }
        self.registry.update_position(id, position)?;
        self.republish();
        Ok(())
    }

    /// Replace a tier's attribute payload.
    pub fn update_attributes(&mut self, id: &TierId, attributes: Value) -> GraphResult<()> {
        if !self.registry.contains(id) {
            return Err(GraphError::unknown_node(id.clone()));
        }
        self.registry.update_attributes(id, attributes)?;
        self.republish();
        Ok(())
    }

    /// Ids of all current tiers in insertion order.
    ///
    /// Presentation helper for multi-select; does not mutate or republish.
    pub fn select_all(&self) -> Vec<TierId> {
        self.registry.ids().cloned().collect()
    }

    /// The current projected tier list.
    pub fn projection(&self) -> Vec<TierRecord> {
        projection::to_list(self.registry.nodes(), &self.edges)
    }

    /// Number of tiers.
    pub fn node_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of dependencies.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True if the tier exists.
    pub fn contains_node(&self, id: &TierId) -> bool {
        self.registry.contains(id)
    }

    /// Consume the session and return the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn republish(&mut self) {
        let list = projection::to_list(self.registry.nodes(), &self.edges);
        trace!(tiers = list.len(), "republishing projection");
        self.sink.publish(&list);
    }
}
