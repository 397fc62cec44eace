//! Node Registry
//!
//! Storage and identity management for tier nodes. The registry is keyed by
//! tier id in an insertion-ordered map, so iteration is stable and matches
//! the order tiers were created in (or loaded from a saved list).
//!
//! The registry knows nothing about edges; edge bookkeeping is the editing
//! session's job.

use indexmap::IndexMap;
use serde_json::Value;

use super::error::{GraphError, GraphResult};
use super::node::{Position, TierId, TierNode};

/// Insertion-ordered store of tier nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeRegistry {
    nodes: IndexMap<TierId, TierNode>,
    /// Counter for generated ids. Only ever increases; collisions with
    /// loaded ids are skipped, never reused.
    next_id: u64,
}

impl NodeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered tiers.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if no tiers are registered.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create a tier with a freshly generated unique id.
    ///
    /// The attribute payload is stored as-is; validating it is the hosting
    /// form's concern. Never fails.
    pub fn add_node(&mut self, attributes: Value, position: Position) -> TierId {
        let id = self.fresh_id();
        self.nodes
            .insert(id.clone(), TierNode::new(id.clone(), attributes, position));
        id
    }

    /// Insert a node carrying a caller-supplied id.
    ///
    /// Used when seeding the registry from a saved tier list. Replaces any
    /// existing node with the same id.
    pub fn insert(&mut self, node: TierNode) {
        self.nodes.insert(node.id().clone(), node);
    }

    /// Remove a tier. Idempotent: unknown ids are a no-op.
    ///
    /// Returns the removed node, if any. Remaining tiers keep their
    /// relative order.
    pub fn remove_node(&mut self, id: &TierId) -> Option<TierNode> {
        self.nodes.shift_remove(id)
    }

    /// Replace a tier's attribute payload.
    pub fn update_attributes(&mut self, id: &TierId, attributes: Value) -> GraphResult<()> {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.set_attributes(attributes);
                Ok(())
            }
            None => Err(GraphError::node_not_found(id.clone())),
        }
    }

    /// Replace a tier's canvas position.
    pub fn update_position(&mut self, id: &TierId, position: Position) -> GraphResult<()> {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.set_position(position);
                Ok(())
            }
            None => Err(GraphError::node_not_found(id.clone())),
        }
    }

    /// Get a tier by id.
    pub fn get(&self, id: &TierId) -> Option<&TierNode> {
        self.nodes.get(id)
    }

    /// True if the tier exists.
    pub fn contains(&self, id: &TierId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Iterate over all tiers in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &TierNode> {
        self.nodes.values()
    }

    /// Iterate over all tier ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &TierId> {
        self.nodes.keys()
    }

    /// Remove all tiers.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    fn fresh_id(&mut self) -> TierId {
        loop {
            let candidate = TierId::new(format!("tier-{}", self.next_id));
            self.next_id += 1;
            if !self.nodes.contains_key(&candidate) {
                return candidate;
            }
        }
    }
}
