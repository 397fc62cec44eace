//! Graph Nodes
//!
//! This module defines the tier node type and its identifier. A tier node
//! represents one deployable unit in a service template: an opaque bag of
//! form attributes plus a canvas position, keyed by a stable id.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Unique identifier for a tier in the dependency graph.
///
/// The id is an opaque string, stable across the tier's lifetime. Ids are
/// either generated by the registry for freshly added tiers or carried over
/// verbatim from a previously saved tier list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TierId(String);

impl TierId {
    /// Create a tier id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TierId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TierId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// 2D canvas coordinate for a tier.
///
/// Used only for presentation; the graph algorithms never read it. It is
/// persisted alongside the tier so the designer canvas can be restored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a position from x/y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A node in the tier dependency graph.
///
/// The node carries only identity, the opaque attribute payload supplied by
/// the hosting form, and a canvas position. Dependencies between tiers are
/// stored separately as edges; the node itself knows nothing about them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierNode {
    id: TierId,
    /// Domain fields (name, cardinality, template reference, ...).
    /// Opaque to the graph component; validated by the hosting form.
    attributes: Value,
    position: Position,
}

impl TierNode {
    /// Create a new tier node.
    pub fn new(id: TierId, attributes: Value, position: Position) -> Self {
        Self {
            id,
            attributes,
            position,
        }
    }

    /// Get the tier's id.
    pub fn id(&self) -> &TierId {
        &self.id
    }

    /// Get the tier's attribute payload.
    pub fn attributes(&self) -> &Value {
        &self.attributes
    }

    /// Get the tier's canvas position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Replace the attribute payload.
    pub fn set_attributes(&mut self, attributes: Value) {
        self.attributes = attributes;
    }

    /// Replace the canvas position.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tier_id_display_and_from() {
        let id = TierId::new("frontend");
        assert_eq!(id.as_str(), "frontend");
        assert_eq!(format!("{}", id), "frontend");

        let from_str: TierId = "worker".into();
        let from_string: TierId = String::from("worker").into();
        assert_eq!(from_str, from_string);
    }

    #[test]
    fn node_accessors() {
        let mut node = TierNode::new(
            TierId::new("db"),
            json!({"name": "db", "cardinality": 2}),
            Position::new(10.0, 20.0),
        );

        assert_eq!(node.id().as_str(), "db");
        assert_eq!(node.attributes()["cardinality"], 2);
        assert_eq!(node.position(), Position::new(10.0, 20.0));

        node.set_position(Position::new(5.0, 5.0));
        node.set_attributes(json!({"name": "db", "cardinality": 3}));

        assert_eq!(node.position(), Position::new(5.0, 5.0));
        assert_eq!(node.attributes()["cardinality"], 3);
    }

    #[test]
    fn tier_id_serializes_as_plain_string() {
        let id = TierId::new("frontend");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"frontend\"");
    }
}
