//! Tier List Projection
//!
//! Bidirectional mapping between the internal node/edge graph and the flat
//! "list with parent ids" representation the hosting form reads and writes.
//!
//! The projected list is the only shape the rest of the application sees:
//! the form persists it, the schema validator checks it, and the REST
//! submission payload is built from it. This module is the sole translator
//! between that shape and the graph.
//!
//! # Determinism
//!
//! Record order follows node insertion order and each record's `parents`
//! follows edge insertion order. Parent order carries no meaning, but a
//! reproducible projection keeps saved forms stable across edits.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::graph::{Edge, EdgeList, GraphError, GraphResult, Position, TierId, TierNode};

/// One entry of the projected tier list.
///
/// `parents` lists the ids of every tier this record depends on, i.e. the
/// sources of every edge targeting this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierRecord {
    pub id: TierId,
    #[serde(default)]
    pub attributes: Value,
    #[serde(default)]
    pub parents: Vec<TierId>,
    #[serde(default)]
    pub position: Position,
}

/// Project the graph into the flat tier list.
pub fn to_list<'a>(
    nodes: impl IntoIterator<Item = &'a TierNode>,
    edges: &EdgeList,
) -> Vec<TierRecord> {
    nodes
        .into_iter()
        .map(|node| TierRecord {
            id: node.id().clone(),
            attributes: node.attributes().clone(),
            parents: edges.parents_of(node.id()).cloned().collect(),
            position: node.position(),
        })
        .collect()
}

/// Rebuild nodes and edges from a flat tier list.
///
/// Produces one node per record and one `parent -> record` edge per entry
/// in each record's `parents`, preserving list order so that
/// `to_list(from_list(l)) == l`.
///
/// Fails with [`GraphError::MalformedInput`] when two records share an id
/// or when a `parents` entry references an id not present in the list.
pub fn from_list(records: &[TierRecord]) -> GraphResult<(Vec<TierNode>, Vec<Edge>)> {
    let mut known: HashSet<&TierId> = HashSet::with_capacity(records.len());
    for record in records {
        if !known.insert(&record.id) {
            return Err(GraphError::malformed(format!(
                "duplicate tier id '{}'",
                record.id
            )));
        }
    }

    let mut nodes = Vec::with_capacity(records.len());
    let mut edges = Vec::new();

    for record in records {
        for parent in &record.parents {
            if !known.contains(&parent) {
                return Err(GraphError::malformed(format!(
                    "tier '{}' references unknown parent '{}'",
                    record.id, parent
                )));
            }
            edges.push(Edge::new(parent.clone(), record.id.clone()));
        }
        nodes.push(TierNode::new(
            record.id.clone(),
            record.attributes.clone(),
            record.position,
        ));
    }

    Ok((nodes, edges))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: &str, parents: &[&str]) -> TierRecord {
        TierRecord {
            id: TierId::new(id),
            attributes: json!({ "name": id }),
            parents: parents.iter().map(|p| TierId::new(*p)).collect(),
            position: Position::default(),
        }
    }

    #[test]
    fn to_list_collects_parents_in_edge_order() {
        let nodes = vec![
            TierNode::new(TierId::new("a"), Value::Null, Position::default()),
            TierNode::new(TierId::new("b"), Value::Null, Position::default()),
            TierNode::new(TierId::new("c"), Value::Null, Position::default()),
        ];
        let edges: EdgeList = vec![
            Edge::new(TierId::new("a"), TierId::new("c")),
            Edge::new(TierId::new("b"), TierId::new("c")),
        ]
        .into_iter()
        .collect();

        let list = to_list(&nodes, &edges);

        assert_eq!(list.len(), 3);
        assert!(list[0].parents.is_empty());
        assert!(list[1].parents.is_empty());
        assert_eq!(list[2].parents, vec![TierId::new("a"), TierId::new("b")]);
    }

    #[test]
    fn from_list_rejects_unknown_parent() {
        let result = from_list(&[record("x", &["y"])]);
        assert!(matches!(result, Err(GraphError::MalformedInput { .. })));
    }

    #[test]
    fn from_list_rejects_duplicate_ids() {
        let result = from_list(&[record("x", &[]), record("x", &[])]);
        assert!(matches!(result, Err(GraphError::MalformedInput { .. })));
    }

    #[test]
    fn list_round_trips_through_graph() {
        let list = vec![
            record("db", &[]),
            record("backend", &["db"]),
            record("frontend", &["backend", "db"]),
        ];

        let (nodes, edges) = from_list(&list).unwrap();
        let edges: EdgeList = edges.into_iter().collect();
        let rebuilt = to_list(&nodes, &edges);

        assert_eq!(rebuilt, list);
    }

    #[test]
    fn graph_round_trips_through_list() {
        let nodes = vec![
            TierNode::new(TierId::new("a"), json!({"n": 1}), Position::new(1.0, 2.0)),
            TierNode::new(TierId::new("b"), json!({"n": 2}), Position::new(3.0, 4.0)),
        ];
        let edges: EdgeList = vec![Edge::new(TierId::new("a"), TierId::new("b"))]
            .into_iter()
            .collect();

        let list = to_list(&nodes, &edges);
        let (rebuilt_nodes, rebuilt_edges) = from_list(&list).unwrap();

        assert_eq!(rebuilt_nodes, nodes);
        assert_eq!(rebuilt_edges, edges.as_slice().to_vec());
    }

    #[test]
    fn record_serializes_to_stable_json() {
        let rec = record("web", &["db"]);
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["id"], "web");
        assert_eq!(json["parents"][0], "db");

        let back: TierRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn missing_fields_default_on_deserialize() {
        let back: TierRecord = serde_json::from_str(r#"{"id":"solo"}"#).unwrap();
        assert_eq!(back.id, TierId::new("solo"));
        assert!(back.parents.is_empty());
        assert_eq!(back.attributes, Value::Null);
        assert_eq!(back.position, Position::default());
    }
}
