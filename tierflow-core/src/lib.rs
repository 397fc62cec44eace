//! Tierflow Core
//!
//! This crate provides the graph-editing core for the Tierflow
//! service-template designer. It implements:
//!
//! - An insertion-ordered registry of deployment tiers
//! - Cycle-safe dependency editing (every new edge is checked before commit)
//! - Bidirectional projection between the graph and the flat tier list the
//!   hosting form persists
//!
//! The crate is deliberately free of rendering and transport concerns: the
//! designer canvas translates its events into session operations, and the
//! form picks up the projected list through a sink it supplies.
//!
//! # Architecture
//!
//! The crate is organized into three modules:
//!
//! - `graph`: nodes, edges, the registry, and cycle detection
//! - `projection`: the flat tier-list representation and its mapping
//! - `session`: the single mutation entry point enforcing the invariants
//!
//! # Example
//!
//! ```rust
//! use tierflow_core::{GraphEditingSession, Position, TierRecord};
//! use serde_json::json;
//!
//! let mut latest: Vec<TierRecord> = Vec::new();
//! let mut session = GraphEditingSession::new(|list: &[TierRecord]| {
//!     latest = list.to_vec();
//! });
//!
//! let db = session.add_node(json!({"name": "db"}), Position::new(0.0, 0.0));
//! let web = session.add_node(json!({"name": "web"}), Position::new(120.0, 0.0));
//!
//! // web runs after db
//! session.connect(&db, &web).unwrap();
//!
//! // the reverse edge would close a cycle and is rejected
//! assert!(session.connect(&web, &db).is_err());
//! drop(session);
//!
//! assert_eq!(latest[1].parents, vec![db]);
//! ```

pub mod graph;
pub mod projection;
pub mod session;

pub use graph::{
    contains_cycle, would_create_cycle, Edge, EdgeList, GraphError, GraphResult, NodeRegistry,
    Position, TierId, TierNode,
};
pub use projection::{from_list, to_list, TierRecord};
pub use session::{FormStateSink, GraphEditingSession};
