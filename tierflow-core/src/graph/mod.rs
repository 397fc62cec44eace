//! Tier Dependency Graph
//!
//! This module implements the directed acyclic graph of deployment tiers
//! edited by the service-template designer.
//!
//! # Overview
//!
//! - Nodes are tiers: an opaque attribute payload plus a canvas position,
//!   keyed by a stable id ([`TierNode`], [`NodeRegistry`]).
//! - Edges are "runs after" dependencies: `source -> target` means the
//!   target tier depends on the source tier ([`Edge`]).
//! - The edge set must stay acyclic at all times; [`would_create_cycle`]
//!   is the pure check that guards every new edge.
//!
//! # Design Decisions
//!
//! 1. The graph is an explicit, directly inspectable aggregate (nodes and
//!    edges keyed by id), not state re-derived from a rendering library's
//!    internals. Every operation is a plain, testable state transition.
//!
//! 2. Nodes and edges are stored in insertion order so the projected tier
//!    list the hosting form consumes is deterministic.
//!
//! 3. Cycle detection is a pure function over the edge slice. It rebuilds
//!    its adjacency map per call instead of caching traversal state.

mod cycle;
mod edge;
mod error;
mod node;
mod registry;

pub use cycle::{contains_cycle, would_create_cycle};
pub use edge::{Edge, EdgeList};
pub use error::{GraphError, GraphResult};
pub use node::{Position, TierId, TierNode};
pub use registry::NodeRegistry;
