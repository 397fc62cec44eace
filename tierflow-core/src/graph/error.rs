//! Error types for graph operations
//!
//! One variant per distinguishable failure kind, so the presentation layer
//! can map each to its own inline validation message without parsing text.

use thiserror::Error;

use super::node::TierId;

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur while editing the tier dependency graph.
///
/// All of these are user-input validation failures, never transient faults:
/// after any error the graph is unchanged and remains usable.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum GraphError {
    /// An operation referenced a tier id not present in the graph.
    #[error("unknown tier: {id}")]
    UnknownNode {
        /// The id that was not found.
        id: TierId,
    },

    /// An edge from a tier to itself was attempted.
    #[error("tier '{id}' cannot depend on itself")]
    SelfLoop {
        /// The tier at both ends of the attempted edge.
        id: TierId,
    },

    /// An edge would close a cycle in the dependency graph.
    #[error("cycle detected in tier dependencies: {detail}")]
    CycleDetected {
        /// Human-readable description of the offending edge or input.
        detail: String,
    },

    /// The exact edge already exists.
    #[error("dependency {source} -> {target} already exists")]
    DuplicateEdge {
        /// The prerequisite tier.
        ///
        /// Spelled as a raw identifier so thiserror's name-based heuristic
        /// does not treat this tier id as the error's `source()` cause.
        r#source: TierId,
        /// The dependent tier.
        target: TierId,
    },

    /// An attribute or position update targeted a missing tier.
    #[error("tier not found: {id}")]
    NodeNotFound {
        /// The id that was not found.
        id: TierId,
    },

    /// A loaded tier list references ids that are not part of the list.
    #[error("malformed tier list: {reason}")]
    MalformedInput {
        /// Reason the list was rejected.
        reason: String,
    },
}

impl GraphError {
    /// Creates an unknown-tier error.
    pub fn unknown_node(id: TierId) -> Self {
        Self::UnknownNode { id }
    }

    /// Creates a self-loop error.
    pub fn self_loop(id: TierId) -> Self {
        Self::SelfLoop { id }
    }

    /// Creates a cycle-detected error with the given detail.
    pub fn cycle(detail: impl Into<String>) -> Self {
        Self::CycleDetected {
            detail: detail.into(),
        }
    }

    /// Creates a duplicate-edge error.
    pub fn duplicate_edge(source: TierId, target: TierId) -> Self {
        Self::DuplicateEdge { source, target }
    }

    /// Creates a tier-not-found error.
    pub fn node_not_found(id: TierId) -> Self {
        Self::NodeNotFound { id }
    }

    /// Creates a malformed-input error with the given reason.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }
}
