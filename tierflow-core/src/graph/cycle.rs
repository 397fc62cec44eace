//! Cycle Detection
//!
//! Pure functions that decide whether a set of dependency edges is acyclic
//! and whether a candidate edge may be added without closing a cycle.
//!
//! # Algorithm
//!
//! Depth-first search with three-color marking:
//!
//! - White (not visited): in neither set
//! - Gray (visiting): in `on_stack`
//! - Black (fully explored): in `visited` but not `on_stack`
//!
//! A traversal that reaches a gray node has found a back edge, which means
//! a cycle. The search starts from every node that has outgoing edges, so
//! disconnected components are each checked independently.
//!
//! Both functions rebuild their adjacency map from the edge slice on every
//! call and keep no state between calls. The edit-time graphs are small
//! (tens of tiers), so the rebuild cost is irrelevant and the functions
//! stay deterministic and idempotent.

use std::collections::{HashMap, HashSet};

use super::edge::Edge;
use super::node::TierId;

/// Returns true if adding `candidate` to `existing` would create a cycle.
///
/// A self-loop candidate is a trivial cycle and is rejected without
/// running the traversal.
pub fn would_create_cycle(existing: &[Edge], candidate: &Edge) -> bool {
    if candidate.source() == candidate.target() {
        return true;
    }
    has_cycle(existing.iter().chain(std::iter::once(candidate)))
}

/// Returns true if the edge set itself contains a cycle.
pub fn contains_cycle(edges: &[Edge]) -> bool {
    has_cycle(edges.iter())
}

fn has_cycle<'a>(edges: impl Iterator<Item = &'a Edge>) -> bool {
    let mut successors: HashMap<&TierId, Vec<&TierId>> = HashMap::new();
    for edge in edges {
        successors.entry(edge.source()).or_default().push(edge.target());
    }

    let mut visited: HashSet<&TierId> = HashSet::new();
    let mut on_stack: HashSet<&TierId> = HashSet::new();

    for &start in successors.keys() {
        if !visited.contains(start) && dfs_has_cycle(start, &successors, &mut visited, &mut on_stack)
        {
            return true;
        }
    }

    false
}

fn dfs_has_cycle<'a>(
    node: &'a TierId,
    successors: &HashMap<&'a TierId, Vec<&'a TierId>>,
    visited: &mut HashSet<&'a TierId>,
    on_stack: &mut HashSet<&'a TierId>,
) -> bool {
    visited.insert(node);
    on_stack.insert(node);

    if let Some(next) = successors.get(node) {
        for &successor in next {
            if !visited.contains(successor) {
                if dfs_has_cycle(successor, successors, visited, on_stack) {
                    return true;
                }
            } else if on_stack.contains(successor) {
                // Back edge found
                return true;
            }
        }
    }

    on_stack.remove(node);
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(source: &str, target: &str) -> Edge {
        Edge::new(TierId::new(source), TierId::new(target))
    }

    #[test]
    fn self_loop_is_always_a_cycle() {
        assert!(would_create_cycle(&[], &edge("a", "a")));
        assert!(would_create_cycle(
            &[edge("a", "b"), edge("b", "c")],
            &edge("b", "b")
        ));
    }

    #[test]
    fn chain_accepts_forward_edge() {
        let existing = [edge("a", "b"), edge("b", "c")];
        assert!(!would_create_cycle(&existing, &edge("a", "c")));
    }

    #[test]
    fn back_edge_closes_cycle() {
        let existing = [edge("a", "b"), edge("b", "c")];
        assert!(would_create_cycle(&existing, &edge("c", "a")));
        assert!(would_create_cycle(&existing, &edge("b", "a")));
    }

    #[test]
    fn disconnected_components_checked_independently() {
        // Two separate chains; the candidate closes a cycle only in the second.
        let existing = [edge("a", "b"), edge("x", "y"), edge("y", "z")];
        assert!(!would_create_cycle(&existing, &edge("b", "x")));
        assert!(would_create_cycle(&existing, &edge("z", "x")));
    }

    #[test]
    fn duplicate_edge_does_not_report_cycle() {
        let existing = [edge("a", "b")];
        assert!(!would_create_cycle(&existing, &edge("a", "b")));
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let existing = [edge("a", "b"), edge("b", "c")];
        let candidate = edge("c", "a");
        for _ in 0..10 {
            assert!(would_create_cycle(&existing, &candidate));
            assert!(!contains_cycle(&existing));
        }
    }

    #[test]
    fn contains_cycle_detects_existing_loop() {
        assert!(!contains_cycle(&[]));
        assert!(!contains_cycle(&[edge("a", "b"), edge("b", "c")]));
        assert!(contains_cycle(&[
            edge("a", "b"),
            edge("b", "c"),
            edge("c", "a")
        ]));
    }
}
