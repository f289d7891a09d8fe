//! Topological ranking of directed graphs.
//!
//! Assigns every vertex an integer tier from the direction of its
//! incoming edges. The cost model uses ranks to bias vertical
//! placement: an edge between differently ranked vertices should point
//! down the y axis. Rank 0 is reserved for "no valid rank" — a graph
//! containing any cycle gets rank 0 everywhere, which disables the
//! tiering bias while leaving the rest of the scoring intact.
//!
//! A vertex's rank is one more than the *minimum* rank among its
//! predecessors, so it sits just below its shallowest input rather
//! than its deepest.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// True when the directed graph contains a cycle.
///
/// Repeatedly peels vertices with no remaining predecessors off a
/// working set; a full pass that removes nothing while vertices remain
/// means the remainder is cyclic. A self-loop is a cycle.
pub fn is_cyclic<V>(vertices: &[V], predecessors: &HashMap<V, HashSet<V>>) -> bool
where
    V: Clone + Eq + Hash,
{
    let mut remaining: HashSet<V> = vertices.iter().cloned().collect();
    while !remaining.is_empty() {
        let mut removed = 0;
        for vertex in vertices {
            if !remaining.contains(vertex) {
                continue;
            }
            let blocked = predecessors
                .get(vertex)
                .is_some_and(|preds| preds.iter().any(|p| remaining.contains(p)));
            if blocked {
                continue;
            }
            remaining.remove(vertex);
            removed += 1;
        }
        if removed == 0 {
            return true;
        }
    }
    false
}

/// Memoized rank of a single vertex. Precondition: the graph is acyclic,
/// otherwise the recursion would not terminate.
fn rank_of<V>(vertex: &V, predecessors: &HashMap<V, HashSet<V>>, memo: &mut HashMap<V, u32>) -> u32
where
    V: Clone + Eq + Hash,
{
    if let Some(&rank) = memo.get(vertex) {
        return rank;
    }
    let rank = match predecessors.get(vertex) {
        Some(preds) if !preds.is_empty() => {
            1 + preds
                .iter()
                .map(|p| rank_of(p, predecessors, memo))
                .min()
                .unwrap_or(0)
        }
        _ => 1,
    };
    memo.insert(vertex.clone(), rank);
    rank
}

/// Ranks every vertex: `1 + min(rank of predecessors)`, or 1 with no
/// predecessors. If the graph is cyclic, every vertex gets rank 0.
pub fn rank_all<V>(vertices: &[V], predecessors: &HashMap<V, HashSet<V>>) -> HashMap<V, u32>
where
    V: Clone + Eq + Hash,
{
    if is_cyclic(vertices, predecessors) {
        return vertices.iter().cloned().map(|v| (v, 0)).collect();
    }
    let mut memo = HashMap::with_capacity(vertices.len());
    for vertex in vertices {
        rank_of(vertex, predecessors, &mut memo);
    }
    memo
}

/// Builds the predecessor sets from a directed edge list and ranks
/// every vertex that appears as an endpoint. An empty edge list yields
/// an empty mapping.
pub fn rank_edges<V>(edges: &[(V, V)]) -> HashMap<V, u32>
where
    V: Clone + Eq + Hash,
{
    let mut seen: HashSet<V> = HashSet::new();
    let mut vertices: Vec<V> = Vec::new();
    let mut predecessors: HashMap<V, HashSet<V>> = HashMap::new();
    for (source, target) in edges {
        for vertex in [source, target] {
            if seen.insert(vertex.clone()) {
                vertices.push(vertex.clone());
            }
        }
        predecessors
            .entry(target.clone())
            .or_default()
            .insert(source.clone());
    }
    rank_all(&vertices, &predecessors)
}
