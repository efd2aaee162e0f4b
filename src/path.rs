use crate::dijkstra::PredecessorMap;
use crate::error::{Result, RouteError};
use crate::graph::Vertex;

fn predecessor<'a, V: Vertex>(prev: &'a PredecessorMap<V>, vertex: &V) -> Result<&'a Option<V>> {
    prev.get(vertex)
        .ok_or_else(|| RouteError::MissingVertex(vertex.to_string()))
}

/// Rebuilds the route `start..=target` from a predecessor map.
///
/// `start == target` always yields `[start]`, whatever the map says. An empty route means
/// the chain from `target` never arrives at `start`; callers that need to tell "unreachable"
/// apart from "reachable" should also look at the distance map. A `target` that is not a key
/// of `prev` is an error.
pub fn reconstruct<V: Vertex>(prev: &PredecessorMap<V>, start: &V, target: &V) -> Result<Vec<V>> {
    if start == target {
        return Ok(vec![start.clone()]);
    }
    if predecessor(prev, target)?.is_none() {
        return Ok(Vec::new());
    }

    let mut path = Vec::new();
    let mut cur = Some(target.clone());
    while let Some(vertex) = cur {
        // A chain longer than the map itself must loop.
        if path.len() > prev.len() {
            return Ok(Vec::new());
        }
        cur = if &vertex == start {
            None
        } else {
            predecessor(prev, &vertex)?.clone()
        };
        path.push(vertex);
    }

    if path.last() != Some(start) {
        return Ok(Vec::new());
    }
    path.reverse();
    Ok(path)
}
