use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hashbrown::HashMap;
use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::graph::{Cost, Graph, Vertex};

/// Best known distance per vertex, `Cost::INFINITY` when unreachable.
pub type DistanceMap<V> = HashMap<V, Cost>;
/// Vertex a shortest path arrives from, `None` for the start and unreachable vertices.
pub type PredecessorMap<V> = HashMap<V, Option<V>>;

#[derive(Clone, Debug, PartialEq, Eq)]
struct State<V> {
    cost: OrderedFloat<Cost>,
    vertex: V,
}

impl<V> State<V> {
    fn new(cost: Cost, vertex: V) -> Self {
        Self {
            cost: OrderedFloat(cost),
            vertex,
        }
    }
}

// Min-heap by cost, then by label
impl<V: Ord> Ord for State<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        // reverse ordering for min-heap
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl<V: Ord> PartialOrd for State<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn best<V: Vertex>(dist: &DistanceMap<V>, vertex: &V) -> Cost {
    dist.get(vertex).copied().unwrap_or(Cost::INFINITY)
}

/// Dijkstra from `start` to every vertex of `graph`.
///
/// Relaxations push a fresh heap entry instead of decreasing a key; entries whose cost is
/// above the recorded distance are skipped when popped. Equal costs pop in label order, so
/// the predecessor chosen among several shortest paths is deterministic.
///
/// `start` does not have to be in the graph: it is still given distance 0 and simply
/// reaches nothing. Weights must be non-negative for the result to be correct.
pub fn compute<V: Vertex>(graph: &Graph<V>, start: &V) -> (DistanceMap<V>, PredecessorMap<V>) {
    let mut dist: DistanceMap<V> = graph
        .vertices()
        .map(|v| (v.clone(), Cost::INFINITY))
        .collect();
    let mut prev: PredecessorMap<V> = graph.vertices().map(|v| (v.clone(), None)).collect();
    let mut heap = BinaryHeap::new();

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        known_start = graph.contains(start),
        "dijkstra from {start}"
    );

    dist.insert(start.clone(), 0.0);
    prev.insert(start.clone(), None);
    heap.push(State::new(0.0, start.clone()));

    let (mut pops, mut stale, mut relaxations) = (0_usize, 0_usize, 0_usize);
    while let Some(State { cost, vertex }) = heap.pop() {
        let cost = cost.into_inner();
        pops += 1;
        if cost > best(&dist, &vertex) {
            stale += 1;
            trace!(cost, "skipping stale entry for {vertex}");
            continue;
        }
        for (next, w) in graph.neighbors(&vertex) {
            let next_cost = cost + w;
            if next_cost < best(&dist, next) {
                dist.insert(next.clone(), next_cost);
                prev.insert(next.clone(), Some(vertex.clone()));
                heap.push(State::new(next_cost, next.clone()));
                relaxations += 1;
            }
        }
    }

    debug!(
        pops,
        stale,
        relaxations,
        reached = dist.values().filter(|d| d.is_finite()).count(),
        "dijkstra finished"
    );
    (dist, prev)
}
