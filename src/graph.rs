use std::fmt;
use std::hash::Hash;

use hashbrown::HashMap;

use crate::error::{Result, RouteError};

pub type Cost = f64;

/// Anything usable as a vertex label. `Ord` only serves as the heap tie-break.
pub trait Vertex: Clone + Eq + Hash + Ord + fmt::Display {}

impl<T: Clone + Eq + Hash + Ord + fmt::Display> Vertex for T {}

/// Weighted adjacency list. Vertices and edges can be added, never removed.
#[derive(Clone, Debug)]
pub struct Graph<V> {
    adj: HashMap<V, Vec<(V, Cost)>>,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> {
    pub fn new() -> Self {
        Self {
            adj: HashMap::new(),
        }
    }

    pub fn add_vertex(&mut self, v: V) {
        self.adj.entry(v).or_default();
    }

    /// Appends `u -> v`, creating either endpoint if needed. With `undirected` the reverse
    /// entry `v -> u` is appended as well. Weights are not checked: Dijkstra's results are
    /// only meaningful when every weight is non-negative.
    pub fn add_edge(&mut self, u: V, v: V, weight: Cost, undirected: bool) {
        self.add_vertex(v.clone());
        if undirected {
            if let Some(list) = self.adj.get_mut(&v) {
                list.push((u.clone(), weight));
            }
        }
        self.adj.entry(u).or_default().push((v, weight));
    }

    /// Same as [`Graph::add_edge`] but rejects negative and NaN weights.
    pub fn try_add_edge(&mut self, u: V, v: V, weight: Cost, undirected: bool) -> Result<()> {
        if weight.is_nan() || weight < 0.0 {
            return Err(RouteError::InvalidWeight {
                from: u.to_string(),
                to: v.to_string(),
                weight,
            });
        }
        self.add_edge(u, v, weight, undirected);
        Ok(())
    }

    pub fn contains(&self, v: &V) -> bool {
        self.adj.contains_key(v)
    }

    /// Outgoing `(neighbor, weight)` entries in insertion order. Unknown vertices have none.
    pub fn neighbors(&self, v: &V) -> &[(V, Cost)] {
        self.adj.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adj.keys()
    }

    pub fn sorted_vertices(&self) -> Vec<&V> {
        let mut vertices: Vec<&V> = self.adj.keys().collect();
        vertices.sort();
        vertices
    }

    /// Every directed adjacency entry; an undirected edge shows up twice.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, Cost)> {
        self.adj
            .iter()
            .flat_map(|(u, list)| list.iter().map(move |(v, w)| (u, v, *w)))
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }
}
