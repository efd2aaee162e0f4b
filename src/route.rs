use std::fmt;

use tracing::info;

use crate::dijkstra::compute;
use crate::error::{Result, RouteError};
use crate::graph::{Cost, Graph, Vertex};
use crate::path::reconstruct;

#[derive(Clone, Debug, PartialEq)]
pub struct Route<V> {
    pub stops: Vec<V>,
    pub total: Cost,
}

impl<V: fmt::Display> Route<V> {
    /// Stops joined with arrows, e.g. `A -> B -> C`.
    pub fn describe(&self) -> String {
        self.stops
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// Shortest route between two known vertices.
///
/// Both endpoints must be in the graph, otherwise `MissingVertex` is returned before any
/// search runs. `Ok(None)` means the target cannot be reached from the start.
pub fn find_route<V: Vertex>(graph: &Graph<V>, start: &V, target: &V) -> Result<Option<Route<V>>> {
    for v in [start, target] {
        if !graph.contains(v) {
            return Err(RouteError::MissingVertex(v.to_string()));
        }
    }

    let (dist, prev) = compute(graph, start);
    let total = dist.get(target).copied().unwrap_or(Cost::INFINITY);
    if !total.is_finite() {
        info!("{target} is unreachable from {start}");
        return Ok(None);
    }

    let stops = reconstruct(&prev, start, target)?;
    if stops.is_empty() {
        return Ok(None);
    }
    info!(hops = stops.len() - 1, total, "route {start} -> {target}");
    Ok(Some(Route { stops, total }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::sample_network;

    #[test]
    fn finds_the_fastest_transit_route() {
        let graph = sample_network();
        let route = find_route(
            &graph,
            &"Dworzec Glowny".to_string(),
            &"Rynek".to_string(),
        )
        .unwrap()
        .unwrap();

        assert_eq!(route.total, 9.0);
        assert_eq!(
            route.describe(),
            "Dworzec Glowny -> Galeria Dominikanska -> Rynek"
        );
    }

    #[test]
    fn same_stop_is_a_zero_length_route() {
        let graph = sample_network();
        let stop = "Rynek".to_string();
        let route = find_route(&graph, &stop, &stop).unwrap().unwrap();

        assert_eq!(route.stops, vec![stop]);
        assert_eq!(route.total, 0.0);
        assert_eq!(route.describe(), "Rynek");
    }

    #[test]
    fn unknown_stop_is_reported() {
        let graph = sample_network();
        let err = find_route(&graph, &"Rynek".to_string(), &"Nowhere".to_string()).unwrap_err();
        assert!(matches!(err, RouteError::MissingVertex(ref v) if v == "Nowhere"));

        let err = find_route(&graph, &"Nowhere".to_string(), &"Rynek".to_string()).unwrap_err();
        assert!(matches!(err, RouteError::MissingVertex(ref v) if v == "Nowhere"));
    }

    #[test]
    fn disconnected_stop_has_no_route() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0, false);
        graph.add_vertex("D");

        assert_eq!(find_route(&graph, &"A", &"D").unwrap(), None);
        // One-way edge: B cannot get back to A.
        assert_eq!(find_route(&graph, &"B", &"A").unwrap(), None);
    }
}
