use crate::graph::Graph;

/// Travel times in minutes between central Wrocław stops, usable in both directions.
const LINKS: [(&str, &str, f64); 5] = [
    ("Dworzec Glowny", "Rynek", 10.0),
    ("Dworzec Glowny", "Galeria Dominikanska", 5.0),
    ("Galeria Dominikanska", "Rynek", 4.0),
    ("Rynek", "Ostrów Tumski", 7.0),
    ("Galeria Dominikanska", "Ostrów Tumski", 6.0),
];

/// Built-in network the route finder falls back to when no edge list is given.
pub fn sample_network() -> Graph<String> {
    let mut graph = Graph::new();
    for (a, b, minutes) in LINKS {
        graph.add_edge(a.to_string(), b.to_string(), minutes, true);
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::compute;

    #[test]
    fn every_link_runs_both_ways() {
        let graph = sample_network();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 2 * LINKS.len());
    }

    #[test]
    fn travel_times_from_the_station() {
        let graph = sample_network();
        let (dist, prev) = compute(&graph, &"Dworzec Glowny".to_string());

        assert_eq!(dist["Galeria Dominikanska"], 5.0);
        assert_eq!(dist["Rynek"], 9.0);
        assert_eq!(dist["Ostrów Tumski"], 11.0);
        assert_eq!(prev["Ostrów Tumski"].as_deref(), Some("Galeria Dominikanska"));
    }
}
