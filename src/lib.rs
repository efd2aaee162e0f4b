//! Weighted graphs and single-source shortest paths.
//!
//! Build a [`Graph`], run [`compute`] from a start vertex to get distance and predecessor
//! maps, then turn the predecessors into a route with [`reconstruct`]. [`find_route`] does
//! all three for one start/target pair.
//!
//! ```
//! use shortest_routes::{compute, reconstruct, Graph};
//!
//! let mut graph = Graph::new();
//! graph.add_edge("A", "B", 1.0, true);
//! graph.add_edge("B", "C", 2.0, true);
//! graph.add_edge("A", "C", 4.0, true);
//!
//! let (dist, prev) = compute(&graph, &"A");
//! assert_eq!(dist["C"], 3.0);
//! assert_eq!(reconstruct(&prev, &"A", &"C").unwrap(), vec!["A", "B", "C"]);
//! ```

pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod loader;
pub mod network;
pub mod path;
pub mod route;

pub use dijkstra::{compute, DistanceMap, PredecessorMap};
pub use error::{Result, RouteError};
pub use graph::{Cost, Graph, Vertex};
pub use loader::{load_edges, read_edges, LoadOptions};
pub use network::sample_network;
pub use path::reconstruct;
pub use route::{find_route, Route};
