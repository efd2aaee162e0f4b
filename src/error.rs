use thiserror::Error;

use crate::graph::Cost;

pub type Result<T> = std::result::Result<T, RouteError>;

#[derive(Error, Debug)]
pub enum RouteError {
    /// A vertex was looked up that was never added to the graph.
    #[error("vertex {0} is not in the graph")]
    MissingVertex(String),

    /// Only raised by the checked insertion path; `Graph::add_edge` trusts its weights.
    #[error("edge {from} -> {to} has invalid weight {weight} (must be a non-negative number)")]
    InvalidWeight { from: String, to: String, weight: Cost },

    #[error("edge list line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
