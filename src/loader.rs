//! Edge lists in CSV form.
//!
//! The first row is a header and is skipped. Every other row is
//! `from,to,weight[,undirected]`; a row holding only `from` declares an isolated vertex.
//! The optional last column overrides [`LoadOptions::undirected`] for that row.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{Result, RouteError};
use crate::graph::{Cost, Graph};

#[derive(Clone, Copy, Debug, Default)]
pub struct LoadOptions {
    /// Direction for rows that do not say.
    pub undirected: bool,
    /// Reject negative and NaN weights instead of trusting them.
    pub strict: bool,
}

fn parse_direction(value: &str, line: u64) -> Result<Option<bool>> {
    match value.to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "yes" | "true" | "1" | "both" => Ok(Some(true)),
        "no" | "false" | "0" | "oneway" => Ok(Some(false)),
        other => Err(RouteError::Parse {
            line,
            message: format!("unknown direction {other:?}"),
        }),
    }
}

fn parse_weight(raw: &str, line: u64) -> Result<Cost> {
    raw.parse().map_err(|_| RouteError::Parse {
        line,
        message: format!("invalid weight {raw:?}"),
    })
}

fn add_record(
    graph: &mut Graph<String>,
    record: &StringRecord,
    options: LoadOptions,
) -> Result<()> {
    let line = record.position().map_or(0, |p| p.line());
    let field = move |i: usize| record.get(i).unwrap_or("");

    let from = field(0);
    if from.is_empty() {
        return Err(RouteError::Parse {
            line,
            message: "missing source vertex".into(),
        });
    }
    let to = field(1);
    if to.is_empty() {
        graph.add_vertex(from.to_string());
        return Ok(());
    }

    let weight = parse_weight(field(2), line)?;
    let undirected = parse_direction(field(3), line)?.unwrap_or(options.undirected);
    if options.strict {
        graph.try_add_edge(from.to_string(), to.to_string(), weight, undirected)
    } else {
        graph.add_edge(from.to_string(), to.to_string(), weight, undirected);
        Ok(())
    }
}

pub fn read_edges<R: io::Read>(reader: R, options: LoadOptions) -> Result<Graph<String>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut graph = Graph::new();
    for result in rdr.records() {
        add_record(&mut graph, &result?, options)?;
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        ?options,
        "loaded edge list"
    );
    Ok(graph)
}

pub fn load_edges(path: impl AsRef<Path>, options: LoadOptions) -> Result<Graph<String>> {
    let file = File::open(path).map_err(csv::Error::from)?;
    read_edges(file, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str, options: LoadOptions) -> Result<Graph<String>> {
        read_edges(text.as_bytes(), options)
    }

    fn neighbors<'a>(graph: &'a Graph<String>, v: &str) -> &'a [(String, Cost)] {
        graph.neighbors(&v.to_string())
    }

    #[test]
    fn reads_directed_rows_by_default() {
        let graph = read("from,to,weight\nA,B,1.5\nB,C,2\n", LoadOptions::default()).unwrap();

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(neighbors(&graph, "A"), &[("B".to_string(), 1.5)]);
        assert!(neighbors(&graph, "C").is_empty());
    }

    #[test]
    fn undirected_default_and_per_row_override() {
        let options = LoadOptions {
            undirected: true,
            ..Default::default()
        };
        let graph = read("from,to,weight,undirected\nA,B,1\nB,C,2,oneway\n", options).unwrap();

        assert_eq!(neighbors(&graph, "B").len(), 2);
        assert!(neighbors(&graph, "C").is_empty());

        let graph = read("from,to,weight\nA , B , 3 , yes\n", LoadOptions::default()).unwrap();
        assert_eq!(neighbors(&graph, "B"), &[("A".to_string(), 3.0)]);
    }

    #[test]
    fn lone_vertex_rows() {
        let graph = read("from,to,weight\nD\nE,\nA,B,1\n", LoadOptions::default()).unwrap();

        assert_eq!(graph.vertex_count(), 4);
        assert!(graph.contains(&"D".to_string()));
        assert!(graph.contains(&"E".to_string()));
    }

    #[test]
    fn bad_weight_reports_its_line() {
        let err = read("from,to,weight\nA,B,1\nB,C,fast\n", LoadOptions::default()).unwrap_err();
        match err {
            RouteError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("fast"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_direction_is_rejected() {
        let err = read("from,to,weight\nA,B,1,sideways\n", LoadOptions::default()).unwrap_err();
        assert!(matches!(err, RouteError::Parse { line: 2, .. }));
    }

    #[test]
    fn strict_mode_rejects_negative_weights() {
        let text = "from,to,weight\nA,B,-2\n";
        let graph = read(text, LoadOptions::default()).unwrap();
        assert_eq!(neighbors(&graph, "A"), &[("B".to_string(), -2.0)]);

        let strict = LoadOptions {
            strict: true,
            ..Default::default()
        };
        let err = read(text, strict).unwrap_err();
        assert!(matches!(err, RouteError::InvalidWeight { .. }));
    }

    #[test]
    fn missing_file_is_a_csv_error() {
        let err = load_edges("/nonexistent/edges.csv", LoadOptions::default()).unwrap_err();
        assert!(matches!(err, RouteError::Csv(_)));
    }
}
