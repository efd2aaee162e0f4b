use std::hint::black_box;
use std::io;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use csv::Writer;
use shortest_routes::{compute, load_edges, Cost, LoadOptions};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "sssp")]
#[command(about = "Load a CSV edge list (from,to,weight[,undirected]) and run Dijkstra from a source vertex to all vertices.", long_about = None)]
struct Cli {
    /// Path to the .csv edge list
    #[arg(short, long)]
    csv: String,

    /// Source vertex label to run from
    #[arg(short, long)]
    source: String,

    /// Output CSV (vertex, distance, predecessor). If omitted, prints a summary to stdout.
    #[arg(short, long)]
    out: Option<String>,

    /// Include unreachable vertices in output with infinite distance
    #[arg(long, default_value_t = false)]
    include_unreachable: bool,

    /// Treat rows without a direction column as undirected
    #[arg(long, default_value_t = false)]
    undirected: bool,

    /// Refuse negative weights while loading
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Number of timed runs from the same source
    #[arg(short, long, default_value_t = 1)]
    runs: usize,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = LoadOptions {
        undirected: cli.undirected,
        strict: cli.strict,
    };
    let graph = load_edges(&cli.csv, options).with_context(|| format!("loading {}", &cli.csv))?;
    println!(
        "Graph: {} vertices, {} directed edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    if !graph.contains(&cli.source) {
        bail!("source vertex {} is not in {}", cli.source, cli.csv);
    }

    let now = Instant::now();
    let (dist, prev) = compute(&graph, &cli.source);
    let mut duration_millis = vec![now.elapsed().as_secs_f64() * 1000.0];
    for _ in 1..cli.runs {
        let now = Instant::now();
        black_box(compute(&graph, &cli.source));
        duration_millis.push(now.elapsed().as_secs_f64() * 1000.0);
    }
    println!("{:?} ms", duration_millis);

    if let Some(out_path) = cli.out {
        let mut wtr =
            Writer::from_path(&out_path).with_context(|| format!("creating CSV {}", &out_path))?;
        wtr.write_record(["vertex", "distance", "predecessor"])?;
        let mut rows: Vec<(&String, Cost)> = dist.iter().map(|(v, &d)| (v, d)).collect();
        rows.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        let mut written = 0_usize;
        for (vertex, d) in &rows {
            if d.is_finite() || cli.include_unreachable {
                let val = if d.is_finite() {
                    format!("{:.6}", d)
                } else {
                    String::from("inf")
                };
                let pred = prev.get(*vertex).cloned().flatten().unwrap_or_default();
                wtr.write_record([vertex.as_str(), val.as_str(), pred.as_str()])?;
                written += 1;
            }
        }
        wtr.flush()?;
        println!("Wrote distances for {} vertices to {}", written, out_path);
    } else {
        let reachable = dist.values().filter(|x| x.is_finite()).count();
        println!("Vertices: {}", dist.len());
        println!("Reachable from {}: {}", cli.source, reachable);
        if reachable > 0 {
            let maxd = dist
                .values()
                .copied()
                .filter(|x| x.is_finite())
                .fold(0.0_f64, f64::max);
            println!("Max finite distance: {:.2}", maxd);
        }
    }

    Ok(())
}
