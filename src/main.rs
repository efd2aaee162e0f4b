use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use shortest_routes::{find_route, load_edges, sample_network, LoadOptions, RouteError};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "route")]
#[command(about = "List the stops of a weighted network and find the fastest route between two of them.", long_about = None)]
struct Cli {
    /// Edge list CSV (from,to,weight[,undirected]). Uses the built-in Wrocław network if omitted.
    #[arg(short, long)]
    csv: Option<String>,

    /// Treat edge list rows without a direction column as undirected
    #[arg(long, default_value_t = false)]
    undirected: bool,

    /// Refuse negative weights while loading the edge list
    #[arg(long, default_value_t = false)]
    strict: bool,

    /// Start stop. Read from stdin if omitted.
    #[arg(short, long)]
    from: Option<String>,

    /// Destination stop. Read from stdin if omitted.
    #[arg(short, long)]
    to: Option<String>,

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

fn prompt(label: &str, input: &mut impl BufRead) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line).context("reading stdin")? == 0 {
        bail!("stdin closed while waiting for {}", label.trim().trim_end_matches(':'));
    }
    Ok(line.trim().to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let graph = match &cli.csv {
        Some(path) => {
            let options = LoadOptions {
                undirected: cli.undirected,
                strict: cli.strict,
            };
            load_edges(path, options).with_context(|| format!("loading {path}"))?
        }
        None => sample_network(),
    };

    println!("Known stops:");
    for stop in graph.sorted_vertices() {
        println!(" - {stop}");
    }

    let mut input = io::stdin().lock();
    let start = match cli.from {
        Some(stop) => stop,
        None => prompt("\nStart stop: ", &mut input)?,
    };
    let target = match cli.to {
        Some(stop) => stop,
        None => prompt("Destination stop: ", &mut input)?,
    };

    match find_route(&graph, &start, &target) {
        Ok(Some(route)) => {
            println!("\nFastest route: {}", route.describe());
            println!("Total: {:.0}", route.total);
        }
        Ok(None) => println!("route unavailable: {start} -> {target}"),
        Err(RouteError::MissingVertex(stop)) => println!("stop not found: {stop}"),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
