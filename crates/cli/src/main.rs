use anyhow::{ensure, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use mintri::api::{
    triangulate_elimination_game, triangulate_minimum, EliminationCfg, EliminationOrder,
    SearchCfg, MAX_CYCLE_LEN,
};
use serde_json::json;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod records;
mod stats;

use provenance::Payload;
use records::ExperimentRecord;
use stats::Axis;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Minimum triangulation experiment runner")]
struct Cmd {
    /// Log individual search steps (DEBUG level)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Triangulate each input and write one JSON record per input
    Run(RunArgs),
    /// Mean relative performance of several result files over the same inputs
    Compare {
        #[arg(long, required = true, num_args = 1..)]
        results: Vec<PathBuf>,
        #[arg(long, value_enum, default_value_t = Axis::Output)]
        axis: Axis,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algo {
    /// Exact branch-and-bound
    Mt,
    /// Elimination game
    Eg,
}

#[derive(Args)]
struct RunArgs {
    #[arg(long, value_enum)]
    algo: Algo,
    #[arg(long, required = true, num_args = 1..)]
    input: Vec<PathBuf>,
    #[arg(long)]
    out: PathBuf,
    /// Shuffle the elimination order (eg only)
    #[arg(long)]
    randomized: bool,
    /// Randomized runs per input; the smallest fill is reported
    #[arg(long, default_value_t = 1)]
    repetitions: usize,
    /// Per-input time limit in seconds
    #[arg(long)]
    timelimit: Option<f64>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Longest chordless input cycle the exact search accepts
    #[arg(long, default_value_t = MAX_CYCLE_LEN)]
    max_cycle_len: usize,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Run(args) => run(args),
        Action::Compare { results, axis } => compare(results, axis),
        Action::Report => report(),
    }
}

fn run(args: RunArgs) -> Result<()> {
    ensure!(
        args.algo == Algo::Eg || !args.randomized,
        "--randomized only applies to --algo eg"
    );
    let time_limit = args
        .timelimit
        .map(Duration::try_from_secs_f64)
        .transpose()
        .context("--timelimit must be a non-negative number of seconds")?;
    let algo_name = format!("{:?}", args.algo).to_lowercase();
    tracing::info!(algo = algo_name, inputs = args.input.len(), out = %args.out.display(), "run");

    let mut out = Vec::with_capacity(args.input.len());
    for path in &args.input {
        let graph = input::load_graph(path)
            .with_context(|| format!("loading graph {}", path.display()))?;
        tracing::info!(
            input = %path.display(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "loaded"
        );
        let t0 = Instant::now();
        let outcome = match args.algo {
            Algo::Mt => triangulate_minimum(
                &graph,
                SearchCfg {
                    max_cycle_len: args.max_cycle_len,
                    time_limit,
                    ..SearchCfg::default()
                },
            ),
            Algo::Eg => triangulate_elimination_game(
                &graph,
                EliminationCfg {
                    order: if args.randomized {
                        EliminationOrder::Randomized
                    } else {
                        EliminationOrder::Natural
                    },
                    repetitions: args.repetitions,
                    seed: args.seed,
                    time_limit,
                },
            ),
        };
        let running_time = t0.elapsed().as_secs_f64();
        if let Err(e) = &outcome {
            tracing::warn!(input = %path.display(), error = %e, "run failed");
        }

        let mut rec = ExperimentRecord::from_outcome(
            path.display().to_string(),
            algo_name.clone(),
            &outcome,
            running_time,
        );
        rec.timelimit = args.timelimit;
        if args.algo == Algo::Eg {
            rec.randomized = Some(args.randomized);
            if args.randomized {
                rec.repetitions = Some(args.repetitions.max(1));
                if let Ok(res) = &outcome {
                    rec.mean = Some(res.mean);
                    rec.variance = Some(res.variance);
                }
            }
        }
        tracing::info!(input = %path.display(), output = rec.output, running_time, "done");
        out.push(rec);
    }

    records::write_records(&args.out, &out)?;
    let payload = Payload::new(json!({
        "algo": algo_name,
        "randomized": args.randomized,
        "repetitions": args.repetitions,
        "timelimit": args.timelimit,
        "seed": args.seed,
        "max_cycle_len": args.max_cycle_len,
    }))
    .with_inputs(args.input.iter().map(|p| p.display().to_string()));
    let sidecar = provenance::write_sidecar(&args.out, payload)?;
    tracing::info!(records = out.len(), sidecar = %sidecar.display(), "wrote results");
    Ok(())
}

fn compare(results: Vec<PathBuf>, axis: Axis) -> Result<()> {
    let mut values: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    let mut instances: Option<usize> = None;
    for path in &results {
        let recs = records::read_records(path)?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        ensure!(
            instances.map_or(true, |n| n == recs.len()),
            "{} has {} records, expected {}",
            path.display(),
            recs.len(),
            instances.unwrap_or_default()
        );
        ensure!(
            !values.contains_key(&name),
            "two result files are both named {name}"
        );
        instances = Some(recs.len());
        values.insert(name, recs.iter().map(|r| stats::axis_value(r, axis)).collect());
    }
    let mrp = stats::mean_relative_performance(&values);
    let obj = json!({
        "axis": axis,
        "instances": instances.unwrap_or_default(),
        "mean_relative_performance": mrp,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code": provenance::code_identity(),
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
