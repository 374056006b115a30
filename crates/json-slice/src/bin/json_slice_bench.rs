//! `json-slice-bench`: time sliced decoding against `serde_json` on random
//! product documents.
//!
//! Usage:
//!   json-slice-bench [--depth N] [--multi-branch] [--iterations N]
//!                    [--rounds N] [--seed N] [--pause-ms N] [--show]
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::time::Duration;

use clap::Parser;
use json_slice::bench::{Bench, BenchConfig, BenchError, SystemClock};
use json_slice_random::{seeded_rng, RandomDocumentOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "json-slice-bench",
    about = "Compare schema-sliced JSON decoding with generic parsing"
)]
struct Args {
    /// Nesting depth of generated products.
    #[arg(long, default_value_t = 5)]
    depth: usize,

    /// Give the root level several keys instead of one.
    #[arg(long)]
    multi_branch: bool,

    /// Decodes per timed phase.
    #[arg(long, default_value_t = 10_000)]
    iterations: usize,

    /// Rounds to run; 0 runs until interrupted.
    #[arg(long, default_value_t = 5)]
    rounds: usize,

    /// Seed for reproducible products.
    #[arg(long)]
    seed: Option<u64>,

    /// Base pause between phases, in milliseconds.
    #[arg(long, default_value_t = 200)]
    pause_ms: u64,

    /// Log a sample product and its inferred schema before timing.
    #[arg(long)]
    show: bool,
}

impl From<&Args> for BenchConfig {
    fn from(args: &Args) -> Self {
        Self {
            document: RandomDocumentOptions {
                ceil: args.depth,
                single_branch: !args.multi_branch,
            },
            iterations: args.iterations,
            rounds: args.rounds,
            pause: Duration::from_millis(args.pause_ms),
        }
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), BenchError> {
    let mut bench = Bench::new(
        BenchConfig::from(args),
        SystemClock::default(),
        seeded_rng(args.seed),
    );

    if args.show {
        tracing::info!("making product");
        let sample = bench.sample()?;
        tracing::info!("product:\n{}", serde_json::to_string_pretty(&sample.product)?);
        tracing::info!("schema:\n{}", serde_json::to_string_pretty(&sample.schema)?);
        tracing::info!("decoder: {}", sample.decoder);
    }

    let rounds = bench.run()?;
    tracing::info!(rounds, "done");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}
