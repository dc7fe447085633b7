//! Command line interface.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use anggaran::budget::Money;
use anggaran::problem::{Params, Problem};
use anggaran::solve::Router;

use crate::output::render;
use crate::parser::parse_problem;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Allocates a monthly income across fixed spending categories.",
    long_about = None
)]
pub struct Args {
    /// Problem file.
    #[arg(value_name = "FILE")]
    pub problem: PathBuf,

    /// Override the savings target of the problem file.
    #[arg(long, value_name = "AMOUNT")]
    pub target: Option<Money>,

    /// Override the move step of the problem file.
    #[arg(long, value_name = "AMOUNT")]
    pub step: Option<Money>,

    /// Seed of the annealing stage.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Maximum verbosity of the log output.
    #[arg(long, default_value = "warn", value_name = "LEVEL")]
    pub log_level: tracing::Level,
}

pub fn parse_args() -> Args {
    Args::parse()
}

pub fn run(args: &Args) -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_timer(tracing_subscriber::fmt::time::Uptime::from(Instant::now()))
        .with_max_level(args.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let input = fs::read_to_string(&args.problem)
        .with_context(|| format!("cannot read problem file {}", args.problem.display()))?;
    let mut pb = parse_problem(&input)?;
    if args.target.is_some() || args.step.is_some() {
        pb = Problem::new(
            pb.start,
            pb.income,
            pb.floors,
            args.target.unwrap_or(pb.target),
            args.step.unwrap_or(pb.step),
        )?;
    }

    let params = Params {
        sa_seed: args.seed,
        ..Params::default()
    };
    let result = Router::new(params).solve(&pb);
    print!("{}", render(&pb, &result));
    Ok(())
}
