//! Branch predictor driver CLI.
//!
//! Runs a synthetic branch stream through the predictor configured for one
//! core and prints its accuracy. It performs:
//! 1. **Config load:** JSON file (`--config`) or built-in defaults.
//! 2. **Predictor build:** Same factory the core simulator uses; bad config means no predictor.
//! 3. **Run:** Feeds `--branches` resolved branches and reports statistics.

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use bpsim_core::BranchPredictor;
use bpsim_core::core::units::bru::BranchPredictorWrapper;
use bpsim_core::config::Config;
use bpsim_core::sim::{CoreModel, Pattern, Workload};

#[derive(Parser, Debug)]
#[command(
    name = "bpsim",
    author,
    version,
    about = "TAGE branch predictor model",
    long_about = "Run a synthetic branch stream through a configured predictor.\n\nExamples:\n  bpsim --pattern alternating --branches 10000\n  bpsim --config tage.json --core 1 --pattern loop --period 7\n\nSet RUST_LOG=debug to see allocation and aging events."
)]
struct Cli {
    /// JSON predictor configuration (defaults are used when omitted).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Core whose predictor section is used.
    #[arg(long, default_value_t = 0)]
    core: usize,

    /// Behavior of every branch site.
    #[arg(short, long, value_enum, default_value_t = PatternArg::Random)]
    pattern: PatternArg,

    /// Trip count for the `loop` pattern.
    #[arg(long, default_value_t = 8)]
    period: u32,

    /// Number of branches to resolve.
    #[arg(short, long, default_value_t = 100_000)]
    branches: usize,

    /// Number of distinct branch addresses.
    #[arg(long, default_value_t = 1)]
    addresses: usize,

    /// Seed for the `random` pattern.
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PatternArg {
    AlwaysTaken,
    Alternating,
    Loop,
    Random,
}

impl Cli {
    const fn pattern(&self) -> Pattern {
        match self.pattern {
            PatternArg::AlwaysTaken => Pattern::AlwaysTaken,
            PatternArg::Alternating => Pattern::Alternating,
            PatternArg::Loop => Pattern::Loop {
                period: self.period,
            },
            PatternArg::Random => Pattern::Random { seed: self.seed },
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                error!(path = %path.display(), %err, "cannot load configuration");
                process::exit(1);
            }
        },
        None => Config::default(),
    };

    let mut core = CoreModel::new(&config, cli.core);
    let Some(kind) = core.predictor().map(|bp| match bp {
        BranchPredictorWrapper::Bimodal(_) => "bimodal",
        BranchPredictorWrapper::Tage(_) => "tage",
    }) else {
        println!("core {}: branch prediction not modeled", cli.core);
        return;
    };

    core.run(Workload::new(cli.pattern(), cli.addresses, cli.branches));

    println!("==========================================================");
    println!("core {} predictor={} pattern={:?}", cli.core, kind, cli.pattern());
    println!("==========================================================");
    if let Some(bp) = core.predictor() {
        println!("{}", bp.stats());
        println!("  bp.penalty_cycles      {}", core.penalty_cycles());
    }
    println!("==========================================================");
}
