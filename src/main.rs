//! Squad Optimizer - Main binary
//!
//! Generates a seeded sample player pool, scores it, and runs budget-aware
//! greedy allocation. Without `--strategy` every strategy is evaluated in
//! parallel and the roster with the best active predicted total wins.

mod config;
mod sample;

use std::process::ExitCode;

use allocator::{allocate, best_allocation, FeasibilityReport, Roster, SquadSchema, Strategy};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use types::Position;

pub use config::RunConfig;

/// Squad Optimizer - Salary-cap fantasy squad selection
#[derive(Parser, Debug)]
#[command(name = "squad-optimizer")]
#[command(about = "Greedy budget-aware fantasy squad optimization")]
#[command(version)]
struct Args {
    /// Number of sample players to generate
    #[arg(long, env = "SQUAD_POOL_SIZE")]
    pool_size: Option<usize>,

    /// RNG seed for the sample pool
    #[arg(long, env = "SQUAD_SEED")]
    seed: Option<u64>,

    /// Run a single strategy (value, high_score, balanced); omit to compare all
    #[arg(long, env = "SQUAD_STRATEGY")]
    strategy: Option<String>,

    /// Override the budget cap in whole dollars
    #[arg(long, env = "SQUAD_BUDGET")]
    budget: Option<i64>,

    /// Print the winning roster as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn build_config(args: &Args) -> Result<RunConfig, allocator::AllocationError> {
    let mut config = RunConfig::default();
    if let Some(size) = args.pool_size {
        config = config.pool_size(size);
    }
    if let Some(seed) = args.seed {
        config = config.seed(seed);
    }
    if let Some(name) = &args.strategy {
        config = config.strategy(name.parse::<Strategy>()?);
    }
    if let Some(budget) = args.budget {
        config = config.budget_cap(budget);
    }
    config.json = args.json;
    config.verbose = args.verbose;
    Ok(config)
}

fn run(config: &RunConfig) -> Result<(), Box<dyn std::error::Error>> {
    let schema = config.schema();

    let mut pool = sample::generate_pool(config.pool_size, config.seed);
    scoring::score_pool(&mut pool, &scoring::ScoringConfig::default());
    tracing::info!(players = pool.len(), seed = config.seed, "pool generated and scored");

    print_header(config, &schema);

    let strategies = config.strategies();
    let (winner, roster) = best_allocation(&pool, &schema, &strategies)?;

    if strategies.len() > 1 {
        // Re-run each strategy for the comparison table; runs are cheap and
        // deterministic, so the numbers match the winning evaluation.
        eprintln!("╠═══════════════════════════════════════════════════════════════════════╣");
        eprintln!("║  Strategy Comparison                                                  ║");
        for strategy in &strategies {
            let candidate = allocate(&pool, &schema, *strategy)?;
            let marker = if *strategy == winner { "►" } else { " " };
            eprintln!(
                "║  {marker} {:<11}  active predicted {:8.1}  spend {:>12}       ║",
                strategy.name(),
                candidate.active_predicted_total(),
                candidate.total_spend().to_string(),
            );
        }
    }

    print_roster(&roster, &roster.feasibility(&schema));

    if config.json {
        println!("{}", serde_json::to_string_pretty(&roster)?);
    }
    Ok(())
}

fn print_header(config: &RunConfig, schema: &SquadSchema) {
    eprintln!("╔═══════════════════════════════════════════════════════════════════════╗");
    eprintln!("║                    SQUAD OPTIMIZER                                    ║");
    eprintln!("╠═══════════════════════════════════════════════════════════════════════╣");
    eprintln!(
        "║  Pool: {:4} players  │  Seed: {:<10}                               ║",
        config.pool_size, config.seed
    );
    eprintln!(
        "║  Squad: {:2} players  │  Bench: {:2}  │  Cap: {:>12}                 ║",
        schema.squad_size(),
        schema.reserve_slots(),
        schema.budget_cap().to_string(),
    );
    for position in Position::ALL {
        let rule = schema.rule(position);
        eprintln!(
            "║    {}: min {:2}  max {:2}  active {:2}                                     ║",
            position.code(),
            rule.min,
            rule.max,
            rule.active,
        );
    }
}

fn print_roster(roster: &Roster, report: &FeasibilityReport) {
    eprintln!("╠═══════════════════════════════════════════════════════════════════════╣");
    eprintln!(
        "║  Winning Strategy: {:<11}                                        ║",
        roster.strategy().name()
    );
    eprintln!("╠═══════════════════════════════════════════════════════════════════════╣");

    for position in Position::ALL {
        eprintln!("║  {}                                                                  ║", position.code());
        for slot in roster.slots().iter().filter(|s| s.player.position == position) {
            let role = if slot.active { "field" } else { "bench" };
            eprintln!(
                "║    {:<22} {:<16} {:>10}  {:6.1} pts  {role} ║",
                slot.player.name,
                slot.player.club,
                slot.player.price.to_string(),
                slot.player.predicted_score,
            );
        }
    }

    eprintln!("╠═══════════════════════════════════════════════════════════════════════╣");
    eprintln!(
        "║  Players: {:2}/{:2}  │  Spend: {:>12} / {:>12}                ║",
        report.size,
        report.target_size,
        report.total_spend.to_string(),
        report.budget_cap.to_string(),
    );
    eprintln!(
        "║  Active Predicted Total: {:8.1}                                     ║",
        roster.active_predicted_total()
    );
    if report.deficits.any() {
        eprintln!("║  WARNING: unfilled slots, see deficits below                          ║");
        for check in &report.positions {
            let shortfall = report.deficits.positions[check.position.index()];
            if shortfall > 0 {
                eprintln!(
                    "║    {} short by {:2}                                                     ║",
                    check.position.code(),
                    shortfall
                );
            }
        }
        if report.deficits.reserve > 0 {
            eprintln!(
                "║    bench short by {:2}                                                  ║",
                report.deficits.reserve
            );
        }
    }
    eprintln!(
        "║  Feasible: {:<5}                                                      ║",
        report.is_feasible
    );
    eprintln!("╚═══════════════════════════════════════════════════════════════════════╝");
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
