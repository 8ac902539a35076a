//! Demo driver: plays rounds against a uniform random policy.
//!
//! Useful as a smoke test and as a baseline for the average reward an
//! indifferent player collects under a given payout table.

use clap::Parser;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tricard::Utility;
use tricard::play::{Env, Payouts, RoundEnv};

#[derive(Parser)]
#[command(about = "Play three-card-poker rounds with a uniform random policy")]
struct Args {
    /// number of rounds to play
    #[arg(long, default_value_t = 10)]
    rounds: usize,
    /// seed for both the deal and the policy, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
    /// JSON file overriding the default +4/0/-2/-1 payout table
    #[arg(long)]
    payouts: Option<std::path::PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tricard::log();
    let args = Args::parse();
    let payouts = match &args.payouts {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => Payouts::default(),
    };
    let mut env = match args.seed {
        Some(seed) => RoundEnv::seeded(seed, payouts),
        None => RoundEnv::new(payouts),
    };
    let mut policy = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(1)),
        None => SmallRng::from_os_rng(),
    };
    let mut total: Utility = 0.;
    for round in 1..=args.rounds {
        env.reset();
        env.render();
        let action = [policy.random::<f32>(), policy.random::<f32>()];
        let transition = env.step(&action);
        total += transition.reward;
        log::info!("round {:>4} reward {:+}", round, transition.reward);
    }
    log::info!(
        "{} rounds, total reward {:+}, average {:+.3}",
        args.rounds,
        total,
        total / args.rounds as Utility
    );
    Ok(())
}
