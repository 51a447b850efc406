//! Pursuit demo CLI - trains the Q-learning controller on the corridor world
//!
//! Runs `num_training` learning episodes followed by greedy evaluation
//! episodes, then reports win rates and the learned table size.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use gridpursuit::{
    AgentConfig, EpisodeStats, QLearnAgent, RunSummary,
    sim::{PursuitWorld, run_episode},
};

#[derive(Parser)]
#[command(name = "pursuit")]
#[command(version, about = "Tabular Q-learning on a corridor pursuit world", long_about = None)]
struct Cli {
    /// Number of training episodes before learning is frozen
    #[arg(long, default_value_t = 2000)]
    train: usize,

    /// Number of greedy evaluation episodes after training
    #[arg(long, default_value_t = 100)]
    eval: usize,

    /// Learning rate alpha
    #[arg(long, default_value_t = 0.2)]
    alpha: f64,

    /// Exploration rate epsilon
    #[arg(long, default_value_t = 0.05)]
    epsilon: f64,

    /// Discount factor gamma
    #[arg(long, default_value_t = 0.8)]
    gamma: f64,

    /// Corridor length
    #[arg(long, default_value_t = 8)]
    length: usize,

    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Write a JSON run summary to this path
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AgentConfig::new()
        .with_alpha(cli.alpha)
        .with_epsilon(cli.epsilon)
        .with_gamma(cli.gamma)
        .with_num_training(cli.train);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let mut agent = QLearnAgent::new(config)?;
    let mut world = PursuitWorld::new(cli.length);

    let pb = ProgressBar::new(cli.train as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} episodes (W:{msg})")?
            .progress_chars("=>-"),
    );

    for _ in 0..cli.train {
        world.reset();
        run_episode(&mut world, &mut agent)?;
        pb.inc(1);
        pb.set_message(format!(
            "{} L:{}",
            agent.stats().wins,
            agent.stats().losses
        ));
    }
    pb.finish();

    let training = agent.stats();

    let mut evaluation = EpisodeStats::new();
    for _ in 0..cli.eval {
        world.reset();
        let won = run_episode(&mut world, &mut agent)?;
        evaluation.record(won);
    }

    println!(
        "training:   {} episodes, win rate {:.1}%",
        training.episodes(),
        training.win_rate() * 100.0
    );
    println!(
        "evaluation: {} episodes, win rate {:.1}% (alpha={}, epsilon={})",
        evaluation.episodes(),
        evaluation.win_rate() * 100.0,
        agent.alpha(),
        agent.epsilon()
    );
    println!("table size: {} state-action values", agent.q_table().len());

    if let Some(path) = cli.summary {
        let summary = RunSummary {
            training,
            evaluation,
            table_size: agent.q_table().len(),
            seed: cli.seed,
        };
        summary.save(&path)?;
        println!("summary written to {}", path.display());
    }

    Ok(())
}
